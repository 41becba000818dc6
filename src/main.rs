//! visual_node 演示程序
//!
//! 加载舞台配置和场景，创建节点，然后按“先 update 后 render”的顺序
//! 运行固定帧数，最后把 headless surface 合成为 ASCII 画面输出。
//!
//! # 使用方法
//!
//! ```bash
//! # 使用配置文件
//! cargo run
//!
//! # 命令行覆盖
//! cargo run -- --frames 10 --width 80 --trace
//! ```

use std::rc::Rc;

use anyhow::{Context, Result};
use visual_node::component::{Component, LayerGroup, Mover, VisualNode};
use visual_node::core::{log, Config, SceneConfig, Vector2i};
use visual_node::gfx::{AsciiCanvas, DrawingContext, HeadlessContext, HeadlessSurface};
use visual_node::{stage_info, stage_warn};

fn main() -> Result<()> {
    // 1. 加载配置（在初始化日志之前）
    let mut config = Config::from_file_or_default("config.toml");

    // 2. 应用命令行参数
    config.apply_args(std::env::args());

    // 3. 验证配置
    config.validate().context("Invalid configuration")?;

    // 4. 初始化日志系统
    let log_file = config
        .logging
        .file_output
        .then(|| config.logging.log_file.as_str());
    log::init_logger(config.logging.level, config.logging.file_output, log_file)
        .context("Failed to initialize logging")?;
    stage_info!(version = env!("CARGO_PKG_VERSION"), title = %config.stage.title, "Stage starting");

    // 5. 加载场景
    let scene = SceneConfig::from_file_or_default("scene.toml");
    if scene.nodes.is_empty() {
        stage_warn!("Scene has no nodes, output will be blank");
    }

    // 6. 创建绘制上下文、图层和节点
    let mut ctx = HeadlessContext::new();
    let layer = Rc::new(LayerGroup::new(
        scene.layer.name.clone(),
        scene.layer.base_z_index,
    ));
    let stage = Vector2i::new(config.stage.width as i32, config.stage.height as i32);

    let mut components: Vec<Box<dyn Component<Surface = HeadlessSurface>>> = scene
        .nodes
        .iter()
        .map(|entry| {
            let mut node = VisualNode::new(&mut ctx, entry.props.clone());
            node.attach(&layer);
            let velocity = Vector2i::new(entry.velocity[0], entry.velocity[1]);
            Box::new(Mover::new(node, velocity).wrapping_in(stage))
                as Box<dyn Component<Surface = HeadlessSurface>>
        })
        .collect();

    stage_info!(
        backend = ctx.backend_name(),
        nodes = components.len(),
        layer = %scene.layer.name,
        frames = config.runtime.frames,
        "Scene ready"
    );

    // 7. 主循环：先 update 再 render
    let mut total_writes = 0usize;
    for frame in 0..config.runtime.frames {
        for component in components.iter_mut() {
            component.update(frame);
        }
        for component in components.iter_mut() {
            component.render(frame);
            // 只统计数量，已应用的状态仍保留在 surface 上
            total_writes += component.node_mut().surface_mut().take_writes().len();
        }
    }
    stage_info!(surface_writes = total_writes, "Frames rendered");

    // 8. 合成并输出最后一帧
    let mut canvas = AsciiCanvas::new(config.stage.width as usize, config.stage.height as usize);
    let surfaces: Vec<&HeadlessSurface> = components.iter().map(|c| c.node().surface()).collect();
    canvas.compose(&surfaces);

    print!("{}", canvas);

    for component in &components {
        let node = component.node();
        stage_info!(
            node = component.name(),
            x = node.x(),
            y = node.y(),
            z_index = node.resolved_z_index(),
            "Final state"
        );
    }

    stage_info!("Stage finished");
    Ok(())
}
