//! visual_node - 分层矩形图层上的可视游戏组件
//!
//! 每个组件持有位置、尺寸、旋转、不透明度和堆叠顺序，
//! 并独占一个绘制 surface。外部游戏循环每帧先调用 `update` 再调用 `render`，
//! `render` 只把变化过的属性写入 surface。
//!
//! # 模块结构
//!
//! - `core`: 核心功能模块（数学、日志、配置、场景、错误处理）
//! - `component`: 可视节点、组件 trait、父节点接口
//! - `gfx`: 绘制表面抽象与 headless / ASCII 后端
//!
//! # 使用示例
//!
//! ```
//! use std::rc::Rc;
//! use visual_node::component::{LayerGroup, NodeProps, VisualNode};
//! use visual_node::gfx::HeadlessContext;
//!
//! let mut ctx = HeadlessContext::new();
//! let layer = Rc::new(LayerGroup::new("Sprites", 100));
//!
//! let mut node = VisualNode::new(&mut ctx, NodeProps { z_index: Some(2), ..Default::default() });
//! node.attach(&layer);
//!
//! node.update(0);
//! node.render(0);
//! assert_eq!(node.surface().state().z_index, Some(102));
//!
//! // 没有变化时不会再写入
//! node.surface_mut().take_writes();
//! node.render(1);
//! assert!(node.surface().writes().is_empty());
//! ```

pub mod component;
pub mod core;
pub mod gfx;
