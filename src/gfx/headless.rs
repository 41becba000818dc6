//! Headless 后端
//!
//! 不连接任何窗口系统的内存 surface。它保存已应用的属性并记录每一次写入，
//! 既可以用作参考后端，也是测试中统计写入次数的替身。

use super::surface::{DrawingContext, Surface};
use crate::node_trace;

/// 一次 surface 写入
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceWrite {
    Rotation(f32),
    Opacity(f32),
    ZIndex(i32),
    Width(i32),
    Height(i32),
    Left(i32),
    Top(i32),
}

/// surface 上已应用的属性
///
/// 新分配的 surface 处于空白状态：所有字段为 `None`。
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfaceState {
    pub rotation: Option<f32>,
    pub opacity: Option<f32>,
    pub z_index: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub left: Option<i32>,
    pub top: Option<i32>,
}

/// 内存中的 surface
#[derive(Debug)]
pub struct HeadlessSurface {
    id: u32,
    state: SurfaceState,
    writes: Vec<SurfaceWrite>,
}

impl HeadlessSurface {
    fn new(id: u32) -> Self {
        Self {
            id,
            state: SurfaceState::default(),
            writes: Vec::new(),
        }
    }

    /// surface 在其上下文中的唯一编号
    pub fn id(&self) -> u32 {
        self.id
    }

    /// 当前已应用的属性
    pub fn state(&self) -> &SurfaceState {
        &self.state
    }

    /// 自上次 `take_writes` 以来的写入记录
    pub fn writes(&self) -> &[SurfaceWrite] {
        &self.writes
    }

    /// 取出并清空写入记录
    pub fn take_writes(&mut self) -> Vec<SurfaceWrite> {
        std::mem::take(&mut self.writes)
    }

    fn record(&mut self, write: SurfaceWrite) {
        node_trace!(surface = self.id, ?write, "Surface write");
        self.writes.push(write);
    }
}

impl Surface for HeadlessSurface {
    fn set_rotation(&mut self, degrees: f32) {
        self.state.rotation = Some(degrees);
        self.record(SurfaceWrite::Rotation(degrees));
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.state.opacity = Some(opacity);
        self.record(SurfaceWrite::Opacity(opacity));
    }

    fn set_z_index(&mut self, z_index: i32) {
        self.state.z_index = Some(z_index);
        self.record(SurfaceWrite::ZIndex(z_index));
    }

    fn set_width(&mut self, width: i32) {
        self.state.width = Some(width);
        self.record(SurfaceWrite::Width(width));
    }

    fn set_height(&mut self, height: i32) {
        self.state.height = Some(height);
        self.record(SurfaceWrite::Height(height));
    }

    fn set_left(&mut self, x: i32) {
        self.state.left = Some(x);
        self.record(SurfaceWrite::Left(x));
    }

    fn set_top(&mut self, y: i32) {
        self.state.top = Some(y);
        self.record(SurfaceWrite::Top(y));
    }
}

/// Headless 绘制上下文
///
/// 按顺序为分配出的 surface 编号。
#[derive(Debug, Default)]
pub struct HeadlessContext {
    next_id: u32,
}

impl HeadlessContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已分配的 surface 数量
    pub fn allocated(&self) -> u32 {
        self.next_id
    }
}

impl DrawingContext for HeadlessContext {
    type Surface = HeadlessSurface;

    fn create_surface(&mut self) -> HeadlessSurface {
        let surface = HeadlessSurface::new(self.next_id);
        self.next_id += 1;
        surface
    }

    fn backend_name(&self) -> &str {
        "Headless"
    }
}
