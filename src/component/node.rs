//! VisualNode 可视节点
//!
//! 屏幕上一个可定位的矩形图层：位置、尺寸、旋转、不透明度、堆叠顺序，
//! 以及一个独占的绘制 surface。
//!
//! 节点为每个被跟踪的属性保存“上一次写入 surface 的值”。
//! `render` 只把发生变化的属性写入 surface，连续两次渲染时第二次不产生任何写入。
//! 这些缓存只在 `render` 内部更新。

use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

use super::parent::ParentNode;
use crate::core::math::{self, Vector2, Vector2i};
use crate::gfx::{DrawingContext, Surface};
use crate::node_trace;

/// 默认宽度（像素）
pub const DEFAULT_WIDTH: i32 = 10;
/// 默认高度（像素）
pub const DEFAULT_HEIGHT: i32 = 10;

/// 节点初始属性
///
/// 所有字段都是可选的，未设置的字段使用默认值。
/// 可以直接从场景文件反序列化。
///
/// # 示例
///
/// ```
/// use visual_node::component::{NodeProps, VisualNode};
/// use visual_node::gfx::HeadlessContext;
///
/// let mut ctx = HeadlessContext::new();
/// let node = VisualNode::new(&mut ctx, NodeProps { x: Some(4), ..Default::default() });
/// assert_eq!(node.x(), 4);
/// assert_eq!(node.width(), 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeProps {
    pub name: Option<String>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub opacity: Option<f32>,
    /// 旋转角度（度数）
    pub rotation: Option<f32>,
    pub z_index: Option<i32>,
}

/// 可视节点
pub struct VisualNode<S: Surface> {
    name: String,

    x: i32,
    y: i32,
    width: i32,
    height: i32,
    opacity: f32,
    /// 度数
    rotation: f32,
    z_index: i32,

    parent: Option<Weak<dyn ParentNode>>,

    // 上一次写入 surface 的值，None 表示从未写入
    last_rotation: Option<f32>,
    last_opacity: Option<f32>,
    last_z_index: Option<i32>,
    last_width: Option<i32>,
    last_height: Option<i32>,
    last_x: Option<i32>,
    last_y: Option<i32>,

    surface: S,
}

impl<S: Surface> VisualNode<S> {
    /// 创建节点
    ///
    /// 从 `ctx` 分配一个 surface 并合并初始属性。
    pub fn new<C>(ctx: &mut C, props: NodeProps) -> Self
    where
        C: DrawingContext<Surface = S>,
    {
        Self::with_surface(ctx.create_surface(), props)
    }

    /// 使用已分配的 surface 创建节点
    pub fn with_surface(surface: S, props: NodeProps) -> Self {
        Self {
            name: props.name.unwrap_or_else(|| "VisualNode".to_string()),
            x: props.x.unwrap_or(0),
            y: props.y.unwrap_or(0),
            width: props.width.unwrap_or(DEFAULT_WIDTH),
            height: props.height.unwrap_or(DEFAULT_HEIGHT),
            opacity: props.opacity.unwrap_or(1.0),
            rotation: props.rotation.unwrap_or(0.0),
            z_index: props.z_index.unwrap_or(0),
            parent: None,
            last_rotation: None,
            last_opacity: None,
            last_z_index: None,
            last_width: None,
            last_height: None,
            last_x: None,
            last_y: None,
            surface,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    // ========== 几何属性 ==========

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn set_width(&mut self, width: i32) {
        self.width = width;
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn set_height(&mut self, height: i32) {
        self.height = height;
    }

    /// 左上角位置
    pub fn position(&self) -> Vector2i {
        Vector2i::new(self.x, self.y)
    }

    pub fn set_position(&mut self, position: Vector2i) {
        self.x = position.x;
        self.y = position.y;
    }

    pub fn size(&self) -> Vector2i {
        Vector2i::new(self.width, self.height)
    }

    pub fn set_size(&mut self, size: Vector2i) {
        self.width = size.x;
        self.height = size.y;
    }

    /// 平移位置
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x = self.x.wrapping_add(dx);
        self.y = self.y.wrapping_add(dy);
    }

    // ========== 外观属性 ==========

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// 设置不透明度，不做范围校验
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    /// 旋转角度（度数）
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    pub fn rotation_radians(&self) -> f32 {
        math::deg_to_rad(self.rotation)
    }

    pub fn set_rotation_radians(&mut self, radians: f32) {
        self.rotation = math::rad_to_deg(radians);
    }

    /// 原始堆叠值（未经父节点重映射）
    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    pub fn set_z_index(&mut self, z_index: i32) {
        self.z_index = z_index;
    }

    // ========== 边界 ==========
    //
    // 右、下边界是包含的：right = x + width - 1。

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn right(&self) -> i32 {
        self.x.wrapping_add(self.width).wrapping_sub(1)
    }

    pub fn bottom(&self) -> i32 {
        self.y.wrapping_add(self.height).wrapping_sub(1)
    }

    /// 矩形中心点
    pub fn center(&self) -> Vector2 {
        Vector2::new(
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    /// 点是否落在边界内（包含边界）
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.left() && px <= self.right() && py >= self.top() && py <= self.bottom()
    }

    /// 两个节点的边界是否重叠（包含边界）
    pub fn intersects<T: Surface>(&self, other: &VisualNode<T>) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    // ========== 父节点 ==========

    /// 挂到父节点下
    ///
    /// 节点只保存弱引用，父节点被释放后视为没有父节点。
    pub fn attach<P: ParentNode + 'static>(&mut self, parent: &Rc<P>) {
        let weak: Weak<P> = Rc::downgrade(parent);
        let weak: Weak<dyn ParentNode> = weak;
        self.parent = Some(weak);
    }

    /// 直接设置父节点弱引用
    pub fn set_parent(&mut self, parent: Option<Weak<dyn ParentNode>>) {
        self.parent = parent;
    }

    pub fn detach(&mut self) {
        self.parent = None;
    }

    /// 获取父节点，父节点已释放或未设置时返回 `None`
    pub fn parent(&self) -> Option<Rc<dyn ParentNode>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    /// 解析后的堆叠值
    ///
    /// 父节点提供重映射时使用重映射结果，否则使用原始 z_index。
    pub fn resolved_z_index(&self) -> i32 {
        self.parent()
            .and_then(|parent| parent.child_z_index(self.z_index))
            .unwrap_or(self.z_index)
    }

    // ========== surface ==========

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// surface 的可变引用
    ///
    /// 绕过节点直接写 surface 会让缓存失真，下一次 `render` 不会补写。
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// 下一次 `render` 是否会写入 surface
    pub fn is_dirty(&self) -> bool {
        is_stale(self.last_rotation, self.rotation)
            || is_stale(self.last_opacity, self.opacity)
            || is_stale(self.last_z_index, self.resolved_z_index())
            || is_stale(self.last_width, self.width)
            || is_stale(self.last_height, self.height)
            || is_stale(self.last_x, self.x)
            || is_stale(self.last_y, self.y)
    }

    // ========== 生命周期 ==========

    /// 把当前状态写入 surface
    ///
    /// 按 rotation、opacity、z_index、width、height、x、y 的顺序比较当前值与缓存，
    /// 只写入发生变化的属性并更新对应缓存。
    pub fn render(&mut self, render_count: u64) {
        let z_index = self.resolved_z_index();
        let mut writes = 0u32;

        if sync(&mut self.last_rotation, self.rotation) {
            self.surface.set_rotation(self.rotation);
            writes += 1;
        }
        if sync(&mut self.last_opacity, self.opacity) {
            self.surface.set_opacity(self.opacity);
            writes += 1;
        }
        if sync(&mut self.last_z_index, z_index) {
            self.surface.set_z_index(z_index);
            writes += 1;
        }
        if sync(&mut self.last_width, self.width) {
            self.surface.set_width(self.width);
            writes += 1;
        }
        if sync(&mut self.last_height, self.height) {
            self.surface.set_height(self.height);
            writes += 1;
        }
        if sync(&mut self.last_x, self.x) {
            self.surface.set_left(self.x);
            writes += 1;
        }
        if sync(&mut self.last_y, self.y) {
            self.surface.set_top(self.y);
            writes += 1;
        }

        if writes > 0 {
            node_trace!(node = %self.name, render_count, writes, "Node rendered");
        }
    }

    /// 每帧逻辑，默认什么都不做
    ///
    /// 具体组件通过 [`Component::update`](super::Component::update) 覆盖。
    pub fn update(&mut self, _update_count: u64) {}
}

/// 缓存值比较
///
/// 浮点按位比较：NaN 与同一个 NaN 相等，0.0 与 -0.0 不等。
trait CacheValue: Copy {
    fn same(self, other: Self) -> bool;
}

impl CacheValue for i32 {
    fn same(self, other: Self) -> bool {
        self == other
    }
}

impl CacheValue for f32 {
    fn same(self, other: Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

/// 缓存为空或与当前值不同
fn is_stale<T: CacheValue>(cache: Option<T>, value: T) -> bool {
    !cache.is_some_and(|cached| cached.same(value))
}

/// 缓存与当前值不同时更新缓存并返回 `true`
fn sync<T: CacheValue>(cache: &mut Option<T>, value: T) -> bool {
    if is_stale(*cache, value) {
        *cache = Some(value);
        true
    } else {
        false
    }
}

impl<S: Surface> Drop for VisualNode<S> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        {
            tracing::debug!(node = %self.name, "VisualNode dropped, releasing surface");
        }
    }
}

impl<S: Surface + std::fmt::Debug> std::fmt::Debug for VisualNode<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisualNode")
            .field("name", &self.name)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("opacity", &self.opacity)
            .field("rotation", &self.rotation)
            .field("z_index", &self.z_index)
            .field("attached", &self.parent().is_some())
            .field("surface", &self.surface)
            .finish()
    }
}
