//! 绘制表面（surface）的统一抽象接口
//!
//! 节点渲染到一个由绘制上下文分配的 surface 上。
//! 每个被跟踪的属性对应一个写入方法，因此“写入一次属性”和
//! “调用一次 surface 方法”是一回事。

/// 可绘制的矩形表面
///
/// 具体后端（headless、平台图层等）实现此 trait。
/// 实现不需要校验参数：负尺寸、越界的不透明度都照原样接受。
pub trait Surface {
    /// 设置旋转角度（度数）
    fn set_rotation(&mut self, degrees: f32);

    /// 设置不透明度（0.0 - 1.0）
    fn set_opacity(&mut self, opacity: f32);

    /// 设置堆叠顺序（已解析的绝对值）
    fn set_z_index(&mut self, z_index: i32);

    /// 设置宽度（像素）
    fn set_width(&mut self, width: i32);

    /// 设置高度（像素）
    fn set_height(&mut self, height: i32);

    /// 设置左边缘位置（像素）
    fn set_left(&mut self, x: i32);

    /// 设置上边缘位置（像素）
    fn set_top(&mut self, y: i32);
}

/// 绘制上下文
///
/// 负责分配空白 surface。上下文在构造节点时显式传入，
/// 节点之后独占分配到的 surface。
pub trait DrawingContext {
    /// 该上下文分配的 surface 类型
    type Surface: Surface;

    /// 分配一个空白 surface
    fn create_surface(&mut self) -> Self::Surface;

    /// 获取后端的名称，用于日志输出
    fn backend_name(&self) -> &str;
}
