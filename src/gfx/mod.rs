//! 图形后端模块
//!
//! 本模块定义节点使用的绘制表面接口，并提供：
//! - Headless：内存中的参考后端，记录每一次写入
//! - ASCII：把 headless surface 合成到字符网格上
//!
//! 平台后端只需实现 `DrawingContext` 与 `Surface` 两个 trait。

pub mod ascii;
pub mod headless;
pub mod surface;

pub use ascii::AsciiCanvas;
pub use headless::{HeadlessContext, HeadlessSurface, SurfaceState, SurfaceWrite};
pub use surface::{DrawingContext, Surface};
