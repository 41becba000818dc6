//! 数学辅助模块
//!
//! 基于 `nalgebra` 的二维类型别名，以及角度与弧度换算。
//! 节点几何使用整数像素（`Vector2i`），派生量（例如中心点）使用 `Vector2`。

pub use nalgebra::Vector2 as Vec2;

/// 浮点二维向量
pub type Vector2 = Vec2<f32>;

/// 整数二维向量（像素坐标、尺寸）
pub type Vector2i = Vec2<i32>;

/// 数学常量
pub mod constants {
    /// 角度转弧度的系数
    pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;

    /// 弧度转角度的系数
    pub const RAD_TO_DEG: f32 = 180.0 / std::f32::consts::PI;
}

/// 角度转弧度
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * constants::DEG_TO_RAD
}

/// 弧度转角度
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * constants::RAD_TO_DEG
}

/// 检查两个浮点数是否近似相等
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}
