//! Mover 组件
//!
//! 每次更新按固定速度移动的节点。离开舞台一侧后从另一侧重新进入。

use super::component::Component;
use super::node::VisualNode;
use crate::core::math::Vector2i;
use crate::gfx::Surface;

pub struct Mover<S: Surface> {
    node: VisualNode<S>,
    /// 每次更新的位移（像素）
    velocity: Vector2i,
    /// 舞台尺寸，`None` 表示不回绕
    wrap: Option<Vector2i>,
}

impl<S: Surface> Mover<S> {
    pub fn new(node: VisualNode<S>, velocity: Vector2i) -> Self {
        Self {
            node,
            velocity,
            wrap: None,
        }
    }

    /// 在给定尺寸的舞台内回绕
    pub fn wrapping_in(mut self, stage: Vector2i) -> Self {
        self.wrap = Some(stage);
        self
    }

    pub fn velocity(&self) -> Vector2i {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vector2i) {
        self.velocity = velocity;
    }

    fn wrap_axis(pos: i32, size: i32, extent: i32) -> i32 {
        // i64 下计算，畸形尺寸不会溢出
        let (pos, size, extent) = (pos as i64, size as i64, extent as i64);
        let wrapped = if pos > extent - 1 {
            // 整个移出右/下边缘，从左/上边缘外侧重新进入
            1 - size
        } else if pos + size - 1 < 0 {
            extent - 1
        } else {
            pos
        };
        wrapped.clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }
}

impl<S: Surface> Component for Mover<S> {
    type Surface = S;

    fn node(&self) -> &VisualNode<S> {
        &self.node
    }

    fn node_mut(&mut self) -> &mut VisualNode<S> {
        &mut self.node
    }

    fn update(&mut self, _update_count: u64) {
        self.node.translate(self.velocity.x, self.velocity.y);

        if let Some(stage) = self.wrap {
            let x = Self::wrap_axis(self.node.x(), self.node.width(), stage.x);
            let y = Self::wrap_axis(self.node.y(), self.node.height(), stage.y);
            self.node.set_position(Vector2i::new(x, y));
        }
    }
}
