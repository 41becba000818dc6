//! 组件系统模块
//!
//! 提供可视节点 `VisualNode`、组件 trait 以及父节点接口。

mod component;
mod mover;
mod node;
mod parent;

pub use component::Component;
pub use mover::Mover;
pub use node::{NodeProps, VisualNode, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use parent::{LayerGroup, ParentNode, RootContext};
