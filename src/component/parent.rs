//! 父节点接口
//!
//! 节点通过弱引用指向它的父节点（容器或根上下文）。
//! 父节点可以选择提供“子节点堆叠值重映射”能力：
//! 默认实现返回 `None`，表示不具备该能力，子节点使用自身的原始 z_index。

use std::cell::Cell;

/// 父节点接口
pub trait ParentNode {
    /// 父节点名称，用于日志
    fn name(&self) -> &str;

    /// 把子节点的 z_index 重映射为绝对堆叠值
    ///
    /// 返回 `None` 表示该父节点不提供重映射。
    fn child_z_index(&self, _z_index: i32) -> Option<i32> {
        None
    }
}

/// 根上下文
///
/// 节点树的根，不做任何重映射。
#[derive(Debug, Clone)]
pub struct RootContext {
    name: String,
}

impl RootContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for RootContext {
    fn default() -> Self {
        Self::new("Root")
    }
}

impl ParentNode for RootContext {
    fn name(&self) -> &str {
        &self.name
    }
}

/// 图层组
///
/// 子节点的堆叠值为 `base_z_index + z_index`。
/// 基准值可以在节点持有弱引用期间修改，子节点下一次渲染时生效。
#[derive(Debug)]
pub struct LayerGroup {
    name: String,
    base_z_index: Cell<i32>,
}

impl LayerGroup {
    pub fn new(name: impl Into<String>, base_z_index: i32) -> Self {
        Self {
            name: name.into(),
            base_z_index: Cell::new(base_z_index),
        }
    }

    pub fn base_z_index(&self) -> i32 {
        self.base_z_index.get()
    }

    pub fn set_base_z_index(&self, base_z_index: i32) {
        self.base_z_index.set(base_z_index);
    }
}

impl ParentNode for LayerGroup {
    fn name(&self) -> &str {
        &self.name
    }

    fn child_z_index(&self, z_index: i32) -> Option<i32> {
        Some(self.base_z_index.get().saturating_add(z_index))
    }
}
