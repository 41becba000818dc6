//! 组件基类
//!
//! 具体组件内嵌一个 [`VisualNode`]，按需覆盖 `update`，并沿用默认的 `render`。

use super::node::VisualNode;
use crate::gfx::Surface;

/// 组件 trait
///
/// 外部游戏循环每帧先对所有组件调用 `update`，再调用 `render`。
pub trait Component {
    /// 组件使用的 surface 类型
    type Surface: Surface;

    /// 内嵌的可视节点
    fn node(&self) -> &VisualNode<Self::Surface>;

    /// 内嵌的可视节点（可变）
    fn node_mut(&mut self) -> &mut VisualNode<Self::Surface>;

    /// 获取组件名称
    fn name(&self) -> &str {
        self.node().name()
    }

    /// 每帧更新（可选实现）
    fn update(&mut self, _update_count: u64) {}

    /// 把状态写入 surface
    fn render(&mut self, render_count: u64) {
        self.node_mut().render(render_count);
    }
}

impl<S: Surface> Component for VisualNode<S> {
    type Surface = S;

    fn node(&self) -> &VisualNode<S> {
        self
    }

    fn node_mut(&mut self) -> &mut VisualNode<S> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::NodeProps;
    use crate::gfx::{HeadlessContext, HeadlessSurface, SurfaceWrite};

    /// 每次更新向右移动一格
    struct Crawler {
        node: VisualNode<HeadlessSurface>,
    }

    impl Component for Crawler {
        type Surface = HeadlessSurface;

        fn node(&self) -> &VisualNode<HeadlessSurface> {
            &self.node
        }

        fn node_mut(&mut self) -> &mut VisualNode<HeadlessSurface> {
            &mut self.node
        }

        fn update(&mut self, _update_count: u64) {
            self.node.translate(1, 0);
        }
    }

    #[test]
    fn test_plain_node_update_is_noop() {
        let mut ctx = HeadlessContext::new();
        let mut node = VisualNode::new(&mut ctx, NodeProps::default());
        Component::render(&mut node, 0);
        node.surface_mut().take_writes();

        Component::update(&mut node, 1);
        Component::render(&mut node, 1);

        assert!(node.surface().writes().is_empty());
    }

    #[test]
    fn test_overridden_update_drives_render() {
        let mut ctx = HeadlessContext::new();
        let mut components: Vec<Box<dyn Component<Surface = HeadlessSurface>>> = vec![
            Box::new(Crawler {
                node: VisualNode::new(&mut ctx, NodeProps::default()),
            }),
            Box::new(VisualNode::new(&mut ctx, NodeProps::default())),
        ];

        for frame in 0..3u64 {
            for component in components.iter_mut() {
                component.update(frame);
            }
            for component in components.iter_mut() {
                component.render(frame);
            }
        }

        let crawler = components[0].node();
        assert_eq!(crawler.x(), 3);
        assert_eq!(crawler.surface().state().left, Some(3));
        assert_eq!(
            crawler.surface().writes().iter().filter(|w| matches!(w, SurfaceWrite::Left(_))).count(),
            3
        );
        assert_eq!(components[1].name(), "VisualNode");
        assert_eq!(components[1].node().surface().writes().len(), 7);
    }
}
