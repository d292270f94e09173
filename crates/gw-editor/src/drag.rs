//! Live drag compositing.
//!
//! While a node is being dragged, its motion lives here as a transient
//! offset, separate from the committed position in the graph store. The
//! rendered position is always `committed + offset`, so the canvas follows
//! the pointer without touching the store (or the history) per move event.
//! The offset is folded into the store only on drag end.

use gw_core::{CanvasGraph, NodeId, Vec2};
use std::collections::HashMap;

/// Per-node transient drag offsets. One drag per node at a time; drags on
/// distinct nodes are independent.
#[derive(Debug, Default)]
pub struct DragCompositor {
    offsets: HashMap<NodeId, Vec2>,
}

impl DragCompositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the transient offset for a node. Called on every pointer-move
    /// of an active drag — the hot path, no allocation beyond the map slot.
    pub fn update(&mut self, id: NodeId, translation: Vec2) {
        self.offsets.insert(id, translation);
    }

    /// Remove and return the node's offset at drag end. Zero if the node
    /// never moved.
    pub fn take(&mut self, id: NodeId) -> Vec2 {
        self.offsets.remove(&id).unwrap_or(Vec2::ZERO)
    }

    /// Current offset, zero when no drag is active on the node.
    pub fn offset_of(&self, id: NodeId) -> Vec2 {
        self.offsets.get(&id).copied().unwrap_or(Vec2::ZERO)
    }

    pub fn is_dragging(&self, id: NodeId) -> bool {
        self.offsets.contains_key(&id)
    }

    /// The raw offset map, for the render-layer query surface.
    pub fn offsets(&self) -> &HashMap<NodeId, Vec2> {
        &self.offsets
    }

    /// Committed position plus any active offset — what is actually drawn.
    pub fn rendered_position(&self, graph: &CanvasGraph, id: NodeId) -> Option<Vec2> {
        graph.node(id).map(|n| n.position + self.offset_of(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_defaults_to_zero() {
        let d = DragCompositor::new();
        assert_eq!(d.offset_of(NodeId(0)), Vec2::ZERO);
        assert!(!d.is_dragging(NodeId(0)));
    }

    #[test]
    fn rendered_position_composites_offset() {
        let mut g = CanvasGraph::new();
        let id = g.add_node_at("A", Vec2::new(300.0, 300.0));

        let mut d = DragCompositor::new();
        d.update(id, Vec2::new(10.0, -5.0));

        assert_eq!(
            d.rendered_position(&g, id),
            Some(Vec2::new(310.0, 295.0))
        );
        // Committed state untouched mid-drag.
        assert_eq!(g.node(id).unwrap().position, Vec2::new(300.0, 300.0));
    }

    #[test]
    fn take_clears_the_offset() {
        let mut d = DragCompositor::new();
        d.update(NodeId(1), Vec2::new(4.0, 4.0));

        assert_eq!(d.take(NodeId(1)), Vec2::new(4.0, 4.0));
        assert_eq!(d.offset_of(NodeId(1)), Vec2::ZERO);
        assert_eq!(d.take(NodeId(1)), Vec2::ZERO);
    }

    #[test]
    fn concurrent_drags_are_independent() {
        let mut d = DragCompositor::new();
        d.update(NodeId(0), Vec2::new(1.0, 0.0));
        d.update(NodeId(1), Vec2::new(0.0, 2.0));

        assert_eq!(d.take(NodeId(0)), Vec2::new(1.0, 0.0));
        assert_eq!(d.offset_of(NodeId(1)), Vec2::new(0.0, 2.0));
    }
}
