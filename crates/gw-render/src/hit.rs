//! Hit testing: point → node lookup.
//!
//! Walks node tiles front-to-back (most recently created paints on top)
//! against rendered positions, so an in-flight drag is hit where it is
//! drawn. The input layer uses this to turn raw pointer-downs into
//! `TapNode` events.

use crate::projection::NodeRect;
use gw_core::{CanvasGraph, NodeId, Vec2};
use std::collections::HashMap;

/// Find the topmost node whose tile contains `point`. `None` means
/// background (canvas-level gesture).
pub fn hit_test(
    graph: &CanvasGraph,
    offsets: &HashMap<NodeId, Vec2>,
    point: Vec2,
) -> Option<NodeId> {
    let nodes: Vec<(NodeId, Vec2)> = graph
        .nodes()
        .map(|(id, n)| (id, n.position + offsets.get(&id).copied().unwrap_or(Vec2::ZERO)))
        .collect();

    // Reverse creation order: last created = topmost.
    nodes
        .into_iter()
        .rev()
        .find(|(_, pos)| NodeRect::centered_at(*pos).contains(point))
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_background_returns_none() {
        let mut g = CanvasGraph::new();
        g.add_node_at("A", Vec2::new(300.0, 300.0));
        assert_eq!(hit_test(&g, &HashMap::new(), Vec2::new(900.0, 900.0)), None);
    }

    #[test]
    fn overlapping_tiles_resolve_to_topmost() {
        let mut g = CanvasGraph::new();
        let under = g.add_node_at("under", Vec2::new(300.0, 300.0));
        let over = g.add_node_at("over", Vec2::new(320.0, 310.0));

        // Inside both tiles: the later node wins.
        assert_eq!(
            hit_test(&g, &HashMap::new(), Vec2::new(310.0, 305.0)),
            Some(over)
        );
        // Only inside the first tile.
        assert_eq!(
            hit_test(&g, &HashMap::new(), Vec2::new(245.0, 280.0)),
            Some(under)
        );
    }

    #[test]
    fn dragged_node_is_hit_where_drawn() {
        let mut g = CanvasGraph::new();
        let a = g.add_node_at("A", Vec2::new(300.0, 300.0));
        let mut offsets = HashMap::new();
        offsets.insert(a, Vec2::new(200.0, 0.0));

        assert_eq!(hit_test(&g, &offsets, Vec2::new(300.0, 300.0)), None);
        assert_eq!(hit_test(&g, &offsets, Vec2::new(500.0, 300.0)), Some(a));
    }
}
