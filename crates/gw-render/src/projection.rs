//! Render projection: graph + drag offsets → drawable geometry.
//!
//! The projection is recomputed every frame from whatever the editor
//! currently holds, so connector lines and node tiles follow uncommitted
//! drags live. This module produces geometry only; actual painting (grid
//! strokes, arrow glyphs, materials) is the embedding shell's concern.

use gw_core::config::{CANVAS_HEIGHT, CANVAS_WIDTH, GRID_PITCH, NODE_HEIGHT, NODE_WIDTH};
use gw_core::{CanvasGraph, NodeId, Vec2};
use std::collections::HashMap;

/// Axis-aligned screen rectangle of a node tile.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NodeRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl NodeRect {
    /// The tile centered on a rendered node position.
    pub fn centered_at(center: Vec2) -> Self {
        Self {
            x: center.x - NODE_WIDTH / 2.0,
            y: center.y - NODE_HEIGHT / 2.0,
            width: NODE_WIDTH,
            height: NODE_HEIGHT,
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Everything the shell needs to draw one node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSprite {
    pub id: NodeId,
    /// Rendered position: committed + transient drag offset.
    pub screen_position: Vec2,
    pub rect: NodeRect,
    pub label: String,
    pub highlighted: bool,
}

/// Everything the shell needs to draw one connection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSprite {
    pub start: Vec2,
    pub end: Vec2,
    /// Where the arrow glyph sits.
    pub midpoint: Vec2,
    /// The endpoint the arrow points toward, per the pair's direction flag.
    pub arrow_target: Vec2,
}

/// One frame's worth of drawable geometry.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub nodes: Vec<NodeSprite>,
    pub edges: Vec<EdgeSprite>,
}

fn rendered(graph: &CanvasGraph, offsets: &HashMap<NodeId, Vec2>, id: NodeId) -> Vec2 {
    let committed = graph.node(id).map(|n| n.position).unwrap_or(Vec2::ZERO);
    committed + offsets.get(&id).copied().unwrap_or(Vec2::ZERO)
}

/// Project the current editor state into a [`Scene`].
pub fn project(
    graph: &CanvasGraph,
    offsets: &HashMap<NodeId, Vec2>,
    highlighted: &[NodeId],
) -> Scene {
    let nodes = graph
        .nodes()
        .map(|(id, node)| {
            let screen_position = node.position + offsets.get(&id).copied().unwrap_or(Vec2::ZERO);
            NodeSprite {
                id,
                screen_position,
                rect: NodeRect::centered_at(screen_position),
                label: node.name.clone(),
                highlighted: highlighted.contains(&id),
            }
        })
        .collect();

    let edges = graph
        .connections()
        .iter()
        .map(|c| {
            let start = rendered(graph, offsets, c.a);
            let end = rendered(graph, offsets, c.b);
            let arrow_target = if graph.direction_of(c.key()) {
                end
            } else {
                start
            };
            EdgeSprite {
                start,
                end,
                midpoint: start.midpoint(end),
                arrow_target,
            }
        })
        .collect();

    log::trace!("projected scene: {} nodes", graph.node_count());
    Scene { nodes, edges }
}

/// The background grid as line segments over the full canvas.
pub fn grid_lines() -> Vec<(Vec2, Vec2)> {
    let mut lines = Vec::new();
    let mut x = 0.0;
    while x <= CANVAS_WIDTH {
        lines.push((Vec2::new(x, 0.0), Vec2::new(x, CANVAS_HEIGHT)));
        x += GRID_PITCH;
    }
    let mut y = 0.0;
    while y <= CANVAS_HEIGHT {
        lines.push((Vec2::new(0.0, y), Vec2::new(CANVAS_WIDTH, y)));
        y += GRID_PITCH;
    }
    lines
}
