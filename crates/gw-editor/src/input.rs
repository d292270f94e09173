//! Input abstraction layer.
//!
//! Normalizes chrome commands and pointer gestures into the two enums the
//! session consumes. The input layer is expected to resolve raw pointer
//! coordinates to node ids (via hit testing) before building a
//! [`PointerEvent`]; the graph store still validates ids defensively.

use gw_core::{NodeId, Vec2};

/// A command from chrome (buttons) or the shortcut map.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    /// Create a named node at the default placement.
    AddNode(String),
    ToggleConnectMode,
    ToggleCutMode,
    ToggleSnapToGrid(bool),
    Undo,
    Redo,
}

/// A normalized gesture event from the pointing device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Tap landed on a node.
    TapNode { id: NodeId },
    /// Active drag moved; `translation` is cumulative from drag start.
    DragUpdate { id: NodeId, translation: Vec2 },
    /// Drag released; `translation` is the final cumulative offset.
    DragEnd { id: NodeId, translation: Vec2 },
    /// Pointer released on empty canvas (cut gesture in cutting mode).
    CanvasRelease { point: Vec2 },
}

impl PointerEvent {
    /// The node this event targets, if any.
    pub fn node(&self) -> Option<NodeId> {
        match self {
            Self::TapNode { id }
            | Self::DragUpdate { id, .. }
            | Self::DragEnd { id, .. } => Some(*id),
            Self::CanvasRelease { .. } => None,
        }
    }
}
