//! Canvas configuration constants.
//!
//! These are fixed editor parameters, not a protocol: the canvas is a
//! 2000×2000 logical surface with a 40-unit grid, and the top 120 units
//! are reserved for toolbar chrome.

use crate::geometry::Vec2;

/// Logical canvas extent in canvas units.
pub const CANVAS_WIDTH: f32 = 2000.0;
pub const CANVAS_HEIGHT: f32 = 2000.0;

/// Spacing of the background grid, and the snap pitch when snapping is on.
pub const GRID_PITCH: f32 = 40.0;

/// Nodes may not be committed above this y — keeps them clear of the
/// toolbar band at the top of the canvas.
pub const MIN_NODE_Y: f32 = 120.0;

/// Where the first node lands when the canvas is empty.
pub const FIRST_NODE_POS: Vec2 = Vec2::new(300.0, 300.0);

/// Offset from the previously created node for each new node.
pub const NODE_SPAWN_STEP: Vec2 = Vec2::new(80.0, 50.0);

/// How close (in canvas units) a cut release must pass to a connection
/// segment to sever it.
pub const CUT_RADIUS: f32 = 10.0;

/// How long the second-selected node glows after a pair is formed.
pub const PULSE_SECS: f64 = 0.6;

/// Node tile footprint used by render projection and hit testing.
pub const NODE_WIDTH: f32 = 120.0;
pub const NODE_HEIGHT: f32 = 60.0;
