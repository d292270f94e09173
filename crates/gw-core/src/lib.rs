pub mod config;
pub mod geometry;
pub mod id;
pub mod model;

pub use geometry::{Vec2, dist_to_segment};
pub use id::{NodeId, PairKey};
pub use model::{CanvasGraph, CanvasNode, ConnectOutcome, Connection, GraphError, GraphSnapshot};
