pub mod hit;
pub mod projection;

pub use hit::hit_test;
pub use projection::{EdgeSprite, NodeRect, NodeSprite, Scene, grid_lines, project};
