pub mod drag;
pub mod highlight;
pub mod history;
pub mod input;
pub mod modes;
pub mod session;
pub mod shortcuts;

pub use drag::DragCompositor;
pub use highlight::HighlightState;
pub use history::History;
pub use input::{EditorCommand, PointerEvent};
pub use modes::{Mode, ModeController};
pub use session::EditorSession;
pub use shortcuts::{ShortcutAction, ShortcutMap};
