//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s. Shortcuts are
//! the keyboard path to the same session commands chrome buttons trigger.

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Undo,
    Redo,
    ToggleConnect,
    ToggleCut,
    ToggleSnap,
    /// Return to idle mode, dropping any pending selection.
    Deselect,
}

/// Resolves key events into shortcut actions.
///
/// Platform-aware modifier detection: on macOS `meta` is ⌘, elsewhere
/// `ctrl` serves the same role.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"z"`, `"Escape"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        shift: bool,
        _alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        let cmd = ctrl || meta;

        // ── Modifier combos first (most specific) ──
        if cmd && shift {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Redo),
                _ => None,
            };
        }

        if cmd {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Undo),
                "y" | "Y" => Some(ShortcutAction::Redo),
                _ => None,
            };
        }

        // ── Single keys (no modifiers) ──
        match key {
            "c" | "C" => Some(ShortcutAction::ToggleConnect),
            "x" | "X" => Some(ShortcutAction::ToggleCut),
            "g" | "G" => Some(ShortcutAction::ToggleSnap),
            "Escape" => Some(ShortcutAction::Deselect),
            _ => None,
        }
    }
}
