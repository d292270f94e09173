//! Interaction mode state machine.
//!
//! The canvas is always in exactly one mode: `Idle`, `Connecting`, or
//! `Cutting`. Modes are toggled explicitly from chrome or shortcuts;
//! turning one on always turns the other off. The controller also owns
//! the pending pair selection used in connect mode.

use gw_core::NodeId;
use smallvec::SmallVec;

/// The active interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Connecting,
    Cutting,
}

/// Tracks the current mode and the in-progress connect selection.
#[derive(Debug, Default)]
pub struct ModeController {
    mode: Mode,
    /// At most two node ids pending pairing, in selection order.
    selection: SmallVec<[NodeId; 2]>,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selection(&self) -> &[NodeId] {
        &self.selection
    }

    /// Toggle connect mode. Entering or leaving always discards the
    /// pending selection.
    pub fn toggle_connect(&mut self) {
        self.mode = match self.mode {
            Mode::Connecting => Mode::Idle,
            _ => Mode::Connecting,
        };
        self.selection.clear();
        log::debug!("mode -> {:?}", self.mode);
    }

    /// Toggle cut mode. Leaving connect mode this way also discards the
    /// pending selection.
    pub fn toggle_cut(&mut self) {
        self.mode = match self.mode {
            Mode::Cutting => Mode::Idle,
            _ => Mode::Cutting,
        };
        self.selection.clear();
        log::debug!("mode -> {:?}", self.mode);
    }

    /// Return to idle (Escape). Clears any pending selection.
    pub fn reset(&mut self) {
        self.mode = Mode::Idle;
        self.selection.clear();
    }

    /// Handle a node tap. Only meaningful in connect mode — anywhere else
    /// this is a no-op. When the tap completes a pair, the pair is
    /// returned in selection order and the selection is cleared.
    pub fn tap(&mut self, id: NodeId) -> Option<(NodeId, NodeId)> {
        if self.mode != Mode::Connecting {
            return None;
        }
        self.selection.push(id);
        if self.selection.len() < 2 {
            return None;
        }
        let pair = (self.selection[0], self.selection[1]);
        self.selection.clear();
        Some(pair)
    }
}
