//! Selection glow state with deferred pulse clearing.
//!
//! Connect mode highlights the first-selected node persistently and gives
//! the second a short glow pulse once the pair is formed. The pulse clear
//! is a deferred task: the host calls [`HighlightState::tick`] with the
//! current time, and each due task checks that its pulse generation still
//! matches before clearing, so a newer pulse scheduled before an old
//! deadline fires is never clobbered.

use gw_core::NodeId;
use gw_core::config::PULSE_SECS;
use smallvec::SmallVec;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy)]
struct ClearTask {
    seq: u64,
    fire_at: f64,
}

/// Transient highlight state. Presentation-derived, never authoritative.
#[derive(Debug, Default)]
pub struct HighlightState {
    /// Persistent glow on the first-selected node in connect mode.
    primary: Option<NodeId>,
    /// Short glow on the second node of a freshly formed pair, tagged with
    /// its generation.
    pulse: Option<(NodeId, u64)>,
    pending: VecDeque<ClearTask>,
    next_seq: u64,
}

impl HighlightState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_primary(&mut self, id: NodeId) {
        self.primary = Some(id);
    }

    pub fn clear_primary(&mut self) {
        self.primary = None;
    }

    /// Start a glow pulse on `id`, scheduled to clear after the fixed
    /// pulse duration. Replaces any previous pulse.
    pub fn pulse(&mut self, id: NodeId, now: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pulse = Some((id, seq));
        self.pending.push_back(ClearTask {
            seq,
            fire_at: now + PULSE_SECS,
        });
    }

    /// Run due clear tasks. A task only clears the pulse it scheduled:
    /// stale tasks (superseded by a newer pulse) fall through.
    pub fn tick(&mut self, now: f64) {
        while let Some(task) = self.pending.front().copied() {
            if task.fire_at > now {
                break;
            }
            self.pending.pop_front();
            if self.pulse.map(|(_, seq)| seq) == Some(task.seq) {
                self.pulse = None;
            }
        }
    }

    pub fn is_highlighted(&self, id: NodeId) -> bool {
        self.primary == Some(id) || self.pulse.map(|(n, _)| n) == Some(id)
    }

    /// Currently glowing node ids (at most two).
    pub fn highlighted(&self) -> SmallVec<[NodeId; 2]> {
        let mut out = SmallVec::new();
        if let Some(id) = self.primary {
            out.push(id);
        }
        if let Some((id, _)) = self.pulse
            && self.primary != Some(id)
        {
            out.push(id);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_clears_after_deadline() {
        let mut h = HighlightState::new();
        h.pulse(NodeId(1), 10.0);
        assert!(h.is_highlighted(NodeId(1)));

        h.tick(10.0 + PULSE_SECS / 2.0);
        assert!(h.is_highlighted(NodeId(1)));

        h.tick(10.0 + PULSE_SECS + 0.01);
        assert!(!h.is_highlighted(NodeId(1)));
    }

    #[test]
    fn stale_clear_does_not_clobber_newer_pulse() {
        let mut h = HighlightState::new();
        h.pulse(NodeId(1), 0.0);
        // A second pulse lands before the first deadline fires.
        h.pulse(NodeId(2), 0.3);

        // First task is due; it must not clear the newer pulse.
        h.tick(0.7);
        assert!(h.is_highlighted(NodeId(2)));

        // Second deadline passes.
        h.tick(0.3 + PULSE_SECS + 0.01);
        assert!(!h.is_highlighted(NodeId(2)));
    }

    #[test]
    fn primary_glow_persists_until_cleared() {
        let mut h = HighlightState::new();
        h.set_primary(NodeId(0));
        h.tick(1_000.0);
        assert!(h.is_highlighted(NodeId(0)));

        h.clear_primary();
        assert!(!h.is_highlighted(NodeId(0)));
    }

    #[test]
    fn highlighted_lists_both_glows_once() {
        let mut h = HighlightState::new();
        h.set_primary(NodeId(0));
        h.pulse(NodeId(1), 0.0);
        assert_eq!(h.highlighted().as_slice(), &[NodeId(0), NodeId(1)]);

        // Same node glowing both ways reports once.
        h.pulse(NodeId(0), 0.0);
        assert_eq!(h.highlighted().as_slice(), &[NodeId(0)]);
    }
}
