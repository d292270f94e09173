//! Undo/Redo history.
//!
//! History is snapshot-based: callers capture the full graph *before* a
//! mutation, so undo replaces the whole committed state in a single step
//! (no per-mutation inverse chain). Drag gestures deliberately bypass the
//! history — a pointer-move stream would flood it — so node moves are not
//! undoable as atomic steps.

use gw_core::{CanvasGraph, GraphSnapshot};

/// Default undo depth for a session.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Manages the undo and redo snapshot stacks.
pub struct History {
    undo_stack: Vec<GraphSnapshot>,
    redo_stack: Vec<GraphSnapshot>,
    /// Maximum undo depth; the oldest entry is dropped beyond this.
    max_depth: usize,
}

impl History {
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    /// Record the pre-mutation state. Must be called immediately before any
    /// graph mutation that should be undoable. Clears the redo stack.
    pub fn record(&mut self, graph: &CanvasGraph) {
        self.undo_stack.push(graph.snapshot());
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
    }

    /// Restore the most recent snapshot. Returns `false` (and leaves the
    /// graph untouched) when there is nothing to undo.
    pub fn undo(&mut self, graph: &mut CanvasGraph) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(graph.snapshot());
        graph.restore(snapshot);
        log::debug!("undo ({} steps left)", self.undo_stack.len());
        true
    }

    /// Re-apply the most recently undone state. Mirror of [`History::undo`].
    pub fn redo(&mut self, graph: &mut CanvasGraph) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(graph.snapshot());
        graph.restore(snapshot);
        log::debug!("redo ({} steps left)", self.redo_stack.len());
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_on_empty_stack_is_a_noop() {
        let mut g = CanvasGraph::new();
        let mut h = History::default();
        assert!(!h.undo(&mut g));
        assert!(!h.redo(&mut g));
    }

    #[test]
    fn undo_restores_pre_mutation_snapshot() {
        let mut g = CanvasGraph::new();
        let mut h = History::default();

        g.add_node("A");
        let before = g.snapshot();

        h.record(&g);
        g.add_node("B");
        assert_eq!(g.node_count(), 2);

        assert!(h.undo(&mut g));
        assert_eq!(g.snapshot(), before);
    }

    #[test]
    fn redo_restores_post_mutation_state() {
        let mut g = CanvasGraph::new();
        let mut h = History::default();

        h.record(&g);
        g.add_node("A");
        let after = g.snapshot();

        h.undo(&mut g);
        assert!(g.is_empty());
        assert!(h.redo(&mut g));
        assert_eq!(g.snapshot(), after);
    }

    #[test]
    fn new_mutation_clears_redo() {
        let mut g = CanvasGraph::new();
        let mut h = History::default();

        h.record(&g);
        g.add_node("A");
        h.undo(&mut g);
        assert!(h.can_redo());

        h.record(&g);
        g.add_node("B");
        assert!(!h.can_redo());
        assert!(!h.redo(&mut g));
    }

    #[test]
    fn max_depth_trims_oldest() {
        let mut g = CanvasGraph::new();
        let mut h = History::new(3);

        for i in 0..5 {
            h.record(&g);
            g.add_node(format!("n{i}"));
        }

        let mut undo_count = 0;
        while h.undo(&mut g) {
            undo_count += 1;
        }
        assert_eq!(undo_count, 3);
        // Oldest two records were dropped: two nodes remain.
        assert_eq!(g.node_count(), 2);
    }
}
