//! The editor session: one owned state object for graph, history, mode,
//! drag, and highlight state.
//!
//! All UI surfaces mutate through this struct's command/pointer
//! dispatchers, which keeps the core testable without any rendering layer
//! and guarantees each event handler runs to completion before the next
//! (single-threaded, event-driven model).
//!
//! History discipline: every undoable UI action records the pre-mutation
//! snapshot exactly once before mutating. Drag commits are deliberately
//! not recorded. Cut gestures record *before* the proximity test, so a cut
//! that severs nothing still pushes an undo step — kept for parity with
//! the original editor behavior.

use crate::drag::DragCompositor;
use crate::highlight::HighlightState;
use crate::history::History;
use crate::input::{EditorCommand, PointerEvent};
use crate::modes::{Mode, ModeController};
use crate::shortcuts::ShortcutAction;
use gw_core::config::{CUT_RADIUS, GRID_PITCH};
use gw_core::{CanvasGraph, NodeId, Vec2, dist_to_segment};
use std::collections::HashMap;

/// Owns all editor state and translates events into graph mutations.
#[derive(Default)]
pub struct EditorSession {
    graph: CanvasGraph,
    history: History,
    modes: ModeController,
    drag: DragCompositor,
    highlight: HighlightState,
    snap_to_grid: bool,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Commands (chrome buttons / shortcuts) ───────────────────────────

    /// Apply a chrome command.
    pub fn apply(&mut self, command: EditorCommand) {
        match command {
            EditorCommand::AddNode(name) => {
                self.add_node(name);
            }
            EditorCommand::ToggleConnectMode => self.toggle_connect_mode(),
            EditorCommand::ToggleCutMode => self.toggle_cut_mode(),
            EditorCommand::ToggleSnapToGrid(on) => self.set_snap_to_grid(on),
            EditorCommand::Undo => {
                self.undo();
            }
            EditorCommand::Redo => {
                self.redo();
            }
        }
    }

    /// Apply a resolved keyboard shortcut.
    pub fn shortcut(&mut self, action: ShortcutAction) {
        match action {
            ShortcutAction::Undo => {
                self.undo();
            }
            ShortcutAction::Redo => {
                self.redo();
            }
            ShortcutAction::ToggleConnect => self.toggle_connect_mode(),
            ShortcutAction::ToggleCut => self.toggle_cut_mode(),
            ShortcutAction::ToggleSnap => self.set_snap_to_grid(!self.snap_to_grid),
            ShortcutAction::Deselect => {
                self.modes.reset();
                self.highlight.clear_primary();
            }
        }
    }

    /// Create a node at the default placement. Undoable.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        self.history.record(&self.graph);
        self.graph.add_node(name)
    }

    pub fn toggle_connect_mode(&mut self) {
        self.modes.toggle_connect();
        self.highlight.clear_primary();
    }

    pub fn toggle_cut_mode(&mut self) {
        self.modes.toggle_cut();
        self.highlight.clear_primary();
    }

    pub fn set_snap_to_grid(&mut self, on: bool) {
        self.snap_to_grid = on;
    }

    /// Silent no-op when the undo stack is empty.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.graph)
    }

    /// Silent no-op when the redo stack is empty.
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.graph)
    }

    // ─── Pointer gestures ────────────────────────────────────────────────

    /// Dispatch a normalized pointer event. `now` is the host clock in
    /// seconds, used to schedule highlight pulses.
    pub fn pointer(&mut self, event: PointerEvent, now: f64) {
        match event {
            PointerEvent::TapNode { id } => self.tap_node(id, now),
            PointerEvent::DragUpdate { id, translation } => self.drag_update(id, translation),
            PointerEvent::DragEnd { id, translation } => self.drag_end(id, translation),
            PointerEvent::CanvasRelease { point } => self.canvas_release(point),
        }
    }

    /// Node tap: in connect mode, builds up the pending pair; elsewhere a
    /// no-op.
    pub fn tap_node(&mut self, id: NodeId, now: f64) {
        if self.modes.mode() != Mode::Connecting {
            return;
        }

        let Some((a, b)) = self.modes.tap(id) else {
            // First of the pair: glow until the pair completes.
            self.highlight.set_primary(id);
            return;
        };

        // Pair complete: record, connect, clear glow regardless of outcome.
        // Duplicate and self pairs are absorbed silently.
        self.history.record(&self.graph);
        match self.graph.add_connection(a, b) {
            Ok(outcome) => log::debug!("pair {a}-{b}: {outcome:?}"),
            Err(err) => log::debug!("pair {a}-{b} absorbed: {err}"),
        }
        self.highlight.clear_primary();
        self.highlight.pulse(b, now);
    }

    /// Per-move update of an active drag. High-frequency; no history.
    pub fn drag_update(&mut self, id: NodeId, translation: Vec2) {
        self.drag.update(id, translation);
    }

    /// Drag release: fold the final translation into the committed
    /// position (snapped to the grid when enabled) and drop the transient
    /// offset. Not undoable.
    pub fn drag_end(&mut self, id: NodeId, translation: Vec2) {
        self.drag.take(id);

        let delta = match (self.snap_to_grid, self.graph.node(id)) {
            (true, Some(node)) => {
                let target = (node.position + translation).snapped(GRID_PITCH);
                target - node.position
            }
            _ => translation,
        };

        if let Err(err) = self.graph.commit_node_move(id, delta) {
            log::warn!("drag end dropped: {err}");
        }
    }

    /// Canvas-level pointer release: in cut mode, sever every connection
    /// whose rendered segment passes within the cut radius of the point.
    pub fn canvas_release(&mut self, point: Vec2) {
        if self.modes.mode() != Mode::Cutting {
            return;
        }

        // Recorded before the proximity test: a zero-match cut still
        // pushes an undo step (parity with the original editor).
        self.history.record(&self.graph);

        // Segments are measured against rendered positions, so an
        // in-flight drag on an endpoint moves the cut target with it.
        let rendered: Vec<Vec2> = self
            .graph
            .nodes()
            .map(|(id, n)| n.position + self.drag.offset_of(id))
            .collect();

        let removed = self.graph.remove_connections(|c| {
            dist_to_segment(point, rendered[c.a.index()], rendered[c.b.index()]) <= CUT_RADIUS
        });
        log::debug!(
            "cut at ({}, {}) severed {removed} connection(s)",
            point.x,
            point.y
        );
    }

    /// Advance the highlight clock (clears expired glow pulses).
    pub fn tick(&mut self, now: f64) {
        self.highlight.tick(now);
    }

    // ─── Queries (render layer & chrome) ─────────────────────────────────

    pub fn graph(&self) -> &CanvasGraph {
        &self.graph
    }

    pub fn mode(&self) -> Mode {
        self.modes.mode()
    }

    pub fn selection(&self) -> &[NodeId] {
        self.modes.selection()
    }

    pub fn drag_offsets(&self) -> &HashMap<NodeId, Vec2> {
        self.drag.offsets()
    }

    /// Rendered position of a node: committed + transient drag offset.
    pub fn rendered_position(&self, id: NodeId) -> Option<Vec2> {
        self.drag.rendered_position(&self.graph, id)
    }

    pub fn highlighted(&self) -> smallvec::SmallVec<[NodeId; 2]> {
        self.highlight.highlighted()
    }

    pub fn snap_to_grid(&self) -> bool {
        self.snap_to_grid
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gw_core::config::MIN_NODE_Y;

    #[test]
    fn tap_is_ignored_outside_connect_mode() {
        let mut s = EditorSession::new();
        let a = s.add_node("A");
        s.tap_node(a, 0.0);
        assert!(s.selection().is_empty());
        assert!(s.highlighted().is_empty());
    }

    #[test]
    fn first_tap_glows_until_pair_completes() {
        let mut s = EditorSession::new();
        let a = s.add_node("A");
        let b = s.add_node("B");

        s.toggle_connect_mode();
        s.tap_node(a, 0.0);
        assert_eq!(s.highlighted().as_slice(), &[a]);

        s.tap_node(b, 0.1);
        // Primary cleared, pulse on the second-selected node.
        assert_eq!(s.highlighted().as_slice(), &[b]);
        assert_eq!(s.graph().connections().len(), 1);
    }

    #[test]
    fn duplicate_pair_is_absorbed_silently() {
        let mut s = EditorSession::new();
        let a = s.add_node("A");
        let b = s.add_node("B");

        s.toggle_connect_mode();
        s.tap_node(a, 0.0);
        s.tap_node(b, 0.0);
        s.tap_node(b, 0.0);
        s.tap_node(a, 0.0);

        assert_eq!(s.graph().connections().len(), 1);
        assert!(s.selection().is_empty());
    }

    #[test]
    fn drag_end_clamps_into_canvas() {
        let mut s = EditorSession::new();
        let a = s.add_node("A"); // y = 300
        s.drag_update(a, Vec2::new(0.0, -250.0));
        s.drag_end(a, Vec2::new(0.0, -250.0));

        let node = s.graph().node(a).unwrap();
        assert_eq!(node.position.y, MIN_NODE_Y);
        assert_eq!(s.drag_offsets().len(), 0);
    }

    #[test]
    fn snapped_drag_end_lands_on_grid() {
        let mut s = EditorSession::new();
        let a = s.add_node("A"); // (300, 300) — already on the grid
        s.set_snap_to_grid(true);

        s.drag_end(a, Vec2::new(17.0, 23.0));
        let p = s.graph().node(a).unwrap().position;
        assert_eq!(p, Vec2::new(320.0, 320.0));
    }

    #[test]
    fn cut_outside_cut_mode_does_nothing() {
        let mut s = EditorSession::new();
        let a = s.add_node("A");
        let b = s.add_node("B");
        s.toggle_connect_mode();
        s.tap_node(a, 0.0);
        s.tap_node(b, 0.0);
        s.toggle_connect_mode();

        let before = s.can_undo();
        s.canvas_release(Vec2::new(0.0, 0.0));
        assert_eq!(s.graph().connections().len(), 1);
        assert_eq!(s.can_undo(), before);
    }
}
