//! Core data model for the canvas graph.
//!
//! The graph is an append-only list of named nodes plus a set of
//! connections between them. Node ids are stable list indices — nodes are
//! never removed, so an id stays valid for the whole session. Connections
//! are unordered pairs; each carries a direction flag stored in a separate
//! map keyed by the canonical pair, which deliberately survives connection
//! removal (a cut-then-recreated connection keeps its last arrow
//! direction).

use crate::config::{FIRST_NODE_POS, MIN_NODE_Y, NODE_SPAWN_STEP};
use crate::geometry::Vec2;
use crate::id::{NodeId, PairKey};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

// ─── Errors ──────────────────────────────────────────────────────────────

/// Failures at the graph-store boundary. Inputs normally arrive
/// pre-validated by the input layer; these guard against corruption anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("no node with id {0}")]
    InvalidNode(NodeId),
    #[error("cannot connect node {0} to itself")]
    SelfConnection(NodeId),
}

// ─── Nodes & connections ─────────────────────────────────────────────────

/// A single node on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasNode {
    /// Committed position in canvas coordinates (live drags are composited
    /// on top of this by the editor, never written here per pointer-move).
    pub position: Vec2,
    /// User-visible label.
    pub name: String,
}

/// A connection between two nodes, kept in the order the endpoints were
/// selected. Identity is canonical: `(a, b)` and `(b, a)` are the same edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub a: NodeId,
    pub b: NodeId,
}

impl Connection {
    pub fn key(&self) -> PairKey {
        PairKey::new(self.a, self.b)
    }
}

/// Result of [`CanvasGraph::add_connection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// A new connection was appended.
    Created,
    /// The canonical pair already existed; nothing changed.
    Exists,
}

// ─── Snapshots ───────────────────────────────────────────────────────────

/// A full by-value copy of the graph at one instant, used for undo/redo.
///
/// The direction map is *not* part of a snapshot: arrow flags are residue
/// that outlives connection removal, so undoing a connection does not
/// reset its remembered direction.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSnapshot {
    nodes: Vec<CanvasNode>,
    connections: Vec<Connection>,
}

// ─── Graph store ─────────────────────────────────────────────────────────

/// The canvas graph — single source of truth for committed state.
#[derive(Debug, Clone, Default)]
pub struct CanvasGraph {
    nodes: Vec<CanvasNode>,
    connections: Vec<Connection>,
    /// Arrow direction per canonical pair: `true` points toward the pair's
    /// second-selected endpoint (`b`), `false` toward the first (`a`).
    /// Entries are seeded on creation and never removed.
    directions: HashMap<PairKey, bool>,
}

impl CanvasGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Nodes ───────────────────────────────────────────────────────────

    /// Append a node at the default placement: offset from the last-created
    /// node, or a fixed spot on an empty canvas. Always succeeds.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let position = match self.nodes.last() {
            Some(last) => last.position + NODE_SPAWN_STEP,
            None => FIRST_NODE_POS,
        };
        self.add_node_at(name, position)
    }

    /// Append a node at an explicit position.
    pub fn add_node_at(&mut self, name: impl Into<String>, position: Vec2) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let name = name.into();
        log::debug!("add node {id} {name:?} at ({}, {})", position.x, position.y);
        self.nodes.push(CanvasNode { position, name });
        id
    }

    /// Fold a drag delta into a node's committed position. The resulting
    /// y is clamped so the node stays below the toolbar band.
    pub fn commit_node_move(&mut self, id: NodeId, delta: Vec2) -> Result<(), GraphError> {
        let node = self
            .nodes
            .get_mut(id.index())
            .ok_or(GraphError::InvalidNode(id))?;
        node.position += delta;
        node.position.y = node.position.y.max(MIN_NODE_Y);
        log::trace!(
            "commit move {id} -> ({}, {})",
            node.position.x,
            node.position.y
        );
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Option<&CanvasNode> {
        self.nodes.get(id.index())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// All nodes with their ids, in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &CanvasNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ─── Connections ─────────────────────────────────────────────────────

    /// Connect two nodes, keeping the selection order of the endpoints.
    ///
    /// Idempotent under swapped order: if the canonical pair already
    /// exists this returns [`ConnectOutcome::Exists`] and changes nothing.
    /// On creation, the pair's direction flag is seeded to `true` only if
    /// no entry exists yet (a previously cut connection keeps its flag).
    pub fn add_connection(&mut self, a: NodeId, b: NodeId) -> Result<ConnectOutcome, GraphError> {
        if !self.contains(a) {
            return Err(GraphError::InvalidNode(a));
        }
        if !self.contains(b) {
            return Err(GraphError::InvalidNode(b));
        }
        if a == b {
            return Err(GraphError::SelfConnection(a));
        }

        let key = PairKey::new(a, b);
        if self.connections.iter().any(|c| c.key() == key) {
            return Ok(ConnectOutcome::Exists);
        }

        log::debug!("connect {a} -> {b}");
        self.connections.push(Connection { a, b });
        self.directions.entry(key).or_insert(true);
        Ok(ConnectOutcome::Created)
    }

    /// Remove every connection matching the predicate. Returns how many
    /// were removed. Direction entries are left in place.
    pub fn remove_connections(&mut self, mut pred: impl FnMut(&Connection) -> bool) -> usize {
        let before = self.connections.len();
        self.connections.retain(|c| !pred(c));
        let removed = before - self.connections.len();
        if removed > 0 {
            log::debug!("removed {removed} connection(s)");
        }
        removed
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// The arrow direction for a pair: `true` points toward the stored
    /// connection's `b` (second-selected) endpoint, `false` toward `a`.
    /// Unset pairs default to `true`.
    pub fn direction_of(&self, key: PairKey) -> bool {
        self.directions.get(&key).copied().unwrap_or(true)
    }

    /// Flip or set the arrow direction of a pair. Not an undoable
    /// operation: direction flags live outside history snapshots.
    pub fn set_direction(&mut self, key: PairKey, toward_b: bool) {
        self.directions.insert(key, toward_b);
    }

    // ─── Snapshots ───────────────────────────────────────────────────────

    /// Capture the committed state by value.
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes.clone(),
            connections: self.connections.clone(),
        }
    }

    /// Replace the committed state with a snapshot. Direction flags are
    /// untouched.
    pub fn restore(&mut self, snapshot: GraphSnapshot) {
        self.nodes = snapshot.nodes;
        self.connections = snapshot.connections;
    }
}
