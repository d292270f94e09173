//! Node and connection identity.
//!
//! Nodes are addressed by their position in the append-only node list:
//! a `NodeId` is a stable integer index, never reused within a session.
//! Connections are addressed by `PairKey`, a canonical unordered pair.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable index of a node in the canvas graph — 4 bytes, Copy, Eq, Hash in O(1).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The raw index into the node list.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for NodeId {
    fn from(raw: u32) -> Self {
        NodeId(raw)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Canonical unordered pair of node ids.
///
/// `PairKey::new(a, b)` equals `PairKey::new(b, a)`, so the key addresses
/// a connection and its direction flag regardless of the order the two
/// endpoints were selected in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairKey {
    lo: NodeId,
    hi: NodeId,
}

impl PairKey {
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    pub fn lo(self) -> NodeId {
        self.lo
    }

    pub fn hi(self) -> NodeId {
        self.hi
    }
}

impl fmt::Debug for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_key_is_order_independent() {
        let k1 = PairKey::new(NodeId(3), NodeId(7));
        let k2 = PairKey::new(NodeId(7), NodeId(3));
        assert_eq!(k1, k2);
        assert_eq!(k1.lo(), NodeId(3));
        assert_eq!(k1.hi(), NodeId(7));
    }

    #[test]
    fn pair_key_allows_equal_endpoints() {
        // The graph store rejects self-connections; the key itself doesn't care.
        let k = PairKey::new(NodeId(5), NodeId(5));
        assert_eq!(k.lo(), k.hi());
    }
}
