use num_traits::{Float, Zero};
use std::fmt::{self, Debug};

use crate::Result;

/// Identifier for a graph node.
///
/// Dense graphs index their nodes `0..n` and use [`NodeId::Index`]; sparse
/// graphs key their nodes by arbitrary strings and use [`NodeId::Name`]. The
/// two never compare equal, even when the name is numeric: `Name("0")` and
/// `Index(0)` are distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeId {
    /// Dense-mode id: a position in `0..node_count`.
    Index(usize),
    /// Sparse-mode id: an arbitrary token.
    Name(String),
}

impl NodeId {
    /// Interprets this id as a dense index.
    ///
    /// `Index(i)` maps to `i`; `Name(s)` is accepted as an alias when `s` is
    /// a non-empty string of ASCII digits that fits in `usize`. Anything
    /// else returns `None`.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            NodeId::Index(i) => Some(*i),
            NodeId::Name(s) => {
                if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
                    s.parse().ok()
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Index(i) => write!(f, "{}", i),
            NodeId::Name(s) => write!(f, "{}", s),
        }
    }
}

impl From<usize> for NodeId {
    fn from(i: usize) -> Self {
        NodeId::Index(i)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId::Name(s.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId::Name(s)
    }
}

/// Trait representing a read-only weighted directed graph.
///
/// Implementations must be side-effect-free in these methods; the shortest
/// path engine treats the graph as frozen for the duration of a computation.
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of distinct nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns an iterator over every node id, each exactly once.
    ///
    /// Order is index order for dense graphs and insertion order for sparse
    /// graphs. Each call yields a fresh iterator over the full set.
    fn nodes(&self) -> Box<dyn Iterator<Item = NodeId> + '_>;

    /// Returns an iterator over the outgoing `(neighbor, weight)` edges of
    /// `u`. Parallel edges are yielded individually, never deduplicated.
    ///
    /// A sparse graph yields an empty sequence for an unknown `u`; a dense
    /// graph fails with [`Error::InvalidNodeId`] when `u` cannot be read as
    /// an index.
    ///
    /// [`Error::InvalidNodeId`]: crate::Error::InvalidNodeId
    fn out(&self, u: &NodeId) -> Result<Box<dyn Iterator<Item = (NodeId, W)> + '_>>;
}
