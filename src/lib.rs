//! SSSP SDK - Single-Source Shortest Paths
//!
//! This library computes single-source shortest paths (SSSP) on directed
//! graphs with real non-negative edge weights, returning both distances and a
//! predecessor map sufficient for path reconstruction.
//!
//! Graphs are supplied through the read-only [`Graph`] trait. The bundled
//! [`AdjListGraph`] implementation supports dense integer-indexed adjacency
//! (node ids `0..n`) as well as sparse adjacency keyed by arbitrary string
//! ids; see [`NodeId`].
//!
//! The concrete engine is classic [`Dijkstra`] over a binary heap. The
//! [`sssp`] entry point is asynchronous only as a seam for future alternate
//! algorithms; today it forwards to Dijkstra unchanged.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{dijkstra, Dijkstra},
    ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::MinHeap;
/// Re-export main types for convenient use
pub use graph::{AdjListGraph, Graph, NodeId};

use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The source node is absent from the graph's node set.
    #[error("Source node not found in graph")]
    SourceNotFound,

    /// A traversed edge carries a negative weight; the computation is
    /// aborted and no partial result is returned.
    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    /// A dense graph was indexed with an id that is neither an integer nor a
    /// numeric string.
    #[error("Invalid node id for dense graph: {0}")]
    InvalidNodeId(NodeId),

    /// A graph was built or mutated in a way that matches neither the dense
    /// nor the sparse form (e.g. an index-based edge append on a sparse
    /// graph).
    #[error("Invalid graph construction: {0}")]
    InvalidConstruction(&'static str),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Single-source shortest path (SSSP) entry point.
///
/// Resolves with exactly the result [`dijkstra`] produces for the same
/// inputs. Asynchronous purely as a forwarding seam so a future alternate
/// algorithm can slot in behind the same signature.
pub async fn sssp<W, G>(graph: &G, source: impl Into<NodeId>) -> Result<ShortestPathResult<W>>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    dijkstra(graph, source)
}
