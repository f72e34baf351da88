use indexmap::IndexMap;
use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::graph::traits::{Graph, NodeId};
use crate::{Error, Result};

/// Backing storage, tagged at construction time.
#[derive(Debug, Clone)]
enum AdjStorage<W> {
    /// Adjacency lists indexed by node id; nodes are `0..len`.
    Dense(Vec<Vec<(usize, W)>>),
    /// Adjacency lists keyed by node id; the key set is the node set, in
    /// insertion order.
    Sparse(IndexMap<NodeId, Vec<(NodeId, W)>>),
}

/// An adjacency-list graph supporting two storage shapes:
///
/// - dense: adjacency lists indexed `0..n`, node ids are integers
///   ([`NodeId::Index`], with numeric strings accepted as lookup aliases)
/// - sparse: adjacency lists keyed by arbitrary [`NodeId`]s, enumerated in
///   first-seen order
///
/// The mode is fixed at construction; the edge-append helpers are gated to
/// their matching mode and fail fast on the other.
#[derive(Debug, Clone)]
pub struct AdjListGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    storage: AdjStorage<W>,
}

impl<W> AdjListGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates an empty dense graph with nodes `0..node_count`.
    pub fn with_node_count(node_count: usize) -> Self {
        AdjListGraph {
            storage: AdjStorage::Dense(vec![Vec::new(); node_count]),
        }
    }

    /// Creates a dense graph from pre-built adjacency lists; node `i`'s
    /// outgoing edges are `adj[i]`.
    pub fn from_dense(adj: Vec<Vec<(usize, W)>>) -> Self {
        AdjListGraph {
            storage: AdjStorage::Dense(adj),
        }
    }

    /// Creates a sparse graph from `(node, outgoing edges)` pairs. The node
    /// set is exactly the set of keys, in iteration order; ids that appear
    /// only as edge targets are not registered.
    pub fn from_sparse<I>(adj: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, Vec<(NodeId, W)>)>,
    {
        AdjListGraph {
            storage: AdjStorage::Sparse(adj.into_iter().collect()),
        }
    }

    /// Returns the total number of directed edges.
    pub fn edge_count(&self) -> usize {
        match &self.storage {
            AdjStorage::Dense(adj) => adj.iter().map(|edges| edges.len()).sum(),
            AdjStorage::Sparse(adj) => adj.values().map(|edges| edges.len()).sum(),
        }
    }

    /// Appends a directed edge to a dense graph.
    ///
    /// Fails with [`Error::InvalidConstruction`] on a sparse graph and with
    /// [`Error::InvalidNodeId`] when `from` is out of range. `to` is not
    /// range-checked; dereferencing an out-of-range neighbor later yields an
    /// empty edge list.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        match &mut self.storage {
            AdjStorage::Dense(adj) => {
                let edges = adj
                    .get_mut(from)
                    .ok_or(Error::InvalidNodeId(NodeId::Index(from)))?;
                edges.push((to, weight));
                Ok(())
            }
            AdjStorage::Sparse(_) => Err(Error::InvalidConstruction(
                "add_edge(usize, usize) is only available on dense graphs",
            )),
        }
    }

    /// Appends a directed edge to a sparse graph, registering either
    /// endpoint into the node set if it has not been seen before (`from`
    /// before `to`).
    ///
    /// Fails with [`Error::InvalidConstruction`] on a dense graph.
    pub fn add_edge_by_id(
        &mut self,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        weight: W,
    ) -> Result<()> {
        match &mut self.storage {
            AdjStorage::Dense(_) => Err(Error::InvalidConstruction(
                "add_edge_by_id is only available on sparse graphs",
            )),
            AdjStorage::Sparse(adj) => {
                let to = to.into();
                adj.entry(from.into())
                    .or_default()
                    .push((to.clone(), weight));
                adj.entry(to).or_default();
                Ok(())
            }
        }
    }
}

impl<W> Graph<W> for AdjListGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        match &self.storage {
            AdjStorage::Dense(adj) => adj.len(),
            AdjStorage::Sparse(adj) => adj.len(),
        }
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        match &self.storage {
            AdjStorage::Dense(adj) => Box::new((0..adj.len()).map(NodeId::Index)),
            AdjStorage::Sparse(adj) => Box::new(adj.keys().cloned()),
        }
    }

    fn out(&self, u: &NodeId) -> Result<Box<dyn Iterator<Item = (NodeId, W)> + '_>> {
        match &self.storage {
            AdjStorage::Dense(adj) => {
                let idx = u
                    .as_index()
                    .ok_or_else(|| Error::InvalidNodeId(u.clone()))?;
                Ok(match adj.get(idx) {
                    Some(edges) => {
                        Box::new(edges.iter().map(|&(v, w)| (NodeId::Index(v), w)))
                    }
                    None => Box::new(std::iter::empty()),
                })
            }
            AdjStorage::Sparse(adj) => Ok(match adj.get(u) {
                Some(edges) => Box::new(edges.iter().cloned()),
                None => Box::new(std::iter::empty()),
            }),
        }
    }
}
