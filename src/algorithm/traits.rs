use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

use crate::graph::{Graph, NodeId};
use crate::Result;

/// Result of a shortest path algorithm execution.
///
/// Both maps carry an entry for every node the graph enumerates: `dist` holds
/// `+infinity` and `parent` holds `None` for nodes the source cannot reach.
/// When several shortest paths tie, `parent` records whichever predecessor
/// relaxed the node first in heap-pop order; callers must treat any tied
/// predecessor as valid.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Shortest known distance from the source to each node
    pub dist: HashMap<NodeId, W>,

    /// Predecessor on the shortest path to each node; `None` for the source
    /// and for unreached nodes
    pub parent: HashMap<NodeId, Option<NodeId>>,

    /// The source node the computation started from
    pub source: NodeId,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the distance to `node`, or `None` when the node is unknown or
    /// was not reached from the source.
    pub fn distance(&self, node: impl Into<NodeId>) -> Option<W> {
        let d = *self.dist.get(&node.into())?;
        d.is_finite().then_some(d)
    }

    /// Reconstructs the source-to-`target` path by following `parent`
    /// pointers. Returns `None` when `target` is unknown or unreached.
    pub fn path_to(&self, target: impl Into<NodeId>) -> Option<Vec<NodeId>> {
        let target = target.into();
        if !self.dist.get(&target)?.is_finite() {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while current != self.source {
            // Engine-produced parent chains are acyclic; the length guard
            // protects against inconsistent hand-built results.
            if path.len() > self.parent.len() {
                return None;
            }
            match self.parent.get(&current)? {
                Some(pred) => {
                    path.push(pred.clone());
                    current = pred.clone();
                }
                None => return None,
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: NodeId) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
