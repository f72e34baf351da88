use log::debug;
use num_traits::{Float, ToPrimitive, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinHeap;
use crate::graph::{Graph, NodeId};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm: label-setting over a binary min-heap, valid
/// for non-negative edge weights only.
///
/// The heap has no decrease-key; every improvement pushes a fresh entry and
/// superseded entries are detected at pop time by comparing the popped
/// priority against the recorded distance (lazy deletion).
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: NodeId) -> Result<ShortestPathResult<W>> {
        let n = graph.node_count();

        let mut dist: HashMap<NodeId, W> = HashMap::with_capacity(n);
        let mut parent: HashMap<NodeId, Option<NodeId>> = HashMap::with_capacity(n);
        for id in graph.nodes() {
            dist.insert(id.clone(), W::infinity());
            parent.insert(id, None);
        }

        if !dist.contains_key(&source) {
            return Err(Error::SourceNotFound);
        }
        dist.insert(source.clone(), W::zero());

        let mut heap = MinHeap::with_capacity(n);
        heap.push(W::zero(), source.clone());

        let mut settled = 0usize;
        let mut stale = 0usize;

        // Main Dijkstra loop
        while let Some((du, u)) = heap.pop() {
            // A popped priority that no longer matches the recorded distance
            // belongs to an entry superseded by a later relaxation.
            let recorded = dist.get(&u).copied().unwrap_or_else(W::infinity);
            if du != recorded {
                stale += 1;
                continue;
            }
            settled += 1;

            // Relax all outgoing edges
            for (v, weight) in graph.out(&u)? {
                if weight < W::zero() {
                    return Err(Error::NegativeWeight(
                        weight.to_f64().unwrap_or(f64::NAN),
                    ));
                }

                let new_dist = du + weight;
                let current = dist.get(&v).copied().unwrap_or_else(W::infinity);
                if new_dist < current {
                    dist.insert(v.clone(), new_dist);
                    parent.insert(v.clone(), Some(u.clone()));
                    heap.push(new_dist, v);
                }
            }
        }

        debug!(
            "dijkstra from {}: settled {} nodes, {} stale pops",
            source, settled, stale
        );

        Ok(ShortestPathResult {
            dist,
            parent,
            source,
        })
    }
}

/// Computes shortest paths from `source` with [`Dijkstra`].
///
/// Convenience wrapper over the [`ShortestPathAlgorithm`] trait.
pub fn dijkstra<W, G>(graph: &G, source: impl Into<NodeId>) -> Result<ShortestPathResult<W>>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    Dijkstra::new().compute_shortest_paths(graph, source.into())
}
