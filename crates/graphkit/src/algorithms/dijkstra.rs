//! Dijkstra's shortest path algorithm.
//!
//! Priority-driven relaxation for graphs whose edge weights are all
//! non-negative. A vertex may sit in the queue several times with different
//! candidate distances; only its first extraction carries the true shortest
//! distance.
//!
//! # Preconditions
//!
//! Every edge weight must be >= 0. This is not checked: with negative weights
//! the result may be non-optimal. Use [`bellman_ford`](super::bellman_ford)
//! for signed weights.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace};

use crate::models::path::reconstruct_path;
use crate::models::{Graph, ShortestPath, Vertex, Weight};
use crate::Result;

/// Dijkstra configuration.
#[derive(Debug, Clone)]
pub struct DijkstraConfig {
    /// Track finalized vertices and skip their stale queue entries.
    ///
    /// When false, stale entries are relaxed again and simply fail to improve
    /// anything. Both modes produce identical distances.
    pub skip_finalized: bool,
}

impl Default for DijkstraConfig {
    fn default() -> Self {
        Self {
            skip_finalized: true,
        }
    }
}

impl DijkstraConfig {
    /// Create new Dijkstra configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rely on lazy deletion only, without a finalized set.
    pub fn lazy(mut self) -> Self {
        self.skip_finalized = false;
        self
    }
}

/// Queue entry, ordered so that `BinaryHeap` pops the smallest distance.
/// Equal distances pop in vertex insertion order.
#[derive(Debug, Clone, Copy)]
struct Candidate<W> {
    distance: W,
    vertex: usize,
}

impl<W: Weight> PartialEq for Candidate<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for Candidate<W> {}

impl<W: Weight> PartialOrd for Candidate<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> Ord for Candidate<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp_weight(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Distance and predecessor maps produced by one search.
struct Search<W> {
    distances: Vec<Option<W>>,
    predecessors: Vec<Option<usize>>,
    /// Distance the stop vertex was extracted with, if it was reached.
    reached: Option<W>,
}

fn run<V: Vertex, W: Weight>(
    graph: &Graph<V, W>,
    source: usize,
    stop_at: Option<usize>,
    config: &DijkstraConfig,
) -> Search<W> {
    let n = graph.vertex_count();
    let mut distances: Vec<Option<W>> = vec![None; n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    let mut finalized = vec![false; n];
    let mut heap = BinaryHeap::new();

    distances[source] = Some(W::zero());
    predecessors[source] = Some(source);
    heap.push(Candidate {
        distance: W::zero(),
        vertex: source,
    });

    while let Some(Candidate { distance, vertex }) = heap.pop() {
        if config.skip_finalized {
            if finalized[vertex] {
                continue;
            }
            finalized[vertex] = true;
        }

        if stop_at == Some(vertex) {
            return Search {
                distances,
                predecessors,
                reached: Some(distance),
            };
        }

        for &(neighbor, weight) in graph.adjacency(vertex) {
            // A sum that overflows W can never be an improvement
            let Some(alt) = distance.checked_add(weight) else {
                continue;
            };
            if distances[neighbor].map_or(true, |best| alt < best) {
                trace!("dijkstra: relax {} -> {} to {:?}", vertex, neighbor, alt);
                distances[neighbor] = Some(alt);
                predecessors[neighbor] = Some(vertex);
                heap.push(Candidate {
                    distance: alt,
                    vertex: neighbor,
                });
            }
        }
    }

    Search {
        distances,
        predecessors,
        reached: None,
    }
}

/// Shortest weighted path from `source` to `target`.
///
/// Returns `None` when `target` is unreachable (or not in the graph). The
/// path excludes `source`; `dijkstra(g, v, v)` is a zero-distance empty path.
///
/// # Errors
///
/// `UnknownVertex` if `source` is not in the graph.
pub fn dijkstra<V: Vertex, W: Weight>(
    graph: &Graph<V, W>,
    source: &V,
    target: &V,
) -> Result<Option<ShortestPath<V, W>>> {
    dijkstra_with_config(graph, source, target, &DijkstraConfig::default())
}

/// Dijkstra with configuration.
pub fn dijkstra_with_config<V: Vertex, W: Weight>(
    graph: &Graph<V, W>,
    source: &V,
    target: &V,
    config: &DijkstraConfig,
) -> Result<Option<ShortestPath<V, W>>> {
    let src = graph.require(source)?;
    let Some(dst) = graph.index_of(target) else {
        debug!("dijkstra: target {:?} not in graph", target);
        return Ok(None);
    };

    let search = run(graph, src, Some(dst), config);
    match search.reached {
        Some(distance) => {
            let path = reconstruct_path(graph, &search.predecessors, src, dst);
            debug!(
                "dijkstra: {:?} -> {:?} distance {:?} in {} hops",
                source,
                target,
                distance,
                path.len()
            );
            Ok(Some(ShortestPath::new(distance, path)))
        }
        None => {
            debug!("dijkstra: {:?} unreachable from {:?}", target, source);
            Ok(None)
        }
    }
}

/// Shortest distance from `source` to every reachable vertex.
///
/// Unreachable vertices are absent from the map.
pub fn shortest_distances<V: Vertex, W: Weight>(
    graph: &Graph<V, W>,
    source: &V,
) -> Result<HashMap<V, W>> {
    let src = graph.require(source)?;
    let search = run(graph, src, None, &DijkstraConfig::default());

    Ok(search
        .distances
        .into_iter()
        .enumerate()
        .filter_map(|(idx, d)| d.map(|d| (graph.vertex_at(idx).clone(), d)))
        .collect())
}
