//! Bellman-Ford single-source shortest paths.
//!
//! Handles negative edge weights and reports negative-weight cycles:
//!
//! - Relax every edge |V|-1 times. After round i, every shortest path using
//!   at most i edges is correct.
//! - One extra pass: if any edge still relaxes, a negative cycle is
//!   reachable from the source.
//!
//! Complexity: O(V * E)

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::models::path::reconstruct_path;
use crate::models::{Graph, ShortestPath, Vertex, Weight};
use crate::Result;

/// Bellman-Ford configuration.
#[derive(Debug, Clone)]
pub struct BellmanFordConfig {
    /// End the relaxation rounds early once a full round changes nothing.
    /// The negative-cycle pass runs regardless.
    pub stop_when_stable: bool,
}

impl Default for BellmanFordConfig {
    fn default() -> Self {
        Self {
            stop_when_stable: true,
        }
    }
}

impl BellmanFordConfig {
    /// Create new Bellman-Ford configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Always run all |V|-1 rounds.
    pub fn with_all_rounds(mut self) -> Self {
        self.stop_when_stable = false;
        self
    }
}

/// Outcome of a Bellman-Ford query.
#[derive(Debug, Clone, PartialEq)]
pub enum BellmanFordOutcome<V, W> {
    /// Finite shortest path to the target.
    Path(ShortestPath<V, W>),
    /// Target cannot be reached from the source.
    Unreachable,
    /// A negative-weight cycle is reachable from the source, so shortest
    /// distances are undefined.
    NegativeCycle,
}

impl<V, W> BellmanFordOutcome<V, W> {
    /// Shortest path, if one was found.
    pub fn path(&self) -> Option<&ShortestPath<V, W>> {
        match self {
            Self::Path(path) => Some(path),
            _ => None,
        }
    }

    /// Convert into the shortest path, if one was found.
    pub fn into_path(self) -> Option<ShortestPath<V, W>> {
        match self {
            Self::Path(path) => Some(path),
            _ => None,
        }
    }

    /// Check if a negative cycle was detected.
    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, Self::NegativeCycle)
    }
}

struct Relaxation<W> {
    distances: Vec<Option<W>>,
    predecessors: Vec<Option<usize>>,
    negative_cycle: bool,
}

fn relax_edges<V: Vertex, W: Weight>(
    graph: &Graph<V, W>,
    source: usize,
    config: &BellmanFordConfig,
) -> Relaxation<W> {
    let n = graph.vertex_count();
    let mut distances: Vec<Option<W>> = vec![None; n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];

    distances[source] = Some(W::zero());
    predecessors[source] = Some(source);

    for round in 0..n.saturating_sub(1) {
        let mut changed = false;

        for node in 0..n {
            let Some(base) = distances[node] else {
                continue;
            };
            for &(neighbor, weight) in graph.adjacency(node) {
                let Some(alt) = base.checked_add(weight) else {
                    continue;
                };
                if distances[neighbor].map_or(true, |best| alt < best) {
                    distances[neighbor] = Some(alt);
                    predecessors[neighbor] = Some(node);
                    changed = true;
                }
            }
        }

        trace!("bellman-ford: round {} changed={}", round + 1, changed);
        if !changed && config.stop_when_stable {
            break;
        }
    }

    // Extra pass: any further improvement means a reachable negative cycle
    let negative_cycle = (0..n).any(|node| match distances[node] {
        Some(base) => graph.adjacency(node).iter().any(|&(neighbor, weight)| {
            base.checked_add(weight)
                .is_some_and(|alt| distances[neighbor].map_or(true, |best| alt < best))
        }),
        None => false,
    });

    Relaxation {
        distances,
        predecessors,
        negative_cycle,
    }
}

/// Shortest weighted path from `source` to `target`, allowing negative weights.
///
/// Distinguishes a finite path, an unreachable target (or one not in the
/// graph), and a negative cycle reachable from `source`.
///
/// # Errors
///
/// `UnknownVertex` if `source` is not in the graph.
pub fn bellman_ford<V: Vertex, W: Weight>(
    graph: &Graph<V, W>,
    source: &V,
    target: &V,
) -> Result<BellmanFordOutcome<V, W>> {
    bellman_ford_with_config(graph, source, target, &BellmanFordConfig::default())
}

/// Bellman-Ford with configuration.
pub fn bellman_ford_with_config<V: Vertex, W: Weight>(
    graph: &Graph<V, W>,
    source: &V,
    target: &V,
    config: &BellmanFordConfig,
) -> Result<BellmanFordOutcome<V, W>> {
    let src = graph.require(source)?;
    let relaxation = relax_edges(graph, src, config);

    if relaxation.negative_cycle {
        debug!("bellman-ford: negative cycle reachable from {:?}", source);
        return Ok(BellmanFordOutcome::NegativeCycle);
    }

    let reached = graph
        .index_of(target)
        .and_then(|dst| relaxation.distances[dst].map(|d| (dst, d)));

    match reached {
        Some((dst, distance)) => {
            let path = reconstruct_path(graph, &relaxation.predecessors, src, dst);
            debug!(
                "bellman-ford: {:?} -> {:?} distance {:?} in {} hops",
                source,
                target,
                distance,
                path.len()
            );
            Ok(BellmanFordOutcome::Path(ShortestPath::new(distance, path)))
        }
        None => {
            debug!("bellman-ford: {:?} unreachable from {:?}", target, source);
            Ok(BellmanFordOutcome::Unreachable)
        }
    }
}

/// Shortest distance from `source` to every reachable vertex.
///
/// Returns `None` if a negative cycle is reachable from `source`.
pub fn bellman_ford_distances<V: Vertex, W: Weight>(
    graph: &Graph<V, W>,
    source: &V,
) -> Result<Option<HashMap<V, W>>> {
    let src = graph.require(source)?;
    let relaxation = relax_edges(graph, src, &BellmanFordConfig::default());

    if relaxation.negative_cycle {
        debug!("bellman-ford: negative cycle reachable from {:?}", source);
        return Ok(None);
    }

    Ok(Some(
        relaxation
            .distances
            .into_iter()
            .enumerate()
            .filter_map(|(idx, d)| d.map(|d| (graph.vertex_at(idx).clone(), d)))
            .collect(),
    ))
}
