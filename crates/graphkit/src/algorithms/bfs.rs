//! Breadth-first search.
//!
//! BFS finds a path with the fewest edges from a source to a target.
//! A predecessor map doubles as the visited set: a vertex is enqueued and
//! assigned a predecessor at most once, so the first time the target is
//! popped the recorded path is shortest in edge count.

use std::collections::VecDeque;

use tracing::debug;

use crate::models::path::reconstruct_path;
use crate::models::{Graph, Vertex};
use crate::Result;

/// BFS configuration.
#[derive(Debug, Clone, Default)]
pub struct BfsConfig {
    /// Maximum number of edges a returned path may have (None = unbounded).
    pub max_depth: Option<usize>,
}

impl BfsConfig {
    /// Create new BFS configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum depth.
    pub fn with_max_depth(mut self, max: usize) -> Self {
        self.max_depth = Some(max);
        self
    }
}

/// Fewest-edges path from `source` to `target`.
///
/// Returns the path excluding `source`, an empty path when `source == target`,
/// and `None` when `target` is unreachable (or not in the graph).
///
/// # Errors
///
/// `UnknownVertex` if `source` is not in the graph.
pub fn bfs<V: Vertex, W: Copy>(
    graph: &Graph<V, W>,
    source: &V,
    target: &V,
) -> Result<Option<Vec<V>>> {
    bfs_with_config(graph, source, target, &BfsConfig::default())
}

/// BFS with configuration.
pub fn bfs_with_config<V: Vertex, W: Copy>(
    graph: &Graph<V, W>,
    source: &V,
    target: &V,
    config: &BfsConfig,
) -> Result<Option<Vec<V>>> {
    let src = graph.require(source)?;
    let Some(dst) = graph.index_of(target) else {
        debug!("bfs: target {:?} not in graph", target);
        return Ok(None);
    };

    let n = graph.vertex_count();
    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    let mut depth = vec![0usize; n];
    let mut queue = VecDeque::new();

    predecessors[src] = Some(src);
    queue.push_back(src);

    while let Some(node) = queue.pop_front() {
        if node == dst {
            let path = reconstruct_path(graph, &predecessors, src, dst);
            debug!("bfs: {:?} -> {:?} in {} hops", source, target, path.len());
            return Ok(Some(path));
        }

        if config.max_depth.is_some_and(|max| depth[node] >= max) {
            continue;
        }

        for &(neighbor, _) in graph.adjacency(node) {
            if predecessors[neighbor].is_none() {
                predecessors[neighbor] = Some(node);
                depth[neighbor] = depth[node] + 1;
                queue.push_back(neighbor);
            }
        }
    }

    debug!("bfs: {:?} unreachable from {:?}", target, source);
    Ok(None)
}
