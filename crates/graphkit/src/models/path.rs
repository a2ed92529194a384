//! Path results and predecessor-map reconstruction.

use super::graph::{Graph, Vertex};

/// Shortest path found by a weighted search.
///
/// `path` lists the vertices after the source, ending at the target; it is
/// empty when source and target are the same vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<V, W> {
    /// Total weight of the path.
    pub distance: W,
    /// Vertices from the first hop to the target.
    pub path: Vec<V>,
}

impl<V, W> ShortestPath<V, W> {
    /// Create a new shortest path result.
    pub fn new(distance: W, path: Vec<V>) -> Self {
        Self { distance, path }
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.path.len()
    }

    /// Split into `(distance, path)`.
    pub fn into_parts(self) -> (W, Vec<V>) {
        (self.distance, self.path)
    }
}

/// Walk a predecessor map back from `target` to `source`.
///
/// `predecessors[source]` is expected to be `source` itself. The walk is
/// iterative and capped at one step per vertex, so a malformed chain cannot
/// loop forever.
pub(crate) fn reconstruct_path<V: Vertex, W: Copy>(
    graph: &Graph<V, W>,
    predecessors: &[Option<usize>],
    source: usize,
    target: usize,
) -> Vec<V> {
    let mut path = Vec::new();
    let mut current = target;

    for _ in 0..predecessors.len() {
        if current == source {
            break;
        }
        path.push(graph.vertex_at(current).clone());
        match predecessors[current] {
            Some(prev) => current = prev,
            None => break,
        }
    }

    path.reverse();
    path
}
