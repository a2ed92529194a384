//! Graph algorithm primitives over adjacency-list graphs.
//!
//! This crate provides the classic single-machine graph algorithms on a
//! shared, insertion-ordered graph model. It includes:
//!
//! - **Graph**: Vertex -> ordered outgoing edges, generic over vertex and weight
//! - **Disjoint-Set**: Union-find with path compression
//! - **DFS**: Reachable set from a source
//! - **BFS**: Fewest-edges path between two vertices
//! - **Dijkstra**: Shortest weighted path for non-negative weights
//! - **Bellman-Ford**: Shortest weighted path with negative-cycle detection
//! - **Kahn**: Topological positions of a DAG
//! - **Kruskal**: Minimum spanning tree (or forest)
//!
//! # Example
//!
//! ```
//! use graphkit::{bfs, dijkstra, Graph};
//!
//! // 0 -> 1 -> 2, plus a long direct edge 0 -> 2
//! let mut graph: Graph<u32> = Graph::new();
//! graph.add_weighted_edge(0, 1, 10);
//! graph.add_weighted_edge(1, 2, 10);
//! graph.add_weighted_edge(0, 2, 30);
//!
//! assert_eq!(bfs(&graph, &0, &2).unwrap(), Some(vec![2]));
//!
//! let shortest = dijkstra(&graph, &0, &2).unwrap().unwrap();
//! assert_eq!(shortest.distance, 20);
//! assert_eq!(shortest.path, vec![1, 2]);
//! ```

pub mod algorithms;
pub mod models;

// Re-export main types
pub use algorithms::bellman_ford::{
    bellman_ford, bellman_ford_distances, bellman_ford_with_config, BellmanFordConfig,
    BellmanFordOutcome,
};
pub use algorithms::bfs::{bfs, bfs_with_config, BfsConfig};
pub use algorithms::dfs::{dfs_order, reachable};
pub use algorithms::dijkstra::{dijkstra, dijkstra_with_config, shortest_distances, DijkstraConfig};
pub use algorithms::disjoint_set::DisjointSet;
pub use algorithms::kahn::{kahn_topological_order, topological_sort};
pub use algorithms::kruskal::{kruskal_mst, mst_weight, MstEdge};
pub use models::graph::{Edge, Graph, Vertex, Weight};
pub use models::path::ShortestPath;

/// Commonly used types and algorithms.
pub mod prelude {
    pub use crate::algorithms::*;
    pub use crate::models::*;
    pub use crate::{GraphError, Result};
}

/// Graph algorithm error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Disjoint-set index outside `[0, len)`.
    #[error("Index {index} out of range for disjoint set of size {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Source vertex is not part of the graph.
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    /// Topological sort could not order every vertex.
    #[error("Cycle detected: only {ordered} of {total} vertices could be ordered")]
    CycleDetected { ordered: usize, total: usize },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
