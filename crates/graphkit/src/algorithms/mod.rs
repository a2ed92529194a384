//! Graph algorithms.
//!
//! This module provides the sequential graph algorithms:
//! - [`disjoint_set`]: Union-find with path compression
//! - [`dfs`]: Depth-first reachability
//! - [`bfs`]: Fewest-edges path
//! - [`dijkstra`]: Shortest path, non-negative weights
//! - [`bellman_ford`]: Shortest path, signed weights, negative-cycle detection
//! - [`kahn`]: Topological ordering
//! - [`kruskal`]: Minimum spanning tree

pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod disjoint_set;
pub mod kahn;
pub mod kruskal;

pub use bellman_ford::{
    bellman_ford, bellman_ford_distances, bellman_ford_with_config, BellmanFordConfig,
    BellmanFordOutcome,
};
pub use bfs::{bfs, bfs_with_config, BfsConfig};
pub use dfs::{dfs_order, reachable};
pub use dijkstra::{dijkstra, dijkstra_with_config, shortest_distances, DijkstraConfig};
pub use disjoint_set::DisjointSet;
pub use kahn::{kahn_topological_order, topological_sort};
pub use kruskal::{kruskal_mst, mst_weight, MstEdge};
