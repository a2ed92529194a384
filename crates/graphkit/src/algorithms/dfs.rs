//! Depth-first reachability.
//!
//! Uses an explicit stack instead of recursion, so deep graphs cannot
//! overflow the call stack. Neighbors are pushed in reverse so vertices are
//! visited in the same order a recursive traversal would visit them.

use std::collections::HashSet;

use tracing::debug;

use crate::models::{Graph, Vertex};
use crate::Result;

/// Vertices in depth-first preorder starting at `source`.
///
/// Each reachable vertex appears exactly once; self-loops and revisits are
/// skipped by the visited check.
pub fn dfs_order<V: Vertex, W: Copy>(graph: &Graph<V, W>, source: &V) -> Result<Vec<V>> {
    let start = graph.require(source)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        if visited[node] {
            continue;
        }
        visited[node] = true;
        order.push(graph.vertex_at(node).clone());

        for &(neighbor, _) in graph.adjacency(node).iter().rev() {
            if !visited[neighbor] {
                stack.push(neighbor);
            }
        }
    }

    debug!("dfs from {:?} reached {} vertices", source, order.len());
    Ok(order)
}

/// Set of vertices reachable from `source`, including `source` itself.
pub fn reachable<V: Vertex, W: Copy>(graph: &Graph<V, W>, source: &V) -> Result<HashSet<V>> {
    Ok(dfs_order(graph, source)?.into_iter().collect())
}
