//! Kahn's topological ordering.
//!
//! Builds a doubly-linked view (incoming and outgoing sets per vertex) of the
//! outgoing-only graph, then peels vertices layer by layer as their incoming
//! sets empty out. Every vertex gets a position such that each edge goes from
//! a lower to a higher position; vertices sharing a position are unordered
//! with respect to each other.
//!
//! # Preconditions
//!
//! The graph must be a DAG. On a graph with a cycle, cycle members (and
//! everything downstream of them) never reach zero in-degree and are silently
//! left out of the result. [`topological_sort`] turns that partial coverage
//! into an error.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::models::{Graph, Vertex};
use crate::{GraphError, Result};

/// Incoming and outgoing neighbor sets of one vertex.
#[derive(Debug, Default)]
struct LinkedVertex {
    incoming: HashSet<usize>,
    /// Distinct outgoing neighbors, in first-seen edge order.
    outgoing: Vec<usize>,
}

fn doubly_linked<V: Vertex, W: Copy>(graph: &Graph<V, W>) -> Vec<LinkedVertex> {
    let n = graph.vertex_count();
    let mut linked: Vec<LinkedVertex> = (0..n).map(|_| LinkedVertex::default()).collect();

    for node in 0..n {
        let mut seen = HashSet::new();
        for &(neighbor, _) in graph.adjacency(node) {
            if seen.insert(neighbor) {
                linked[node].outgoing.push(neighbor);
                linked[neighbor].incoming.insert(node);
            }
        }
    }

    linked
}

fn positions<V: Vertex, W: Copy>(graph: &Graph<V, W>) -> Vec<Option<usize>> {
    let mut linked = doubly_linked(graph);
    let mut position: Vec<Option<usize>> = vec![None; linked.len()];
    let mut queue = VecDeque::new();

    for (node, vertex) in linked.iter().enumerate() {
        if vertex.incoming.is_empty() {
            position[node] = Some(0);
            queue.push_back(node);
        }
    }

    while let Some(node) = queue.pop_front() {
        let next = position[node].map_or(0, |p| p + 1);
        let outgoing = std::mem::take(&mut linked[node].outgoing);
        for neighbor in outgoing {
            let incoming = &mut linked[neighbor].incoming;
            incoming.remove(&node);
            if incoming.is_empty() {
                position[neighbor] = Some(next);
                queue.push_back(neighbor);
            }
        }
    }

    position
}

/// Topological position of every vertex of a DAG.
///
/// Sorting vertices by position yields a valid topological order. Vertices
/// that only appear as edge targets are included. See the module docs for
/// what happens on cyclic input.
pub fn kahn_topological_order<V: Vertex, W: Copy>(graph: &Graph<V, W>) -> HashMap<V, usize> {
    let position = positions(graph);

    let order: HashMap<V, usize> = position
        .into_iter()
        .enumerate()
        .filter_map(|(idx, p)| p.map(|p| (graph.vertex_at(idx).clone(), p)))
        .collect();

    if order.len() < graph.vertex_count() {
        debug!(
            "kahn: ordered {} of {} vertices, input is not a DAG",
            order.len(),
            graph.vertex_count()
        );
    }
    order
}

/// Vertices of a DAG in topological order.
///
/// Vertices are sorted by Kahn position; equal positions keep graph
/// insertion order.
///
/// # Errors
///
/// `CycleDetected` if some vertices could not be ordered.
pub fn topological_sort<V: Vertex, W: Copy>(graph: &Graph<V, W>) -> Result<Vec<V>> {
    let position = positions(graph);

    let mut ordered: Vec<(usize, usize)> = position
        .into_iter()
        .enumerate()
        .filter_map(|(idx, p)| p.map(|p| (p, idx)))
        .collect();

    if ordered.len() < graph.vertex_count() {
        return Err(GraphError::CycleDetected {
            ordered: ordered.len(),
            total: graph.vertex_count(),
        });
    }

    ordered.sort_unstable();
    Ok(ordered
        .into_iter()
        .map(|(_, idx)| graph.vertex_at(idx).clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(entries: &[(u32, usize)]) -> HashMap<u32, usize> {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_single_vertex() {
        let graph: Graph<u32> = Graph::from_adjacency([(0, vec![])]);
        assert_eq!(kahn_topological_order(&graph), order(&[(0, 0)]));
    }

    #[test]
    fn test_total_order_2() {
        let graph: Graph<u32> = Graph::from_adjacency([(0, vec![1]), (1, vec![])]);
        assert_eq!(kahn_topological_order(&graph), order(&[(0, 0), (1, 1)]));
    }

    #[test]
    fn test_total_order_3() {
        let graph: Graph<u32> = Graph::from_adjacency([(0, vec![1]), (1, vec![2]), (2, vec![])]);
        assert_eq!(
            kahn_topological_order(&graph),
            order(&[(0, 0), (1, 1), (2, 2)])
        );
    }

    #[test]
    fn test_two_independent_total_orders() {
        // 0 -> 1 -> 2
        // 3 -> 4 -> 5
        let graph: Graph<u32> = Graph::from_adjacency([
            (0, vec![1]),
            (1, vec![2]),
            (2, vec![]),
            (3, vec![4]),
            (4, vec![5]),
            (5, vec![]),
        ]);
        assert_eq!(
            kahn_topological_order(&graph),
            order(&[(0, 0), (3, 0), (1, 1), (4, 1), (2, 2), (5, 2)])
        );
    }

    #[test]
    fn test_simple_dag() {
        // 0 -> 1 -> 2
        //  \  /
        //   3
        let graph: Graph<u32> =
            Graph::from_adjacency([(0, vec![1, 3]), (1, vec![2]), (2, vec![]), (3, vec![1])]);
        assert_eq!(
            kahn_topological_order(&graph),
            order(&[(0, 0), (3, 1), (1, 2), (2, 3)])
        );
    }

    #[test]
    fn test_implicit_vertices() {
        // "b" and "c" only appear as edge targets
        let graph: Graph<&str> = Graph::from_adjacency([("a", vec!["b", "c"])]);
        let positions = kahn_topological_order(&graph);

        assert_eq!(positions.len(), 3);
        assert_eq!(positions[&"a"], 0);
        assert_eq!(positions[&"b"], 1);
        assert_eq!(positions[&"c"], 1);
    }

    #[test]
    fn test_duplicate_edges() {
        let graph: Graph<u32> = Graph::from_adjacency([(0, vec![1, 1]), (1, vec![])]);
        assert_eq!(kahn_topological_order(&graph), order(&[(0, 0), (1, 1)]));
    }

    #[test]
    fn test_cycle_members_omitted() {
        // 0 -> 1 <-> 2, 2 -> 3
        let graph: Graph<u32> =
            Graph::from_adjacency([(0, vec![1]), (1, vec![2]), (2, vec![1, 3]), (3, vec![])]);
        assert_eq!(kahn_topological_order(&graph), order(&[(0, 0)]));
    }

    #[test]
    fn test_topological_sort() {
        let graph: Graph<u32> =
            Graph::from_adjacency([(0, vec![1, 3]), (1, vec![2]), (2, vec![]), (3, vec![1])]);
        assert_eq!(topological_sort(&graph).unwrap(), vec![0, 3, 1, 2]);
    }

    #[test]
    fn test_topological_sort_ties_keep_insertion_order() {
        let graph: Graph<&str> =
            Graph::from_adjacency([("x", vec!["z"]), ("w", vec!["z"]), ("z", vec![])]);
        assert_eq!(topological_sort(&graph).unwrap(), vec!["x", "w", "z"]);
    }

    #[test]
    fn test_topological_sort_detects_cycle() {
        let graph: Graph<u32> = Graph::from_adjacency([(0, vec![1]), (1, vec![2]), (2, vec![0])]);
        assert_eq!(
            topological_sort(&graph),
            Err(GraphError::CycleDetected {
                ordered: 0,
                total: 3
            })
        );
    }

    #[test]
    fn test_empty_graph() {
        let graph: Graph<u32> = Graph::new();
        assert!(kahn_topological_order(&graph).is_empty());
        assert!(topological_sort(&graph).unwrap().is_empty());
    }
}
