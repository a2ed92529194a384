//! Kruskal's minimum spanning tree.
//!
//! Sorts the edges by weight and greedily keeps every edge whose endpoints
//! are not yet connected, using a [`DisjointSet`] as the connectivity test.
//!
//! # Preconditions
//!
//! Vertices are numbered `0..n`. Edges are undirected, and for two vertices
//! v and w only one of (v, w) or (w, v) appears. A disconnected input yields
//! a minimum spanning forest with fewer than n-1 edges, which is not an error.

use std::cmp::Ordering;

use tracing::debug;

use super::disjoint_set::DisjointSet;
use crate::models::Weight;
use crate::Result;

/// Undirected weighted edge between two vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MstEdge<W> {
    /// Edge weight.
    pub weight: W,
    /// First endpoint.
    pub source: usize,
    /// Second endpoint.
    pub target: usize,
}

impl<W> MstEdge<W> {
    /// Create a new edge of the given weight between `source` and `target`.
    pub fn new(weight: W, source: usize, target: usize) -> Self {
        Self {
            weight,
            source,
            target,
        }
    }
}

impl<W: Weight> MstEdge<W> {
    /// Ascending by weight, ties broken by (source, target).
    fn sort_order(&self, other: &Self) -> Ordering {
        self.weight
            .cmp_weight(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

/// Minimum spanning tree of an undirected graph on vertices `0..n`.
///
/// The result is sorted ascending by weight and has exactly n-1 edges when
/// the graph is connected.
///
/// # Errors
///
/// `IndexOutOfRange` if an edge endpoint is not below `n`.
pub fn kruskal_mst<W: Weight>(n: usize, edges: &[MstEdge<W>]) -> Result<Vec<MstEdge<W>>> {
    let mut sorted = edges.to_vec();
    sorted.sort_by(|a, b| a.sort_order(b));

    let wanted = n.saturating_sub(1);
    let mut set = DisjointSet::new(n);
    let mut tree = Vec::with_capacity(wanted);

    for edge in sorted {
        if set.find(edge.source)? != set.find(edge.target)? {
            tree.push(edge);
            if tree.len() == wanted {
                break;
            }
            set.union(edge.source, edge.target)?;
        }
    }

    debug!("kruskal: accepted {} of {} edges", tree.len(), wanted);
    if tree.len() < wanted {
        debug!("kruskal: input is disconnected, returning a spanning forest");
    }
    Ok(tree)
}

/// Total weight of a set of edges, or `None` if the sum overflows `W`.
pub fn mst_weight<W: Weight>(edges: &[MstEdge<W>]) -> Option<W> {
    edges
        .iter()
        .try_fold(W::zero(), |total, edge| total.checked_add(edge.weight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphError;

    #[test]
    fn test_single_vertex_graph() {
        let edges: Vec<MstEdge<i64>> = Vec::new();
        assert!(kruskal_mst(1, &edges).unwrap().is_empty());
    }

    #[test]
    fn test_single_edge_graph() {
        let edges = vec![MstEdge::new(10, 0, 1)];
        assert_eq!(kruskal_mst(2, &edges).unwrap(), edges);
    }

    #[test]
    fn test_cycle_5() {
        let edges = vec![
            MstEdge::new(50, 0, 1),
            MstEdge::new(30, 1, 2),
            MstEdge::new(60, 2, 3),
            MstEdge::new(20, 3, 4),
            MstEdge::new(10, 4, 0),
        ];

        // Everything except the heaviest edge, sorted by weight
        assert_eq!(
            kruskal_mst(5, &edges).unwrap(),
            vec![
                MstEdge::new(10, 4, 0),
                MstEdge::new(20, 3, 4),
                MstEdge::new(30, 1, 2),
                MstEdge::new(50, 0, 1),
            ]
        );
    }

    #[test]
    fn test_complete_graph_4() {
        let edges = vec![
            MstEdge::new(10, 0, 1),
            MstEdge::new(30, 0, 2),
            MstEdge::new(40, 0, 3),
            MstEdge::new(20, 1, 2),
            MstEdge::new(50, 1, 3),
            MstEdge::new(60, 2, 3),
        ];

        let tree = kruskal_mst(4, &edges).unwrap();
        assert_eq!(
            tree,
            vec![
                MstEdge::new(10, 0, 1),
                MstEdge::new(20, 1, 2),
                MstEdge::new(40, 0, 3),
            ]
        );
        assert_eq!(mst_weight(&tree), Some(70));
    }

    #[test]
    fn test_ties_broken_by_endpoints() {
        // Triangle with equal weights: (0, 1) and (0, 2) sort first
        let edges = vec![
            MstEdge::new(5, 1, 2),
            MstEdge::new(5, 0, 2),
            MstEdge::new(5, 0, 1),
        ];
        assert_eq!(
            kruskal_mst(3, &edges).unwrap(),
            vec![MstEdge::new(5, 0, 1), MstEdge::new(5, 0, 2)]
        );
    }

    #[test]
    fn test_disconnected_gives_forest() {
        // {0, 1} and {2, 3} with no edge between them
        let edges = vec![MstEdge::new(3, 0, 1), MstEdge::new(1, 2, 3)];
        let forest = kruskal_mst(4, &edges).unwrap();

        assert_eq!(forest.len(), 2);
        assert_eq!(forest, vec![MstEdge::new(1, 2, 3), MstEdge::new(3, 0, 1)]);
    }

    #[test]
    fn test_float_weights() {
        let edges = vec![
            MstEdge::new(2.5, 0, 1),
            MstEdge::new(0.5, 1, 2),
            MstEdge::new(1.0, 0, 2),
        ];
        let tree = kruskal_mst(3, &edges).unwrap();
        assert_eq!(mst_weight(&tree), Some(1.5));
    }

    #[test]
    fn test_mst_weight_overflow() {
        let edges: Vec<MstEdge<u8>> = vec![MstEdge::new(200, 0, 1), MstEdge::new(100, 1, 2)];
        let tree = kruskal_mst(3, &edges).unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(mst_weight(&tree), None);
        assert_eq!(mst_weight(&tree[..1]), Some(200));
    }

    #[test]
    fn test_out_of_range_endpoint() {
        let edges = vec![MstEdge::new(1, 0, 9)];
        assert!(matches!(
            kruskal_mst(3, &edges),
            Err(GraphError::IndexOutOfRange { index: 9, len: 3 })
        ));
    }

    #[test]
    fn test_empty_graph() {
        let edges: Vec<MstEdge<u32>> = Vec::new();
        assert!(kruskal_mst(0, &edges).unwrap().is_empty());
    }
}
