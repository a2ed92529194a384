//! Adjacency-list graph shared by every algorithm.
//!
//! The graph maps each vertex to its ordered sequence of outgoing edges.
//! Vertices are stored in insertion order and addressed internally by a dense
//! index, so algorithms can keep their distance and predecessor maps in plain
//! vectors:
//!
//! - `vertices[i]` = the vertex with index i
//! - `index[v]` = the index of vertex v
//! - `adj[i]` = outgoing `(target index, weight)` pairs of vertex i, in the order added
//!
//! No normalization is performed: parallel edges and self-loops are kept as given.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

use crate::{GraphError, Result};

/// Opaque vertex identifier.
///
/// Implemented for every `Clone + Eq + Hash + Debug` type, so integers,
/// `String` and `&str` all work as vertices.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}

/// Numeric edge weight.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + Debug {
    /// Additive identity (distance from a vertex to itself).
    fn zero() -> Self;

    /// Unit cost of an edge given without a weight.
    fn one() -> Self;

    /// Total order used for priority queues and sorting.
    fn cmp_weight(&self, other: &Self) -> Ordering;

    /// Sum of two weights, or `None` if it does not fit the type.
    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0
                }

                fn one() -> Self {
                    1
                }

                fn cmp_weight(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                fn checked_add(self, other: Self) -> Option<Self> {
                    <$t>::checked_add(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0.0
                }

                fn one() -> Self {
                    1.0
                }

                fn cmp_weight(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }

                fn checked_add(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }
            }
        )*
    };
}

impl_integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_weight!(f32, f64);

/// Outgoing edge: target vertex and weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<V, W> {
    /// Vertex the edge points to.
    pub target: V,
    /// Edge weight.
    pub weight: W,
}

impl<V, W> Edge<V, W> {
    /// Create a new edge.
    pub fn new(target: V, weight: W) -> Self {
        Self { target, weight }
    }
}

/// Directed graph as an insertion-ordered adjacency list.
///
/// The weight type defaults to `i64`; unweighted graphs built with
/// [`Graph::add_edge`] or [`Graph::from_adjacency`] give every edge unit cost.
#[derive(Debug, Clone)]
pub struct Graph<V, W = i64> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    adj: Vec<Vec<(usize, W)>>,
    edge_count: usize,
}

impl<V: Vertex, W: Copy> Default for Graph<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, W: Copy> Graph<V, W> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            adj: Vec::new(),
            edge_count: 0,
        }
    }

    /// Create an empty graph with room for `vertex_capacity` vertices.
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            index: HashMap::with_capacity(vertex_capacity),
            adj: Vec::with_capacity(vertex_capacity),
            edge_count: 0,
        }
    }

    /// Build a graph from `(vertex, [(target, weight), ...])` entries.
    ///
    /// Keys are registered first, in iteration order; targets that never
    /// appear as a key are added afterwards with no outgoing edges.
    pub fn from_weighted_adjacency<I, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = (V, W)>,
    {
        let entries: Vec<(V, N)> = entries.into_iter().collect();
        let mut graph = Self::with_capacity(entries.len());
        for (vertex, _) in &entries {
            graph.add_vertex(vertex.clone());
        }
        for (vertex, edges) in entries {
            for (target, weight) in edges {
                graph.add_weighted_edge(vertex.clone(), target, weight);
            }
        }
        graph
    }

    /// Build a graph from a `(source, target, weight)` edge list.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = Self::new();
        for (source, target, weight) in edges {
            graph.add_weighted_edge(source, target, weight);
        }
        graph
    }

    /// Add a vertex, returning its index. Idempotent.
    pub fn add_vertex(&mut self, vertex: V) -> usize {
        if let Some(&idx) = self.index.get(&vertex) {
            return idx;
        }
        let idx = self.vertices.len();
        self.vertices.push(vertex.clone());
        self.index.insert(vertex, idx);
        self.adj.push(Vec::new());
        idx
    }

    /// Append a weighted edge `source -> target`, registering both endpoints.
    pub fn add_weighted_edge(&mut self, source: V, target: V, weight: W) {
        let src = self.add_vertex(source);
        let dst = self.add_vertex(target);
        self.adj[src].push((dst, weight));
        self.edge_count += 1;
    }

    /// Number of vertices, including target-only vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Check if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check if a vertex is part of the graph.
    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    /// Outgoing edges of a vertex, in the order they were added.
    ///
    /// Yields nothing for a vertex that is not in the graph.
    pub fn edges<'a>(&'a self, vertex: &V) -> impl Iterator<Item = Edge<&'a V, W>> + 'a {
        let outgoing: &'a [(usize, W)] = match self.index_of(vertex) {
            Some(idx) => &self.adj[idx],
            None => &[],
        };
        outgoing
            .iter()
            .map(move |&(dst, weight)| Edge::new(&self.vertices[dst], weight))
    }

    /// Targets of the outgoing edges of a vertex.
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.edges(vertex).map(|edge| edge.target)
    }

    /// Number of outgoing edges of a vertex.
    pub fn out_degree(&self, vertex: &V) -> usize {
        self.index_of(vertex).map_or(0, |idx| self.adj[idx].len())
    }

    /// Check if an edge exists from `source` to `target`.
    pub fn has_edge(&self, source: &V, target: &V) -> bool {
        match self.index_of(target) {
            Some(dst) => self
                .index_of(source)
                .is_some_and(|src| self.adj[src].iter().any(|&(t, _)| t == dst)),
            None => false,
        }
    }

    pub(crate) fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    /// Index of a source vertex, or `UnknownVertex`.
    pub(crate) fn require(&self, vertex: &V) -> Result<usize> {
        self.index_of(vertex)
            .ok_or_else(|| GraphError::UnknownVertex(format!("{:?}", vertex)))
    }

    pub(crate) fn vertex_at(&self, idx: usize) -> &V {
        &self.vertices[idx]
    }

    pub(crate) fn adjacency(&self, idx: usize) -> &[(usize, W)] {
        &self.adj[idx]
    }
}

impl<V: Vertex, W: Weight> Graph<V, W> {
    /// Build an unweighted graph from `(vertex, [target, ...])` entries.
    ///
    /// Every edge gets unit weight.
    pub fn from_adjacency<I, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
    {
        Self::from_weighted_adjacency(entries.into_iter().map(|(vertex, targets)| {
            let edges: Vec<(V, W)> = targets.into_iter().map(|t| (t, W::one())).collect();
            (vertex, edges)
        }))
    }

    /// Append an unweighted (unit cost) edge `source -> target`.
    pub fn add_edge(&mut self, source: V, target: V) {
        self.add_weighted_edge(source, target, W::one());
    }
}
