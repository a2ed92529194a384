//! Graph data models.
//!
//! This module provides the core data structures shared by the algorithms:
//! - [`Graph`]: Insertion-ordered adjacency list with [`Edge`]s
//! - [`Vertex`], [`Weight`]: Bounds on vertex identifiers and edge weights
//! - [`ShortestPath`]: Distance plus path returned by the weighted searches

pub mod graph;
pub mod path;

pub use graph::{Edge, Graph, Vertex, Weight};
pub use path::ShortestPath;
