//! Disjoint-Set (Union-Find) data structure.
//!
//! Tracks a partition of the indices `0..n` into disjoint sets.
//! Supports:
//! - `find(x)`: Find the representative of x's set
//! - `union(x, y)`: Merge the sets containing x and y
//!
//! `find` compresses paths, so repeated lookups amortize toward O(1). Unions
//! are not balanced: the representative of x's set is always repointed at the
//! representative of y's set.

use crate::{GraphError, Result};

/// Array-backed union-find forest with path compression.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    /// Parent pointers (parent[i] = parent of i, or i if root).
    parent: Vec<usize>,
    /// Number of disjoint sets.
    num_sets: usize,
}

impl DisjointSet {
    /// Create a disjoint set with n singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            num_sets: n,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    fn check(&self, x: usize) -> Result<()> {
        if x >= self.parent.len() {
            return Err(GraphError::IndexOutOfRange {
                index: x,
                len: self.parent.len(),
            });
        }
        Ok(())
    }

    /// Find the representative of x's set with path compression.
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;

        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Path compression: point every node on the walk directly at the root
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        Ok(root)
    }

    /// Merge the sets containing x and y.
    ///
    /// The representative of x's set is repointed at the representative of
    /// y's set. Returns true if a merge occurred (x and y were in different sets).
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;

        if root_x == root_y {
            return Ok(false);
        }

        self.parent[root_x] = root_y;
        self.num_sets -= 1;
        Ok(true)
    }

    /// Check if two elements are in the same set.
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }
}
