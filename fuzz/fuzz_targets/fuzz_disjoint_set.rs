//! Fuzz target for Disjoint-Set operations.
//!
//! Runs random union/find sequences against a naive label-per-element model
//! to verify the partition invariant.

#![no_main]

use arbitrary::Arbitrary;
use graphkit::{DisjointSet, GraphError};
use libfuzzer_sys::fuzz_target;

/// Operations that can be performed on the disjoint set.
#[derive(Debug, Arbitrary)]
enum SetOp {
    /// Merge the sets of two elements.
    Union { x: u8, y: u8 },
    /// Look up a representative.
    Find { x: u8 },
    /// Compare two elements.
    Connected { x: u8, y: u8 },
}

/// Fuzz input: set size and operation sequence.
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    size: u8,
    ops: Vec<SetOp>,
}

fuzz_target!(|input: FuzzInput| {
    if input.ops.len() > 1000 {
        return;
    }

    let n = input.size as usize;
    let mut set = DisjointSet::new(n);
    // label[i] = id of i's set in the naive model
    let mut label: Vec<usize> = (0..n).collect();

    for op in &input.ops {
        match *op {
            SetOp::Union { x, y } => {
                let (x, y) = (x as usize, y as usize);
                match set.union(x, y) {
                    Ok(merged) => {
                        assert_eq!(merged, label[x] != label[y]);
                        let (from, to) = (label[x], label[y]);
                        for l in label.iter_mut() {
                            if *l == from {
                                *l = to;
                            }
                        }
                    }
                    Err(GraphError::IndexOutOfRange { .. }) => assert!(x >= n || y >= n),
                    Err(e) => panic!("unexpected error: {}", e),
                }
            }
            SetOp::Find { x } => {
                let x = x as usize;
                match set.find(x) {
                    Ok(root) => {
                        assert!(root < n);
                        assert_eq!(label[root], label[x]);
                        // Representative is stable and is its own representative
                        assert_eq!(set.find(root).unwrap(), root);
                    }
                    Err(_) => assert!(x >= n),
                }
            }
            SetOp::Connected { x, y } => {
                let (x, y) = (x as usize, y as usize);
                if x < n && y < n {
                    assert_eq!(set.connected(x, y).unwrap(), label[x] == label[y]);
                } else {
                    assert!(set.connected(x, y).is_err());
                }
            }
        }
    }

    let distinct: std::collections::HashSet<usize> = label.iter().copied().collect();
    assert_eq!(set.num_sets(), distinct.len());
});
