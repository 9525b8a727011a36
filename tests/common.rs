//! Common test utilities for the cpviz test suite.
//!
//! This module provides graph checks shared across test files.

/// Disjoint-set forest with path halving.
pub struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
        }
    }

    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the sets of `a` and `b`. Returns false if they were already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        self.parent[ra] = rb;
        true
    }
}

/// Check that `edges` form a spanning tree on nodes `0..n`: exactly `n - 1`
/// edges, no cycle, one component.
pub fn is_spanning_tree(n: usize, edges: &[(usize, usize)]) -> bool {
    if edges.len() + 1 != n {
        return false;
    }
    let mut uf = UnionFind::new(n);
    for &(u, v) in edges {
        if u >= n || v >= n || !uf.union(u, v) {
            return false;
        }
    }
    let root = uf.find(0);
    (0..n).all(|x| uf.find(x) == root)
}

/// Every sequence of length `len` over `0..base`, in lexicographic order.
pub fn all_sequences(len: usize, base: usize) -> Vec<Vec<usize>> {
    let mut out = vec![Vec::new()];
    for _ in 0..len {
        out = out
            .into_iter()
            .flat_map(|prefix| {
                (0..base).map(move |x| {
                    let mut next = prefix.clone();
                    next.push(x);
                    next
                })
            })
            .collect();
    }
    out
}
