/// Union-Find (Disjoint Sets) data structure for region merging
use crate::error::GridError;

/// A forest of disjoint sets over elements `0..n`, with union-by-size
/// and path compression. Any sequence of m operations on n elements
/// runs in O(m * alpha(n)), effectively constant per operation.
#[derive(Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    num_sets: usize,
}

impl DisjointSet {
    /// Create a new DisjointSet of n singleton sets
    pub fn new(n: usize) -> Self {
        DisjointSet {
            parent: (0..n).collect(),
            size: vec![1; n],
            num_sets: n,
        }
    }

    /// Number of elements in the forest
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of distinct sets currently alive
    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    fn check(&self, x: usize) -> Result<(), GridError> {
        if x < self.parent.len() {
            Ok(())
        } else {
            Err(GridError::IndexOutOfRange {
                index: x,
                len: self.parent.len(),
            })
        }
    }

    /// Find the root of element x with full path compression.
    ///
    /// Iterative on purpose: the classical recursive formulation
    /// recurses once per tree level, and call depth must stay
    /// independent of input size for large grids.
    pub fn find(&mut self, x: usize) -> Result<usize, GridError> {
        self.check(x)?;
        Ok(self.find_root(x))
    }

    /// Unchecked find for ids the crate generated itself.
    pub(crate) fn find_root(&mut self, x: usize) -> usize {
        debug_assert!(x < self.parent.len());
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Second pass: repoint everything on the walked path at the root
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Union the sets containing x and y by size.
    ///
    /// Returns true if two distinct sets were merged, false when x and
    /// y were already connected. On a tie, y's root attaches under x's
    /// root, so the outcome is deterministic.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool, GridError> {
        self.check(x)?;
        self.check(y)?;
        let mut root_x = self.find_root(x);
        let mut root_y = self.find_root(y);

        if root_x == root_y {
            return Ok(false);
        }
        if self.size[root_x] < self.size[root_y] {
            std::mem::swap(&mut root_x, &mut root_y);
        }
        self.parent[root_y] = root_x;
        self.size[root_x] += self.size[root_y];
        self.num_sets -= 1;
        Ok(true)
    }

    /// Check if two elements are in the same set
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool, GridError> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.find_root(x) == self.find_root(y))
    }

    /// Number of elements in the set containing x
    pub fn size_of_set(&mut self, x: usize) -> Result<usize, GridError> {
        let root = self.find(x)?;
        Ok(self.size[root])
    }
}
