//! Union-Find (Disjoint Set Union).
//!
//! Tracks a partition of `0..n` into disjoint sets with near-constant-time
//! union and find. Path compression re-points every node on a find path
//! directly at the discovered root; union by rank keeps trees shallow. The
//! combination gives the inverse-Ackermann amortized bound.

/// Disjoint-set forest over elements `0..n`.
///
/// `parent[x] == x` iff `x` is the representative of its set. Indices out of
/// `0..n` are a caller precondition; they panic on the Vec access rather
/// than being checked.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// Create `n` singleton sets.
    pub fn new(n: usize) -> UnionFind {
        UnionFind {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Representative of the set containing `x`, with full path compression.
    ///
    /// Iterative: walk to the root, then re-point every node on the walked
    /// path directly at it. No recursion, so find depth never threatens the
    /// call stack.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets containing `x` and `y`.
    ///
    /// Returns `false` if they were already in the same set, which callers
    /// read as "this edge would close a cycle". The lower-rank root attaches
    /// under the higher; on a tie, `y`'s root attaches under `x`'s root and
    /// that root's rank increments.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        if self.rank[root_x] < self.rank[root_y] {
            self.parent[root_x] = root_y;
        } else if self.rank[root_x] > self.rank[root_y] {
            self.parent[root_y] = root_x;
        } else {
            self.parent[root_y] = root_x;
            self.rank[root_x] += 1;
        }
        true
    }

    /// Whether `x` and `y` are in the same set.
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the structure tracks zero elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
