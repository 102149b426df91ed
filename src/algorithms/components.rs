//! Connected component counting for undirected edge lists.

use crate::algorithms::union_find::UnionFind;

/// Number of connected components in the undirected graph `(n, edges)`.
///
/// Unions every edge, then counts distinct representatives over `0..n`.
/// O(V + E * α(n)).
pub fn count_connected_components(n: usize, edges: &[(usize, usize)]) -> usize {
    let mut uf = UnionFind::new(n);
    for &(u, v) in edges {
        uf.union(u, v);
    }

    let mut roots: Vec<usize> = (0..n).map(|i| uf.find(i)).collect();
    roots.sort_unstable();
    roots.dedup();
    roots.len()
}
