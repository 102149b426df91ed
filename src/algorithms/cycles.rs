//! Cycle detection for directed and undirected edge lists.
//!
//! Directed graphs use three-color DFS: a back edge into a node that is
//! still on the traversal stack (gray) closes a cycle. Undirected graphs
//! use Union-Find: an edge whose endpoints are already connected closes one.

use crate::algorithms::union_find::UnionFind;
use crate::graph::DiGraph;

#[derive(Copy, Clone, PartialEq)]
enum Color {
    /// Not yet visited.
    White,
    /// On the current traversal stack.
    Gray,
    /// Fully explored.
    Black,
}

/// Whether the directed graph `(n, edges)` contains a cycle.
///
/// Self-loops count. Every white node is tried as a DFS root, so
/// disconnected components are covered. The DFS runs on an explicit stack;
/// graph diameter never bounds recursion depth.
///
/// O(V + E) time, O(V) space.
pub fn has_cycle_directed(n: usize, edges: &[(usize, usize)]) -> bool {
    let graph = DiGraph::from_edges(n, edges);
    let mut color = vec![Color::White; n];

    for root in 0..n {
        if color[root] != Color::White {
            continue;
        }

        // Frames carry (node, index of the next successor to examine).
        let mut stack = vec![(root, 0_usize)];
        color[root] = Color::Gray;

        while let Some((node, next)) = stack.pop() {
            let successors = graph.successors(node);
            if next < successors.len() {
                let target = successors[next];
                stack.push((node, next + 1));
                match color[target] {
                    Color::Gray => return true, // back edge
                    Color::White => {
                        color[target] = Color::Gray;
                        stack.push((target, 0));
                    }
                    Color::Black => {}
                }
            } else {
                color[node] = Color::Black;
            }
        }
    }

    false
}

/// Whether the undirected graph `(n, edges)` contains a cycle.
///
/// Edges are unioned in input order and are not deduplicated, so a repeated
/// edge between the same pair reads as a cycle. Short-circuits on the first
/// edge whose endpoints were already connected.
///
/// O(E * α(n)) time, O(V) space.
pub fn has_cycle_undirected(n: usize, edges: &[(usize, usize)]) -> bool {
    let mut uf = UnionFind::new(n);

    for &(u, v) in edges {
        if !uf.union(u, v) {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directed_cycle() {
        assert!(has_cycle_directed(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]));
    }

    #[test]
    fn test_directed_acyclic() {
        assert!(!has_cycle_directed(4, &[(0, 1), (1, 2), (2, 3)]));
    }

    #[test]
    fn test_directed_self_loop() {
        assert!(has_cycle_directed(2, &[(0, 0)]));
    }

    #[test]
    fn test_directed_cycle_in_second_component() {
        // 0 -> 1 is clean; the cycle lives in {2, 3}.
        assert!(has_cycle_directed(4, &[(0, 1), (2, 3), (3, 2)]));
    }

    #[test]
    fn test_directed_diamond_is_not_a_cycle() {
        // Two paths to the same node share only black nodes, not gray ones.
        assert!(!has_cycle_directed(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]));
    }

    #[test]
    fn test_directed_empty() {
        assert!(!has_cycle_directed(0, &[]));
        assert!(!has_cycle_directed(3, &[]));
    }

    #[test]
    fn test_directed_long_chain_no_overflow() {
        // Deep path exercises the explicit stack.
        let n = 100_000;
        let edges: Vec<(usize, usize)> = (0..n - 1).map(|i| (i, i + 1)).collect();
        assert!(!has_cycle_directed(n, &edges));
    }

    #[test]
    fn test_undirected_cycle() {
        assert!(has_cycle_undirected(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]));
    }

    #[test]
    fn test_undirected_tree() {
        assert!(!has_cycle_undirected(4, &[(0, 1), (1, 2), (2, 3)]));
    }

    #[test]
    fn test_undirected_duplicate_edge_is_a_cycle() {
        assert!(has_cycle_undirected(2, &[(0, 1), (0, 1)]));
    }

    #[test]
    fn test_undirected_forest() {
        assert!(!has_cycle_undirected(5, &[(0, 1), (2, 3), (3, 4)]));
    }
}
