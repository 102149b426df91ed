//! Bipartiteness check via BFS 2-coloring.

use std::collections::VecDeque;

/// Whether the undirected graph given as an adjacency list is bipartite.
///
/// Each uncolored component is 2-colored by BFS: the seed gets one color,
/// every newly discovered neighbor the opposite of its discoverer. A
/// neighbor already holding the same color as the current node makes the
/// answer false immediately.
///
/// O(V + E) time, O(V) space.
pub fn is_bipartite(adj: &[Vec<usize>]) -> bool {
    let n = adj.len();
    let mut color: Vec<Option<bool>> = vec![None; n];

    for start in 0..n {
        if color[start].is_some() {
            continue;
        }

        color[start] = Some(false);
        let mut queue = VecDeque::from([start]);

        while let Some(node) = queue.pop_front() {
            let node_color = color[node].unwrap_or(false);
            for &neighbor in &adj[node] {
                match color[neighbor] {
                    None => {
                        color[neighbor] = Some(!node_color);
                        queue.push_back(neighbor);
                    }
                    Some(c) if c == node_color => return false,
                    Some(_) => {}
                }
            }
        }
    }

    true
}
