//! Single-source shortest paths: Dijkstra for non-negative weights,
//! Bellman-Ford for graphs that may carry negative weights.
//!
//! Distance tables are `Vec<Option<i64>>`; `None` marks a node the source
//! cannot reach. On graphs with only non-negative weights the two
//! algorithms produce identical tables.

use crate::graph::WeightedDiGraph;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry ordered by cost, inverted so `BinaryHeap` pops the minimum.
#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: i64,
    node: usize,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's algorithm from `start`.
///
/// Weights must be non-negative; this is a precondition, not enforced.
/// Uses a lazy-deletion heap: stale entries (cost above the current best for
/// the node) are skipped on pop instead of being decrease-keyed in place.
///
/// O((V + E) log V) time, O(V + E) space.
pub fn dijkstra(graph: &WeightedDiGraph, start: usize) -> Vec<Option<i64>> {
    let mut dist: Vec<Option<i64>> = vec![None; graph.node_count()];
    let mut heap = BinaryHeap::new();

    dist[start] = Some(0);
    heap.push(State {
        cost: 0,
        node: start,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if dist[node].map_or(false, |best| cost > best) {
            continue; // stale entry
        }

        for &(next, weight) in graph.successors(node) {
            let candidate = cost + weight;
            if dist[next].map_or(true, |best| candidate < best) {
                dist[next] = Some(candidate);
                heap.push(State {
                    cost: candidate,
                    node: next,
                });
            }
        }
    }

    dist
}

/// Bellman-Ford from `start`. Weights may be negative.
///
/// Relaxes every edge over `n - 1` passes (the longest simple path has
/// `n - 1` edges), stopping early once a pass changes nothing. A final
/// detection pass follows: any edge that still relaxes proves a
/// negative-weight cycle reachable from `start`, reported as `None`.
///
/// O(V * E) time, O(V) space.
pub fn bellman_ford(graph: &WeightedDiGraph, start: usize) -> Option<Vec<Option<i64>>> {
    let n = graph.node_count();
    let mut dist: Vec<Option<i64>> = vec![None; n];
    dist[start] = Some(0);

    for _ in 1..n {
        let mut updated = false;

        for &(u, v, w) in graph.edge_list() {
            if let Some(du) = dist[u] {
                let candidate = du + w;
                if dist[v].map_or(true, |best| candidate < best) {
                    dist[v] = Some(candidate);
                    updated = true;
                }
            }
        }

        if !updated {
            break;
        }
    }

    for &(u, v, w) in graph.edge_list() {
        if let Some(du) = dist[u] {
            if dist[v].map_or(true, |best| du + w < best) {
                return None; // negative cycle reachable from start
            }
        }
    }

    Some(dist)
}
