//! Network delay time: how long a signal from one node takes to reach all
//! `n` nodes, following weighted directed travel times.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Time for a signal sent from `k` to reach all `n` nodes, or `-1` if some
/// node is unreachable.
///
/// Dijkstra with a sparse distance map: only visited nodes get entries, so
/// labels need not be dense (the canonical inputs number nodes `1..=n`).
/// The map reaching `n` entries means full coverage; the answer is then the
/// largest distance in it. Stale heap entries are skipped on pop.
///
/// O((V + E) log V) time, O(V + E) space.
pub fn network_delay_time(times: &[(usize, usize, i64)], n: usize, k: usize) -> i64 {
    let mut adj: HashMap<usize, Vec<(usize, i64)>> = HashMap::new();
    for &(u, v, t) in times {
        adj.entry(u).or_default().push((v, t));
    }

    let mut dist: HashMap<usize, i64> = HashMap::from([(k, 0)]);
    let mut heap = BinaryHeap::from([Reverse((0_i64, k))]);

    while let Some(Reverse((time, node))) = heap.pop() {
        if dist.get(&node).map_or(false, |&best| time > best) {
            continue;
        }

        if let Some(neighbors) = adj.get(&node) {
            for &(next, t) in neighbors {
                let candidate = time + t;
                if dist.get(&next).map_or(true, |&best| candidate < best) {
                    dist.insert(next, candidate);
                    heap.push(Reverse((candidate, next)));
                }
            }
        }
    }

    if dist.len() == n {
        dist.values().copied().max().unwrap_or(0)
    } else {
        -1
    }
}
