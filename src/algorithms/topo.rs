//! Topological ordering via Kahn's algorithm, plus the course-scheduling
//! feasibility variant.

use crate::graph::DiGraph;
use std::collections::VecDeque;

/// Topological order of the graph, or `None` if a cycle prevents one.
///
/// Kahn's algorithm: seed a FIFO queue with every zero-in-degree node in
/// ascending id order, then repeatedly dequeue, emit, and decrement
/// successor in-degrees, enqueueing successors that reach zero. If the queue
/// drains before all `n` nodes are emitted, a cycle held the rest back.
///
/// O(V + E) time, O(V) space.
pub fn topological_sort(graph: &DiGraph) -> Option<Vec<usize>> {
    let n = graph.node_count();
    let mut in_degree: Vec<usize> = (0..n).map(|v| graph.in_degree(v)).collect();

    let mut queue: VecDeque<usize> = (0..n).filter(|&v| in_degree[v] == 0).collect();
    let mut order = Vec::with_capacity(n);

    while let Some(node) = queue.pop_front() {
        order.push(node);

        for &next in graph.successors(node) {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                queue.push_back(next);
            }
        }
    }

    if order.len() == n {
        Some(order)
    } else {
        None
    }
}

/// Whether the graph is a directed acyclic graph.
pub fn is_dag(graph: &DiGraph) -> bool {
    topological_sort(graph).is_some()
}

/// Whether all courses can be finished given `(course, prereq)` pairs.
///
/// Same machinery as [`topological_sort`] over the edge set
/// `prereq -> course`; only the dequeue count matters.
pub fn can_finish_courses(num_courses: usize, prerequisites: &[(usize, usize)]) -> bool {
    let mut graph = DiGraph::new(num_courses);
    for &(course, prereq) in prerequisites {
        graph.add_edge(prereq, course);
    }
    topological_sort(&graph).is_some()
}
