//! # graph-patterns
//!
//! Classic graph algorithms over integer-labeled nodes `0..n`, each an
//! independent pure function (or a small owned structure) with no shared
//! state between calls.
//!
//! ## Modules
//!
//! - `graph` – Adjacency-list graph types ([`DiGraph`], [`WeightedDiGraph`])
//!   plus JSON snapshot import/export
//! - `algorithms::union_find` – Disjoint Set Union with path compression and
//!   union by rank
//! - `algorithms::cycles` – Cycle detection (directed coloring DFS,
//!   undirected Union-Find)
//! - `algorithms::topo` – Topological sort (Kahn) and course scheduling
//! - `algorithms::components` – Connected component counting
//! - `algorithms::shortest_path` – Dijkstra and Bellman-Ford
//! - `algorithms::bipartite` – 2-colorability check via BFS
//! - `algorithms::network_delay` – Signal propagation time (Dijkstra variant)
//! - `algorithms::clone` – Deep copy of a cyclic neighbor-list graph
//!
//! ## Usage Example
//!
//! ```rust
//! use graph_patterns::{DiGraph, topological_sort};
//!
//! let graph = DiGraph::from_edges(3, &[(0, 1), (1, 2)]);
//! assert_eq!(topological_sort(&graph), Some(vec![0, 1, 2]));
//! ```
//!
//! Failure cases stay in-band: a cyclic graph topo-sorts to `None`, an
//! unreachable node keeps a `None` distance, a negative cycle turns the whole
//! Bellman-Ford table into `None`. The only `Result` in the crate guards the
//! JSON snapshot boundary.

pub mod algorithms;
pub mod graph;

pub use algorithms::bipartite::is_bipartite;
pub use algorithms::clone::{clone_graph, GraphNode, NodeRef};
pub use algorithms::components::count_connected_components;
pub use algorithms::cycles::{has_cycle_directed, has_cycle_undirected};
pub use algorithms::network_delay::network_delay_time;
pub use algorithms::shortest_path::{bellman_ford, dijkstra};
pub use algorithms::topo::{can_finish_courses, is_dag, topological_sort};
pub use algorithms::union_find::UnionFind;
pub use graph::{DiGraph, GraphSnapshot, SnapshotError, WeightedDiGraph};
