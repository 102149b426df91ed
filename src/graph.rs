//! Core graph representations: unweighted and weighted directed graphs
//! over integer-labeled nodes `0..n`, backed by adjacency lists.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Directed graph over nodes `0..n` with forward and reverse adjacency lists.
///
/// Edges form a multiset: adding the same edge twice keeps both copies, so
/// edge-list semantics survive the conversion (in-degree counting and the
/// union scan both see every input edge).
#[derive(Debug, Clone)]
pub struct DiGraph {
    /// Forward adjacency: adj[u] = nodes that u points to, in insertion order.
    adj: Vec<Vec<usize>>,

    /// Reverse adjacency: rev_adj[v] = nodes pointing to v.
    rev_adj: Vec<Vec<usize>>,

    /// Total number of edges.
    edge_count: usize,
}

/// Serializable graph snapshot for import/export.
#[derive(Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub node_count: usize,
    pub edges: Vec<(usize, usize)>,
}

/// Errors from snapshot import.
///
/// Snapshots cross a serialization boundary, so out-of-range edges are
/// reported instead of being left as a caller precondition.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("edge ({from}, {to}) references a node outside 0..{node_count}")]
    EdgeOutOfRange {
        from: usize,
        to: usize,
        node_count: usize,
    },
}

impl DiGraph {
    /// Create a graph with `n` nodes and no edges.
    pub fn new(n: usize) -> DiGraph {
        DiGraph {
            adj: vec![Vec::new(); n],
            rev_adj: vec![Vec::new(); n],
            edge_count: 0,
        }
    }

    /// Build a graph from an edge list. Edge endpoints must lie in `0..n`.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> DiGraph {
        let mut graph = DiGraph::new(n);
        for &(u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Append a fresh node, returning its index.
    pub fn add_node(&mut self) -> usize {
        let idx = self.adj.len();
        self.adj.push(Vec::new());
        self.rev_adj.push(Vec::new());
        idx
    }

    /// Add a directed edge `from -> to`. Endpoints must be valid indices.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        self.adj[from].push(to);
        self.rev_adj[to].push(from);
        self.edge_count += 1;
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Out-degree of a node.
    pub fn out_degree(&self, node: usize) -> usize {
        self.adj.get(node).map_or(0, |v| v.len())
    }

    /// In-degree of a node.
    pub fn in_degree(&self, node: usize) -> usize {
        self.rev_adj.get(node).map_or(0, |v| v.len())
    }

    /// Successors of a node, in edge-insertion order.
    pub fn successors(&self, node: usize) -> &[usize] {
        self.adj.get(node).map_or(&[], |v| v.as_slice())
    }

    /// Predecessors of a node.
    pub fn predecessors(&self, node: usize) -> &[usize] {
        self.rev_adj.get(node).map_or(&[], |v| v.as_slice())
    }

    /// Iterate over all edges as `(from, to)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(from, tos)| tos.iter().map(move |&to| (from, to)))
    }

    /// Export the graph as a JSON snapshot.
    pub fn to_json(&self) -> String {
        let snapshot = GraphSnapshot {
            node_count: self.node_count(),
            edges: self.edges().collect(),
        };
        serde_json::to_string(&snapshot).unwrap_or_default()
    }

    /// Import a graph from a JSON snapshot.
    pub fn from_json(json: &str) -> Result<DiGraph, SnapshotError> {
        let snapshot: GraphSnapshot = serde_json::from_str(json)?;

        let n = snapshot.node_count;
        for &(from, to) in &snapshot.edges {
            if from >= n || to >= n {
                return Err(SnapshotError::EdgeOutOfRange {
                    from,
                    to,
                    node_count: n,
                });
            }
        }
        Ok(DiGraph::from_edges(n, &snapshot.edges))
    }
}

/// Directed graph over nodes `0..n` with `i64` edge weights.
///
/// Keeps both an adjacency list (for heap-based traversal) and the flat edge
/// list (Bellman-Ford relaxes every edge per pass). Weights may be negative;
/// individual algorithms state their own weight preconditions.
#[derive(Debug, Clone)]
pub struct WeightedDiGraph {
    /// adj[u] = (target, weight) pairs in insertion order.
    adj: Vec<Vec<(usize, i64)>>,

    /// Flat edge list in insertion order.
    edges: Vec<(usize, usize, i64)>,
}

impl WeightedDiGraph {
    /// Create a graph with `n` nodes and no edges.
    pub fn new(n: usize) -> WeightedDiGraph {
        WeightedDiGraph {
            adj: vec![Vec::new(); n],
            edges: Vec::new(),
        }
    }

    /// Build a graph from a weighted edge list. Endpoints must lie in `0..n`.
    pub fn from_edges(n: usize, edges: &[(usize, usize, i64)]) -> WeightedDiGraph {
        let mut graph = WeightedDiGraph::new(n);
        for &(u, v, w) in edges {
            graph.add_edge(u, v, w);
        }
        graph
    }

    /// Add a directed edge `from -> to` with the given weight.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: i64) {
        self.adj[from].push((to, weight));
        self.edges.push((from, to, weight));
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Weighted successors of a node.
    pub fn successors(&self, node: usize) -> &[(usize, i64)] {
        self.adj.get(node).map_or(&[], |v| v.as_slice())
    }

    /// The flat edge list, in insertion order.
    pub fn edge_list(&self) -> &[(usize, usize, i64)] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_graph() {
        let g = DiGraph::new(3);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_add_node() {
        let mut g = DiGraph::new(0);
        assert_eq!(g.add_node(), 0);
        assert_eq!(g.add_node(), 1);
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn test_duplicate_edges_kept() {
        let mut g = DiGraph::new(2);
        g.add_edge(0, 1);
        g.add_edge(0, 1);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.successors(0), &[1, 1]);
    }

    #[test]
    fn test_degrees() {
        let g = DiGraph::from_edges(3, &[(0, 1), (0, 2), (1, 2)]);

        assert_eq!(g.out_degree(0), 2);
        assert_eq!(g.out_degree(1), 1);
        assert_eq!(g.out_degree(2), 0);

        assert_eq!(g.in_degree(0), 0);
        assert_eq!(g.in_degree(1), 1);
        assert_eq!(g.in_degree(2), 2);
    }

    #[test]
    fn test_edges_iterator() {
        let g = DiGraph::from_edges(3, &[(0, 1), (1, 2)]);
        let edges: Vec<(usize, usize)> = g.edges().collect();
        assert_eq!(edges, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_json_roundtrip() {
        let g = DiGraph::from_edges(3, &[(0, 1), (1, 2)]);

        let json = g.to_json();
        let g2 = DiGraph::from_json(&json).unwrap();

        assert_eq!(g2.node_count(), 3);
        assert_eq!(g2.edge_count(), 2);
        assert_eq!(g2.successors(0), &[1]);
        assert_eq!(g2.successors(1), &[2]);
    }

    #[test]
    fn test_json_rejects_out_of_range_edge() {
        let json = r#"{"node_count":2,"edges":[[0,5]]}"#;
        match DiGraph::from_json(json) {
            Err(SnapshotError::EdgeOutOfRange { from, to, node_count }) => {
                assert_eq!((from, to, node_count), (0, 5, 2));
            }
            other => panic!("expected EdgeOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_json_rejects_malformed_input() {
        assert!(matches!(
            DiGraph::from_json("not json"),
            Err(SnapshotError::Json(_))
        ));
    }

    #[test]
    fn test_weighted_graph() {
        let g = WeightedDiGraph::from_edges(3, &[(0, 1, 4), (0, 2, 1), (2, 1, -2)]);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.successors(0), &[(1, 4), (2, 1)]);
        assert_eq!(g.edge_list()[2], (2, 1, -2));
    }
}
