//! Drives every algorithm in the crate on small inputs and prints results.
//!
//! Run with: cargo run --example graph_demo

use graph_patterns::{
    bellman_ford, can_finish_courses, clone_graph, count_connected_components, dijkstra,
    has_cycle_directed, has_cycle_undirected, is_bipartite, network_delay_time,
    topological_sort, DiGraph, GraphNode, UnionFind, WeightedDiGraph,
};
use std::rc::Rc;

fn section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {title}");
    println!("{}", "=".repeat(60));
}

fn main() {
    section("Union-Find");
    let mut uf = UnionFind::new(5);
    uf.union(0, 1);
    uf.union(1, 2);
    uf.union(3, 4);
    println!("connected(0, 2) = {}", uf.connected(0, 2));
    println!("connected(0, 3) = {}", uf.connected(0, 3));

    section("Cycle Detection");
    println!(
        "directed [[0,1],[1,2],[2,0]] has cycle: {}",
        has_cycle_directed(3, &[(0, 1), (1, 2), (2, 0)])
    );
    println!(
        "undirected tree [[0,1],[1,2]] has cycle: {}",
        has_cycle_undirected(3, &[(0, 1), (1, 2)])
    );

    section("Topological Sort");
    let dag = DiGraph::from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
    println!("diamond order: {:?}", topological_sort(&dag));
    let cyclic = DiGraph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
    println!("cyclic order:  {:?}", topological_sort(&cyclic));

    section("Course Scheduling");
    println!("courses=2, prereqs=[(1,0)]:       {}", can_finish_courses(2, &[(1, 0)]));
    println!(
        "courses=2, prereqs=[(1,0),(0,1)]: {}",
        can_finish_courses(2, &[(1, 0), (0, 1)])
    );

    section("Connected Components");
    println!(
        "n=5, edges=[[0,1],[1,2],[3,4]]: {} components",
        count_connected_components(5, &[(0, 1), (1, 2), (3, 4)])
    );

    section("Shortest Paths");
    let weighted = WeightedDiGraph::from_edges(3, &[(0, 1, 4), (0, 2, 1), (2, 1, 2)]);
    println!("dijkstra from 0:     {:?}", dijkstra(&weighted, 0));
    println!("bellman-ford from 0: {:?}", bellman_ford(&weighted, 0));
    let negative = WeightedDiGraph::from_edges(3, &[(0, 1, 1), (1, 2, -3), (2, 1, 1)]);
    println!("negative cycle:      {:?}", bellman_ford(&negative, 0));

    section("Bipartiteness");
    let square = vec![vec![1, 3], vec![0, 2], vec![1, 3], vec![0, 2]];
    println!("square is bipartite:   {}", is_bipartite(&square));
    let odd = vec![vec![1, 2, 3], vec![0, 2], vec![0, 1, 3], vec![0, 2]];
    println!("odd wheel is bipartite: {}", is_bipartite(&odd));

    section("Network Delay Time");
    println!(
        "times=[[2,1,1],[2,3,1],[3,4,1]], n=4, k=2: {}",
        network_delay_time(&[(2, 1, 1), (2, 3, 1), (3, 4, 1)], 4, 2)
    );

    section("Graph Clone");
    let a = GraphNode::new(1);
    let b = GraphNode::new(2);
    a.borrow_mut().neighbors.push(Rc::clone(&b));
    b.borrow_mut().neighbors.push(Rc::clone(&a));
    let cloned = clone_graph(Some(&a)).expect("non-empty graph clones to a node");
    println!(
        "cloned node val={}, first neighbor val={}, shares memory with original: {}",
        cloned.borrow().val,
        cloned.borrow().neighbors[0].borrow().val,
        Rc::ptr_eq(&a, &cloned)
    );

    section("Snapshot");
    let json = dag.to_json();
    println!("diamond as JSON: {json}");
    let restored = DiGraph::from_json(&json).expect("snapshot we just wrote is valid");
    println!("restored edge count: {}", restored.edge_count());
}
