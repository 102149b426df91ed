//! Deep copy of a neighbor-list graph that may contain cycles.
//!
//! Nodes carry an integer value and shared references to their neighbors,
//! so the same node can be reached along many paths. Cloning keys an
//! identity map by pointer (a stable handle), never by node value: distinct
//! nodes may hold equal values.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared handle to a [`GraphNode`].
pub type NodeRef = Rc<RefCell<GraphNode>>;

/// A graph node with an integer value and shared neighbor references.
#[derive(Debug)]
pub struct GraphNode {
    pub val: i32,
    pub neighbors: Vec<NodeRef>,
}

impl GraphNode {
    /// Create a detached node with no neighbors.
    pub fn new(val: i32) -> NodeRef {
        Rc::new(RefCell::new(GraphNode {
            val,
            neighbors: Vec::new(),
        }))
    }
}

fn identity(node: &NodeRef) -> usize {
    Rc::as_ptr(node) as usize
}

/// Deep-copy the graph reachable from `start`.
///
/// Iterative DFS with an original-identity -> clone map. Each original node
/// gets exactly one clone; neighbor wiring goes through the map, so cycles
/// and shared nodes in the original stay cycles and shared nodes in the
/// copy. The clone shares no `Rc` with the original.
pub fn clone_graph(start: Option<&NodeRef>) -> Option<NodeRef> {
    let start = start?;

    let mut clones: HashMap<usize, NodeRef> = HashMap::new();
    clones.insert(identity(start), GraphNode::new(start.borrow().val));

    let mut stack = vec![Rc::clone(start)];

    // Each node is popped exactly once, wiring its full neighbor list.
    while let Some(node) = stack.pop() {
        let clone = Rc::clone(&clones[&identity(&node)]);

        for neighbor in &node.borrow().neighbors {
            let key = identity(neighbor);
            if !clones.contains_key(&key) {
                clones.insert(key, GraphNode::new(neighbor.borrow().val));
                stack.push(Rc::clone(neighbor));
            }
            let neighbor_clone = Rc::clone(&clones[&key]);
            clone.borrow_mut().neighbors.push(neighbor_clone);
        }
    }

    clones.remove(&identity(start))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a graph from an adjacency list; node `i` gets value `i as i32`.
    fn build(adj: &[&[usize]]) -> Vec<NodeRef> {
        let nodes: Vec<NodeRef> = (0..adj.len()).map(|i| GraphNode::new(i as i32)).collect();
        for (i, neighbors) in adj.iter().enumerate() {
            for &j in *neighbors {
                let n = Rc::clone(&nodes[j]);
                nodes[i].borrow_mut().neighbors.push(n);
            }
        }
        nodes
    }

    #[test]
    fn test_clone_none() {
        assert!(clone_graph(None).is_none());
    }

    #[test]
    fn test_clone_single_node() {
        let node = GraphNode::new(7);
        let clone = clone_graph(Some(&node)).unwrap();

        assert_eq!(clone.borrow().val, 7);
        assert!(clone.borrow().neighbors.is_empty());
        assert!(!Rc::ptr_eq(&node, &clone));
    }

    #[test]
    fn test_clone_square_cycle() {
        // 0-1-2-3-0, undirected: every node lists both neighbors.
        let nodes = build(&[&[1, 3], &[0, 2], &[1, 3], &[0, 2]]);
        let clone = clone_graph(Some(&nodes[0])).unwrap();

        assert_eq!(clone.borrow().val, 0);
        let n1 = Rc::clone(&clone.borrow().neighbors[0]);
        assert_eq!(n1.borrow().val, 1);
        let n2 = Rc::clone(&n1.borrow().neighbors[1]);
        assert_eq!(n2.borrow().val, 2);

        // Walking on from 2 must land back on the same clone of 3 that 0
        // already points at, not a second copy.
        let n3_via_2 = Rc::clone(&n2.borrow().neighbors[1]);
        let n3_via_0 = Rc::clone(&clone.borrow().neighbors[1]);
        assert!(Rc::ptr_eq(&n3_via_2, &n3_via_0));
    }

    #[test]
    fn test_clone_shares_nothing_with_original() {
        let nodes = build(&[&[1], &[0]]);
        let clone = clone_graph(Some(&nodes[0])).unwrap();

        assert!(!Rc::ptr_eq(&nodes[0], &clone));
        assert!(!Rc::ptr_eq(
            &nodes[1],
            &clone.borrow().neighbors[0]
        ));

        // Mutating the clone leaves the original untouched.
        clone.borrow_mut().val = 99;
        assert_eq!(nodes[0].borrow().val, 0);
    }

    #[test]
    fn test_clone_self_loop() {
        let node = GraphNode::new(1);
        let self_ref = Rc::clone(&node);
        node.borrow_mut().neighbors.push(self_ref);

        let clone = clone_graph(Some(&node)).unwrap();
        assert!(Rc::ptr_eq(&clone, &clone.borrow().neighbors[0]));
    }

    #[test]
    fn test_clone_equal_values_stay_distinct() {
        // Two distinct nodes with the same value must yield two clones.
        let a = GraphNode::new(5);
        let b = GraphNode::new(5);
        a.borrow_mut().neighbors.push(Rc::clone(&b));
        b.borrow_mut().neighbors.push(Rc::clone(&a));

        let clone = clone_graph(Some(&a)).unwrap();
        let clone_b = Rc::clone(&clone.borrow().neighbors[0]);
        assert!(!Rc::ptr_eq(&clone, &clone_b));
        assert_eq!(clone_b.borrow().val, 5);
    }
}
