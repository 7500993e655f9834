// src/graph/tree.rs

use std::collections::HashSet;

use tracing::debug;

use crate::errors::{GraphviewError, Result};
use crate::graph::DirectedGraph;
use crate::input::{NodeId, TreeNode};

/// Build the graph of a tree snapshot.
///
/// Every tree node becomes a graph node labelled with its `name`; every
/// present child pointer becomes an edge `parent -> child`. `None` yields an
/// empty graph.
///
/// Ids must be unique across the tree. A repeated id would merge two tree
/// nodes into one graph node, so it is reported as
/// [`GraphviewError::DuplicateNodeId`].
pub fn build_tree_graph(root: Option<&TreeNode>) -> Result<DirectedGraph> {
    let mut graph = DirectedGraph::new();
    let mut seen: HashSet<&NodeId> = HashSet::new();
    let mut pending: Vec<(Option<&NodeId>, &TreeNode)> =
        root.into_iter().map(|root| (None, root)).collect();

    // Pre-order walk; right is pushed before left so the left subtree is
    // visited first.
    while let Some((parent, node)) = pending.pop() {
        if !seen.insert(&node.id) {
            return Err(GraphviewError::DuplicateNodeId(node.id.to_string()));
        }
        graph.add_node(node.id.clone(), Some(node.name.clone()));
        if let Some(parent) = parent {
            graph.add_edge(parent.clone(), node.id.clone());
        }
        pending.extend(node.children().rev().map(|child| (Some(&node.id), child)));
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built tree graph"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, name: &str, left: Option<TreeNode>, right: Option<TreeNode>) -> TreeNode {
        TreeNode {
            id: id.into(),
            name: name.into(),
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    #[test]
    fn empty_tree_has_no_nodes() {
        let g = build_tree_graph(None).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn single_node_has_no_edges() {
        let g = build_tree_graph(Some(&TreeNode::leaf("1", "root"))).unwrap();
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.node("1").unwrap().display_label(), "root");
    }

    #[test]
    fn right_only_child_is_linked() {
        let tree = node("1", "A", None, Some(TreeNode::leaf("3", "C")));
        let g = build_tree_graph(Some(&tree)).unwrap();
        assert!(g.contains_edge("1", "3"));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let tree = node(
            "1",
            "A",
            Some(TreeNode::leaf("2", "B")),
            Some(TreeNode::leaf("2", "C")),
        );
        match build_tree_graph(Some(&tree)) {
            Err(GraphviewError::DuplicateNodeId(id)) => assert_eq!(id, "2"),
            other => panic!("expected DuplicateNodeId, got {other:?}"),
        }
    }

    #[test]
    fn left_subtree_is_visited_before_right() {
        let tree = node(
            "1",
            "A",
            Some(node("2", "B", Some(TreeNode::leaf("4", "D")), None)),
            Some(TreeNode::leaf("3", "C")),
        );
        let g = build_tree_graph(Some(&tree)).unwrap();
        let ids: Vec<&str> = g.nodes().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "4", "3"]);
    }
}
