use std::collections::BTreeSet;

use graphview::graph::{build_event_graph, build_tree_graph};
use graphview::input::{EventMap, NodeId, TreeNode};
use graphview_test_utils::builders::{count_child_pointers, count_nodes};
use proptest::prelude::*;

// Random tree shapes: insert keys into a binary search tree, skipping
// repeats so ids stay unique.
fn insert(node: &mut Option<Box<TreeNode>>, key: u32) {
    match node {
        None => *node = Some(Box::new(TreeNode::leaf(key.to_string(), format!("n{key}")))),
        Some(n) => {
            let current: u32 = n.id.as_str().parse().unwrap();
            if key < current {
                insert(&mut n.left, key);
            } else if key > current {
                insert(&mut n.right, key);
            }
        }
    }
}

fn tree_strategy() -> impl Strategy<Value = Option<TreeNode>> {
    proptest::collection::vec(0u32..500, 0..60).prop_map(|keys| {
        let mut root = None;
        for key in keys {
            insert(&mut root, key);
        }
        root.map(|b| *b)
    })
}

fn event_map_strategy() -> impl Strategy<Value = EventMap> {
    proptest::collection::vec(
        (0usize..12, proptest::collection::vec(0usize..12, 0..4)),
        0..12,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(event, deps)| {
                (
                    format!("e{event}"),
                    deps.into_iter().map(|d| format!("e{d}")).collect::<Vec<_>>(),
                )
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn tree_counts_match_input(tree in tree_strategy()) {
        let graph = build_tree_graph(tree.as_ref()).unwrap();
        prop_assert_eq!(graph.node_count(), count_nodes(tree.as_ref()));
        prop_assert_eq!(graph.edge_count(), count_child_pointers(tree.as_ref()));
    }

    #[test]
    fn tree_build_is_deterministic(tree in tree_strategy()) {
        let a = build_tree_graph(tree.as_ref()).unwrap();
        let b = build_tree_graph(tree.as_ref()).unwrap();
        prop_assert_eq!(a.node_set(), b.node_set());
        prop_assert_eq!(a.edge_set(), b.edge_set());
    }

    #[test]
    fn event_edges_are_exactly_dependency_pairs(map in event_map_strategy()) {
        let graph = build_event_graph(&map);

        let expected_edges: BTreeSet<(NodeId, NodeId)> = map
            .iter()
            .flat_map(|(event, deps)| {
                deps.iter()
                    .map(move |dep| (NodeId::from(dep.as_str()), NodeId::from(event)))
            })
            .collect();
        let expected_nodes: BTreeSet<NodeId> = expected_edges
            .iter()
            .flat_map(|(a, b)| [a.clone(), b.clone()])
            .collect();

        prop_assert_eq!(graph.edge_set(), expected_edges);
        prop_assert_eq!(graph.node_set(), expected_nodes);
    }

    #[test]
    fn event_build_is_deterministic(map in event_map_strategy()) {
        let a = build_event_graph(&map);
        let b = build_event_graph(&map);
        prop_assert_eq!(a.node_set(), b.node_set());
        prop_assert_eq!(a.edge_set(), b.edge_set());
        let order_a: Vec<String> = a.nodes().map(|n| n.id.to_string()).collect();
        let order_b: Vec<String> = b.nodes().map(|n| n.id.to_string()).collect();
        prop_assert_eq!(order_a, order_b);
    }
}
