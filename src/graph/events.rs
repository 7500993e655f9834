// src/graph/events.rs

use petgraph::algo::toposort;
use tracing::{debug, warn};

use crate::errors::{GraphviewError, Result};
use crate::graph::DirectedGraph;
use crate::input::{EventMap, NodeId};

/// Build the graph of an event dependency map.
///
/// Edge direction: dep -> event. For
///
/// ```json
/// { "deploy": ["build", "test"] }
/// ```
///
/// we add `build -> deploy` and `test -> deploy`.
///
/// Nodes only enter the graph through edges: an event with no dependencies
/// that nothing depends on is left out. Dependencies need not be keys of the
/// map. Cycles are kept as they are; see [`ensure_acyclic`].
pub fn build_event_graph(events: &EventMap) -> DirectedGraph {
    let mut graph = DirectedGraph::new();

    for (event, deps) in events.iter() {
        for dep in deps {
            graph.add_edge(NodeId::from(dep.as_str()), NodeId::from(event));
        }
    }

    for (event, _) in events.iter() {
        if !graph.contains_node(event) {
            debug!(event, "event has no dependency edges; not drawn");
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built event graph"
    );
    graph
}

/// Fail with [`GraphviewError::DependencyCycle`] if the graph has a cycle
/// (self-dependencies included).
pub fn ensure_acyclic(graph: &DirectedGraph) -> Result<()> {
    let inner = graph.inner();
    match toposort(inner, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => {
            let node = &inner[cycle.node_id()].id;
            Err(GraphviewError::DependencyCycle(format!(
                "cycle detected in event dependencies involving event '{}'",
                node
            )))
        }
    }
}

/// Log a warning when the graph is cyclic. Returns whether it was.
pub fn warn_if_cyclic(graph: &DirectedGraph) -> bool {
    match ensure_acyclic(graph) {
        Ok(()) => false,
        Err(err) => {
            warn!(%err, "drawing cyclic dependency map as-is");
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undeclared_dependency_becomes_node() {
        let map: EventMap = [("b", vec!["ghost"])].into_iter().collect();
        let g = build_event_graph(&map);
        assert!(g.contains_node("ghost"));
        assert!(g.contains_edge("ghost", "b"));
    }

    #[test]
    fn isolated_event_is_not_drawn() {
        let map: EventMap = [("lonely", Vec::<&str>::new())].into_iter().collect();
        let g = build_event_graph(&map);
        assert!(g.is_empty());
    }

    #[test]
    fn nodes_are_labelled_with_their_id() {
        let map: EventMap = [("b", vec!["a"])].into_iter().collect();
        let g = build_event_graph(&map);
        let labels: Vec<&str> = g.nodes().map(|n| n.display_label()).collect();
        assert_eq!(labels, vec!["a", "b"]);
    }

    #[test]
    fn self_dependency_is_a_cycle() {
        let map: EventMap = [("a", vec!["a"])].into_iter().collect();
        let g = build_event_graph(&map);
        assert_eq!(g.node_count(), 1);
        assert!(g.contains_edge("a", "a"));
        assert!(ensure_acyclic(&g).is_err());
    }

    #[test]
    fn two_cycle_is_detected_but_built() {
        let map: EventMap = [("a", vec!["b"]), ("b", vec!["a"])].into_iter().collect();
        let g = build_event_graph(&map);
        assert_eq!(g.edge_count(), 2);
        assert!(warn_if_cyclic(&g));
        match ensure_acyclic(&g) {
            Err(GraphviewError::DependencyCycle(msg)) => assert!(msg.contains("cycle detected")),
            other => panic!("expected DependencyCycle, got {other:?}"),
        }
    }

    #[test]
    fn chain_is_acyclic() {
        let map: EventMap = [("b", vec!["a"]), ("c", vec!["b"])].into_iter().collect();
        let g = build_event_graph(&map);
        assert!(ensure_acyclic(&g).is_ok());
        assert!(!warn_if_cyclic(&g));
    }
}
