// src/graph/digraph.rs

use std::collections::{BTreeSet, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::input::NodeId;

/// Payload stored for every node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: NodeId,
    /// Display label; when absent the id is drawn instead.
    pub label: Option<String>,
}

impl GraphNode {
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(self.id.as_str())
    }
}

/// Directed graph keyed by [`NodeId`].
///
/// Nodes and edges are sets: re-adding a node only updates its label, and
/// re-adding an edge is a no-op. Adding an edge inserts any missing endpoint
/// as an unlabelled node. Iteration follows first-insertion order, so the
/// same sequence of insertions always yields the same graph.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    graph: DiGraph<GraphNode, ()>,
    index: HashMap<NodeId, NodeIndex>,
}

impl DirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, or replace the label of an existing one.
    pub fn add_node(&mut self, id: NodeId, label: Option<String>) -> NodeIndex {
        if let Some(&idx) = self.index.get(&id) {
            if label.is_some() {
                self.graph[idx].label = label;
            }
            return idx;
        }
        let idx = self.graph.add_node(GraphNode {
            id: id.clone(),
            label,
        });
        self.index.insert(id, idx);
        idx
    }

    /// Insert the edge `from -> to` if not already present.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        let a = self.ensure_node(from);
        let b = self.ensure_node(to);
        self.graph.update_edge(a, b, ());
    }

    fn ensure_node(&mut self, id: NodeId) -> NodeIndex {
        match self.index.get(&id) {
            Some(&idx) => idx,
            None => self.add_node(id, None),
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.index.contains_key(&NodeId::from(id))
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        match (
            self.index.get(&NodeId::from(from)),
            self.index.get(&NodeId::from(to)),
        ) {
            (Some(&a), Some(&b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.index
            .get(&NodeId::from(id))
            .map(|&idx| &self.graph[idx])
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.graph.node_weights()
    }

    /// Edges as `(from, to)` id pairs, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> {
        self.graph
            .edge_references()
            .map(|e| (&self.graph[e.source()].id, &self.graph[e.target()].id))
    }

    /// Edges as `(from, to)` positions into [`DirectedGraph::nodes`].
    pub fn edge_positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
    }

    pub fn node_set(&self) -> BTreeSet<NodeId> {
        self.index.keys().cloned().collect()
    }

    pub fn edge_set(&self) -> BTreeSet<(NodeId, NodeId)> {
        self.edges().map(|(a, b)| (a.clone(), b.clone())).collect()
    }

    /// Underlying petgraph graph, for algorithms (layout, cycle checks).
    pub fn inner(&self) -> &DiGraph<GraphNode, ()> {
        &self.graph
    }
}
