// src/graph/mod.rs

//! Directed graph construction.
//!
//! - [`digraph`] holds the set-semantics directed graph shared by both
//!   pipelines.
//! - [`tree`] turns a tree snapshot into a graph.
//! - [`events`] turns an event dependency map into a graph, plus cycle checks.
//!
//! Builders are pure: they take the decoded input and return a fresh graph.

pub mod digraph;
pub mod events;
pub mod tree;

pub use digraph::{DirectedGraph, GraphNode};
pub use events::{build_event_graph, ensure_acyclic, warn_if_cyclic};
pub use tree::build_tree_graph;
