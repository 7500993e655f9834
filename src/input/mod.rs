// src/input/mod.rs

//! Typed input records and the JSON loader.

pub mod loader;
pub mod model;

pub use loader::{load_events, load_json, load_tree};
pub use model::{EventMap, NodeId, TreeNode};
