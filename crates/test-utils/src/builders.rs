#![allow(dead_code)]

use graphview::input::{EventMap, TreeNode};
use serde_json::{json, Map, Value};

/// Builder for `TreeNode` to simplify test setup.
pub struct TreeNodeBuilder {
    node: TreeNode,
}

impl TreeNodeBuilder {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            node: TreeNode::leaf(id, name),
        }
    }

    pub fn left(mut self, child: TreeNode) -> Self {
        self.node.left = Some(Box::new(child));
        self
    }

    pub fn right(mut self, child: TreeNode) -> Self {
        self.node.right = Some(Box::new(child));
        self
    }

    pub fn build(self) -> TreeNode {
        self.node
    }
}

/// Serialise a tree back into the snapshot JSON shape, with explicit `null`
/// children.
pub fn tree_to_json(node: Option<&TreeNode>) -> Value {
    match node {
        None => Value::Null,
        Some(n) => json!({
            "id": n.id.as_str(),
            "name": n.name,
            "left": tree_to_json(n.left.as_deref()),
            "right": tree_to_json(n.right.as_deref()),
        }),
    }
}

/// Number of non-null nodes in a tree.
pub fn count_nodes(node: Option<&TreeNode>) -> usize {
    match node {
        None => 0,
        Some(n) => 1 + count_nodes(n.left.as_deref()) + count_nodes(n.right.as_deref()),
    }
}

/// Number of non-null child pointers in a tree.
pub fn count_child_pointers(node: Option<&TreeNode>) -> usize {
    match node {
        None => 0,
        Some(n) => {
            n.children().count()
                + count_child_pointers(n.left.as_deref())
                + count_child_pointers(n.right.as_deref())
        }
    }
}

/// Builder for `EventMap`, keeping insertion order.
#[derive(Default)]
pub struct EventMapBuilder {
    entries: Vec<(String, Vec<String>)>,
}

impl EventMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event(mut self, name: &str, deps: &[&str]) -> Self {
        self.entries
            .push((name.to_string(), deps.iter().map(|d| d.to_string()).collect()));
        self
    }

    pub fn build(&self) -> EventMap {
        self.entries.iter().cloned().collect()
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (name, deps) in &self.entries {
            map.insert(name.clone(), json!(deps));
        }
        Value::Object(map)
    }
}
