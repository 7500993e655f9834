// src/input/model.rs

use std::collections::HashMap;
use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// Identifier of a node in the rendered graph.
///
/// Tree snapshots may carry either integer or string ids; both are stored in
/// their textual form, so `1` and `"1"` refer to the same node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            UInt(u64),
            Str(String),
        }

        match RawId::deserialize(deserializer) {
            Ok(RawId::Int(n)) => Ok(NodeId(n.to_string())),
            Ok(RawId::UInt(n)) => Ok(NodeId(n.to_string())),
            Ok(RawId::Str(s)) => Ok(NodeId(s)),
            Err(_) => Err(de::Error::custom(
                "node id must be a string or an integer",
            )),
        }
    }
}

/// One node of an AVL tree snapshot.
///
/// ```json
/// { "id": 1, "name": "A", "left": null, "right": { "id": 2, "name": "B" } }
/// ```
///
/// A missing `left` / `right` key is the same as `null`. Any balancing
/// metadata in the snapshot (e.g. `height`) is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TreeNode {
    pub id: NodeId,
    pub name: String,
    #[serde(default)]
    pub left: Option<Box<TreeNode>>,
    #[serde(default)]
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn leaf(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            left: None,
            right: None,
        }
    }

    /// Children in drawing order: left first, then right.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &TreeNode> {
        self.left.iter().chain(self.right.iter()).map(|b| &**b)
    }
}

/// Event name -> list of events it depends on.
///
/// Entries keep the order in which they appear in the JSON document. An event
/// that is inserted again keeps its first position but takes the newer
/// dependency list, the way a JSON object with a repeated key reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventMap {
    entries: Vec<(String, Vec<String>)>,
    positions: HashMap<String, usize>,
}

impl EventMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, event: impl Into<String>, dependencies: Vec<String>) {
        let event = event.into();
        match self.positions.get(&event) {
            Some(&at) => self.entries[at].1 = dependencies,
            None => {
                self.positions.insert(event.clone(), self.entries.len());
                self.entries.push((event, dependencies));
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(event, deps)| (event.as_str(), deps.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E, D> FromIterator<(E, D)> for EventMap
where
    E: Into<String>,
    D: IntoIterator,
    D::Item: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (E, D)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (event, deps) in iter {
            map.insert(event, deps.into_iter().map(Into::into).collect());
        }
        map
    }
}

impl<'de> Deserialize<'de> for EventMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EventMapVisitor;

        impl<'de> Visitor<'de> for EventMapVisitor {
            type Value = EventMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping event names to lists of dependency names")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = EventMap::new();
                while let Some((event, deps)) = access.next_entry::<String, Vec<String>>()? {
                    map.insert(event, deps);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(EventMapVisitor)
    }
}
