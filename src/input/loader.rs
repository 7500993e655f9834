// src/input/loader.rs

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::{GraphviewError, Result};
use crate::input::model::{EventMap, TreeNode};

/// Default input for the tree pipeline, relative to the working directory.
pub const DEFAULT_TREE_PATH: &str = "avl_tree_data.json";

/// Default input for the event pipeline, relative to the working directory.
pub const DEFAULT_EVENTS_PATH: &str = "event_data.json";

/// Read `path` and decode its contents as JSON into `T`.
///
/// The file is fully read and closed before decoding starts. A missing or
/// unreadable file yields [`GraphviewError::Io`]; bad syntax or a value of
/// the wrong shape yields [`GraphviewError::Json`].
///
/// Nesting depth is not limited. Degenerate trees (one long chain of right
/// children) decode no matter how deep they go; the stack grows on the heap
/// as needed.
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| GraphviewError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(?path, bytes = contents.len(), "read input file");

    decode(&contents).map_err(|source| GraphviewError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn decode<T: DeserializeOwned>(contents: &str) -> serde_json::Result<T> {
    let mut de = serde_json::Deserializer::from_str(contents);
    de.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

/// Load a tree snapshot. A document consisting of `null` is an empty tree.
pub fn load_tree(path: impl AsRef<Path>) -> Result<Option<TreeNode>> {
    load_json(path)
}

/// Load an event dependency map.
pub fn load_events(path: impl AsRef<Path>) -> Result<EventMap> {
    load_json(path)
}
