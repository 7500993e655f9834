// src/errors.rs

//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphviewError {
    /// The input file could not be opened or read.
    #[error("cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file was read but is not valid JSON, or does not have the
    /// expected shape.
    #[error("invalid JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate node id in tree: {0}")]
    DuplicateNodeId(String),

    #[error("Cycle detected in dependency map: {0}")]
    DependencyCycle(String),

    #[error("Style error: {0}")]
    Style(String),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Render error: {0}")]
    Render(String),
}

impl GraphviewError {
    /// True when the failure happened before any content was read.
    pub fn is_io(&self) -> bool {
        matches!(self, GraphviewError::Io { .. })
    }

    /// True when the content was not syntactically valid JSON (including a
    /// truncated document).
    pub fn is_syntax(&self) -> bool {
        match self {
            GraphviewError::Json { source, .. } => source.is_syntax() || source.is_eof(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphviewError>;
