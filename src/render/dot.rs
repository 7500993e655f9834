// src/render/dot.rs

//! Graphviz DOT export for `--dot`.
//!
//! DOT carries structure only. Graphviz does its own layout, so node
//! positions are not written; the title, labels and colours are.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::errors::{GraphviewError, Result};
use crate::render::{Figure, Renderer};

#[derive(Debug, Clone)]
pub struct DotRenderer {
    pub path: PathBuf,
}

impl DotRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Renderer for DotRenderer {
    fn render(&self, figure: Figure) -> Result<()> {
        fs::write(&self.path, to_dot(&figure)).map_err(|source| GraphviewError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!(
            path = ?self.path,
            nodes = figure.nodes.len(),
            edges = figure.edges.len(),
            "wrote DOT graph"
        );
        Ok(())
    }
}

/// Render `figure` as a Graphviz `digraph`.
///
/// ```text
/// digraph {
///   label="Event Dependency Graph";
///   "build" [label="build"];
///   "deploy" [label="deploy"];
///   "build" -> "deploy";
/// }
/// ```
pub fn to_dot(figure: &Figure) -> String {
    let mut out = String::new();
    // fmt::Write for String never returns an error.
    write_dot(&mut out, figure).unwrap_or_default();
    out
}

fn write_dot(out: &mut impl fmt::Write, figure: &Figure) -> fmt::Result {
    let style = &figure.style;

    writeln!(out, "digraph {{")?;
    writeln!(out, "  label=\"{}\";", escape(&style.title))?;
    writeln!(out, "  labelloc=t;")?;
    writeln!(
        out,
        "  node [shape=circle, style=filled, fillcolor=\"{}\"];",
        style.node_color
    )?;
    writeln!(out, "  edge [color=\"{}\"];", style.edge_color)?;

    for node in &figure.nodes {
        writeln!(
            out,
            "  \"{}\" [label=\"{}\"];",
            escape(&node.id),
            escape(&node.label)
        )?;
    }
    for &(from, to) in &figure.edges {
        writeln!(
            out,
            "  \"{}\" -> \"{}\";",
            escape(&figure.nodes[from].id),
            escape(&figure.nodes[to].id)
        )?;
    }

    writeln!(out, "}}")
}

/// Quote-safe form of `text` for a DOT double-quoted string.
fn escape(text: &str) -> String {
    let mut s = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => s.push_str("\\\""),
            '\\' => s.push_str("\\\\"),
            '\n' => s.push_str("\\n"),
            _ => s.push(c),
        }
    }
    s
}
