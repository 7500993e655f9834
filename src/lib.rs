// src/lib.rs

pub mod cli;
pub mod errors;
pub mod graph;
pub mod input;
pub mod logging;
pub mod render;

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{CliArgs, Command, RenderArgs};
use crate::graph::{DirectedGraph, build_event_graph, build_tree_graph, ensure_acyclic, warn_if_cyclic};
use crate::input::{load_events, load_tree};
use crate::render::{DotRenderer, Renderer, Style, SvgRenderer, WindowRenderer, draw, resolve_style};

/// High-level entry point used by `main.rs`.
///
/// Each subcommand runs one pipeline start to finish:
/// - load the JSON input
/// - build the directed graph
/// - lay out and draw it (or print it with `--dry-run`)
pub fn run(args: CliArgs) -> Result<()> {
    match args.command {
        Command::Tree(tree) => {
            let graph = tree_graph_from_file(&tree.input)?;
            present(&graph, Style::tree(), &tree.render)
        }
        Command::Events(events) => {
            let graph = event_graph_from_file(&events.input, events.reject_cycles)?;
            present(&graph, Style::events(), &events.render)
        }
    }
}

/// Load a tree snapshot and build its graph.
pub fn tree_graph_from_file(path: &Path) -> errors::Result<DirectedGraph> {
    let root = load_tree(path)?;
    build_tree_graph(root.as_ref())
}

/// Load an event dependency map and build its graph.
///
/// Cyclic maps are drawn as they are (with a warning) unless `reject_cycles`
/// is set, in which case they fail with
/// [`errors::GraphviewError::DependencyCycle`].
pub fn event_graph_from_file(path: &Path, reject_cycles: bool) -> errors::Result<DirectedGraph> {
    let events = load_events(path)?;
    let graph = build_event_graph(&events);
    if reject_cycles {
        ensure_acyclic(&graph)?;
    } else {
        warn_if_cyclic(&graph);
    }
    Ok(graph)
}

fn present(graph: &DirectedGraph, defaults: Style, args: &RenderArgs) -> Result<()> {
    let style = resolve_style(defaults, args.style.as_deref())?;
    info!(
        title = %style.title,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph ready"
    );

    if args.dry_run {
        let stdout = io::stdout();
        write_summary(&mut stdout.lock(), &style.title, graph)?;
        debug!("dry-run complete (nothing drawn)");
        return Ok(());
    }

    let renderer: Box<dyn Renderer> = match (&args.svg, &args.dot) {
        (Some(path), _) => Box::new(SvgRenderer::new(path)),
        (None, Some(path)) => Box::new(DotRenderer::new(path)),
        (None, None) => Box::new(WindowRenderer),
    };
    draw(graph, style, &args.layout_options(), renderer.as_ref())?;
    Ok(())
}

/// Plain-text listing of a graph, as printed by `--dry-run`.
pub fn write_summary(out: &mut impl Write, title: &str, graph: &DirectedGraph) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "nodes ({}):", graph.node_count())?;
    for node in graph.nodes() {
        match &node.label {
            Some(label) if label != node.id.as_str() => {
                writeln!(out, "  - {} [{}]", node.id, label)?
            }
            _ => writeln!(out, "  - {}", node.id)?,
        }
    }
    writeln!(out, "edges ({}):", graph.edge_count())?;
    for (from, to) in graph.edges() {
        writeln!(out, "  - {from} -> {to}")?;
    }
    Ok(())
}
