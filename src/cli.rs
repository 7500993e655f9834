// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::input::loader::{DEFAULT_EVENTS_PATH, DEFAULT_TREE_PATH};
use crate::render::LayoutOptions;

/// Command-line arguments for `graphview`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "graphview",
    version,
    about = "Draw an AVL tree snapshot or an event dependency map from JSON.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GRAPHVIEW_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Draw a binary tree snapshot (`{id, name, left, right}` nodes).
    Tree(TreeArgs),
    /// Draw an event dependency map (`{"event": ["dependency", ...]}`).
    Events(EventsArgs),
}

#[derive(Debug, Clone, Args)]
pub struct TreeArgs {
    /// Tree snapshot to read.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_TREE_PATH)]
    pub input: PathBuf,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Debug, Clone, Args)]
pub struct EventsArgs {
    /// Event dependency map to read.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_EVENTS_PATH)]
    pub input: PathBuf,

    /// Fail instead of drawing when the dependencies form a cycle.
    #[arg(long)]
    pub reject_cycles: bool,

    #[command(flatten)]
    pub render: RenderArgs,
}

/// Options shared by both pipelines.
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// TOML file overriding title, colours and sizes.
    #[arg(long, value_name = "PATH")]
    pub style: Option<PathBuf>,

    /// Write the figure to this SVG file instead of opening a window.
    #[arg(long, value_name = "PATH", conflicts_with = "dot")]
    pub svg: Option<PathBuf>,

    /// Write the graph as Graphviz DOT to this file instead of opening a window.
    #[arg(long, value_name = "PATH")]
    pub dot: Option<PathBuf>,

    /// Seed for the layout, for reproducible pictures.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Number of layout iterations.
    #[arg(long, value_name = "N", default_value_t = 50)]
    pub iterations: usize,

    /// Load and build the graph, print nodes and edges, but don't draw.
    #[arg(long)]
    pub dry_run: bool,
}

impl RenderArgs {
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            iterations: self.iterations,
            seed: self.seed,
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
