// src/render/mod.rs

//! Layout and drawing.
//!
//! A [`Figure`] is a pure description of what to draw: the title, every node
//! with its label and layout position, and the edges. Renderers turn it into
//! pixels via [`Figure::primitives`], so the window and the SVG output agree
//! on geometry.

pub mod dot;
pub mod geometry;
pub mod layout;
pub mod style;
pub mod svg;
pub mod window;

use tracing::warn;

use crate::errors::Result;
use crate::graph::DirectedGraph;

pub use dot::DotRenderer;
pub use geometry::Canvas;
pub use layout::{spring_layout, Layout, LayoutOptions, Point};
pub use style::{resolve_style, Rgb, Style};
pub use svg::SvgRenderer;
pub use window::WindowRenderer;

/// A node placed by the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode {
    pub id: String,
    pub label: String,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub style: Style,
    pub nodes: Vec<PlacedNode>,
    /// Edges as positions into `nodes`.
    pub edges: Vec<(usize, usize)>,
}

/// One pixel-space drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Title { at: Point, text: String },
    Line { from: Point, to: Point },
    Arrowhead([Point; 3]),
    Loop { center: Point, radius: f32 },
    Node { center: Point, radius: f32 },
    Label { at: Point, text: String },
}

impl Figure {
    pub fn new(graph: &DirectedGraph, layout: &Layout, style: Style) -> Self {
        let nodes = graph
            .nodes()
            .zip(layout.positions())
            .map(|(node, &position)| PlacedNode {
                id: node.id.to_string(),
                label: node.display_label().to_string(),
                position,
            })
            .collect();
        Self {
            style,
            nodes,
            edges: graph.edge_positions().collect(),
        }
    }

    /// Canvas covering the full figure size.
    pub fn canvas(&self) -> Canvas {
        self.canvas_at(0.0, 0.0, self.style.width, self.style.height)
    }

    /// Canvas for an arbitrary pixel rectangle, e.g. a resized window.
    pub fn canvas_at(&self, left: f32, top: f32, width: f32, height: f32) -> Canvas {
        Canvas {
            left,
            top,
            width,
            height,
            margin: self.style.node_radius * 1.5,
            title_band: self.style.font_size * 3.0,
        }
    }

    /// Drawing operations in paint order: title, edges, nodes, labels.
    pub fn primitives(&self, canvas: &Canvas) -> Vec<Primitive> {
        let radius = self.style.node_radius;
        let centers: Vec<Point> = self
            .nodes
            .iter()
            .map(|n| canvas.to_screen(n.position))
            .collect();

        let mut out = vec![Primitive::Title {
            at: canvas.title_anchor(),
            text: self.style.title.clone(),
        }];

        for &(a, b) in &self.edges {
            if a == b {
                let (center, r) = geometry::self_loop(centers[a], radius);
                out.push(Primitive::Loop { center, radius: r });
                continue;
            }
            let (from, to) = geometry::edge_segment(centers[a], centers[b], radius);
            out.push(Primitive::Line { from, to });
            if self.style.arrow_size > 0.0 {
                out.push(Primitive::Arrowhead(geometry::arrowhead(
                    centers[a],
                    to,
                    self.style.arrow_size,
                )));
            }
        }

        for &center in &centers {
            out.push(Primitive::Node { center, radius });
        }
        for (node, &at) in self.nodes.iter().zip(&centers) {
            out.push(Primitive::Label {
                at,
                text: node.label.clone(),
            });
        }
        out
    }
}

/// Presents a figure to the user.
pub trait Renderer {
    fn render(&self, figure: Figure) -> Result<()>;
}

/// Lay out `graph`, wrap it in a figure and hand it to `renderer`.
pub fn draw(
    graph: &DirectedGraph,
    style: Style,
    options: &LayoutOptions,
    renderer: &dyn Renderer,
) -> Result<()> {
    if graph.is_empty() {
        warn!(title = %style.title, "graph is empty; drawing title only");
    }
    let layout = spring_layout(graph, options);
    renderer.render(Figure::new(graph, &layout, style))
}
