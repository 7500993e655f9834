// src/render/svg.rs

//! Headless renderer writing a standalone SVG document.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::errors::{GraphviewError, Result};
use crate::render::{Figure, Primitive, Renderer};

#[derive(Debug, Clone)]
pub struct SvgRenderer {
    pub path: PathBuf,
}

impl SvgRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, figure: Figure) -> Result<()> {
        let doc = to_svg(&figure);
        fs::write(&self.path, doc).map_err(|source| GraphviewError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!(path = ?self.path, nodes = figure.nodes.len(), "wrote SVG figure");
        Ok(())
    }
}

/// Render `figure` as an SVG document string.
pub fn to_svg(figure: &Figure) -> String {
    let mut out = String::new();
    // fmt::Write for String never returns an error.
    write_svg(&mut out, figure).unwrap_or_default();
    out
}

fn write_svg(out: &mut impl fmt::Write, figure: &Figure) -> fmt::Result {
    let style = &figure.style;
    let canvas = figure.canvas();
    let node_fill = style.node_color.to_string();
    let edge = style.edge_color.to_string();

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = style.width,
        h = style.height,
    )?;
    writeln!(out, r#"<rect width="100%" height="100%" fill="white"/>"#)?;

    for prim in figure.primitives(&canvas) {
        match prim {
            Primitive::Title { at, text } => writeln!(
                out,
                r#"<text x="{:.2}" y="{:.2}" font-family="sans-serif" font-size="{}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
                at.x,
                at.y,
                style.font_size * 1.3,
                escape(&text)
            )?,
            Primitive::Line { from, to } => writeln!(
                out,
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{edge}" stroke-width="1.5"/>"#,
                from.x, from.y, to.x, to.y
            )?,
            Primitive::Arrowhead([a, b, c]) => writeln!(
                out,
                r#"<polygon points="{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}" fill="{edge}"/>"#,
                a.x, a.y, b.x, b.y, c.x, c.y
            )?,
            Primitive::Loop { center, radius } => writeln!(
                out,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="none" stroke="{edge}" stroke-width="1.5"/>"#,
                center.x, center.y, radius
            )?,
            Primitive::Node { center, radius } => writeln!(
                out,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{node_fill}"/>"#,
                center.x, center.y, radius
            )?,
            Primitive::Label { at, text } => writeln!(
                out,
                r#"<text x="{:.2}" y="{:.2}" font-family="sans-serif" font-size="{}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
                at.x,
                at.y,
                style.font_size,
                escape(&text)
            )?,
        }
    }

    writeln!(out, "</svg>")
}

fn escape(text: &str) -> String {
    let mut s = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            _ => s.push(c),
        }
    }
    s
}
