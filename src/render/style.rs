// src/render/style.rs

//! Figure styling and the optional TOML style file.
//!
//! Every field of the style file is optional; anything left out keeps the
//! pipeline's default:
//!
//! ```toml
//! title = "My tree"
//! node_color = "#ffcc00"
//! edge_color = "#333333"
//! node_radius = 24.0
//! arrow_size = 12.0
//! font_size = 14.0
//! width = 1024.0
//! height = 768.0
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::errors::{GraphviewError, Result};

/// 8-bit RGB colour, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const LIGHT_GREEN: Rgb = Rgb(0x90, 0xee, 0x90);
    pub const SKY_BLUE: Rgb = Rgb(0x87, 0xce, 0xeb);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let hex = s.trim();
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| format!("invalid colour: {hex} (expected \"#rrggbb\")"))?;

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|e| e.to_string());
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Resolved style used by the renderers. Sizes are in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub title: String,
    pub node_color: Rgb,
    pub edge_color: Rgb,
    pub node_radius: f32,
    pub arrow_size: f32,
    pub font_size: f32,
    pub width: f32,
    pub height: f32,
}

impl Style {
    fn base(title: &str, node_color: Rgb) -> Self {
        Self {
            title: title.to_string(),
            node_color,
            edge_color: Rgb::BLACK,
            node_radius: 22.0,
            arrow_size: 12.0,
            font_size: 14.0,
            width: 800.0,
            height: 600.0,
        }
    }

    /// Default style of the tree pipeline.
    pub fn tree() -> Self {
        Self::base("AVL Tree Visualization", Rgb::LIGHT_GREEN)
    }

    /// Default style of the event pipeline.
    pub fn events() -> Self {
        Self::base("Event Dependency Graph", Rgb::SKY_BLUE)
    }

    /// Apply the overrides from a style file, then validate the result.
    pub fn with_overrides(mut self, raw: RawStyle) -> Result<Self> {
        if let Some(title) = raw.title {
            self.title = title;
        }
        if let Some(c) = raw.node_color {
            self.node_color = c.parse().map_err(GraphviewError::Style)?;
        }
        if let Some(c) = raw.edge_color {
            self.edge_color = c.parse().map_err(GraphviewError::Style)?;
        }
        self.node_radius = raw.node_radius.unwrap_or(self.node_radius);
        self.arrow_size = raw.arrow_size.unwrap_or(self.arrow_size);
        self.font_size = raw.font_size.unwrap_or(self.font_size);
        self.width = raw.width.unwrap_or(self.width);
        self.height = raw.height.unwrap_or(self.height);

        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        positive("node_radius", self.node_radius)?;
        positive("font_size", self.font_size)?;
        if !(self.arrow_size >= 0.0 && self.arrow_size.is_finite()) {
            return Err(GraphviewError::Style(format!(
                "arrow_size must be >= 0 (got {})",
                self.arrow_size
            )));
        }

        let min_side = 4.0 * self.node_radius;
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !(value >= min_side && value.is_finite()) {
                return Err(GraphviewError::Style(format!(
                    "{name} must be at least four node radii ({min_side}), got {value}"
                )));
            }
        }
        Ok(())
    }
}

fn positive(name: &str, value: f32) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(GraphviewError::Style(format!("{name} must be > 0 (got {value})")))
    }
}

/// Style file as written on disk. Unknown keys are rejected so typos surface.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawStyle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub node_color: Option<String>,
    #[serde(default)]
    pub edge_color: Option<String>,
    #[serde(default)]
    pub node_radius: Option<f32>,
    #[serde(default)]
    pub arrow_size: Option<f32>,
    #[serde(default)]
    pub font_size: Option<f32>,
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
}

/// Read and parse a TOML style file.
pub fn load_style_file(path: impl AsRef<Path>) -> Result<RawStyle> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| GraphviewError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&contents)?)
}

/// Resolve the style for a pipeline: its defaults, overridden by the style
/// file when one is given.
pub fn resolve_style(defaults: Style, style_file: Option<&Path>) -> Result<Style> {
    match style_file {
        Some(path) => defaults.with_overrides(load_style_file(path)?),
        None => Ok(defaults),
    }
}
