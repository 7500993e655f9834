// src/render/layout.rs

//! Force-directed (Fruchterman-Reingold) node placement.
//!
//! Nodes start at random positions in the unit square. Every iteration each
//! node is pushed away from all others with force `k²/d` and pulled towards
//! its neighbours with force `d²/k`, where `k = 1/sqrt(n)`. Moves are capped
//! by a temperature that cools linearly to zero. The result is centred on the
//! origin and scaled into `[-1, 1]²`.
//!
//! Edge direction does not matter for the forces.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::graph::DirectedGraph;

/// Minimum distance used in force computations, so coincident nodes still
/// separate.
const MIN_DISTANCE: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    fn add(self, o: Point) -> Point {
        Point::new(self.x + o.x, self.y + o.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    fn sub(self, o: Point) -> Point {
        Point::new(self.x - o.x, self.y - o.y)
    }
}

impl std::ops::Mul<f32> for Point {
    type Output = Point;
    fn mul(self, s: f32) -> Point {
        Point::new(self.x * s, self.y * s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    pub iterations: usize,
    /// Seed for the initial positions; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            iterations: 50,
            seed: None,
        }
    }
}

/// Node positions, indexed like [`DirectedGraph::nodes`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    positions: Vec<Point>,
}

impl Layout {
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

pub fn spring_layout(graph: &DirectedGraph, options: &LayoutOptions) -> Layout {
    let n = graph.node_count();
    match n {
        0 => return Layout::default(),
        1 => {
            return Layout {
                positions: vec![Point::ORIGIN],
            };
        }
        _ => {}
    }

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut pos: Vec<Point> = (0..n)
        .map(|_| Point::new(rng.r#gen::<f32>(), rng.r#gen::<f32>()))
        .collect();

    let mut adjacent = vec![false; n * n];
    for (a, b) in graph.edge_positions() {
        adjacent[a * n + b] = true;
        adjacent[b * n + a] = true;
    }

    let k = (1.0 / n as f32).sqrt();
    let mut t = 0.1 * span(&pos);
    let dt = t / (options.iterations as f32 + 1.0);

    for iteration in 0..options.iterations {
        let mut disp = vec![Point::ORIGIN; n];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let delta = pos[i] - pos[j];
                let d = delta.length().max(MIN_DISTANCE);
                let mut force = k * k / (d * d);
                if adjacent[i * n + j] {
                    force -= d / k;
                }
                disp[i] = disp[i] + delta * force;
            }
        }

        for (p, d) in pos.iter_mut().zip(&disp) {
            let len = d.length().max(MIN_DISTANCE);
            *p = *p + *d * (t / len);
        }
        t -= dt;
        trace!(iteration, temperature = t, "layout step");
    }

    Layout {
        positions: rescale(pos),
    }
}

/// Largest extent of the bounding box along either axis.
fn span(pos: &[Point]) -> f32 {
    let (mut min_x, mut max_x) = (f32::INFINITY, f32::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f32::INFINITY, f32::NEG_INFINITY);
    for p in pos {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    (max_x - min_x).max(max_y - min_y)
}

/// Centre on the origin and scale so the farthest coordinate is 1.
fn rescale(mut pos: Vec<Point>) -> Vec<Point> {
    let n = pos.len() as f32;
    let mean = pos.iter().fold(Point::ORIGIN, |acc, p| acc + *p) * (1.0 / n);
    for p in pos.iter_mut() {
        *p = *p - mean;
    }

    let lim = pos
        .iter()
        .fold(0.0f32, |m, p| m.max(p.x.abs()).max(p.y.abs()));
    if lim > 0.0 {
        for p in pos.iter_mut() {
            *p = *p * (1.0 / lim);
        }
    }
    pos
}
