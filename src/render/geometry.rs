// src/render/geometry.rs

//! Pixel-space geometry shared by all renderers.

use crate::render::layout::Point;

/// Drawing area in pixels, with a title band along the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    /// Space kept free around the plot so nodes on the rim are fully visible.
    pub margin: f32,
    pub title_band: f32,
}

impl Canvas {
    /// Map a layout position in `[-1, 1]²` (y up) to screen pixels (y down).
    pub fn to_screen(&self, p: Point) -> Point {
        let plot_w = (self.width - 2.0 * self.margin).max(0.0);
        let plot_h = (self.height - self.title_band - 2.0 * self.margin).max(0.0);
        Point::new(
            self.left + self.margin + (p.x + 1.0) / 2.0 * plot_w,
            self.top + self.title_band + self.margin + (1.0 - p.y) / 2.0 * plot_h,
        )
    }

    /// Centre of the title band.
    pub fn title_anchor(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.title_band / 2.0)
    }
}

/// Segment between two node circles of the given radius.
///
/// The segment runs rim to rim. When the circles touch or overlap there is no
/// gap between the rims, so it runs centre to centre instead.
pub fn edge_segment(from: Point, to: Point, radius: f32) -> (Point, Point) {
    let delta = to - from;
    let len = delta.length();
    if len <= 2.0 * radius {
        return (from, to);
    }
    let unit = delta * (1.0 / len);
    (from + unit * radius, to - unit * radius)
}

/// Triangle of an arrowhead whose tip touches `tip`, pointing away from
/// `tail`.
pub fn arrowhead(tail: Point, tip: Point, size: f32) -> [Point; 3] {
    let delta = tip - tail;
    let len = delta.length().max(f32::EPSILON);
    let unit = delta * (1.0 / len);
    let base = tip - unit * size;
    let normal = Point::new(-unit.y, unit.x) * (size * 0.5);
    [tip, base + normal, base - normal]
}

/// Circle used to draw a self-loop, sitting on top of the node.
pub fn self_loop(center: Point, radius: f32) -> (Point, f32) {
    (Point::new(center.x, center.y - radius * 1.4), radius * 0.6)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        Canvas {
            left: 0.0,
            top: 0.0,
            width: 200.0,
            height: 140.0,
            margin: 20.0,
            title_band: 40.0,
        }
    }

    #[test]
    fn corners_map_inside_margins() {
        let c = canvas();
        assert_eq!(c.to_screen(Point::new(-1.0, 1.0)), Point::new(20.0, 60.0));
        assert_eq!(c.to_screen(Point::new(1.0, -1.0)), Point::new(180.0, 120.0));
        assert_eq!(c.to_screen(Point::ORIGIN), Point::new(100.0, 90.0));
    }

    #[test]
    fn segment_stops_at_circle_rims() {
        let (a, b) = edge_segment(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 10.0);
        assert_eq!(a, Point::new(10.0, 0.0));
        assert_eq!(b, Point::new(90.0, 0.0));
    }

    #[test]
    fn overlapping_nodes_are_joined_centre_to_centre() {
        let (a, b) = edge_segment(Point::ORIGIN, Point::new(5.0, 0.0), 10.0);
        assert_eq!(a, Point::ORIGIN);
        assert_eq!(b, Point::new(5.0, 0.0));

        let (a, b) = edge_segment(Point::new(3.0, 4.0), Point::new(3.0, 4.0), 10.0);
        assert_eq!((a, b), (Point::new(3.0, 4.0), Point::new(3.0, 4.0)));
    }

    #[test]
    fn arrowhead_points_along_the_edge() {
        let [tip, l, r] = arrowhead(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 4.0);
        assert_eq!(tip, Point::new(10.0, 0.0));
        assert_eq!(l, Point::new(6.0, 2.0));
        assert_eq!(r, Point::new(6.0, -2.0));
    }
}
