// File: crates/graph-core/src/surface.rs
// Summary: Drawing-surface capability the renderer issues primitives against.
// Notes:
// - Coordinates are pixel-space f64; backends narrow to their own precision.
// - Implementations must tolerate non-finite coordinates (no panics).

use skia_safe::Color;

use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Font request for a text primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f64,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self { family: family.into(), size }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("Arial", 14.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { ctrl: Point, to: Point },
}

/// An open path made of line and quadratic segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    pub segments: Vec<PathSegment>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.segments.push(PathSegment::MoveTo(p));
        self
    }
    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.segments.push(PathSegment::LineTo(p));
        self
    }
    pub fn quad_to(&mut self, ctrl: Point, to: Point) -> &mut Self {
        self.segments.push(PathSegment::QuadTo { ctrl, to });
        self
    }
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Immediate-mode drawing primitives. Calls are issued in order and are expected
/// to paint over earlier ones.
pub trait DrawingSurface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Reset the whole `width` x `height` area to the surface background.
    fn clear(&mut self, width: f64, height: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color);
    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, width: f64, color: Color);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
    /// Fill the closed polygon through `points`.
    fn fill_polygon(&mut self, points: &[Point], color: Color);
    fn stroke_path(&mut self, path: &PathData, width: f64, color: Color);
    /// Draw `text` with its baseline at `y`; `align` picks which edge sits at `x`.
    fn draw_text(&mut self, text: &str, x: f64, y: f64, align: TextAlign, font: &FontSpec, color: Color);
}
