// File: crates/graph-core/src/scale.rs
// Summary: Data-space to pixel-space mapping for both axes, plus the clamped origin used for axis placement.

use crate::geometry::{clamp, Point, Rect};

/// Data-space bounds of one axis.
/// Contract: `max > min` and both finite (checked by config resolution).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
    pub fn span(&self) -> f64 { self.max - self.min }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

/// Linear map from a data range onto a pixel interval.
/// `start_px` is where `min` lands; `end_px` may be smaller than `start_px` (inverted Y).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub range: AxisRange,
    pub start_px: f64,
    pub end_px: f64,
}

impl LinearScale {
    pub fn new(range: AxisRange, start_px: f64, end_px: f64) -> Self {
        Self { range, start_px, end_px }
    }
    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.start_px + (v - self.range.min) / self.range.span() * (self.end_px - self.start_px)
    }
    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        self.range.min + (px - self.start_px) / (self.end_px - self.start_px) * self.range.span()
    }
}

/// Maps data points into the drawing rectangle.
#[derive(Clone, Copy, Debug)]
pub struct PlotMapper {
    pub rect: Rect,
    pub x: LinearScale,
    pub y: LinearScale,
}

impl PlotMapper {
    pub fn new(rect: Rect, x_range: AxisRange, y_range: AxisRange) -> Self {
        Self {
            rect,
            x: LinearScale::new(x_range, rect.left, rect.right),
            // data-space up is pixel-space up: min sits on the bottom edge
            y: LinearScale::new(y_range, rect.bottom, rect.top),
        }
    }

    #[inline]
    pub fn to_pixel(&self, x: f64, y: f64) -> Point {
        Point::new(self.x.to_px(x), self.y.to_px(y))
    }

    #[inline]
    pub fn from_pixel(&self, p: Point) -> (f64, f64) {
        (self.x.from_px(p.x), self.y.from_px(p.y))
    }

    /// Pixel location of data (0, 0), pinned to the nearest rectangle edge when zero
    /// lies outside either range. The axis cross-lines are drawn through this point.
    pub fn origin(&self) -> Point {
        let raw = self.to_pixel(0.0, 0.0);
        Point::new(
            clamp(raw.x, self.rect.left, self.rect.right),
            clamp(raw.y, self.rect.top, self.rect.bottom),
        )
    }

    /// Map a whole series in order.
    pub fn map_points(&self, data: &[(f64, f64)]) -> Vec<Point> {
        data.iter().map(|&(x, y)| self.to_pixel(x, y)).collect()
    }
}
