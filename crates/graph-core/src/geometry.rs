// File: crates/graph-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

/// A pixel-space point. Y grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
    pub fn center_x(&self) -> f64 { self.left + self.width() / 2.0 }

    pub fn bottom_left(&self) -> Point { Point::new(self.left, self.bottom) }
    pub fn bottom_right(&self) -> Point { Point::new(self.right, self.bottom) }

    /// Horizontal containment with a small tolerance for rounded tick values.
    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.left - EDGE_EPSILON && x <= self.right + EDGE_EPSILON
    }

    /// Vertical containment with a small tolerance for rounded tick values.
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.top - EDGE_EPSILON && y <= self.bottom + EDGE_EPSILON
    }
}

const EDGE_EPSILON: f64 = 1e-6;

/// The drawing rectangle of a `width` x `height` surface once `insets` are reserved.
/// A surface smaller than its padding yields a rectangle with negative extent; callers
/// still get finite coordinates.
pub fn plot_rect(width: f64, height: f64, insets: &Insets) -> Rect {
    Rect::from_ltrb(
        insets.left as f64,
        insets.top as f64,
        width - insets.right as f64,
        height - insets.bottom as f64,
    )
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
