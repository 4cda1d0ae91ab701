// File: crates/graph-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, drawing metrics).

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 600;

/// Default padding reserved on every side of the plot, in pixels.
pub const DEFAULT_PADDING: u32 = 64;

/// Length of an arrowhead along its axis.
pub const ARROW_SIZE: f64 = 14.0;
/// Extra room given to tick labels when the other axis grows a negative arrowhead.
pub const ARROW_CLEARANCE: f64 = ARROW_SIZE + 4.0;
/// Major tick length.
pub const TICK_LENGTH: f64 = 6.0;
/// Minor (midpoint) tick length.
pub const MINOR_TICK_LENGTH: f64 = 4.0;
/// Distance from the X axis line down to the label baseline.
pub const X_LABEL_GAP: f64 = 20.0;
/// Distance from the Y axis line left to the label's right edge.
pub const Y_LABEL_GAP: f64 = 8.0;
/// Stroke width of the two axis lines.
pub const AXIS_STROKE: f64 = 2.0;
/// Stroke width of tick marks.
pub const TICK_STROKE: f64 = 1.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same margin on all four sides.
    pub const fn uniform(px: u32) -> Self {
        Self::new(px, px, px, px)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(DEFAULT_PADDING)
    }
}
