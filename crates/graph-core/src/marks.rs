// File: crates/graph-core/src/marks.rs
// Summary: Per-chart-type data drawing. Every function takes already-mapped pixel points
//          and issues no primitive for an empty series.

use crate::config::StyleConfig;
use crate::geometry::{Point, Rect};
use crate::surface::{DrawingSurface, PathData};
use crate::theme::{Palette, AREA_FILL};

/// Segments between consecutive points, with a dot marker at each segment start.
/// The last point is left unmarked.
pub fn draw_line(surface: &mut dyn DrawingSurface, pts: &[Point], style: &StyleConfig, palette: &Palette) {
    for w in pts.windows(2) {
        let (a, b) = (w[0], w[1]);
        surface.stroke_line(a.x, a.y, b.x, b.y, style.line_thickness, palette.line);
        surface.fill_circle(a.x, a.y, style.dot_radius, palette.dot);
    }
}

pub fn draw_dots(surface: &mut dyn DrawingSurface, pts: &[Point], style: &StyleConfig, palette: &Palette) {
    for p in pts {
        surface.fill_circle(p.x, p.y, style.dot_radius, palette.dot);
    }
}

/// Width of every bar for `count` bars across `plot_width` pixels.
pub fn bar_width(plot_width: f64, count: usize) -> f64 {
    (plot_width / count as f64) * 0.5
}

/// One bar per point, from the zero row (`baseline_y`) to the point, centered on its x.
pub fn draw_bars(
    surface: &mut dyn DrawingSurface,
    pts: &[Point],
    rect: &Rect,
    baseline_y: f64,
    palette: &Palette,
) {
    if pts.is_empty() {
        return;
    }
    let w = bar_width(rect.width(), pts.len());
    for p in pts {
        let top = p.y.min(baseline_y);
        let h = (baseline_y - p.y).abs();
        surface.fill_rect(p.x - w / 2.0, top, w, h, palette.line);
    }
}

/// Filled polygon closed down to the bottom corners of the plot, then the line on top.
pub fn draw_area(
    surface: &mut dyn DrawingSurface,
    pts: &[Point],
    rect: &Rect,
    style: &StyleConfig,
    palette: &Palette,
) {
    if pts.is_empty() {
        return;
    }
    let mut poly = Vec::with_capacity(pts.len() + 2);
    poly.extend_from_slice(pts);
    poly.push(rect.bottom_right());
    poly.push(rect.bottom_left());
    surface.fill_polygon(&poly, AREA_FILL);

    for w in pts.windows(2) {
        let (a, b) = (w[0], w[1]);
        surface.stroke_line(a.x, a.y, b.x, b.y, style.line_thickness, palette.line);
    }
}

/// Staircase: across at the previous height, then up or down to the new one.
pub fn draw_steps(surface: &mut dyn DrawingSurface, pts: &[Point], style: &StyleConfig, palette: &Palette) {
    for w in pts.windows(2) {
        let (a, b) = (w[0], w[1]);
        surface.stroke_line(a.x, a.y, b.x, a.y, style.line_thickness, palette.line);
        surface.stroke_line(b.x, a.y, b.x, b.y, style.line_thickness, palette.line);
    }
}

/// Piecewise quadratic smoothing: each curve uses the previous point as its control
/// and ends halfway to the current point. The path therefore stops at the midpoint of
/// the last two points rather than on the last point.
pub fn spline_path(pts: &[Point]) -> Option<PathData> {
    if pts.len() < 2 {
        return None;
    }
    let mut path = PathData::new();
    path.move_to(pts[0]);
    for w in pts.windows(2) {
        let (prev, cur) = (w[0], w[1]);
        path.quad_to(prev, prev.midpoint(cur));
    }
    Some(path)
}

pub fn draw_spline(surface: &mut dyn DrawingSurface, pts: &[Point], style: &StyleConfig, palette: &Palette) {
    if let Some(path) = spline_path(pts) {
        surface.stroke_path(&path, style.line_thickness, palette.line);
    }
}
