// File: crates/graph-core/src/axis.rs
// Summary: Shared pre-render pass: axis cross-lines, arrowheads, header, rulers and axis titles.

use tracing::trace;

use crate::config::ChartConfig;
use crate::geometry::Point;
use crate::ruler::{build_ticks, Ruler};
use crate::scale::PlotMapper;
use crate::surface::{DrawingSurface, TextAlign};
use crate::theme::Palette;
use crate::types::{
    ARROW_CLEARANCE, ARROW_SIZE, AXIS_STROKE, MINOR_TICK_LENGTH, TICK_LENGTH, TICK_STROKE,
    X_LABEL_GAP, Y_LABEL_GAP,
};

/// Axis lines through the clamped origin, spanning the full drawing rectangle.
pub fn draw_axes(surface: &mut dyn DrawingSurface, mapper: &PlotMapper, palette: &Palette) {
    let r = mapper.rect;
    let o = mapper.origin();
    surface.stroke_line(r.left, o.y, r.right, o.y, AXIS_STROKE, palette.text);
    surface.stroke_line(o.x, r.top, o.x, r.bottom, AXIS_STROKE, palette.text);
}

/// Arrowheads at the positive end of both axes, and at the negative end of an
/// axis whose minimum is below zero.
pub fn draw_arrowheads(
    surface: &mut dyn DrawingSurface,
    mapper: &PlotMapper,
    config: &ChartConfig,
    palette: &Palette,
) {
    let r = mapper.rect;
    let o = mapper.origin();
    let half = ARROW_SIZE / 2.0;

    // +X, tip just past the right edge
    let base_x = r.right - 1.0;
    surface.fill_polygon(
        &[
            Point::new(base_x + ARROW_SIZE, o.y),
            Point::new(base_x, o.y - half),
            Point::new(base_x, o.y + half),
        ],
        palette.text,
    );
    // +Y, tip just above the top edge
    let base_y = r.top + 1.0;
    surface.fill_polygon(
        &[
            Point::new(o.x, base_y - ARROW_SIZE),
            Point::new(o.x - half, base_y),
            Point::new(o.x + half, base_y),
        ],
        palette.text,
    );

    if config.x_range.min < 0.0 {
        surface.fill_polygon(
            &[
                Point::new(r.left - ARROW_SIZE, o.y),
                Point::new(r.left, o.y - half),
                Point::new(r.left, o.y + half),
            ],
            palette.text,
        );
    }
    if config.y_range.min < 0.0 {
        surface.fill_polygon(
            &[
                Point::new(o.x, r.bottom + ARROW_SIZE),
                Point::new(o.x - half, r.bottom + 1.0),
                Point::new(o.x + half, r.bottom + 1.0),
            ],
            palette.text,
        );
    }
}

pub fn draw_header(surface: &mut dyn DrawingSurface, mapper: &PlotMapper, config: &ChartConfig, palette: &Palette) {
    let y = config.style.padding.top as f64 / 2.0;
    surface.draw_text(
        &config.labels.header,
        mapper.rect.center_x(),
        y,
        TextAlign::Center,
        &config.style.font,
        palette.text,
    );
}

/// Tick marks and labels hanging below the X axis line.
pub fn draw_x_ruler(
    surface: &mut dyn DrawingSurface,
    mapper: &PlotMapper,
    config: &ChartConfig,
    palette: &Palette,
) -> Ruler {
    let ruler = build_ticks(config.x_range.min, config.x_range.max, config.tick_count);
    let rect = mapper.rect;
    let shift = if config.y_range.min < 0.0 { ARROW_CLEARANCE } else { 0.0 };
    let row = mapper.origin().y + shift;
    let skip_zero = config.x_range.min < 0.0;

    for tick in &ruler.ticks {
        if skip_zero && tick.value == 0.0 {
            continue;
        }
        let px = mapper.x.to_px(tick.value);
        if !rect.contains_x(px) {
            trace!(value = tick.value, px, "x tick outside plot, skipped");
            continue;
        }
        surface.draw_text(&tick.label, px, row + X_LABEL_GAP, TextAlign::Center, &config.style.font, palette.text);
        surface.stroke_line(px, row, px, row + TICK_LENGTH, TICK_STROKE, palette.text);
    }
    for mid in ruler.midpoints() {
        let px = mapper.x.to_px(mid);
        if rect.contains_x(px) {
            surface.stroke_line(px, row, px, row + MINOR_TICK_LENGTH, TICK_STROKE, palette.tick);
        }
    }
    ruler
}

/// Tick marks and right-aligned labels to the left of the Y axis line.
pub fn draw_y_ruler(
    surface: &mut dyn DrawingSurface,
    mapper: &PlotMapper,
    config: &ChartConfig,
    palette: &Palette,
) -> Ruler {
    let ruler = build_ticks(config.y_range.min, config.y_range.max, config.tick_count);
    let rect = mapper.rect;
    let shift = if config.x_range.min < 0.0 { ARROW_CLEARANCE } else { 0.0 };
    let column = mapper.origin().x - shift;
    let skip_zero = config.y_range.min < 0.0;
    // rough baseline correction so labels sit centered on their tick
    let baseline_nudge = config.style.font.size * 0.3;

    for tick in &ruler.ticks {
        if skip_zero && tick.value == 0.0 {
            continue;
        }
        let py = mapper.y.to_px(tick.value);
        if !rect.contains_y(py) {
            trace!(value = tick.value, py, "y tick outside plot, skipped");
            continue;
        }
        surface.draw_text(
            &tick.label,
            column - Y_LABEL_GAP,
            py + baseline_nudge,
            TextAlign::Right,
            &config.style.font,
            palette.text,
        );
        surface.stroke_line(column, py, column - TICK_LENGTH, py, TICK_STROKE, palette.text);
    }
    for mid in ruler.midpoints() {
        let py = mapper.y.to_px(mid);
        if rect.contains_y(py) {
            surface.stroke_line(column, py, column - MINOR_TICK_LENGTH, py, TICK_STROKE, palette.tick);
        }
    }
    ruler
}

/// Axis titles: Y at the top of its line, X at the right end of its line.
pub fn draw_axis_titles(
    surface: &mut dyn DrawingSurface,
    mapper: &PlotMapper,
    config: &ChartConfig,
    palette: &Palette,
) {
    let r = mapper.rect;
    let o = mapper.origin();
    let font = &config.style.font;
    surface.draw_text(&config.labels.axis_y, o.x + 5.0, r.top + 15.0, TextAlign::Left, font, palette.text);
    surface.draw_text(&config.labels.axis_x, r.right - 5.0, o.y - 10.0, TextAlign::Right, font, palette.text);
}
