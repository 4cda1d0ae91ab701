// File: crates/graph-core/src/config.rs
// Summary: User overrides merged onto documented defaults, producing a validated ChartConfig.
// Notes:
// - Top-level options and the nested style are merged independently, so a partial
//   style override keeps every unspecified style field at its default.

use skia_safe as skia;
use tracing::debug;

use crate::chart::ChartType;
use crate::error::{AxisName, ChartError, ChartResult};
use crate::ruler::MAX_TICK_COUNT;
use crate::scale::AxisRange;
use crate::surface::FontSpec;
use crate::theme::Palette;
use crate::types::Insets;

pub const DEFAULT_TICK_COUNT: u32 = 4;
pub const DEFAULT_LINE_THICKNESS: f64 = 2.0;
pub const DEFAULT_DOT_RADIUS: f64 = 1.0;

/// Caller-supplied label text; `None` keeps the default.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelOverrides {
    pub axis_x: Option<String>,
    pub axis_y: Option<String>,
    pub header: Option<String>,
}

/// Caller-supplied style; `None` keeps the default.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleOverrides {
    pub line_color: Option<skia::Color>,
    pub dot_color: Option<skia::Color>,
    pub text_color: Option<skia::Color>,
    pub tick_color: Option<skia::Color>,
    /// Replaces all four colors when set.
    pub master_color: Option<skia::Color>,
    pub line_thickness: Option<f64>,
    pub dot_radius: Option<f64>,
    pub padding: Option<Insets>,
    pub font: Option<FontSpec>,
}

/// Caller-supplied chart options; `None` keeps the default.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartOptions {
    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    pub tick_count: Option<u32>,
    pub style: StyleOverrides,
}

impl ChartOptions {
    pub fn with_x_range(mut self, min: f64, max: f64) -> Self {
        self.x_min = Some(min);
        self.x_max = Some(max);
        self
    }
    pub fn with_y_range(mut self, min: f64, max: f64) -> Self {
        self.y_min = Some(min);
        self.y_max = Some(max);
        self
    }
    pub fn with_tick_count(mut self, n: u32) -> Self {
        self.tick_count = Some(n);
        self
    }
    pub fn with_style(mut self, style: StyleOverrides) -> Self {
        self.style = style;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelConfig {
    pub axis_x: String,
    pub axis_y: String,
    pub header: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self { axis_x: "X".into(), axis_y: "Y".into(), header: "Graph".into() }
    }
}

impl LabelConfig {
    pub fn merged(overrides: &LabelOverrides) -> Self {
        let d = Self::default();
        Self {
            axis_x: overrides.axis_x.clone().unwrap_or(d.axis_x),
            axis_y: overrides.axis_y.clone().unwrap_or(d.axis_y),
            header: overrides.header.clone().unwrap_or(d.header),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StyleConfig {
    pub line_color: skia::Color,
    pub dot_color: skia::Color,
    pub text_color: skia::Color,
    pub tick_color: skia::Color,
    pub master_color: Option<skia::Color>,
    pub line_thickness: f64,
    pub dot_radius: f64,
    pub padding: Insets,
    pub font: FontSpec,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let p = Palette::default();
        Self {
            line_color: p.line,
            dot_color: p.dot,
            text_color: p.text,
            tick_color: p.tick,
            master_color: None,
            line_thickness: DEFAULT_LINE_THICKNESS,
            dot_radius: DEFAULT_DOT_RADIUS,
            padding: Insets::default(),
            font: FontSpec::default(),
        }
    }
}

impl StyleConfig {
    pub fn merged(overrides: &StyleOverrides) -> Self {
        let d = Self::default();
        Self {
            line_color: overrides.line_color.unwrap_or(d.line_color),
            dot_color: overrides.dot_color.unwrap_or(d.dot_color),
            text_color: overrides.text_color.unwrap_or(d.text_color),
            tick_color: overrides.tick_color.unwrap_or(d.tick_color),
            master_color: overrides.master_color,
            line_thickness: overrides.line_thickness.unwrap_or(d.line_thickness),
            dot_radius: overrides.dot_radius.unwrap_or(d.dot_radius),
            padding: overrides.padding.unwrap_or(d.padding),
            font: overrides.font.clone().unwrap_or(d.font),
        }
    }

    /// Effective colors: the master color wins over every slot when present.
    pub fn palette(&self) -> Palette {
        match self.master_color {
            Some(c) => Palette::uniform(c),
            None => Palette {
                line: self.line_color,
                dot: self.dot_color,
                text: self.text_color,
                tick: self.tick_color,
            },
        }
    }
}

/// Fully populated configuration, read-only during a render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub chart_type: ChartType,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub tick_count: u32,
    pub style: StyleConfig,
    pub labels: LabelConfig,
}

impl ChartConfig {
    /// Reject ranges and tick counts that would make the geometry non-finite.
    pub fn validate(&self) -> ChartResult<()> {
        check_range(AxisName::X, self.x_range)?;
        check_range(AxisName::Y, self.y_range)?;
        if self.tick_count == 0 {
            return Err(ChartError::ZeroTickCount);
        }
        if self.tick_count > MAX_TICK_COUNT {
            return Err(ChartError::TickCountTooLarge { count: self.tick_count, max: MAX_TICK_COUNT });
        }
        Ok(())
    }
}

fn check_range(axis: AxisName, r: AxisRange) -> ChartResult<()> {
    if !r.min.is_finite() || !r.max.is_finite() {
        return Err(ChartError::NonFiniteRange { axis });
    }
    if r.max <= r.min {
        return Err(ChartError::DegenerateRange { axis, min: r.min, max: r.max });
    }
    Ok(())
}

/// Merge `labels` and `options` over the defaults and validate the result.
pub fn resolve(
    chart_type: ChartType,
    labels: &LabelOverrides,
    options: &ChartOptions,
) -> ChartResult<ChartConfig> {
    let default_range = AxisRange::default();
    let config = ChartConfig {
        chart_type,
        x_range: AxisRange::new(
            options.x_min.unwrap_or(default_range.min),
            options.x_max.unwrap_or(default_range.max),
        ),
        y_range: AxisRange::new(
            options.y_min.unwrap_or(default_range.min),
            options.y_max.unwrap_or(default_range.max),
        ),
        tick_count: options.tick_count.unwrap_or(DEFAULT_TICK_COUNT),
        style: StyleConfig::merged(&options.style),
        labels: LabelConfig::merged(labels),
    };
    config.validate()?;
    debug!(
        %chart_type,
        x_min = config.x_range.min,
        x_max = config.x_range.max,
        y_min = config.y_range.min,
        y_max = config.y_range.max,
        tick_count = config.tick_count,
        "resolved chart config"
    );
    Ok(config)
}
