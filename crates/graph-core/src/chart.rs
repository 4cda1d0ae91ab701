// File: crates/graph-core/src/chart.rs
// Summary: Chart aggregate (series + resolved config), chart-type dispatch, and headless PNG rendering.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::debug;

use crate::axis;
use crate::config::{resolve, ChartConfig, ChartOptions, LabelOverrides};
use crate::error::{ChartError, ChartResult};
use crate::geometry::{plot_rect, Point};
use crate::marks;
use crate::raster::SkiaSurface;
use crate::scale::PlotMapper;
use crate::series::Series;
use crate::surface::DrawingSurface;
use crate::theme::Palette;
use crate::types::{HEIGHT, WIDTH};

/// How the series is drawn. Selected per render; carries no state of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartType {
    Line,
    Dot,
    Bar,
    Area,
    Step,
    Spline,
}

impl ChartType {
    pub const ALL: [ChartType; 6] = [
        ChartType::Line,
        ChartType::Dot,
        ChartType::Bar,
        ChartType::Area,
        ChartType::Step,
        ChartType::Spline,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChartType::Line => "line",
            ChartType::Dot => "dot",
            ChartType::Bar => "bar",
            ChartType::Area => "area",
            ChartType::Step => "step",
            ChartType::Spline => "spline",
        }
    }

    /// Draw already-mapped points with this chart type's strategy.
    pub fn draw(
        self,
        surface: &mut dyn DrawingSurface,
        pts: &[Point],
        mapper: &PlotMapper,
        config: &ChartConfig,
        palette: &Palette,
    ) {
        let style = &config.style;
        match self {
            ChartType::Line => marks::draw_line(surface, pts, style, palette),
            ChartType::Dot => marks::draw_dots(surface, pts, style, palette),
            ChartType::Bar => marks::draw_bars(surface, pts, &mapper.rect, mapper.origin().y, palette),
            ChartType::Area => marks::draw_area(surface, pts, &mapper.rect, style, palette),
            ChartType::Step => marks::draw_steps(surface, pts, style, palette),
            ChartType::Spline => marks::draw_spline(surface, pts, style, palette),
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartType {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChartError::UnknownChartType(s.to_string()))
    }
}

/// Raster output settings for the PNG helpers.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub background: skia::Color,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            background: skia::Color::WHITE,
            draw_labels: true,
        }
    }
}

/// One series plus its resolved configuration. The drawing surface is supplied
/// per render and never owned.
#[derive(Clone, Debug)]
pub struct Chart {
    series: Series,
    config: ChartConfig,
}

impl Chart {
    pub fn new(
        chart_type: ChartType,
        series: impl Into<Series>,
        labels: &LabelOverrides,
        options: &ChartOptions,
    ) -> ChartResult<Self> {
        let config = resolve(chart_type, labels, options)?;
        Ok(Self { series: series.into(), config })
    }

    pub fn series(&self) -> &Series { &self.series }
    pub fn series_mut(&mut self) -> &mut Series { &mut self.series }
    pub fn set_series(&mut self, series: impl Into<Series>) {
        self.series = series.into();
    }

    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn chart_type(&self) -> ChartType { self.config.chart_type }
    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.config.chart_type = chart_type;
    }

    /// Replace the configuration; rejected configs leave the chart unchanged.
    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Re-resolve labels and options against the defaults, keeping the chart type.
    pub fn reconfigure(&mut self, labels: &LabelOverrides, options: &ChartOptions) -> ChartResult<()> {
        self.config = resolve(self.config.chart_type, labels, options)?;
        Ok(())
    }

    /// Geometry for a surface of the given size.
    pub fn mapper(&self, width: f64, height: f64) -> PlotMapper {
        let rect = plot_rect(width, height, &self.config.style.padding);
        PlotMapper::new(rect, self.config.x_range, self.config.y_range)
    }

    /// Clear `surface` and draw the whole chart. Repeatable: the same inputs always
    /// produce the same primitive stream.
    pub fn render(&self, surface: &mut dyn DrawingSurface) {
        let (width, height) = (surface.width(), surface.height());
        let config = &self.config;
        let palette = config.style.palette();
        let mapper = self.mapper(width, height);

        surface.clear(width, height);
        axis::draw_axes(surface, &mapper, &palette);
        axis::draw_arrowheads(surface, &mapper, config, &palette);
        axis::draw_header(surface, &mapper, config, &palette);
        let x_ruler = axis::draw_x_ruler(surface, &mapper, config, &palette);
        let y_ruler = axis::draw_y_ruler(surface, &mapper, config, &palette);
        axis::draw_axis_titles(surface, &mapper, config, &palette);

        let pts = mapper.map_points(self.series.points());
        config.chart_type.draw(surface, &pts, &mapper, config, &palette);

        debug!(
            chart_type = %config.chart_type,
            points = pts.len(),
            x_ticks = x_ruler.len(),
            y_ticks = y_ruler.len(),
            width,
            height,
            "rendered chart"
        );
    }

    /// Render onto a fresh Skia raster surface and encode it as PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = SkiaSurface::new(opts.width, opts.height)?
            .with_background(opts.background)
            .with_text(opts.draw_labels);
        self.render(&mut surface);
        surface.png_bytes()
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
