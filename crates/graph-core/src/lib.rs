// File: crates/graph-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod marks;
pub mod raster;
pub mod recording;
pub mod ruler;
pub mod scale;
pub mod series;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{Chart, ChartType, RenderOptions};
pub use config::{resolve, ChartConfig, ChartOptions, LabelConfig, LabelOverrides, StyleConfig, StyleOverrides};
pub use error::{AxisName, ChartError, ChartResult};
pub use geometry::{Point, Rect};
pub use raster::SkiaSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use ruler::{build_ticks, format_tick, Ruler, Tick};
pub use scale::{AxisRange, PlotMapper};
pub use series::Series;
pub use surface::{DrawingSurface, FontSpec, PathData, PathSegment, TextAlign};
pub use theme::{parse_color, Palette};
pub use types::Insets;
