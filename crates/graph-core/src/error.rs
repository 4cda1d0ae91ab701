// File: crates/graph-core/src/error.rs
// Summary: Configuration-time error type. Rendering itself never fails once a config is valid.

use thiserror::Error;

/// Which axis a range error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisName {
    X,
    Y,
}

impl std::fmt::Display for AxisName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisName::X => f.write_str("x"),
            AxisName::Y => f.write_str("y"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("{axis} axis range is degenerate: max ({max}) must be greater than min ({min})")]
    DegenerateRange { axis: AxisName, min: f64, max: f64 },

    #[error("{axis} axis range has a non-finite bound")]
    NonFiniteRange { axis: AxisName },

    #[error("tick count must be at least 1")]
    ZeroTickCount,

    #[error("tick count {count} exceeds the maximum of {max}")]
    TickCountTooLarge { count: u32, max: u32 },

    #[error("unknown chart type '{0}' (expected line, dot, bar, area, step or spline)")]
    UnknownChartType(String),

    #[error("invalid color '{0}'")]
    InvalidColor(String),
}

pub type ChartResult<T> = Result<T, ChartError>;
