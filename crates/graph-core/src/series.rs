// File: crates/graph-core/src/series.rs
// Summary: Single ordered (x, y) data series. Order defines connectivity and bar placement.

use crate::scale::AxisRange;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    data: Vec<(f64, f64)>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: Vec<(f64, f64)>) -> Self {
        Self { data }
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.data.push((x, y));
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Data bounds as (x, y) ranges, ignoring non-finite values.
    /// A flat dimension is widened so the result is a valid axis range.
    pub fn extent(&self) -> Option<(AxisRange, AxisRange)> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for &(x, y) in &self.data {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if !x_min.is_finite() {
            return None;
        }
        if x_max - x_min < 1e-9 { x_max = widen(x_min); }
        if y_max - y_min < 1e-9 { y_max = widen(y_min); }
        Some((AxisRange::new(x_min, x_max), AxisRange::new(y_min, y_max)))
    }
}

/// Upper bound for a flat dimension at `v`: one unit above it, or a few ulps
/// above it once one unit is lost to rounding.
fn widen(v: f64) -> f64 {
    let unit = v + 1.0;
    if unit > v {
        unit
    } else {
        v + v.abs() * f64::EPSILON * 16.0
    }
}

impl From<Vec<(f64, f64)>> for Series {
    fn from(data: Vec<(f64, f64)>) -> Self {
        Self::with_data(data)
    }
}

impl FromIterator<(f64, f64)> for Series {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        Self { data: iter.into_iter().collect() }
    }
}
