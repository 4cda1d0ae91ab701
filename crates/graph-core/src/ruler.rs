// File: crates/graph-core/src/ruler.rs
// Summary: Evenly spaced tick values and their display labels along one axis.

/// Upper bound on intervals per axis; larger counts are rejected by config validation.
pub const MAX_TICK_COUNT: u32 = 1000;
/// Decimal places tick values are rounded to before they become keys.
const KEY_DECIMALS: i32 = 6;

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Ordered (value, label) table for one axis. Built fresh on every render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ruler {
    pub ticks: Vec<Tick>,
}

impl Ruler {
    pub fn len(&self) -> usize { self.ticks.len() }
    pub fn is_empty(&self) -> bool { self.ticks.is_empty() }
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.ticks.iter().map(|t| t.value)
    }

    /// Minor tick positions: the midpoint of every adjacent pair of ticks.
    pub fn midpoints(&self) -> impl Iterator<Item = f64> + '_ {
        self.ticks.windows(2).map(|w| (w[0].value + w[1].value) / 2.0)
    }
}

/// Round to the fixed key precision so float noise cannot produce duplicate ticks.
pub fn round_key(v: f64) -> f64 {
    // past 1e15 an f64 has no digits left below the sixth decimal
    if v.abs() >= 1e15 {
        return v;
    }
    let scale = 10f64.powi(KEY_DECIMALS);
    let r = (v * scale).round() / scale;
    // normalise -0.0
    if r == 0.0 { 0.0 } else { r }
}

/// Whole numbers print without decimals, everything else with two.
pub fn format_tick(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

/// Ticks from `min` to `max` in `tick_count` equal steps, both ends included.
/// The last tick is `max` itself, so float error in `step * tick_count` can never drop it.
///
/// Expects a validated range (`max > min`) and `1 <= tick_count <= MAX_TICK_COUNT`;
/// anything else yields an empty ruler.
pub fn build_ticks(min: f64, max: f64, tick_count: u32) -> Ruler {
    if tick_count == 0
        || tick_count > MAX_TICK_COUNT
        || !(max > min)
        || !min.is_finite()
        || !max.is_finite()
    {
        return Ruler::default();
    }
    let step = (max - min) / tick_count as f64;
    let mut ticks: Vec<Tick> = Vec::with_capacity(tick_count as usize + 1);
    for i in 0..=tick_count {
        let current = if i == tick_count { max } else { min + step * i as f64 };
        let value = round_key(current);
        if ticks.last().map_or(true, |t| t.value != value) {
            ticks.push(Tick { value, label: format_tick(value) });
        }
    }
    ticks.sort_by(|a, b| a.value.total_cmp(&b.value));
    Ruler { ticks }
}
