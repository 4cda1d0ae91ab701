// File: crates/graph-core/src/theme.rs
// Summary: Default colors, the effective palette, and CSS-style color parsing.

use skia_safe as skia;

use crate::error::{ChartError, ChartResult};

pub const DEFAULT_LINE: skia::Color = skia::Color::new(0xFF2B_2B2B);
pub const DEFAULT_DOT: skia::Color = skia::Color::new(0xFF00_00FF);
pub const DEFAULT_TEXT: skia::Color = skia::Color::BLACK;
pub const DEFAULT_TICK: skia::Color = skia::Color::BLACK;
/// Translucent blue under an area chart: rgba(0, 100, 255, 0.3).
pub const AREA_FILL: skia::Color = skia::Color::new(0x4D00_64FF);

/// Colors actually used for one render, after the master override is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub line: skia::Color,
    pub dot: skia::Color,
    pub text: skia::Color,
    pub tick: skia::Color,
}

impl Palette {
    /// Every slot set to the same color.
    pub fn uniform(color: skia::Color) -> Self {
        Self { line: color, dot: color, text: color, tick: color }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self { line: DEFAULT_LINE, dot: DEFAULT_DOT, text: DEFAULT_TEXT, tick: DEFAULT_TICK }
    }
}

/// Parse `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` or `rgba(r, g, b, a)` (a in 0..=1).
pub fn parse_color(input: &str) -> ChartResult<skia::Color> {
    let s = input.trim();
    let bad = || ChartError::InvalidColor(input.to_string());

    if let Some(hex) = s.strip_prefix('#') {
        let digits = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 | 8 => hex.to_string(),
            _ => return Err(bad()),
        };
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let v = u32::from_str_radix(&digits, 16).map_err(|_| bad())?;
        return Ok(if digits.len() == 8 {
            let (r, g, b, a) = (v >> 24, (v >> 16) & 0xFF, (v >> 8) & 0xFF, v & 0xFF);
            skia::Color::from_argb(a as u8, r as u8, g as u8, b as u8)
        } else {
            skia::Color::new(0xFF00_0000 | v)
        });
    }

    let lower = s.to_ascii_lowercase();
    let (body, with_alpha) = if let Some(rest) = lower.strip_prefix("rgba(") {
        (rest, true)
    } else if let Some(rest) = lower.strip_prefix("rgb(") {
        (rest, false)
    } else {
        return Err(bad());
    };
    let body = body.strip_suffix(')').ok_or_else(bad)?;
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != if with_alpha { 4 } else { 3 } {
        return Err(bad());
    }
    let channel = |p: &str| p.parse::<u8>().map_err(|_| bad());
    let (r, g, b) = (channel(parts[0])?, channel(parts[1])?, channel(parts[2])?);
    let a = if with_alpha {
        let a = parts[3].parse::<f64>().map_err(|_| bad())?;
        if !(0.0..=1.0).contains(&a) {
            return Err(bad());
        }
        (a * 255.0).round() as u8
    } else {
        255
    };
    Ok(skia::Color::from_argb(a, r, g, b))
}
