// File: crates/graph-demo/src/main.rs
// Summary: Demo loads an (x, y) CSV, or builds a sample wave, and renders every chart type to PNG.

use anyhow::{Context, Result};
use graph_core::{Chart, ChartOptions, ChartType, LabelOverrides, RenderOptions, Series};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Usage: graph-demo [input.csv] [out-dir]
    let mut args = std::env::args().skip(1);
    let input = args.next().map(PathBuf::from);
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out"));

    let (series, stem) = match &input {
        Some(path) => {
            println!("Using input file: {}", path.display());
            let series = load_xy_csv(path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("input").to_string();
            (series, stem)
        }
        None => {
            println!("No input file given; using a generated sample wave");
            (sample_wave(24), "sample".to_string())
        }
    };
    println!("Loaded {} points", series.len());

    let (x_range, y_range) = series
        .extent()
        .context("series has no finite points; check headers/delimiter")?;
    println!(
        "Data range: x [{:.4}, {:.4}], y [{:.4}, {:.4}]",
        x_range.min, x_range.max, y_range.min, y_range.max
    );

    let options = ChartOptions::default()
        .with_x_range(x_range.min, x_range.max)
        .with_y_range(y_range.min, y_range.max)
        .with_tick_count(4);
    let render = RenderOptions::default();
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    for chart_type in ChartType::ALL {
        let labels = LabelOverrides {
            header: Some(format!("{stem} ({chart_type})")),
            ..LabelOverrides::default()
        };
        let chart = Chart::new(chart_type, series.clone(), &labels, &options)?;
        let out = out_name_with(&out_dir, &stem, chart_type);
        chart.render_to_png(&render, &out)?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}

/// Produce output file name like <out_dir>/graph_<stem>_<type>.png
fn out_name_with(out_dir: &Path, stem: &str, chart_type: ChartType) -> PathBuf {
    out_dir.join(format!("graph_{stem}_{chart_type}.png"))
}

/// A damped sine that crosses zero, so negative-axis arrowheads show up.
fn sample_wave(n: usize) -> Series {
    (0..n)
        .map(|i| {
            let x = i as f64 * 0.5;
            (x, (x * 0.8).sin() * (1.0 - x / 24.0) * 3.0)
        })
        .collect()
}

/// Load an (x, y) CSV. Columns named `x`/`y` are preferred; otherwise the first two
/// columns are used. Rows that do not parse are skipped.
fn load_xy_csv(path: &Path) -> Result<Series> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let idx = |names: &[&str], fallback: usize| -> usize {
        headers
            .iter()
            .position(|h| names.contains(&h.as_str()))
            .unwrap_or(fallback)
    };
    let i_x = idx(&["x", "time", "t", "index"], 0);
    let i_y = idx(&["y", "value", "v"], 1);

    let mut series = Series::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        match (parse(i_x), parse(i_y)) {
            (Some(x), Some(y)) => series.push(x, y),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        println!("Warning: skipped {skipped} rows that did not parse as numbers");
    }
    Ok(series)
}
