//! Throughput-vs-latency chart rendering and series export.

use crate::model::ThroughputPoint;
use anyhow::{Context, Result};
use plotters::prelude::*;
use plotters::style::FontStyle;
use std::ops::Range;
use std::path::Path;

const CHART_SIZE: (u32, u32) = (3000, 1800);
const TITLE: &str = "Throughput vs Average Latency";
const X_DESC: &str = "Throughput (requests/second)";
const Y_DESC: &str = "Average Latency (ms)";

/// Axis range covering `values` with a margin on both sides.
///
/// A single distinct value still gets a non-empty range around it.
pub fn padded_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let span = max - min;
    let pad = if span > 0.0 {
        span * 0.05
    } else {
        (min.abs() * 0.1).max(1.0)
    };
    (min - pad)..(max + pad)
}

/// Draw the series as a line with circle markers and save it as a PNG at
/// `path`, replacing any earlier chart.
pub fn render_throughput_chart(points: &[ThroughputPoint], path: &Path) -> Result<()> {
    let xy: Vec<(f64, f64)> = points
        .iter()
        .map(|p| (p.throughput_rps as f64, p.avg_latency_ms))
        .collect();
    let x_range = padded_range(xy.iter().map(|(x, _)| *x));
    let y_range = padded_range(xy.iter().map(|(_, y)| *y));

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).context("clear chart background")?;

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, ("sans-serif", 64).into_font().style(FontStyle::Bold))
        .margin(40)
        .x_label_area_size(140)
        .y_label_area_size(180)
        .build_cartesian_2d(x_range, y_range)
        .context("build chart axes")?;

    chart
        .configure_mesh()
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .axis_desc_style(("sans-serif", 48))
        .label_style(("sans-serif", 36))
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.3))
        .draw()
        .context("draw chart grid")?;

    let color = RGBColor(31, 119, 180);
    chart
        .draw_series(LineSeries::new(xy.iter().copied(), color.stroke_width(6)))
        .context("draw latency line")?;
    chart
        .draw_series(xy.iter().map(|&p| Circle::new(p, 16, color.filled())))
        .context("draw latency markers")?;

    root.present()
        .with_context(|| format!("write chart to {}", path.display()))?;
    Ok(())
}

/// Write the plotted series to a CSV file.
pub fn export_points_csv(points: &[ThroughputPoint], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    writer.write_record(["Throughput (rps)", "Average Latency (ms)"])?;
    for p in points {
        writer.write_record([p.throughput_rps.to_string(), p.avg_latency_ms.to_string()])?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}
