//! Batch orchestration over a directory of latency logs.
//!
//! Each tool walks the discovered logs one at a time, turning every file into
//! an explicit per-file outcome so a bad log never stops the rest of the
//! batch. Presentation layers (text report, chart) consume the results.

mod plot;
mod report;

pub use plot::{collect_throughput_points, ThroughputSeries};
pub use report::{analyze_dir, analyze_file, Analysis};
