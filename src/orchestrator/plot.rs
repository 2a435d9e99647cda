//! Throughput-vs-latency series assembly.

use crate::loader;
use crate::metrics;
use crate::model::{AnalysisConfig, SkipReason, SkippedFile, ThroughputPoint};
use crate::throughput::extract_throughput_from_filename;
use std::path::PathBuf;

/// Points ready to chart, plus the logs that could not contribute one.
#[derive(Debug, Clone, Default)]
pub struct ThroughputSeries {
    /// Sorted by throughput, ascending.
    pub points: Vec<ThroughputPoint>,
    pub skipped: Vec<SkippedFile>,
}

/// Build one point per log whose name carries a throughput and whose body
/// carries at least one latency sample. `None` when discovery found no logs.
pub fn collect_throughput_points(cfg: &AnalysisConfig) -> Option<ThroughputSeries> {
    let files = loader::discover_csv_files(&cfg.results_dir);
    if files.is_empty() {
        return None;
    }
    Some(series_from_files(&files, &cfg.column))
}

fn series_from_files(files: &[PathBuf], column: &str) -> ThroughputSeries {
    let mut series = ThroughputSeries::default();

    for path in files {
        let file_name = loader::display_name(path);
        let skip = |reason| SkippedFile {
            file_name: file_name.clone(),
            reason,
        };

        let Some(throughput_rps) = extract_throughput_from_filename(&file_name) else {
            series.skipped.push(skip(SkipReason::NoThroughput));
            continue;
        };

        match loader::read_latency_csv(path, column) {
            Ok(samples) => match metrics::mean(samples.as_slice()) {
                Some(avg_latency_ms) => series.points.push(ThroughputPoint {
                    throughput_rps,
                    avg_latency_ms,
                }),
                None => series.skipped.push(skip(SkipReason::NoSamples)),
            },
            Err(e) => series.skipped.push(skip(SkipReason::LoadFailed(e.to_string()))),
        }
    }

    // A line chart over an unsorted series doubles back on itself.
    series.points.sort_by_key(|p| p.throughput_rps);
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LATENCY_COLUMN;
    use std::fs;
    use std::path::Path;

    fn log_with(dir: &Path, name: &str, latencies: &[f64]) -> PathBuf {
        let mut body = String::from("Client,Operation,Latency (ms)\n");
        for l in latencies {
            body.push_str(&format!("0,READ,{l}\n"));
        }
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn series_is_sorted_by_throughput() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            log_with(dir.path(), "latency_10rps.csv", &[4.0, 6.0]),
            log_with(dir.path(), "latency_50rps.csv", &[20.0]),
            log_with(dir.path(), "latency_30rps.csv", &[11.0, 13.0]),
        ];
        let series = series_from_files(&files, LATENCY_COLUMN);
        let pairs: Vec<(u64, f64)> = series
            .points
            .iter()
            .map(|p| (p.throughput_rps, p.avg_latency_ms))
            .collect();
        assert_eq!(pairs, vec![(10, 5.0), (30, 12.0), (50, 20.0)]);
        assert!(series.skipped.is_empty());
    }

    #[test]
    fn unusable_logs_are_skipped_with_reason() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            log_with(dir.path(), "summary.csv", &[1.0]),
            log_with(dir.path(), "latency_20rps.csv", &[]),
            log_with(dir.path(), "latency_40rps.csv", &[2.0]),
        ];
        let bad = dir.path().join("latency_80rps.csv");
        fs::write(&bad, "Latency\n1\n").unwrap();
        let mut all = files.clone();
        all.push(bad);

        let series = series_from_files(&all, LATENCY_COLUMN);
        assert_eq!(series.points.len(), 1);
        let reasons: Vec<&SkipReason> = series.skipped.iter().map(|s| &s.reason).collect();
        assert_eq!(reasons[0], &SkipReason::NoThroughput);
        assert_eq!(reasons[1], &SkipReason::NoSamples);
        assert!(matches!(reasons[2], SkipReason::LoadFailed(_)));
        assert_eq!(
            series.skipped[0].to_message(),
            "Warning: Could not extract throughput from summary.csv"
        );
    }

    #[test]
    fn no_logs_means_no_series() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AnalysisConfig {
            results_dir: dir.path().to_path_buf(),
            ..AnalysisConfig::default()
        };
        assert!(collect_throughput_points(&cfg).is_none());
    }
}
