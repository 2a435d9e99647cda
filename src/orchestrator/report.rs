//! Per-file statistics for the latency report.

use crate::loader;
use crate::metrics;
use crate::model::{AnalysisConfig, FileOutcome, FileReport};
use std::path::Path;

/// Outcome of analysing every log in the results directory.
#[derive(Debug, Clone)]
pub enum Analysis {
    /// Discovery matched nothing; there is no batch to report on.
    NoFiles,
    Reports(Vec<FileReport>),
}

/// Load one log and summarise it. Failures are captured, not returned.
pub fn analyze_file(path: &Path, column: &str) -> FileReport {
    let file_name = loader::display_name(path);
    let outcome = match loader::read_latency_csv(path, column) {
        Ok(samples) => FileOutcome::Analyzed {
            sample_size: samples.len(),
            summary: metrics::calculate_stats(samples.as_slice()),
        },
        Err(e) => {
            log::debug!("{file_name}: {e}");
            FileOutcome::Failed {
                reason: e.to_string(),
            }
        }
    };
    FileReport { file_name, outcome }
}

/// Analyse every `*.csv` log under the configured directory, in name order.
pub fn analyze_dir(cfg: &AnalysisConfig) -> Analysis {
    let files = loader::discover_csv_files(&cfg.results_dir);
    if files.is_empty() {
        return Analysis::NoFiles;
    }
    Analysis::Reports(
        files
            .iter()
            .map(|path| analyze_file(path, &cfg.column))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LATENCY_COLUMN;
    use std::fs;

    #[test]
    fn failures_do_not_stop_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a_bad.csv"), "Latency\n1\n").unwrap();
        fs::write(dir.path().join("b_empty.csv"), "Latency (ms)\n").unwrap();
        fs::write(dir.path().join("c_ok.csv"), "Latency (ms)\n1\n2\n3\n4\n5\n").unwrap();

        let cfg = AnalysisConfig {
            results_dir: dir.path().to_path_buf(),
            column: LATENCY_COLUMN.to_string(),
        };
        let Analysis::Reports(reports) = analyze_dir(&cfg) else {
            panic!("expected reports");
        };
        let names: Vec<&str> = reports.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["a_bad.csv", "b_empty.csv", "c_ok.csv"]);

        assert!(matches!(reports[0].outcome, FileOutcome::Failed { .. }));
        assert_eq!(
            reports[1].outcome,
            FileOutcome::Analyzed {
                sample_size: 0,
                summary: None
            }
        );
        match &reports[2].outcome {
            FileOutcome::Analyzed {
                sample_size: 5,
                summary: Some(s),
            } => assert!((s.mean_ms - 3.0).abs() < 1e-12),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn empty_dir_has_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AnalysisConfig {
            results_dir: dir.path().to_path_buf(),
            ..AnalysisConfig::default()
        };
        assert!(matches!(analyze_dir(&cfg), Analysis::NoFiles));
    }
}
