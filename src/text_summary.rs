//! Text summary builder for the latency report.
//!
//! This module formats per-file statistics into human-readable lines.

use crate::model::{FileOutcome, FileReport};

const TITLE: &str = "Latency Analysis Results";
const BANNER_WIDTH: usize = 70;

/// Pre-formatted lines for text output.
pub struct TextSummary {
    pub lines: Vec<String>,
}

/// Build the report for a batch of already processed logs.
///
/// Reports are printed sorted by file name whatever order they arrive in.
pub fn build_text_summary(reports: &[FileReport]) -> TextSummary {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut lines = vec![TITLE.to_string(), banner.clone()];

    let mut ordered: Vec<&FileReport> = reports.iter().collect();
    ordered.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    for report in &ordered {
        lines.push(String::new());
        lines.push(format!("File: {}", report.file_name));
        match &report.outcome {
            FileOutcome::Analyzed {
                sample_size,
                summary: Some(s),
            } => {
                lines.push(format!("  Sample size: {sample_size}"));
                lines.push(format!("  Average latency: {:.4} ms", s.mean_ms));
                lines.push(format!("  99th percentile: {:.4} ms", s.p99_ms));
                lines.push(format!("  99.999th percentile: {:.4} ms", s.p99_999_ms));
            }
            FileOutcome::Analyzed {
                sample_size,
                summary: None,
            } => {
                lines.push(format!("  Sample size: {sample_size}"));
                lines.push("  No data".to_string());
            }
            FileOutcome::Failed { reason } => {
                lines.push(format!("  Error: {reason}"));
            }
        }
    }

    if !reports.iter().any(FileReport::has_stats) {
        lines.push(String::new());
        lines.push(format!(
            "No latency statistics could be computed from {} file(s)",
            reports.len()
        ));
    }

    lines.push(String::new());
    lines.push(banner);
    TextSummary { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StatsSummary;

    fn analyzed(name: &str, summary: Option<StatsSummary>, n: usize) -> FileReport {
        FileReport {
            file_name: name.to_string(),
            outcome: FileOutcome::Analyzed {
                sample_size: n,
                summary,
            },
        }
    }

    #[test]
    fn formats_sorted_blocks() {
        let reports = vec![
            FileReport {
                file_name: "b.csv".to_string(),
                outcome: FileOutcome::Failed {
                    reason: "missing column 'Latency (ms)'".to_string(),
                },
            },
            analyzed(
                "a.csv",
                Some(StatsSummary {
                    mean_ms: 3.0,
                    p99_ms: 4.96,
                    p99_999_ms: 4.99996,
                }),
                5,
            ),
            analyzed("c.csv", None, 0),
        ];
        let text = build_text_summary(&reports).lines.join("\n");
        let banner = "=".repeat(70);
        let expected = format!(
            "Latency Analysis Results\n{banner}\n\
             \nFile: a.csv\n  Sample size: 5\n  Average latency: 3.0000 ms\n  \
             99th percentile: 4.9600 ms\n  99.999th percentile: 5.0000 ms\n\
             \nFile: b.csv\n  Error: missing column 'Latency (ms)'\n\
             \nFile: c.csv\n  Sample size: 0\n  No data\n\
             \n{banner}"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn flags_batch_without_stats() {
        let reports = vec![analyzed("empty.csv", None, 0)];
        let lines = build_text_summary(&reports).lines;
        assert!(lines
            .iter()
            .any(|l| l == "No latency statistics could be computed from 1 file(s)"));
        assert_eq!(lines.last().map(String::len), Some(70));
    }
}
