use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Column holding the per-request latency in every benchmark log.
pub const LATENCY_COLUMN: &str = "Latency (ms)";

/// Directory the benchmark client writes its logs into.
pub const DEFAULT_RESULTS_DIR: &str = "../benchmark/latency_logs/";

/// File name of the throughput chart, saved next to the logs.
pub const DEFAULT_PLOT_FILE: &str = "throughput_vs_latency.png";

/// Settings shared by both tools, built once from CLI arguments.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub results_dir: PathBuf,
    pub column: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            column: LATENCY_COLUMN.to_string(),
        }
    }
}

/// Latency samples from a single log, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    samples: Vec<f64>,
}

impl SampleSet {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub mean_ms: f64,
    pub p99_ms: f64,
    pub p99_999_ms: f64,
}

/// One point of the throughput-vs-latency curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThroughputPoint {
    pub throughput_rps: u64,
    pub avg_latency_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// The log parsed; `summary` is `None` when it held no samples.
    Analyzed {
        sample_size: usize,
        summary: Option<StatsSummary>,
    },
    Failed {
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub file_name: String,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

impl FileReport {
    /// True when the log produced a numeric summary.
    pub fn has_stats(&self) -> bool {
        matches!(
            self.outcome,
            FileOutcome::Analyzed {
                summary: Some(_),
                ..
            }
        )
    }
}

/// A log the plotter left out of the series, with the reason why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub file_name: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NoThroughput,
    NoSamples,
    LoadFailed(String),
}

impl SkippedFile {
    /// Render a human-readable message for the CLI layer.
    pub fn to_message(&self) -> String {
        match &self.reason {
            SkipReason::NoThroughput => {
                format!("Warning: Could not extract throughput from {}", self.file_name)
            }
            SkipReason::NoSamples => {
                format!("Warning: No latency samples in {}", self.file_name)
            }
            SkipReason::LoadFailed(reason) => {
                format!("Error processing {}: {}", self.file_name, reason)
            }
        }
    }
}
