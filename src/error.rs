//! Error types for loading latency logs

use std::path::PathBuf;
use thiserror::Error;

/// Why a single log could not be turned into a sample set.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("missing column '{column}'")]
    MissingColumn { column: String },

    #[error("line {line}: no value for column '{column}'")]
    MissingField { line: u64, column: String },

    #[error("line {line}: could not convert '{value}' to a number")]
    InvalidValue { line: u64, value: String },

    #[error("line {line}: latency {value} is not a non-negative finite number")]
    OutOfRange { line: u64, value: f64 },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, LoadError>;
