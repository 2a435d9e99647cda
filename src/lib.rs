//! Latency statistics and throughput-vs-latency plots for benchmark logs.
//!
//! Both tools share one pipeline: discover `*.csv` logs in a directory, load
//! the latency column of each file, and summarise every file on its own.
//! `latency-report` prints mean, p99 and p99.999 per log; `throughput-plot`
//! charts average latency against the throughput encoded in each log name.

pub mod chart;
pub mod cli;
pub mod error;
pub mod loader;
pub mod metrics;
pub mod model;
pub mod orchestrator;
pub mod text_summary;
pub mod throughput;
