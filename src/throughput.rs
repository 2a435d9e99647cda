//! Throughput extraction from log file names such as `latency_100rps.csv`.

const RPS_MARKER: &str = "rps";

/// Pull the requests-per-second value out of a log name.
///
/// The name is split on `_` after dropping a `.csv` extension; the first
/// token mentioning `rps` (any case) must be a bare integer once the marker
/// is removed.
pub fn extract_throughput_from_filename(file_name: &str) -> Option<u64> {
    let stem = file_name.strip_suffix(".csv").unwrap_or(file_name);
    let token = stem
        .split('_')
        .map(str::to_ascii_lowercase)
        .find(|part| part.contains(RPS_MARKER))?;
    token.replace(RPS_MARKER, "").trim().parse().ok()
}
