//! Latency log discovery and parsing.

use crate::error::{LoadError, Result};
use crate::model::SampleSet;
use std::path::{Path, PathBuf};

/// List the `*.csv` files directly inside `dir`, sorted by path. Hidden
/// files (leading `.`) are not matched.
///
/// A missing or unreadable directory simply yields no files; callers report
/// the empty batch themselves.
pub fn discover_csv_files(dir: &Path) -> Vec<PathBuf> {
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = Path::new(&escaped).join("*.csv");
    let options = glob::MatchOptions {
        require_literal_leading_dot: true,
        ..glob::MatchOptions::new()
    };
    let entries = match glob::glob_with(&pattern.to_string_lossy(), options) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("invalid log pattern {}: {e}", pattern.display());
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    log::debug!("found {} log file(s) in {}", files.len(), dir.display());
    files
}

/// Base name of a log for display, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read every value of `column` from the CSV at `path`.
///
/// The column is looked up once in the header row. A file with a header and
/// no data rows gives an empty sample set.
pub fn read_latency_csv(path: &Path, column: &str) -> Result<SampleSet> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let idx = reader
        .headers()?
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| LoadError::MissingColumn {
            column: column.to_string(),
        })?;

    let mut samples = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        let raw = record.get(idx).ok_or_else(|| LoadError::MissingField {
            line,
            column: column.to_string(),
        })?;
        let value: f64 = raw.parse().map_err(|_| LoadError::InvalidValue {
            line,
            value: raw.to_string(),
        })?;
        if !value.is_finite() || value < 0.0 {
            return Err(LoadError::OutOfRange { line, value });
        }
        samples.push(value);
    }

    log::debug!("{}: {} sample(s)", path.display(), samples.len());
    Ok(SampleSet::new(samples))
}
