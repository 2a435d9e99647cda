//! Latency statistics: mean and interpolated tail percentiles.
//!
//! Percentiles use linear interpolation between order statistics over the
//! closed range `[min, max]`: for `n` intervals and sorted data `x` with
//! `m = len - 1`, cut point `i` sits at `x[j] + (x[j+1] - x[j]) * delta / n`
//! where `j, delta = divmod(i * m, n)`. Small sample sets still get a
//! deterministic answer, and every cut point stays inside the data range.

use crate::model::StatsSummary;

/// Quantile resolution and cut index for the 99th percentile.
const P99: (usize, usize) = (100, 98);
/// Quantile resolution and cut index for the 99.999th percentile.
const P99_999: (usize, usize) = (100_000, 99_998);

/// Ascending copy of the samples; `None` when any sample is NaN.
fn sorted_copy(samples: &[f64]) -> Option<Vec<f64>> {
    if samples.iter().any(|v| v.is_nan()) {
        return None;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    Some(sorted)
}

/// Mean of already sorted samples. Summing in sorted order makes the result
/// independent of the input permutation.
fn mean_of_sorted(sorted: &[f64]) -> Option<f64> {
    let (first, last) = (*sorted.first()?, *sorted.last()?);
    let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;
    Some(mean.clamp(first, last))
}

/// Cut point `i` (1-based, `1..n`) of `n` equal-probability intervals.
fn cut_point(sorted: &[f64], n: usize, i: usize) -> f64 {
    debug_assert!(!sorted.is_empty() && i >= 1 && i < n);
    if sorted.len() == 1 {
        return sorted[0];
    }
    // Exact integer index math; only the final blend is floating point.
    let scaled = i as u128 * (sorted.len() - 1) as u128;
    let j = (scaled / n as u128) as usize;
    let delta = (scaled % n as u128) as f64;
    let (lo, hi) = (sorted[j], sorted[j + 1]);
    let interpolated = (lo * (n as f64 - delta) + hi * delta) / n as f64;
    interpolated.clamp(lo, hi)
}

/// Arithmetic mean; `None` for an empty set or one containing NaN.
pub fn mean(samples: &[f64]) -> Option<f64> {
    mean_of_sorted(&sorted_copy(samples)?)
}

/// The `n - 1` cut points dividing the samples into `n` intervals of equal
/// probability. `None` for an empty set, a set containing NaN, or `n == 0`.
pub fn quantiles(samples: &[f64], n: usize) -> Option<Vec<f64>> {
    if samples.is_empty() || n == 0 {
        return None;
    }
    let sorted = sorted_copy(samples)?;
    Some((1..n).map(|i| cut_point(&sorted, n, i)).collect())
}

/// Compute mean, p99 and p99.999 from one sample set.
pub fn calculate_stats(samples: &[f64]) -> Option<StatsSummary> {
    let sorted = sorted_copy(samples)?;
    let mean_ms = mean_of_sorted(&sorted)?;
    let (n, idx) = P99;
    let p99_ms = cut_point(&sorted, n, idx + 1);
    let (n, idx) = P99_999;
    let p99_999_ms = cut_point(&sorted, n, idx + 1);
    Some(StatsSummary {
        mean_ms,
        p99_ms,
        p99_999_ms,
    })
}
