//! Descriptive statistics for numeric columns.

use crate::types::NumericSummary;
use crate::utils::{NumericColumn, percentage};
use polars::prelude::*;

/// Summarize one numeric column.
///
/// `total_rows` is the dataset height (missing values included) and is the
/// denominator of the outlier percentage.
pub(crate) fn summarize_numeric(
    column: &NumericColumn,
    total_rows: usize,
    iqr_multiplier: f64,
) -> NumericSummary {
    let values = &column.values;
    let mut sorted = values.clone();
    sorted.sort_by(f64::total_cmp);

    let q1 = quantile(&sorted, 0.25);
    let q2 = quantile(&sorted, 0.50);
    let q3 = quantile(&sorted, 0.75);

    let fences = iqr_fences(q1, q3, iqr_multiplier);
    let outlier_count = fences
        .map(|(lower, upper)| count_outliers(values, lower, upper))
        .unwrap_or(0);

    NumericSummary {
        count: values.len(),
        mean: mean(values),
        median: q2,
        std_dev: sample_std(values),
        min: sorted.first().copied(),
        q1,
        q2,
        q3,
        max: sorted.last().copied(),
        missing: column.missing,
        outlier_count,
        outlier_percentage: percentage(outlier_count, total_rows),
        lower_fence: fences.map(|(lower, _)| lower),
        upper_fence: fences.map(|(_, upper)| upper),
    }
}

fn as_chunked(values: &[f64]) -> Float64Chunked {
    Float64Chunked::from_slice("values".into(), values)
}

/// Arithmetic mean, `None` for an empty slice.
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    as_chunked(values).mean()
}

/// Sample standard deviation (n - 1 denominator), `None` below two values.
pub(crate) fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    as_chunked(values).std(1)
}

/// Quantile of sorted values using linear interpolation between the order
/// statistics around position `p * (n - 1)`.
pub(crate) fn quantile(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let position = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = position.floor() as usize;
    let hi = position.ceil() as usize;
    if lo == hi {
        return Some(sorted[lo]);
    }
    let frac = position - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Tukey fences `(Q1 - k*IQR, Q3 + k*IQR)`.
pub(crate) fn iqr_fences(q1: Option<f64>, q3: Option<f64>, multiplier: f64) -> Option<(f64, f64)> {
    let (q1, q3) = (q1?, q3?);
    let iqr = q3 - q1;
    Some((q1 - multiplier * iqr, q3 + multiplier * iqr))
}

/// Values strictly outside the fences.
pub(crate) fn count_outliers(values: &[f64], lower: f64, upper: f64) -> usize {
    values.iter().filter(|&&v| v < lower || v > upper).count()
}
