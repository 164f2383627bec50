//! Shared utilities for the dataset tools.
//!
//! Dtype checks, value extraction from polars series, and the number
//! formatting used by every text report.

use polars::prelude::*;

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Short dtype name as shown in reports (`i64`, `f64`, `str`, `bool`, ...).
pub fn dtype_label(dtype: &DataType) -> String {
    dtype.to_string()
}

// =============================================================================
// Series Extraction Utilities
// =============================================================================

/// Numeric values of a series split into present values and a missing count.
///
/// Nulls and NaNs both count as missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericColumn {
    pub values: Vec<f64>,
    pub missing: usize,
}

/// Extract the non-missing values of a numeric series as `f64`, in row order.
pub fn numeric_values(series: &Series) -> PolarsResult<NumericColumn> {
    let float_series = series.cast(&DataType::Float64)?;
    let mut column = NumericColumn::default();
    for value in float_series.f64()?.into_iter() {
        match value {
            Some(v) if !v.is_nan() => column.values.push(v),
            _ => column.missing += 1,
        }
    }
    Ok(column)
}

/// Render every cell of a series as text, in row order. Nulls stay `None`.
pub fn string_values(series: &Series) -> PolarsResult<Vec<Option<String>>> {
    let str_series = series.cast(&DataType::String)?;
    Ok(str_series
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect())
}

// =============================================================================
// Formatting Utilities
// =============================================================================

/// Percentage of `part` in `total`; a zero total yields 0.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

/// Format an optional statistic with fixed precision, `N/A` when absent.
pub fn format_stat(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "N/A".to_string(),
    }
}

/// Format a percentage with two decimals and a trailing `%`.
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Truncate a string to at most `max_chars` characters, marking the cut.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric_dtype() {
        assert!(is_numeric_dtype(&DataType::Int64));
        assert!(is_numeric_dtype(&DataType::Float64));
        assert!(is_numeric_dtype(&DataType::UInt8));
        assert!(!is_numeric_dtype(&DataType::String));
        assert!(!is_numeric_dtype(&DataType::Boolean));
    }

    #[test]
    fn test_dtype_label() {
        assert_eq!(dtype_label(&DataType::Int64), "i64");
        assert_eq!(dtype_label(&DataType::Float64), "f64");
        assert_eq!(dtype_label(&DataType::String), "str");
    }

    #[test]
    fn test_numeric_values_counts_nulls_and_nans_as_missing() {
        let series = Series::new("x".into(), &[Some(1.0), None, Some(f64::NAN), Some(4.0)]);
        let column = numeric_values(&series).unwrap();
        assert_eq!(column.values, vec![1.0, 4.0]);
        assert_eq!(column.missing, 2);
    }

    #[test]
    fn test_numeric_values_from_integers() {
        let series = Series::new("x".into(), &[3i64, 1, 2]);
        let column = numeric_values(&series).unwrap();
        assert_eq!(column.values, vec![3.0, 1.0, 2.0]);
        assert_eq!(column.missing, 0);
    }

    #[test]
    fn test_string_values_keeps_nulls() {
        let series = Series::new("s".into(), &[Some("a"), None, Some("b")]);
        let values = string_values(&series).unwrap();
        assert_eq!(
            values,
            vec![Some("a".to_string()), None, Some("b".to_string())]
        );
    }

    #[test]
    fn test_string_values_from_integers() {
        let series = Series::new("n".into(), &[10i64, 20]);
        let values = string_values(&series).unwrap();
        assert_eq!(values, vec![Some("10".to_string()), Some("20".to_string())]);
    }

    #[test]
    fn test_percentage_zero_total() {
        assert_eq!(percentage(3, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
    }

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(Some(2.0), 4), "2.0000");
        assert_eq!(format_stat(Some(1.23456), 2), "1.23");
        assert_eq!(format_stat(None, 4), "N/A");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(50.0), "50.00%");
        assert_eq!(format_percentage(100.0 / 3.0), "33.33%");
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("a_very_long_column_name", 10), "a_very_...");
    }
}
