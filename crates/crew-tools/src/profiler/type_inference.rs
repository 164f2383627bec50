//! Column classification.
//!
//! The CSV reader infers one dtype per column from the rows it scans; this
//! pass maps each dtype onto a [`ColumnKind`] so the rest of the crate can
//! branch on a closed set instead of inspecting dtypes again.

use crate::error::Result;
use crate::types::{ColumnDescriptor, ColumnKind};
use crate::utils::{dtype_label, is_numeric_dtype};
use polars::prelude::*;
use tracing::debug;

/// Integer and float dtypes are numeric; strings, booleans and anything
/// else the reader produces are categorical.
pub(crate) fn classify_dtype(dtype: &DataType) -> ColumnKind {
    if is_numeric_dtype(dtype) {
        ColumnKind::Numeric
    } else {
        ColumnKind::Categorical
    }
}

/// Every cell missing, with at least one row. The reader types such a column
/// as `str`; it is reported as an empty numeric column.
fn is_entirely_missing(col: &Column) -> bool {
    !col.is_empty() && col.null_count() == col.len()
}

/// Classify every column of a frame, preserving column order.
pub(crate) fn classify_columns(df: &DataFrame) -> Result<Vec<ColumnDescriptor>> {
    let descriptors: Vec<ColumnDescriptor> = df
        .get_columns()
        .iter()
        .map(|col| {
            let dtype = col.dtype();
            let kind = if is_entirely_missing(col) {
                ColumnKind::Numeric
            } else {
                classify_dtype(dtype)
            };
            ColumnDescriptor {
                name: col.name().to_string(),
                dtype: dtype_label(dtype),
                kind,
            }
        })
        .collect();

    debug!(
        "Classified {} columns ({} numeric)",
        descriptors.len(),
        descriptors
            .iter()
            .filter(|d| d.kind == ColumnKind::Numeric)
            .count()
    );

    Ok(descriptors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_dtype() {
        assert_eq!(classify_dtype(&DataType::Int64), ColumnKind::Numeric);
        assert_eq!(classify_dtype(&DataType::Float32), ColumnKind::Numeric);
        assert_eq!(classify_dtype(&DataType::String), ColumnKind::Categorical);
        assert_eq!(classify_dtype(&DataType::Boolean), ColumnKind::Categorical);
    }

    #[test]
    fn test_classify_columns_preserves_order() {
        let df = df!(
            "id" => &[1i64, 2, 3],
            "name" => &["a", "b", "c"],
            "flag" => &[true, false, true],
            "score" => &[0.5f64, 1.5, 2.5]
        )
        .unwrap();

        let descriptors = classify_columns(&df).unwrap();
        let summary: Vec<(&str, ColumnKind)> = descriptors
            .iter()
            .map(|d| (d.name.as_str(), d.kind))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("id", ColumnKind::Numeric),
                ("name", ColumnKind::Categorical),
                ("flag", ColumnKind::Categorical),
                ("score", ColumnKind::Numeric),
            ]
        );
        assert_eq!(descriptors[0].dtype, "i64");
        assert_eq!(descriptors[1].dtype, "str");
    }

    #[test]
    fn test_entirely_missing_column_is_numeric() {
        let df = df!(
            "id" => &[1i64, 2],
            "empty" => &[None::<&str>, None]
        )
        .unwrap();

        let descriptors = classify_columns(&df).unwrap();
        assert_eq!(descriptors[1].kind, ColumnKind::Numeric);
    }

    #[test]
    fn test_header_only_column_stays_categorical() {
        let df = df!("empty" => Vec::<&str>::new()).unwrap();
        let descriptors = classify_columns(&df).unwrap();
        assert_eq!(descriptors[0].kind, ColumnKind::Categorical);
    }
}
