//! Data quality analysis module.
//!
//! Dataset-wide measures: missing values per column, completeness and
//! duplicate rows.

mod analyzer;

pub use analyzer::DataQualityAnalyzer;
