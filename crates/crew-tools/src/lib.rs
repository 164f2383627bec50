//! Dataset Tools for a Data-Science Agent Crew
//!
//! The analyst agent of a planner / analyst / modeler / report-writer crew
//! needs two things from a CSV: what it looks like and what its numbers say.
//! This library provides both as tools returning plain text, built on Polars.
//!
//! # Overview
//!
//! - **CSV inspection**: shape, column names, inferred types, sample rows
//! - **Column classification**: every column is either numeric or categorical
//! - **Numeric statistics**: count, mean, median, sample std, quartiles
//!   (linear interpolation), min/max, missing values, IQR outliers
//! - **Categorical statistics**: cardinality, mode, top values with
//!   first-seen tie-breaking
//! - **Data quality**: completeness and duplicate rows
//! - **Tool calls**: JSON function-calling definitions and dispatch
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use crew_tools::{AnalysisConfig, csv_reader_tool, data_stats_tool};
//!
//! let config = AnalysisConfig::default();
//!
//! // Plain-text reports; errors come back as text too
//! println!("{}", csv_reader_tool("data/churn.csv", Some(5), &config));
//! println!("{}", data_stats_tool("data/churn.csv", &config));
//! ```
//!
//! # Typed Results
//!
//! ```rust,ignore
//! use crew_tools::{AnalysisConfig, analyze_csv};
//!
//! let stats = analyze_csv("data/churn.csv", &AnalysisConfig::default())?;
//! for (name, summary) in stats.numeric_summaries() {
//!     println!("{}: {} outliers", name, summary.outlier_count);
//! }
//! ```
//!
//! # Tool Calls
//!
//! ```rust,ignore
//! use crew_tools::ToolExecutor;
//!
//! let executor = ToolExecutor::default();
//! let result = executor.execute_json(
//!     r#"{"function": {"name": "data_stats_tool", "arguments": {"csv_path": "data.csv"}}}"#,
//! );
//! println!("{}", result.output);
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod profiler;
pub mod quality;
pub mod reporting;
pub mod tools;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use config::{AnalysisConfig, AnalysisConfigBuilder, ConfigValidationError};
pub use error::{Result as ToolsResult, ResultExt, ToolError, ToolOperation};
pub use loader::{Dataset, load_csv, load_csv_from_str};
pub use profiler::DataProfiler;
pub use quality::DataQualityAnalyzer;
pub use reporting::ReportFormatter;
pub use tools::{
    ToolCall, ToolDefinition, ToolExecutor, ToolResult, analyze_csv, compute_statistics,
    csv_reader_tool, data_stats_tool, inspect_dataset, read_csv_info,
};
pub use types::{
    CategoricalSummary, ColumnDescriptor, ColumnKind, ColumnSummary, DatasetInfo,
    DatasetStatistics, MissingValues, NumericSummary, QualitySummary, SummaryStats,
    ValueFrequency,
};
