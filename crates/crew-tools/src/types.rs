use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Kind assigned to a column by the classification pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Categorical => "categorical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    /// Physical dtype as inferred by the CSV reader (`i64`, `f64`, `str`, ...).
    pub dtype: String,
    pub kind: ColumnKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Sample standard deviation; `None` with fewer than two values.
    pub std_dev: Option<f64>,
    pub min: Option<f64>,
    pub q1: Option<f64>,
    pub q2: Option<f64>,
    pub q3: Option<f64>,
    pub max: Option<f64>,
    pub missing: usize,
    pub outlier_count: usize,
    /// Percentage of all rows (missing included) flagged as outliers.
    pub outlier_percentage: f64,
    pub lower_fence: Option<f64>,
    pub upper_fence: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueFrequency {
    pub value: String,
    pub count: usize,
    /// Percentage of all rows (missing included).
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalSummary {
    pub count: usize,
    pub unique: usize,
    pub mode: Option<String>,
    pub mode_count: usize,
    pub missing: usize,
    pub top_values: Vec<ValueFrequency>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SummaryStats {
    Numeric(NumericSummary),
    Categorical(CategoricalSummary),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub stats: SummaryStats,
}

impl ColumnSummary {
    pub fn missing(&self) -> usize {
        match &self.stats {
            SummaryStats::Numeric(s) => s.missing,
            SummaryStats::Categorical(s) => s.missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingValues {
    pub column: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualitySummary {
    pub total_cells: usize,
    pub missing_cells: usize,
    pub complete_cells: usize,
    /// `None` when the dataset has no cells at all.
    pub completeness: Option<f64>,
    pub duplicate_rows: usize,
    pub duplicate_percentage: f64,
}

/// Everything the statistics tool reports about a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStatistics {
    pub source: PathBuf,
    pub rows: usize,
    pub columns: Vec<ColumnDescriptor>,
    /// One entry per column, in column order.
    pub missing_values: Vec<MissingValues>,
    /// One entry per column, in column order.
    pub summaries: Vec<ColumnSummary>,
    pub quality: QualitySummary,
}

impl DatasetStatistics {
    pub fn numeric_summaries(&self) -> impl Iterator<Item = (&str, &NumericSummary)> {
        self.summaries.iter().filter_map(|s| match &s.stats {
            SummaryStats::Numeric(n) => Some((s.name.as_str(), n)),
            SummaryStats::Categorical(_) => None,
        })
    }

    pub fn categorical_summaries(&self) -> impl Iterator<Item = (&str, &CategoricalSummary)> {
        self.summaries.iter().filter_map(|s| match &s.stats {
            SummaryStats::Categorical(c) => Some((s.name.as_str(), c)),
            SummaryStats::Numeric(_) => None,
        })
    }

    pub fn summary(&self, column: &str) -> Option<&ColumnSummary> {
        self.summaries.iter().find(|s| s.name == column)
    }

    pub fn count_of_kind(&self, kind: ColumnKind) -> usize {
        self.columns.iter().filter(|c| c.kind == kind).count()
    }
}

/// Everything the inspection tool reports about a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub source: PathBuf,
    pub rows: usize,
    pub columns: Vec<ColumnDescriptor>,
    /// Rows actually rendered (the request clipped to the dataset size).
    pub sample_size: usize,
    pub sample_header: Vec<String>,
    /// One entry per sampled row; missing cells are `None`.
    pub sample: Vec<Vec<Option<String>>>,
}
