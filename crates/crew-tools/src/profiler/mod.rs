//! Column profiling.
//!
//! This module provides:
//! - Column classification into numeric and categorical kinds
//! - Numeric summaries (moments, quartiles, IQR outliers)
//! - Categorical summaries (cardinality, mode, top values)

mod frequency;
mod statistics;
mod type_inference;

use crate::config::AnalysisConfig;
use crate::error::{Result, ResultExt};
use crate::loader::Dataset;
use crate::types::{ColumnDescriptor, ColumnKind, ColumnSummary, SummaryStats};
use crate::utils::{numeric_values, string_values};
use tracing::debug;

pub(crate) use frequency::summarize_categorical;
pub(crate) use statistics::summarize_numeric;
pub(crate) use type_inference::classify_columns;

/// Per-column profiler for a loaded dataset.
pub struct DataProfiler;

impl DataProfiler {
    /// Summarize every column, in column order.
    pub fn profile_columns(dataset: &Dataset, config: &AnalysisConfig) -> Result<Vec<ColumnSummary>> {
        dataset
            .columns()
            .iter()
            .map(|descriptor| Self::profile_column(dataset, descriptor, config))
            .collect()
    }

    /// Summarize a single column according to its kind.
    pub fn profile_column(
        dataset: &Dataset,
        descriptor: &ColumnDescriptor,
        config: &AnalysisConfig,
    ) -> Result<ColumnSummary> {
        let series = dataset.series(&descriptor.name)?;
        let total_rows = dataset.height();

        let stats = match descriptor.kind {
            ColumnKind::Numeric => {
                let column = numeric_values(series)
                    .context(format!("Reading numeric column '{}'", descriptor.name))?;
                SummaryStats::Numeric(summarize_numeric(
                    &column,
                    total_rows,
                    config.iqr_multiplier,
                ))
            }
            ColumnKind::Categorical => {
                let cells = string_values(series)
                    .context(format!("Reading categorical column '{}'", descriptor.name))?;
                SummaryStats::Categorical(summarize_categorical(
                    &cells,
                    total_rows,
                    config.top_values,
                ))
            }
        };

        debug!("Profiled column '{}' as {}", descriptor.name, descriptor.kind.as_str());

        Ok(ColumnSummary {
            name: descriptor.name.clone(),
            stats,
        })
    }
}
