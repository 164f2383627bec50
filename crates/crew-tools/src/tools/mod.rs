//! Tool entry points for the agent crew.
//!
//! [`csv_reader_tool`] and [`data_stats_tool`] are what the orchestration
//! framework calls. They always return a `String`: on failure the string is
//! the error description, so the calling agent sees it as tool output
//! instead of the run crashing.
//!
//! [`inspect_dataset`] and [`compute_statistics`] expose the same results as
//! typed records for library callers and the CLI's JSON mode.

mod definitions;
mod executor;

pub use definitions::{FunctionDefinition, ToolDefinition, tool_definitions};
pub use executor::{FunctionCall, ToolCall, ToolExecutor, ToolResult};

use crate::config::AnalysisConfig;
use crate::error::{Result, ToolOperation};
use crate::loader::{Dataset, load_csv};
use crate::profiler::DataProfiler;
use crate::quality::DataQualityAnalyzer;
use crate::reporting::ReportFormatter;
use crate::types::{DatasetInfo, DatasetStatistics};
use crate::utils::string_values;
use std::path::Path;
use tracing::warn;

/// Name under which the inspection tool is registered.
pub const CSV_READER_TOOL: &str = "csv_reader_tool";
/// Name under which the statistics tool is registered.
pub const DATA_STATS_TOOL: &str = "data_stats_tool";

/// Compute every statistic reported by [`data_stats_tool`].
pub fn compute_statistics(dataset: &Dataset, config: &AnalysisConfig) -> Result<DatasetStatistics> {
    let summaries = DataProfiler::profile_columns(dataset, config)?;
    let missing_values = DataQualityAnalyzer::missing_values(dataset, &summaries);
    let quality = DataQualityAnalyzer::summarize(dataset, &summaries)?;

    Ok(DatasetStatistics {
        source: dataset.source().to_path_buf(),
        rows: dataset.height(),
        columns: dataset.columns().to_vec(),
        missing_values,
        summaries,
        quality,
    })
}

/// Shape, column types and the first `sample_rows` rows (clipped to the
/// dataset height).
pub fn inspect_dataset(dataset: &Dataset, sample_rows: usize) -> Result<DatasetInfo> {
    let sample_size = sample_rows.min(dataset.height());
    let head = dataset.frame().head(Some(sample_size));

    let mut columns_text = Vec::with_capacity(head.width());
    for column in head.get_columns() {
        columns_text.push(string_values(column.as_materialized_series())?);
    }
    let sample = (0..sample_size)
        .map(|row| columns_text.iter().map(|col| col[row].clone()).collect())
        .collect();

    Ok(DatasetInfo {
        source: dataset.source().to_path_buf(),
        rows: dataset.height(),
        columns: dataset.columns().to_vec(),
        sample_size,
        sample_header: dataset.columns().iter().map(|c| c.name.clone()).collect(),
        sample,
    })
}

/// Load a CSV and compute its statistics.
pub fn analyze_csv(path: impl AsRef<Path>, config: &AnalysisConfig) -> Result<DatasetStatistics> {
    let dataset = load_csv(path, config)?;
    compute_statistics(&dataset, config)
}

/// Load a CSV and inspect its structure. `sample_rows` falls back to the
/// configured default.
pub fn read_csv_info(
    path: impl AsRef<Path>,
    sample_rows: Option<usize>,
    config: &AnalysisConfig,
) -> Result<DatasetInfo> {
    let dataset = load_csv(path, config)?;
    inspect_dataset(&dataset, sample_rows.unwrap_or(config.sample_rows))
}

fn formatter(config: &AnalysisConfig) -> ReportFormatter {
    ReportFormatter::new(config.float_precision, config.top_values)
}

/// Statistics report for a CSV file, or an error description.
pub fn data_stats_tool(path: impl AsRef<Path>, config: &AnalysisConfig) -> String {
    let path = path.as_ref();
    match analyze_csv(path, config) {
        Ok(stats) => formatter(config).render_statistics(&stats),
        Err(e) => {
            warn!("{} failed for {}: {}", DATA_STATS_TOOL, path.display(), e);
            e.to_tool_output(ToolOperation::Statistics)
        }
    }
}

/// Structural inspection of a CSV file, or an error description.
pub fn csv_reader_tool(
    path: impl AsRef<Path>,
    sample_rows: Option<usize>,
    config: &AnalysisConfig,
) -> String {
    let path = path.as_ref();
    match read_csv_info(path, sample_rows, config) {
        Ok(info) => formatter(config).render_info(&info),
        Err(e) => {
            warn!("{} failed for {}: {}", CSV_READER_TOOL, path.display(), e);
            e.to_tool_output(ToolOperation::ReadCsv)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_csv_from_str;
    use crate::types::SummaryStats;

    fn dataset(csv: &str) -> Dataset {
        load_csv_from_str("mem.csv", csv, &AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn test_compute_statistics_counts_kinds() {
        let ds = dataset("a,b,c\n1,x,2.5\n2,y,3.5\n");
        let stats = compute_statistics(&ds, &AnalysisConfig::default()).unwrap();

        assert_eq!(stats.rows, 2);
        assert_eq!(stats.numeric_summaries().count(), 2);
        assert_eq!(stats.categorical_summaries().count(), 1);
        assert_eq!(stats.quality.completeness, Some(100.0));
    }

    #[test]
    fn test_compute_statistics_on_header_only() {
        let ds = dataset("a,b\n");
        let stats = compute_statistics(&ds, &AnalysisConfig::default()).unwrap();

        assert_eq!(stats.rows, 0);
        assert_eq!(stats.quality.total_cells, 0);
        assert_eq!(stats.quality.completeness, None);
        for summary in &stats.summaries {
            match &summary.stats {
                SummaryStats::Numeric(n) => assert_eq!(n.count, 0),
                SummaryStats::Categorical(c) => assert_eq!(c.count, 0),
            }
        }
    }

    #[test]
    fn test_inspect_clips_sample_size() {
        let ds = dataset("id,name\n1,a\n2,\n3,c\n");
        let info = inspect_dataset(&ds, 10).unwrap();

        assert_eq!(info.sample_size, 3);
        assert_eq!(info.sample.len(), 3);
        assert_eq!(info.sample[1], vec![Some("2".to_string()), None]);
        assert_eq!(info.sample_header, vec!["id".to_string(), "name".to_string()]);
    }

    #[test]
    fn test_inspect_takes_first_rows() {
        let ds = dataset("id\n1\n2\n3\n4\n");
        let info = inspect_dataset(&ds, 2).unwrap();
        assert_eq!(
            info.sample,
            vec![vec![Some("1".to_string())], vec![Some("2".to_string())]]
        );
    }

    #[test]
    fn test_inspect_zero_rows() {
        let ds = dataset("a,b\n");
        let info = inspect_dataset(&ds, 5).unwrap();
        assert_eq!(info.sample_size, 0);
        assert!(info.sample.is_empty());
    }

    #[test]
    fn test_tools_return_error_string_for_missing_file() {
        let config = AnalysisConfig::default();
        let stats = data_stats_tool("no/such/file.csv", &config);
        let info = csv_reader_tool("no/such/file.csv", None, &config);

        assert_eq!(stats, "Error: File not found at no/such/file.csv");
        assert_eq!(info, "Error: File not found at no/such/file.csv");
    }
}
