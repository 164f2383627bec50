use crate::error::{Result, ResultExt};
use crate::loader::Dataset;
use crate::types::{ColumnSummary, MissingValues, QualitySummary};
use crate::utils::percentage;
use polars::prelude::*;
use tracing::debug;

pub struct DataQualityAnalyzer;

impl DataQualityAnalyzer {
    /// Missing-value count and share of rows for every column, in column order.
    pub fn missing_values(dataset: &Dataset, summaries: &[ColumnSummary]) -> Vec<MissingValues> {
        let rows = dataset.height();
        summaries
            .iter()
            .map(|summary| {
                let count = summary.missing();
                MissingValues {
                    column: summary.name.clone(),
                    count,
                    percentage: percentage(count, rows),
                }
            })
            .collect()
    }

    /// Dataset-wide quality summary.
    ///
    /// Missing cells are the sum of the per-column missing counts so the
    /// figures agree with the column sections of the report.
    pub fn summarize(dataset: &Dataset, summaries: &[ColumnSummary]) -> Result<QualitySummary> {
        let total_cells = dataset.height() * dataset.width();
        let missing_cells: usize = summaries.iter().map(ColumnSummary::missing).sum();
        let complete_cells = total_cells.saturating_sub(missing_cells);

        let completeness = if total_cells > 0 {
            Some(complete_cells as f64 * 100.0 / total_cells as f64)
        } else {
            None
        };

        let duplicate_rows = Self::count_duplicate_rows(dataset.frame())?;
        debug!(
            "Quality: {} of {} cells missing, {} duplicate rows",
            missing_cells, total_cells, duplicate_rows
        );

        Ok(QualitySummary {
            total_cells,
            missing_cells,
            complete_cells,
            completeness,
            duplicate_rows,
            duplicate_percentage: percentage(duplicate_rows, dataset.height()),
        })
    }

    /// Rows equal, across every column, to an earlier row.
    pub fn count_duplicate_rows(df: &DataFrame) -> Result<usize> {
        if df.height() == 0 {
            return Ok(0);
        }
        let unique = df
            .unique::<&str, &str>(None, UniqueKeepStrategy::First, None)
            .context("Detecting duplicate rows")?;
        Ok(df.height() - unique.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::profiler::DataProfiler;

    fn analyze(df: DataFrame) -> (Dataset, Vec<ColumnSummary>) {
        let dataset = Dataset::from_frame("test.csv", df).unwrap();
        let summaries = DataProfiler::profile_columns(&dataset, &AnalysisConfig::default()).unwrap();
        (dataset, summaries)
    }

    #[test]
    fn test_complete_numeric_dataset() {
        let (ds, summaries) = analyze(df!("a" => &[1i64, 2, 3], "b" => &[0.5f64, 1.5, 2.5]).unwrap());
        let quality = DataQualityAnalyzer::summarize(&ds, &summaries).unwrap();

        assert_eq!(quality.total_cells, 6);
        assert_eq!(quality.missing_cells, 0);
        assert_eq!(quality.complete_cells, 6);
        assert_eq!(quality.completeness, Some(100.0));
        assert_eq!(quality.duplicate_rows, 0);
    }

    #[test]
    fn test_missing_cells_and_completeness() {
        let (ds, summaries) = analyze(
            df!(
                "a" => &[Some(1i64), None, Some(3), Some(4)],
                "b" => &[Some("x"), Some("y"), None, None]
            )
            .unwrap(),
        );
        let quality = DataQualityAnalyzer::summarize(&ds, &summaries).unwrap();

        assert_eq!(quality.total_cells, 8);
        assert_eq!(quality.missing_cells, 3);
        assert_eq!(quality.complete_cells, 5);
        assert_eq!(quality.completeness, Some(62.5));

        let missing = DataQualityAnalyzer::missing_values(&ds, &summaries);
        assert_eq!(missing[0].count, 1);
        assert_eq!(missing[0].percentage, 25.0);
        assert_eq!(missing[1].count, 2);
        assert_eq!(missing[1].percentage, 50.0);
    }

    #[test]
    fn test_row_present_three_times_counts_two_duplicates() {
        let df = df!(
            "id" => &[1i64, 2, 1, 3, 1],
            "label" => &["a", "b", "a", "c", "a"]
        )
        .unwrap();
        assert_eq!(DataQualityAnalyzer::count_duplicate_rows(&df).unwrap(), 2);
    }

    #[test]
    fn test_partial_match_is_not_duplicate() {
        let df = df!(
            "id" => &[1i64, 1],
            "label" => &["a", "b"]
        )
        .unwrap();
        assert_eq!(DataQualityAnalyzer::count_duplicate_rows(&df).unwrap(), 0);
    }

    #[test]
    fn test_duplicate_groups() {
        // two groups: (1,a) x2 and (2,b) x3 -> 1 + 2 duplicates
        let df = df!(
            "id" => &[1i64, 2, 1, 2, 2],
            "label" => &["a", "b", "a", "b", "b"]
        )
        .unwrap();
        assert_eq!(DataQualityAnalyzer::count_duplicate_rows(&df).unwrap(), 3);
    }

    #[test]
    fn test_null_rows_match_each_other() {
        let df = df!(
            "id" => &[Some(1i64), None, None],
            "label" => &[Some("a"), None, None]
        )
        .unwrap();
        assert_eq!(DataQualityAnalyzer::count_duplicate_rows(&df).unwrap(), 1);
    }

    #[test]
    fn test_zero_rows_is_safe() {
        let df = df!("a" => Vec::<&str>::new()).unwrap();
        let (ds, summaries) = analyze(df);
        let quality = DataQualityAnalyzer::summarize(&ds, &summaries).unwrap();

        assert_eq!(quality.total_cells, 0);
        assert_eq!(quality.completeness, None);
        assert_eq!(quality.duplicate_rows, 0);
        assert_eq!(quality.duplicate_percentage, 0.0);
    }
}
