use crate::reporting::table::render_table;
use crate::types::{
    CategoricalSummary, ColumnKind, DatasetInfo, DatasetStatistics, NumericSummary,
};
use crate::utils::{format_percentage, format_stat};

const RULE_WIDTH: usize = 80;

/// Renders tool results as plain text.
#[derive(Debug, Clone, Copy)]
pub struct ReportFormatter {
    precision: usize,
    top_values: usize,
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self {
            precision: 4,
            top_values: 5,
        }
    }
}

impl ReportFormatter {
    pub fn new(precision: usize, top_values: usize) -> Self {
        Self {
            precision,
            top_values,
        }
    }

    fn heavy_rule() -> String {
        "=".repeat(RULE_WIDTH)
    }

    fn light_rule() -> String {
        "-".repeat(RULE_WIDTH)
    }

    fn section(lines: &mut Vec<String>, title: &str) {
        lines.push(format!("\n{}", Self::light_rule()));
        lines.push(title.to_string());
        lines.push(Self::light_rule());
    }

    /// Render the statistics report.
    pub fn render_statistics(&self, stats: &DatasetStatistics) -> String {
        let mut lines = Vec::new();
        lines.push(Self::heavy_rule());
        lines.push("STATISTICAL ANALYSIS".to_string());
        lines.push(Self::heavy_rule());
        lines.push(format!("\nDataset: {}", stats.source.display()));
        lines.push(format!("Total Rows: {}", stats.rows));
        lines.push(format!("Total Columns: {}", stats.columns.len()));
        lines.push(format!(
            "Numerical Columns: {}",
            stats.count_of_kind(ColumnKind::Numeric)
        ));
        lines.push(format!(
            "Categorical Columns: {}",
            stats.count_of_kind(ColumnKind::Categorical)
        ));

        self.render_missing(&mut lines, stats);
        self.render_numeric(&mut lines, stats);
        self.render_categorical(&mut lines, stats);
        self.render_quality(&mut lines, stats);

        lines.push(format!("\n{}\n", Self::heavy_rule()));
        lines.join("\n")
    }

    fn render_missing(&self, lines: &mut Vec<String>, stats: &DatasetStatistics) {
        Self::section(lines, "MISSING VALUES ANALYSIS");

        let with_missing: Vec<_> = stats.missing_values.iter().filter(|m| m.count > 0).collect();
        if with_missing.is_empty() {
            lines.push("\n✓ No missing values detected in the dataset".to_string());
            return;
        }

        lines.push("\nColumns with missing values:".to_string());
        for missing in with_missing {
            lines.push(format!(
                "  • {}: {} ({})",
                missing.column,
                missing.count,
                format_percentage(missing.percentage)
            ));
        }
    }

    fn render_numeric(&self, lines: &mut Vec<String>, stats: &DatasetStatistics) {
        let mut columns = stats.numeric_summaries().peekable();
        if columns.peek().is_none() {
            return;
        }

        Self::section(lines, "NUMERICAL VARIABLES STATISTICS");
        lines.push(String::new());
        for (name, summary) in columns {
            lines.extend(self.numeric_block(name, summary));
        }
    }

    fn numeric_block(&self, name: &str, s: &NumericSummary) -> Vec<String> {
        let p = self.precision;
        vec![
            format!("\n{}:", name),
            format!("  Count:    {}", s.count),
            format!("  Mean:     {}", format_stat(s.mean, p)),
            format!("  Median:   {}", format_stat(s.median, p)),
            format!("  Std Dev:  {}", format_stat(s.std_dev, p)),
            format!("  Min:      {}", format_stat(s.min, p)),
            format!("  Q1 (25%): {}", format_stat(s.q1, p)),
            format!("  Q2 (50%): {}", format_stat(s.q2, p)),
            format!("  Q3 (75%): {}", format_stat(s.q3, p)),
            format!("  Max:      {}", format_stat(s.max, p)),
            format!("  Missing:  {}", s.missing),
            format!(
                "  Outliers: {} ({})",
                s.outlier_count,
                format_percentage(s.outlier_percentage)
            ),
            format!(
                "  IQR Fences: [{}, {}]",
                format_stat(s.lower_fence, p),
                format_stat(s.upper_fence, p)
            ),
        ]
    }

    fn render_categorical(&self, lines: &mut Vec<String>, stats: &DatasetStatistics) {
        let mut columns = stats.categorical_summaries().peekable();
        if columns.peek().is_none() {
            return;
        }

        Self::section(lines, "CATEGORICAL VARIABLES STATISTICS");
        lines.push(String::new());
        for (name, summary) in columns {
            lines.extend(self.categorical_block(name, summary));
        }
    }

    fn categorical_block(&self, name: &str, s: &CategoricalSummary) -> Vec<String> {
        let mut block = vec![
            format!("\n{}:", name),
            format!("  Count:           {}", s.count),
            format!("  Unique Values:   {}", s.unique),
            format!(
                "  Most Frequent:   '{}' ({} occurrences)",
                s.mode.as_deref().unwrap_or("N/A"),
                s.mode_count
            ),
            format!("  Missing:         {}", s.missing),
            format!("  Top {} Values:", self.top_values),
        ];
        for (i, freq) in s.top_values.iter().enumerate() {
            block.push(format!(
                "    {}. '{}': {} ({})",
                i + 1,
                freq.value,
                freq.count,
                format_percentage(freq.percentage)
            ));
        }
        block
    }

    fn render_quality(&self, lines: &mut Vec<String>, stats: &DatasetStatistics) {
        let q = &stats.quality;
        Self::section(lines, "DATA QUALITY SUMMARY");

        let completeness = q
            .completeness
            .map(format_percentage)
            .unwrap_or_else(|| "N/A".to_string());
        lines.push(format!("\nData Completeness: {}", completeness));
        lines.push(format!("Total Cells: {}", q.total_cells));
        lines.push(format!("Missing Cells: {}", q.missing_cells));
        lines.push(format!("Complete Cells: {}", q.complete_cells));
        lines.push(format!(
            "\nDuplicate Rows: {} ({})",
            q.duplicate_rows,
            format_percentage(q.duplicate_percentage)
        ));
    }

    /// Render the structural inspection report.
    pub fn render_info(&self, info: &DatasetInfo) -> String {
        let mut lines = Vec::new();
        lines.push(Self::heavy_rule());
        lines.push("CSV FILE INFORMATION".to_string());
        lines.push(Self::heavy_rule());
        lines.push(format!("\nFile: {}", info.source.display()));
        lines.push(format!(
            "Dataset Shape: {} rows × {} columns",
            info.rows,
            info.columns.len()
        ));

        Self::section(&mut lines, "COLUMNS AND DATA TYPES:");
        for (i, column) in info.columns.iter().enumerate() {
            lines.push(format!(
                "{:3}. {:30} - {} ({})",
                i + 1,
                column.name,
                column.dtype,
                column.kind.as_str()
            ));
        }

        Self::section(
            &mut lines,
            &format!("SAMPLE ROWS (first {}):", info.sample_size),
        );
        lines.push(render_table(&info.sample_header, &info.sample));
        lines.push(format!("\n{}", Self::heavy_rule()));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        ColumnDescriptor, ColumnSummary, MissingValues, QualitySummary, SummaryStats,
        ValueFrequency,
    };
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn numeric_summary() -> NumericSummary {
        NumericSummary {
            count: 5,
            mean: Some(22.0),
            median: Some(3.0),
            std_dev: Some(43.6),
            min: Some(1.0),
            q1: Some(2.0),
            q2: Some(3.0),
            q3: Some(4.0),
            max: Some(100.0),
            missing: 0,
            outlier_count: 1,
            outlier_percentage: 20.0,
            lower_fence: Some(-1.0),
            upper_fence: Some(7.0),
        }
    }

    fn stats(missing: usize) -> DatasetStatistics {
        DatasetStatistics {
            source: PathBuf::from("data/x.csv"),
            rows: 5,
            columns: vec![
                ColumnDescriptor {
                    name: "value".to_string(),
                    dtype: "i64".to_string(),
                    kind: ColumnKind::Numeric,
                },
                ColumnDescriptor {
                    name: "grade".to_string(),
                    dtype: "str".to_string(),
                    kind: ColumnKind::Categorical,
                },
            ],
            missing_values: vec![
                MissingValues {
                    column: "value".to_string(),
                    count: 0,
                    percentage: 0.0,
                },
                MissingValues {
                    column: "grade".to_string(),
                    count: missing,
                    percentage: missing as f64 * 20.0,
                },
            ],
            summaries: vec![
                ColumnSummary {
                    name: "value".to_string(),
                    stats: SummaryStats::Numeric(numeric_summary()),
                },
                ColumnSummary {
                    name: "grade".to_string(),
                    stats: SummaryStats::Categorical(CategoricalSummary {
                        count: 5 - missing,
                        unique: 1,
                        mode: Some("A".to_string()),
                        mode_count: 5 - missing,
                        missing,
                        top_values: vec![ValueFrequency {
                            value: "A".to_string(),
                            count: 5 - missing,
                            percentage: (5 - missing) as f64 * 20.0,
                        }],
                    }),
                },
            ],
            quality: QualitySummary {
                total_cells: 10,
                missing_cells: missing,
                complete_cells: 10 - missing,
                completeness: Some((10 - missing) as f64 * 10.0),
                duplicate_rows: 0,
                duplicate_percentage: 0.0,
            },
        }
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let text = ReportFormatter::default().render_statistics(&stats(0));
        let order = [
            "STATISTICAL ANALYSIS",
            "MISSING VALUES ANALYSIS",
            "NUMERICAL VARIABLES STATISTICS",
            "CATEGORICAL VARIABLES STATISTICS",
            "DATA QUALITY SUMMARY",
        ];
        let positions: Vec<usize> = order.iter().map(|t| text.find(t).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_no_missing_values_message() {
        let text = ReportFormatter::default().render_statistics(&stats(0));
        assert!(text.contains("✓ No missing values detected in the dataset"));
        assert!(text.contains("Data Completeness: 100.00%"));
    }

    #[test]
    fn test_missing_values_listed() {
        let text = ReportFormatter::default().render_statistics(&stats(1));
        assert!(text.contains("Columns with missing values:"));
        assert!(text.contains("  • grade: 1 (20.00%)"));
        assert!(!text.contains("  • value:"));
        assert!(text.contains("Data Completeness: 90.00%"));
    }

    #[test]
    fn test_numeric_block_lines() {
        let block = ReportFormatter::default().numeric_block("value", &numeric_summary());
        assert_eq!(block[0], "\nvalue:");
        assert_eq!(block[6], "  Q1 (25%): 2.0000");
        assert_eq!(block[11], "  Outliers: 1 (20.00%)");
        assert_eq!(block[12], "  IQR Fences: [-1.0000, 7.0000]");
    }

    #[test]
    fn test_precision_applies() {
        let block = ReportFormatter::new(1, 5).numeric_block("value", &numeric_summary());
        assert_eq!(block[2], "  Mean:     22.0");
    }

    #[test]
    fn test_categorical_block_lines() {
        let summary = CategoricalSummary {
            count: 4,
            unique: 3,
            mode: Some("A".to_string()),
            mode_count: 2,
            missing: 0,
            top_values: vec![
                ValueFrequency {
                    value: "A".to_string(),
                    count: 2,
                    percentage: 50.0,
                },
                ValueFrequency {
                    value: "B".to_string(),
                    count: 1,
                    percentage: 25.0,
                },
            ],
        };
        let block = ReportFormatter::default().categorical_block("grade", &summary);
        assert_eq!(
            block,
            vec![
                "\ngrade:".to_string(),
                "  Count:           4".to_string(),
                "  Unique Values:   3".to_string(),
                "  Most Frequent:   'A' (2 occurrences)".to_string(),
                "  Missing:         0".to_string(),
                "  Top 5 Values:".to_string(),
                "    1. 'A': 2 (50.00%)".to_string(),
                "    2. 'B': 1 (25.00%)".to_string(),
            ]
        );
    }

    #[test]
    fn test_completeness_na_without_cells() {
        let mut s = stats(0);
        s.quality.completeness = None;
        let text = ReportFormatter::default().render_statistics(&s);
        assert!(text.contains("Data Completeness: N/A"));
    }

    #[test]
    fn test_render_info() {
        let info = DatasetInfo {
            source: PathBuf::from("data/x.csv"),
            rows: 3,
            columns: vec![ColumnDescriptor {
                name: "id".to_string(),
                dtype: "i64".to_string(),
                kind: ColumnKind::Numeric,
            }],
            sample_size: 2,
            sample_header: vec!["id".to_string()],
            sample: vec![vec![Some("1".to_string())], vec![Some("2".to_string())]],
        };
        let text = ReportFormatter::default().render_info(&info);

        assert!(text.contains("Dataset Shape: 3 rows × 1 columns"));
        assert!(text.contains(&format!("  1. {:30} - i64 (numeric)", "id")));
        assert!(text.contains("SAMPLE ROWS (first 2):"));
        assert!(text.contains("id\n 1\n 2"));
    }
}
