//! Configuration types for the dataset tools.
//!
//! This module provides configuration options using the builder pattern
//! so callers (the CLI, the tool executor, tests) can override only what
//! they care about.

use serde::{Deserialize, Serialize};

/// Markers treated as missing values when loading a CSV, in addition to
/// empty fields.
pub const DEFAULT_NULL_VALUES: [&str; 13] = [
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "null", "NULL", "None", "#N/A", "<NA>", "-nan",
];

/// Configuration shared by the inspection and statistics tools.
///
/// Use [`AnalysisConfig::builder()`] to create a new configuration
/// with fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use crew_tools::config::AnalysisConfig;
///
/// let config = AnalysisConfig::builder()
///     .sample_rows(10)
///     .iqr_multiplier(3.0)
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of sample rows rendered by the inspection tool when the
    /// caller does not ask for a specific amount.
    /// Default: 5
    pub sample_rows: usize,

    /// Number of entries in the categorical frequency table.
    /// Default: 5
    pub top_values: usize,

    /// Multiplier applied to the IQR when computing outlier fences.
    /// Default: 1.5 (Tukey's rule)
    pub iqr_multiplier: f64,

    /// Rows scanned by the CSV reader to infer column dtypes.
    /// `None` scans the whole file.
    /// Default: None
    pub infer_schema_length: Option<usize>,

    /// Field values read as missing.
    /// Default: [`DEFAULT_NULL_VALUES`]
    pub null_values: Vec<String>,

    /// Decimal places used for floating point statistics in text reports.
    /// Default: 4
    pub float_precision: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_rows: 5,
            top_values: 5,
            iqr_multiplier: 1.5,
            infer_schema_length: None,
            null_values: DEFAULT_NULL_VALUES.iter().map(|s| s.to_string()).collect(),
            float_precision: 4,
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration builder.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !self.iqr_multiplier.is_finite() || self.iqr_multiplier < 0.0 {
            return Err(ConfigValidationError::InvalidIqrMultiplier(
                self.iqr_multiplier,
            ));
        }

        if self.top_values == 0 {
            return Err(ConfigValidationError::InvalidTopValues(self.top_values));
        }

        if self.float_precision > 12 {
            return Err(ConfigValidationError::InvalidPrecision(
                self.float_precision,
            ));
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid IQR multiplier: {0} (must be a finite, non-negative number)")]
    InvalidIqrMultiplier(f64),

    #[error("Invalid top values count: {0} (must be at least 1)")]
    InvalidTopValues(usize),

    #[error("Invalid float precision: {0} (must be at most 12)")]
    InvalidPrecision(usize),
}

/// Builder for [`AnalysisConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    sample_rows: Option<usize>,
    top_values: Option<usize>,
    iqr_multiplier: Option<f64>,
    infer_schema_length: Option<Option<usize>>,
    null_values: Option<Vec<String>>,
    float_precision: Option<usize>,
}

impl AnalysisConfigBuilder {
    /// Set the default number of sample rows for the inspection tool.
    pub fn sample_rows(mut self, rows: usize) -> Self {
        self.sample_rows = Some(rows);
        self
    }

    /// Set how many entries the categorical frequency table holds.
    pub fn top_values(mut self, count: usize) -> Self {
        self.top_values = Some(count);
        self
    }

    /// Set the IQR multiplier for outlier fences.
    ///
    /// # Arguments
    /// * `multiplier` - Non-negative factor (1.5 = Tukey's inner fences, 3.0 = outer fences)
    pub fn iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.iqr_multiplier = Some(multiplier);
        self
    }

    /// Set how many rows the reader scans to infer dtypes (`None` = all rows).
    pub fn infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = Some(rows);
        self
    }

    /// Replace the set of field values read as missing.
    pub fn null_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.null_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Set the number of decimal places for floating point statistics.
    pub fn float_precision(mut self, precision: usize) -> Self {
        self.float_precision = Some(precision);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `AnalysisConfig` or an error if validation fails.
    pub fn build(self) -> Result<AnalysisConfig, ConfigValidationError> {
        let defaults = AnalysisConfig::default();
        let config = AnalysisConfig {
            sample_rows: self.sample_rows.unwrap_or(defaults.sample_rows),
            top_values: self.top_values.unwrap_or(defaults.top_values),
            iqr_multiplier: self.iqr_multiplier.unwrap_or(defaults.iqr_multiplier),
            infer_schema_length: self
                .infer_schema_length
                .unwrap_or(defaults.infer_schema_length),
            null_values: self.null_values.unwrap_or(defaults.null_values),
            float_precision: self.float_precision.unwrap_or(defaults.float_precision),
        };

        config.validate()?;
        Ok(config)
    }
}
