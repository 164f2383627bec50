//! CSV loading.
//!
//! Reads a CSV with a header row into a polars `DataFrame` and runs the
//! column classification pass once, so both tools work from the same
//! [`Dataset`].

use crate::config::AnalysisConfig;
use crate::error::{Result, ToolError};
use crate::profiler::classify_columns;
use crate::types::{ColumnDescriptor, ColumnKind};
use polars::io::csv::read::{CsvParseOptions, CsvReadOptions, NullValues};
use polars::prelude::*;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::info;

/// A loaded CSV together with its classified columns.
#[derive(Debug, Clone)]
pub struct Dataset {
    source: PathBuf,
    frame: DataFrame,
    columns: Vec<ColumnDescriptor>,
}

impl Dataset {
    /// Wrap an already-built frame, classifying its columns.
    pub fn from_frame(source: impl Into<PathBuf>, frame: DataFrame) -> Result<Self> {
        let columns = classify_columns(&frame)?;
        Ok(Self {
            source: source.into(),
            frame,
            columns,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn width(&self) -> usize {
        self.frame.width()
    }

    /// Descriptors of the columns with the given kind, in column order.
    pub fn columns_of_kind(&self, kind: ColumnKind) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns.iter().filter(move |c| c.kind == kind)
    }

    pub fn series(&self, name: &str) -> Result<&Series> {
        Ok(self.frame.column(name)?.as_materialized_series())
    }
}

/// Load a CSV file from disk.
///
/// Fails with [`ToolError::FileNotFound`] when the path does not exist and
/// [`ToolError::Unparseable`] when the reader rejects the content.
pub fn load_csv(path: impl AsRef<Path>, config: &AnalysisConfig) -> Result<Dataset> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ToolError::FileNotFound(path.to_path_buf()));
    }

    info!("Loading dataset from: {}", path.display());
    let frame = read_file(path, config).map_err(|e| ToolError::Unparseable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    info!("Dataset loaded successfully: {:?}", frame.shape());

    Dataset::from_frame(path, frame)
}

/// Load CSV content that is already in memory. `source` is only used for
/// labelling reports and errors.
pub fn load_csv_from_str(
    source: impl Into<PathBuf>,
    content: &str,
    config: &AnalysisConfig,
) -> Result<Dataset> {
    let source = source.into();
    let frame = read_options(config)
        .into_reader_with_file_handle(Cursor::new(content.to_string()))
        .finish()
        .map_err(|e| ToolError::Unparseable {
            path: source.clone(),
            reason: e.to_string(),
        })?;
    Dataset::from_frame(source, frame)
}

fn read_options(config: &AnalysisConfig) -> CsvReadOptions {
    let null_values = NullValues::AllColumns(
        config
            .null_values
            .iter()
            .map(|v| v.as_str().into())
            .collect(),
    );
    CsvReadOptions::default()
        .with_infer_schema_length(config.infer_schema_length)
        .with_has_header(true)
        .with_parse_options(
            CsvParseOptions::default()
                .with_quote_char(Some(b'"'))
                .with_null_values(Some(null_values)),
        )
}

fn read_file(path: &Path, config: &AnalysisConfig) -> Result<DataFrame> {
    let frame = read_options(config)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    Ok(frame)
}
