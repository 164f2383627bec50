//! Error types for the dataset tools.
//!
//! Errors never cross the tool boundary as `Err`: [`ToolError::to_tool_output`]
//! turns them into the plain-text message the calling agent receives. Inside
//! the crate they propagate with `?` like any other error.
//!
//! Errors are serializable so the CLI can emit them as JSON.

use crate::config::ConfigValidationError;
use serde::Serialize;
use serde::ser::SerializeStruct;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for dataset tools.
#[derive(Error, Debug)]
pub enum ToolError {
    /// The CSV file does not exist.
    #[error("File not found at {}", .0.display())]
    FileNotFound(PathBuf),

    /// The file exists but could not be parsed as CSV with a header row.
    #[error("Failed to parse '{}': {reason}", path.display())]
    Unparseable { path: PathBuf, reason: String },

    /// A statistic could not be computed.
    #[error("Computation failed: {0}")]
    ComputationFailed(String),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A tool call named a tool that does not exist.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A tool call carried missing or malformed arguments.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ToolError>,
    },
}

impl From<ConfigValidationError> for ToolError {
    fn from(err: ConfigValidationError) -> Self {
        ToolError::InvalidConfig(err.to_string())
    }
}

/// Which tool an error is being reported for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolOperation {
    /// CSV structural inspection.
    ReadCsv,
    /// Dataset statistics.
    Statistics,
}

impl ToolError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ToolError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Get a stable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::FileNotFound(_) => "FILE_NOT_FOUND",
            Self::Unparseable { .. } => "UNPARSEABLE_INPUT",
            Self::ComputationFailed(_) => "COMPUTATION_FAILED",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::UnknownTool(_) => "UNKNOWN_TOOL",
            Self::InvalidArguments(_) => "INVALID_ARGUMENTS",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// The innermost error, skipping context layers.
    pub fn root(&self) -> &ToolError {
        match self {
            Self::WithContext { source, .. } => source.root(),
            other => other,
        }
    }

    /// Check if this error means the input file is missing.
    pub fn is_file_not_found(&self) -> bool {
        matches!(self.root(), Self::FileNotFound(_))
    }

    /// Render the message handed back to the agent as tool output.
    pub fn to_tool_output(&self, operation: ToolOperation) -> String {
        if let Self::FileNotFound(path) = self.root() {
            return format!("Error: File not found at {}", path.display());
        }
        match operation {
            ToolOperation::ReadCsv => format!("Error reading CSV file: {}", self),
            ToolOperation::Statistics => format!("Error analyzing data: {}", self),
        }
    }
}

/// Errors are serialized as a struct with `code` and `message` fields.
impl Serialize for ToolError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("ToolError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for tool operations.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ToolError::Polars(e).with_context(context))
    }
}
