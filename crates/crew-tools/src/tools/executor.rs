//! Dispatch of JSON tool calls.

use super::{CSV_READER_TOOL, DATA_STATS_TOOL, csv_reader_tool, data_stats_tool};
use super::definitions::{ToolDefinition, tool_definitions};
use crate::config::AnalysisConfig;
use crate::error::{Result, ToolError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// A tool call made by the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub function: FunctionCall,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

/// Result of executing a tool.
///
/// Data problems (missing file, unparseable CSV) still produce a successful
/// result whose output is the error description; `success = false` is
/// reserved for calls that could not be dispatched at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub success: bool,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolResult {
    pub fn success(output: String) -> Self {
        Self {
            success: true,
            output,
            error: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            output: String::new(),
            error: Some(message),
        }
    }
}

/// Executes tool calls against the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct ToolExecutor {
    config: AnalysisConfig,
}

impl ToolExecutor {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Definitions of the tools this executor can run.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        tool_definitions(self.config.sample_rows)
    }

    /// Parse a tool call from JSON and execute it.
    pub fn execute_json(&self, raw: &str) -> ToolResult {
        match serde_json::from_str::<ToolCall>(raw) {
            Ok(call) => self.execute(&call),
            Err(e) => ToolResult::error(ToolError::from(e).to_string()),
        }
    }

    /// Execute a tool call and return the result.
    pub fn execute(&self, tool_call: &ToolCall) -> ToolResult {
        let name = &tool_call.function.name;
        let args = normalize_arguments(&tool_call.function.arguments);

        debug!("Executing tool: {} with args: {:?}", name, args);

        let outcome = match name.as_str() {
            CSV_READER_TOOL | "read_csv_info" => self.read_csv(&args),
            DATA_STATS_TOOL | "calculate_data_stats" => self.data_stats(&args),
            _ => Err(ToolError::UnknownTool(name.clone())),
        };

        match outcome {
            Ok(output) => ToolResult::success(output),
            Err(e) => ToolResult::error(e.to_string()),
        }
    }

    fn read_csv(&self, args: &Value) -> Result<String> {
        let path = required_str(args, "csv_path")?;
        let num_rows = optional_usize(args, "num_rows")?;
        Ok(csv_reader_tool(path, num_rows, &self.config))
    }

    fn data_stats(&self, args: &Value) -> Result<String> {
        let path = required_str(args, "csv_path")?;
        Ok(data_stats_tool(path, &self.config))
    }
}

/// Some runtimes send arguments as a JSON-encoded string instead of an object.
fn normalize_arguments(args: &Value) -> Value {
    match args {
        Value::String(s) => serde_json::from_str(s).unwrap_or_else(|_| args.clone()),
        other => other.clone(),
    }
}

fn required_str<'a>(args: &'a Value, key: &str) -> Result<&'a str> {
    args.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ToolError::InvalidArguments(format!("Missing required parameter: {}", key)))
}

/// Accepts a non-negative integer, or a string holding one.
fn optional_usize(args: &Value, key: &str) -> Result<Option<usize>> {
    let invalid = || ToolError::InvalidArguments(format!("'{}' must be a non-negative integer", key));
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_u64()
            .map(|v| Some(v as usize))
            .ok_or_else(invalid),
        Some(Value::String(s)) => s.trim().parse::<usize>().map(Some).map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}
