//! Tool definitions in the function-calling format most LLM runtimes accept.

use super::{CSV_READER_TOOL, DATA_STATS_TOOL};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Tool definition advertised to the agent framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl ToolDefinition {
    fn function(name: &str, description: &str, parameters: Value) -> Self {
        Self {
            tool_type: "function".to_string(),
            function: FunctionDefinition {
                name: name.to_string(),
                description: description.to_string(),
                parameters,
            },
        }
    }
}

/// Definitions for every tool the executor understands.
pub fn tool_definitions(default_sample_rows: usize) -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::function(
            CSV_READER_TOOL,
            "Read a CSV file and return its shape, column names with inferred types, \
             and the first rows as a table.",
            json!({
                "type": "object",
                "properties": {
                    "csv_path": {
                        "type": "string",
                        "description": "Path to the CSV file"
                    },
                    "num_rows": {
                        "type": "integer",
                        "minimum": 0,
                        "description": format!(
                            "Number of sample rows to return (default {})",
                            default_sample_rows
                        )
                    }
                },
                "required": ["csv_path"]
            }),
        ),
        ToolDefinition::function(
            DATA_STATS_TOOL,
            "Calculate descriptive statistics for a CSV file: missing values, numeric \
             summaries with IQR outliers, categorical frequencies, completeness and \
             duplicate rows.",
            json!({
                "type": "object",
                "properties": {
                    "csv_path": {
                        "type": "string",
                        "description": "Path to the CSV file"
                    }
                },
                "required": ["csv_path"]
            }),
        ),
    ]
}
