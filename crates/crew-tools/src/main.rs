//! CLI entry point for the dataset tools.

use anyhow::{Result, anyhow, bail};
use clap::{Parser, Subcommand};
use crew_tools::{
    AnalysisConfig, ToolExecutor, analyze_csv, csv_reader_tool, data_stats_tool, read_csv_info,
};
use dotenv::dotenv;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    author = "Crew Tools Team",
    version,
    about = "Dataset inspection and statistics tools for a data-science agent crew",
    long_about = "Runs the same tools the analyst agent calls, from the command line.\n\n\
                  EXAMPLES:\n  \
                  # Shape, column types and 10 sample rows\n  \
                  crew-tools inspect data/churn.csv -n 10\n\n  \
                  # Full statistics report\n  \
                  crew-tools stats data/churn.csv\n\n  \
                  # Typed statistics as JSON\n  \
                  crew-tools --json stats data/churn.csv | jq .quality\n\n  \
                  # Execute a tool call the way an agent framework would\n  \
                  crew-tools call '{\"function\":{\"name\":\"data_stats_tool\",\"arguments\":{\"csv_path\":\"data/churn.csv\"}}}'"
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output JSON to stdout instead of the text report
    ///
    /// Disables all logging; only the JSON document is written.
    #[arg(long, global = true)]
    json: bool,

    /// Number of entries in categorical frequency tables
    #[arg(long, default_value = "5", global = true)]
    top_values: usize,

    /// IQR multiplier for outlier fences
    #[arg(long, default_value = "1.5", global = true)]
    iqr_multiplier: f64,

    /// Decimal places for floating point statistics
    #[arg(long, default_value = "4", global = true)]
    precision: usize,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show shape, column types and sample rows of a CSV file
    Inspect {
        /// Path to the CSV file
        csv_path: PathBuf,

        /// Number of sample rows to show
        #[arg(short = 'n', long, default_value = "5")]
        num_rows: usize,
    },

    /// Compute descriptive statistics for a CSV file
    Stats {
        /// Path to the CSV file
        csv_path: PathBuf,
    },

    /// Execute a JSON tool call and print the tool result as JSON
    Call {
        /// Tool call, e.g. {"function":{"name":"csv_reader_tool","arguments":{"csv_path":"x.csv"}}}
        tool_call: String,
    },

    /// Print the tool definitions as JSON
    Tools,
}

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so reports on stdout stay clean. When `json_output` is
/// true, logging is not initialized at all.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// The CSV must exist and carry a `.csv` extension.
fn validate_csv_path(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("CSV file not found at {}", path.display());
    }
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        bail!("File must be a CSV file (got {})", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    // Load environment variables from .env file
    dotenv().ok();

    let config = AnalysisConfig::builder()
        .top_values(args.top_values)
        .iqr_multiplier(args.iqr_multiplier)
        .float_precision(args.precision)
        .build()?;
    debug!("Configuration: {:?}", config);

    match &args.command {
        Command::Inspect { csv_path, num_rows } => {
            validate_csv_path(csv_path)?;
            run_inspect(csv_path, *num_rows, &config, args.json)
        }
        Command::Stats { csv_path } => {
            validate_csv_path(csv_path)?;
            run_stats(csv_path, &config, args.json)
        }
        Command::Call { tool_call } => {
            let executor = ToolExecutor::new(config);
            let result = executor.execute_json(tool_call);
            println!("{}", serde_json::to_string_pretty(&result)?);
            if result.success {
                Ok(())
            } else {
                Err(anyhow!(
                    "{}",
                    result.error.unwrap_or_else(|| "tool call failed".to_string())
                ))
            }
        }
        Command::Tools => {
            let executor = ToolExecutor::new(config);
            println!("{}", serde_json::to_string_pretty(&executor.definitions())?);
            Ok(())
        }
    }
}

fn run_inspect(path: &Path, num_rows: usize, config: &AnalysisConfig, json: bool) -> Result<()> {
    info!("Inspecting {}", path.display());
    if json {
        let info = read_csv_info(path, Some(num_rows), config)?;
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{}", csv_reader_tool(path, Some(num_rows), config));
    }
    Ok(())
}

fn run_stats(path: &Path, config: &AnalysisConfig, json: bool) -> Result<()> {
    info!("Analyzing {}", path.display());
    if json {
        let stats = analyze_csv(path, config)?;
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", data_stats_tool(path, config));
    }
    Ok(())
}
