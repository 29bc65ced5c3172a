//! solverlog - benchmark log scraper
//!
//! Reads the `LOG_*` files written by the Gecode modulo-propagator extension
//! and writes one report row per run to a CSV file and a JSON file.
//!
//! ```text
//! solverlog [INPUT_DIR] [--csv output.csv] [--json-out output.json] [--json-format array]
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use solverlog_core::config::{DEFAULT_CSV_PATH, DEFAULT_INPUT_DIR, DEFAULT_JSON_PATH};
use solverlog_core::{run_directory, JsonFormat, ScrapeConfig};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "solverlog")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert solver benchmark logs into CSV and JSON reports", long_about = None)]
struct Cli {
    /// Directory holding the LOG_* files
    #[arg(
        value_name = "INPUT_DIR",
        env = "SOLVERLOG_INPUT_DIR",
        default_value = DEFAULT_INPUT_DIR
    )]
    input_dir: PathBuf,

    /// CSV report path
    #[arg(long, env = "SOLVERLOG_CSV", default_value = DEFAULT_CSV_PATH)]
    csv: PathBuf,

    /// JSON report path
    #[arg(long = "json-out", env = "SOLVERLOG_JSON", default_value = DEFAULT_JSON_PATH)]
    json_out: PathBuf,

    /// JSON report layout
    #[arg(long, value_enum, default_value_t = JsonFormatArg::Array)]
    json_format: JsonFormatArg,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    log_json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum JsonFormatArg {
    /// A single JSON array
    Array,
    /// Unterminated `[obj,obj,` layout of the older reports
    Legacy,
    /// One object per line
    #[value(alias = "ndjson")]
    Lines,
}

impl From<JsonFormatArg> for JsonFormat {
    fn from(arg: JsonFormatArg) -> Self {
        match arg {
            JsonFormatArg::Array => JsonFormat::Array,
            JsonFormatArg::Legacy => JsonFormat::Legacy,
            JsonFormatArg::Lines => JsonFormat::Lines,
        }
    }
}

impl Cli {
    fn into_config(self) -> ScrapeConfig {
        ScrapeConfig {
            input_dir: self.input_dir,
            csv_path: self.csv,
            json_path: self.json_out,
            json_format: self.json_format.into(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    solverlog_core::init_tracing(cli.log_json, level);

    let cwd = std::env::current_dir().context("determine working directory")?;
    let config = cli.into_config().resolve(&cwd);

    let summary = run_directory(&config, &mut std::io::stdout().lock())
        .with_context(|| format!("scrape {:?}", config.input_dir))?;

    println!(
        "converted {} file(s), skipped {}",
        summary.accepted,
        summary.rejected.len()
    );
    Ok(())
}
