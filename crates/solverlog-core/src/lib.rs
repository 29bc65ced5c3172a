//! solverlog core library
//!
//! Turns a directory of constraint-solver benchmark logs into a CSV table and
//! a JSON report. Each log is named
//! `LOG_<solutions>_<testType>_<domainGroup>_<testId>_<propagator>.txt` and
//! holds the solver's `key: value` statistics printout.
//!
//! The pipeline, in order:
//! - [`filename`] classifies entry names and extracts run metadata
//! - [`body`] extracts statistics from a log's text
//! - [`record`] merges both into one report row
//! - [`report`] appends rows to the CSV and JSON outputs
//! - [`driver`] walks the input directory

pub mod body;
pub mod config;
pub mod driver;
pub mod error;
pub mod filename;
pub mod obs;
pub mod record;
pub mod report;
pub mod telemetry;

pub use body::{parse_body, parse_file, BodyFields};
pub use config::{JsonFormat, ScrapeConfig};
pub use driver::{run_directory, scrape_entry, RunSummary};
pub use error::{FilenameError, Result, ScrapeError};
pub use filename::{classify, Classification, FileMeta, PropagatorType, TestType};
pub use obs::{
    emit_file_accepted, emit_file_rejected, emit_scrape_finished, emit_scrape_started, ScrapeSpan,
};
pub use record::{Record, COLUMNS};
pub use report::ReportWriter;
pub use telemetry::init_tracing;
