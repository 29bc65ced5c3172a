//! Directory driver: classify, parse, merge and report every entry of the
//! input directory.

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use crate::body;
use crate::config::ScrapeConfig;
use crate::error::{Result, ScrapeError};
use crate::filename::{classify, Classification};
use crate::obs;
use crate::record::Record;
use crate::report::ReportWriter;

/// Outcome of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files converted into report rows.
    pub accepted: usize,
    /// Entry names skipped because they are not solver logs.
    pub rejected: Vec<String>,
}

impl RunSummary {
    /// Directory entries seen.
    pub fn total(&self) -> usize {
        self.accepted + self.rejected.len()
    }
}

/// Convert every log in `config.input_dir` into the configured reports.
///
/// Entries are processed in directory listing order. Each unrecognised entry
/// gets one warning line on `console`; anything else that goes wrong stops
/// the run, leaving the rows written so far in place.
pub fn run_directory<W: Write>(config: &ScrapeConfig, console: &mut W) -> Result<RunSummary> {
    let start = Instant::now();
    let _span = obs::ScrapeSpan::enter(&config.input_dir);
    obs::emit_scrape_started(
        &config.input_dir,
        &config.csv_path,
        &config.json_path,
        config.json_format,
    );

    let mut writer =
        ReportWriter::initialize(&config.csv_path, &config.json_path, config.json_format)?;
    let mut summary = RunSummary::default();

    let entries = std::fs::read_dir(&config.input_dir)
        .map_err(|e| ScrapeError::io(&config.input_dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| ScrapeError::io(&config.input_dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if let Some(record) = scrape_entry(&config.input_dir, &name, console)? {
            writer.append(&record)?;
            summary.accepted += 1;
        } else {
            summary.rejected.push(name);
        }
    }

    writer.finish()?;
    obs::emit_scrape_finished(
        summary.accepted,
        summary.rejected.len(),
        start.elapsed().as_millis() as u64,
    );
    Ok(summary)
}

/// Build the record for one directory entry, or warn and return `None` when
/// the name is not a solver log. Rejected entries are never read.
pub fn scrape_entry<W: Write>(dir: &Path, name: &str, console: &mut W) -> Result<Option<Record>> {
    match classify(name)? {
        Classification::Accepted(meta) => {
            obs::emit_file_accepted(name, &meta);
            let fields = body::parse_file(&dir.join(name))?;
            Ok(Some(Record::merge(meta, fields)))
        }
        Classification::Rejected(reason) => {
            obs::emit_file_rejected(name, &reason);
            writeln!(
                console,
                "please clean up the output directory, '{name}' shouldn't be here."
            )
            .map_err(ScrapeError::Console)?;
            Ok(None)
        }
    }
}
