//! CSV and JSON report writing.
//!
//! Both report files are truncated once by [`ReportWriter::initialize`], then
//! reopened in append mode for every record, so each row is on disk as soon
//! as [`ReportWriter::append`] returns.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::JsonFormat;
use crate::error::{Result, ScrapeError};
use crate::record::{Record, COLUMNS};

/// Incremental writer for the CSV and JSON reports.
#[derive(Debug)]
pub struct ReportWriter {
    csv_path: PathBuf,
    json_path: PathBuf,
    format: JsonFormat,
    appended: usize,
}

impl ReportWriter {
    /// Create (or truncate) both reports and write their headers.
    pub fn initialize(
        csv_path: impl Into<PathBuf>,
        json_path: impl Into<PathBuf>,
        format: JsonFormat,
    ) -> Result<Self> {
        let writer = Self {
            csv_path: csv_path.into(),
            json_path: json_path.into(),
            format,
            appended: 0,
        };

        let header = csv_line(COLUMNS.iter().copied());
        std::fs::write(&writer.csv_path, header)
            .map_err(|e| ScrapeError::io(&writer.csv_path, e))?;

        let opening = match format {
            JsonFormat::Array | JsonFormat::Legacy => "[",
            JsonFormat::Lines => "",
        };
        std::fs::write(&writer.json_path, opening)
            .map_err(|e| ScrapeError::io(&writer.json_path, e))?;

        Ok(writer)
    }

    /// Append one record to both reports.
    pub fn append(&mut self, record: &Record) -> Result<()> {
        let cells = record.cells();
        let row = csv_line(cells.iter().map(String::as_str));
        append_to(&self.csv_path, row.as_bytes())?;

        let fragment = match self.format {
            JsonFormat::Array => {
                let sep = if self.appended == 0 { "\n" } else { ",\n" };
                format!("{sep}{}", serde_json::to_string_pretty(record)?)
            }
            JsonFormat::Legacy => format!("{},", serde_json::to_string_pretty(record)?),
            JsonFormat::Lines => format!("{}\n", serde_json::to_string(record)?),
        };
        append_to(&self.json_path, fragment.as_bytes())?;

        self.appended += 1;
        Ok(())
    }

    /// Close the JSON report. Only the array format needs a trailer.
    pub fn finish(self) -> Result<usize> {
        if self.format == JsonFormat::Array {
            append_to(&self.json_path, b"\n]\n")?;
        }
        Ok(self.appended)
    }

    /// Records appended so far.
    pub fn appended(&self) -> usize {
        self.appended
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    pub fn json_path(&self) -> &Path {
        &self.json_path
    }
}

fn append_to(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| ScrapeError::io(path, e))?;
    file.write_all(bytes).map_err(|e| ScrapeError::io(path, e))
}

fn csv_line<'a>(fields: impl Iterator<Item = &'a str>) -> String {
    let mut line = fields.map(csv_field).collect::<Vec<_>>().join(",");
    line.push('\n');
    line
}

/// Quote a field only when it would otherwise break the row.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
