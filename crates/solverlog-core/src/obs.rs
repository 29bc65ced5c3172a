//! Structured log events for the scrape lifecycle.
//!
//! Events are emitted through `tracing`; verbosity follows `RUST_LOG` or the
//! level passed to [`crate::telemetry::init_tracing`].

use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::JsonFormat;
use crate::filename::FileMeta;

/// RAII guard that enters a span tagged with the input directory.
pub struct ScrapeSpan {
    _span: tracing::span::EnteredSpan,
}

impl ScrapeSpan {
    pub fn enter(input_dir: &Path) -> Self {
        let span = tracing::info_span!("solverlog.scrape", input_dir = %input_dir.display());
        Self {
            _span: span.entered(),
        }
    }
}

pub fn emit_scrape_started(input_dir: &Path, csv: &Path, json: &Path, format: JsonFormat) {
    info!(
        event = "scrape.started",
        input_dir = %input_dir.display(),
        csv = %csv.display(),
        json = %json.display(),
        format = %format,
    );
}

pub fn emit_file_accepted(file: &str, meta: &FileMeta) {
    debug!(
        event = "scrape.file_accepted",
        file = %file,
        propagator = %meta.propagator,
        test_type = %meta.test_type,
    );
}

pub fn emit_file_rejected(file: &str, reason: &dyn std::fmt::Display) {
    warn!(event = "scrape.file_rejected", file = %file, reason = %reason);
}

pub fn emit_scrape_finished(accepted: usize, rejected: usize, duration_ms: u64) {
    info!(
        event = "scrape.finished",
        accepted = accepted,
        rejected = rejected,
        duration_ms = duration_ms,
    );
}
