//! Error taxonomy for log scraping.

use std::path::PathBuf;

/// Reasons a directory entry is not accepted as a solver log.
///
/// These are never fatal: the driver warns and moves on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilenameError {
    #[error("expected 6 underscore-separated segments, found {found}")]
    SegmentCount { found: usize },

    #[error("missing LOG prefix")]
    MissingPrefix,

    #[error("unknown test type: {0}")]
    UnknownTestType(String),

    #[error("unknown propagator: {0}")]
    UnknownPropagator(String),
}

/// Fatal errors that abort a scrape run.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("io error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{file}: field '{field}' has non-numeric value {value:?}")]
    InvalidNumber {
        file: String,
        field: &'static str,
        value: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("console write failed: {0}")]
    Console(#[source] std::io::Error),
}

impl ScrapeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScrapeError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for scrape operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;
