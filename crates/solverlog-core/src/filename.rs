//! Filename classification.
//!
//! The solver writes one log per test run, named
//! `LOG_<solutions>_<testType>_<domainGroup>_<testId>_<propagator>.txt`.
//! Everything needed to identify the run lives in that name.

use serde::{Deserialize, Serialize};

use crate::error::{FilenameError, Result, ScrapeError};

/// Extension carried by the trailing propagator segment.
pub const LOG_EXTENSION: &str = ".txt";

const LOG_PREFIX: &str = "LOG";

/// Propagator under test.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PropagatorType {
    AdvModulo,
    Modulo,
    Linear,
}

impl PropagatorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropagatorType::AdvModulo => "AdvModulo",
            PropagatorType::Modulo => "Modulo",
            PropagatorType::Linear => "Linear",
        }
    }

    /// Parse the trailing filename segment, extension included.
    fn from_segment(segment: &str) -> Option<Self> {
        match segment.strip_suffix(LOG_EXTENSION)? {
            "AdvModulo" => Some(PropagatorType::AdvModulo),
            "Modulo" => Some(PropagatorType::Modulo),
            "Linear" => Some(PropagatorType::Linear),
            _ => None,
        }
    }
}

impl std::fmt::Display for PropagatorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of test instance: `B`, `X` or `R`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TestType {
    B,
    X,
    R,
}

impl TestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::B => "B",
            TestType::X => "X",
            TestType::R => "R",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "B" => Some(TestType::B),
            "X" => Some(TestType::X),
            "R" => Some(TestType::R),
            _ => None,
        }
    }
}

impl std::fmt::Display for TestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata encoded in an accepted log filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub propagator: PropagatorType,
    pub test_type: TestType,
    pub domain_group: i64,
    pub test_id: i64,
    pub requested_solutions: i64,
}

/// Outcome of classifying a directory entry name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Accepted(FileMeta),
    Rejected(FilenameError),
}

/// Classify a filename against the log naming convention.
///
/// Shape mismatches are reported as [`Classification::Rejected`]. A name that
/// has the right shape but a non-integer numeric segment is a hard error.
pub fn classify(filename: &str) -> Result<Classification> {
    let segments: Vec<&str> = filename.split('_').collect();
    let [prefix, solutions, test, domain, id, prop] = segments[..] else {
        return Ok(Classification::Rejected(FilenameError::SegmentCount {
            found: segments.len(),
        }));
    };

    if prefix != LOG_PREFIX {
        return Ok(Classification::Rejected(FilenameError::MissingPrefix));
    }
    let Some(test_type) = TestType::from_segment(test) else {
        return Ok(Classification::Rejected(FilenameError::UnknownTestType(
            test.to_string(),
        )));
    };
    let Some(propagator) = PropagatorType::from_segment(prop) else {
        return Ok(Classification::Rejected(FilenameError::UnknownPropagator(
            prop.to_string(),
        )));
    };

    Ok(Classification::Accepted(FileMeta {
        propagator,
        test_type,
        domain_group: parse_segment(filename, "domain group", domain)?,
        test_id: parse_segment(filename, "test id", id)?,
        requested_solutions: parse_segment(filename, "requested solutions", solutions)?,
    }))
}

fn parse_segment(filename: &str, field: &'static str, value: &str) -> Result<i64> {
    value.parse().map_err(|_| ScrapeError::InvalidNumber {
        file: filename.to_string(),
        field,
        value: value.to_string(),
    })
}
