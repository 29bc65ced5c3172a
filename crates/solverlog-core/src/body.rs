//! Log body parsing.
//!
//! A log body is the solver's statistics printout: one `key: value` fact per
//! line. Only a handful of keys are of interest; everything else is noise.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, ScrapeError};

/// Value that marks a run stopped by the time limit, leading space included.
const TIME_LIMIT_REASON: &str = " time limit reached";

/// Statistics extracted from a log body.
///
/// Keys that never appear in the body stay `None`; a repeated key keeps the
/// last value seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyFields {
    pub timeout: bool,
    pub runtime: Option<f64>,
    pub solutions: Option<i64>,
    pub propagations: Option<i64>,
    pub nodes: Option<i64>,
    pub failures: Option<i64>,
    pub peak_depth: Option<i64>,
}

/// Parse the log at `path`.
pub fn parse_file(path: &Path) -> Result<BodyFields> {
    let file = File::open(path).map_err(|e| ScrapeError::io(path, e))?;
    let label = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_body(BufReader::new(file), &label).map_err(|e| match e {
        ScrapeError::Io { source, .. } => ScrapeError::io(path, source),
        other => other,
    })
}

/// Parse a log body from any line source. `label` names the source in errors.
pub fn parse_body<R: BufRead>(reader: R, label: &str) -> Result<BodyFields> {
    let mut fields = BodyFields::default();

    for line in reader.lines() {
        let line = line.map_err(|e| ScrapeError::io(label, e))?;
        apply_line(&mut fields, line.trim(), label)?;
    }

    Ok(fields)
}

fn apply_line(fields: &mut BodyFields, line: &str, label: &str) -> Result<()> {
    // A value containing a second ':' does not count as a fact.
    let mut parts = line.split(':');
    let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
        return Ok(());
    };

    match key.trim() {
        "runtime" => {
            // "0.021 (21.346 ms)" -> 0.021
            let raw = value.trim().split(' ').next().unwrap_or_default();
            fields.runtime = Some(raw.parse().map_err(|_| invalid(label, "runtime", raw))?);
        }
        "solutions" => fields.solutions = Some(parse_int(label, "solutions", value)?),
        "propagations" => fields.propagations = Some(parse_int(label, "propagations", value)?),
        "nodes" => fields.nodes = Some(parse_int(label, "nodes", value)?),
        "failures" => fields.failures = Some(parse_int(label, "failures", value)?),
        "peak depth" => fields.peak_depth = Some(parse_int(label, "peak depth", value)?),
        // Key and value are compared untrimmed.
        _ if key == "reason" && value == TIME_LIMIT_REASON => fields.timeout = true,
        _ => {}
    }

    Ok(())
}

fn parse_int(label: &str, field: &'static str, value: &str) -> Result<i64> {
    let value = value.trim();
    value.parse().map_err(|_| invalid(label, field, value))
}

fn invalid(label: &str, field: &'static str, value: &str) -> ScrapeError {
    ScrapeError::InvalidNumber {
        file: label.to_string(),
        field,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(body: &str) -> BodyFields {
        parse_body(body.as_bytes(), "test.txt").expect("parse body")
    }

    #[test]
    fn test_empty_body_is_default() {
        assert_eq!(parse(""), BodyFields::default());
        assert_eq!(
            parse("Initial\n\tpropagators: 2\nSummary\n"),
            BodyFields::default()
        );
    }

    #[test]
    fn test_runtime_takes_first_word() {
        let fields = parse("runtime: 12.34 seconds\n");
        assert_eq!(fields.runtime, Some(12.34));

        let fields = parse("\truntime:      0.021 (21.346 ms)\n");
        assert_eq!(fields.runtime, Some(0.021));
    }

    #[test]
    fn test_gecode_statistics_block() {
        let body = "\
Initial
\tpropagators:  1
\tbranchers:    1

Summary
\truntime:      0.005 (5.012 ms)
\tsolutions:    20
\tpropagations: 1843
\tnodes:        77
\tfailures:     19
\trestarts:     0
\tno-goods:     0
\tpeak depth:   9
";
        let fields = parse(body);
        assert_eq!(
            fields,
            BodyFields {
                timeout: false,
                runtime: Some(0.005),
                solutions: Some(20),
                propagations: Some(1843),
                nodes: Some(77),
                failures: Some(19),
                peak_depth: Some(9),
            }
        );
    }

    #[test]
    fn test_time_limit_reason_sets_timeout() {
        assert!(parse("reason: time limit reached\n").timeout);
        assert!(parse("  reason: time limit reached  \n").timeout);
    }

    #[test]
    fn test_other_reason_text_leaves_timeout_false() {
        assert!(!parse("reason: memory limit reached\n").timeout);
        assert!(!parse("reason:time limit reached\n").timeout);
        assert!(!parse("reason:  time limit reached\n").timeout);
        assert!(!parse("reason : time limit reached\n").timeout);
    }

    #[test]
    fn test_lines_with_extra_colons_are_ignored() {
        let fields = parse("nodes: 10: 11\nsolutions 4\n");
        assert_eq!(fields, BodyFields::default());
    }

    #[test]
    fn test_repeated_key_keeps_last_value() {
        assert_eq!(parse("nodes: 1\nnodes: 2\n").nodes, Some(2));
    }

    #[test]
    fn test_non_numeric_value_is_fatal() {
        let err = parse_body("failures: many\n".as_bytes(), "LOG_1_B_1_1_Linear.txt")
            .unwrap_err();
        match err {
            ScrapeError::InvalidNumber { file, field, value } => {
                assert_eq!(file, "LOG_1_B_1_1_Linear.txt");
                assert_eq!(field, "failures");
                assert_eq!(value, "many");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_file_reads_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("LOG_5_B_2_7_Modulo.txt");
        std::fs::write(&path, "solutions: 3\nruntime: 0.5 seconds\nnodes: 10").unwrap();

        let fields = parse_file(&path).unwrap();
        assert_eq!(fields.solutions, Some(3));
        assert_eq!(fields.runtime, Some(0.5));
        assert_eq!(fields.nodes, Some(10));
        assert!(!fields.timeout);
    }

    #[test]
    fn test_parse_file_missing_is_io_error() {
        let dir = tempdir().unwrap();
        let err = parse_file(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, ScrapeError::Io { .. }));
    }
}
