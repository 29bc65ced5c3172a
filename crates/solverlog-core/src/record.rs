//! The report record and its fixed column layout.

use serde::{Deserialize, Serialize};

use crate::body::BodyFields;
use crate::filename::{FileMeta, PropagatorType, TestType};

/// Report columns, in output order.
pub const COLUMNS: [&str; 12] = [
    "propagator type",
    "test type",
    "domain group",
    "test id",
    "timeout",
    "runtime",
    "requested solutions",
    "solutions",
    "propagations",
    "nodes",
    "failures",
    "peak depth",
];

/// One row of the report: filename metadata merged with body statistics.
///
/// Field order matches [`COLUMNS`]; JSON output omits statistics that were
/// not found in the body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    #[serde(rename = "propagator type")]
    pub propagator: PropagatorType,
    #[serde(rename = "test type")]
    pub test_type: TestType,
    #[serde(rename = "domain group")]
    pub domain_group: i64,
    #[serde(rename = "test id")]
    pub test_id: i64,
    pub timeout: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<f64>,
    #[serde(rename = "requested solutions")]
    pub requested_solutions: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solutions: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub propagations: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failures: Option<i64>,
    #[serde(rename = "peak depth", default, skip_serializing_if = "Option::is_none")]
    pub peak_depth: Option<i64>,
}

impl Record {
    /// Merge filename metadata with body statistics.
    ///
    /// The two sources never name the same field, so no precedence rule is
    /// needed beyond taking each field from the side that owns it.
    pub fn merge(meta: FileMeta, body: BodyFields) -> Self {
        Self {
            propagator: meta.propagator,
            test_type: meta.test_type,
            domain_group: meta.domain_group,
            test_id: meta.test_id,
            timeout: body.timeout,
            runtime: body.runtime,
            requested_solutions: meta.requested_solutions,
            solutions: body.solutions,
            propagations: body.propagations,
            nodes: body.nodes,
            failures: body.failures,
            peak_depth: body.peak_depth,
        }
    }

    /// Cell values in [`COLUMNS`] order; absent statistics become empty cells.
    ///
    /// `timeout` renders as `True`/`False` and `runtime` always keeps a
    /// fractional part (`12.0`, not `12`), matching the historic CSV files.
    pub fn cells(&self) -> [String; 12] {
        [
            self.propagator.to_string(),
            self.test_type.to_string(),
            self.domain_group.to_string(),
            self.test_id.to_string(),
            bool_cell(self.timeout).to_string(),
            self.runtime.map(|v| format!("{v:?}")).unwrap_or_default(),
            self.requested_solutions.to_string(),
            opt_cell(self.solutions),
            opt_cell(self.propagations),
            opt_cell(self.nodes),
            opt_cell(self.failures),
            opt_cell(self.peak_depth),
        ]
    }
}

fn bool_cell(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn opt_cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn sample() -> Record {
        Record::merge(
            FileMeta {
                propagator: PropagatorType::Modulo,
                test_type: TestType::B,
                domain_group: 2,
                test_id: 7,
                requested_solutions: 5,
            },
            BodyFields {
                runtime: Some(0.5),
                solutions: Some(3),
                nodes: Some(10),
                ..BodyFields::default()
            },
        )
    }

    #[test]
    fn test_merge_takes_metadata_and_statistics() {
        let record = sample();
        assert_eq!(record.propagator, PropagatorType::Modulo);
        assert_eq!(record.test_type, TestType::B);
        assert_eq!(record.requested_solutions, 5);
        assert_eq!(record.solutions, Some(3));
        assert_eq!(record.propagations, None);
        assert!(!record.timeout);
    }

    #[test]
    fn test_cells_follow_column_order() {
        assert_eq!(
            sample().cells(),
            ["Modulo", "B", "2", "7", "False", "0.5", "5", "3", "", "10", "", ""]
                .map(String::from)
        );
    }

    #[test]
    fn test_whole_number_runtime_keeps_fraction() {
        let record = Record {
            runtime: Some(12.0),
            timeout: true,
            ..sample()
        };
        let cells = record.cells();
        assert_eq!(cells[4], "True");
        assert_eq!(cells[5], "12.0");
    }

    #[test]
    fn test_runtime_cell_round_trips_parsed_value() {
        for runtime in [0.005, 0.021, 12.34, 1843.0] {
            let record = Record {
                runtime: Some(runtime),
                ..sample()
            };
            let cell = &record.cells()[5];
            assert!(cell.contains('.'), "{cell}");
            assert_eq!(cell.parse::<f64>().unwrap(), runtime);
        }
    }

    #[test]
    fn test_json_keys_use_column_names_in_order() {
        let text = serde_json::to_string(&sample()).expect("serialize");
        let positions: Vec<usize> = [
            "propagator type",
            "test type",
            "domain group",
            "test id",
            "timeout",
            "runtime",
            "requested solutions",
            "solutions",
            "nodes",
        ]
        .iter()
        .map(|k| text.find(&format!("\"{k}\"")).expect(k))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{text}");
    }

    #[test]
    fn test_json_omits_absent_statistics() {
        let raw: Value = serde_json::to_value(sample()).expect("serialize");
        assert_eq!(
            raw,
            json!({
                "propagator type": "Modulo",
                "test type": "B",
                "domain group": 2,
                "test id": 7,
                "timeout": false,
                "runtime": 0.5,
                "requested solutions": 5,
                "solutions": 3,
                "nodes": 10,
            })
        );
    }

    #[test]
    fn test_every_column_is_a_serialized_key_when_all_fields_present() {
        let record = Record::merge(
            FileMeta {
                propagator: PropagatorType::AdvModulo,
                test_type: TestType::R,
                domain_group: 1,
                test_id: 1,
                requested_solutions: 1,
            },
            BodyFields {
                timeout: true,
                runtime: Some(1.0),
                solutions: Some(1),
                propagations: Some(1),
                nodes: Some(1),
                failures: Some(1),
                peak_depth: Some(1),
            },
        );
        let raw: Value = serde_json::to_value(&record).expect("serialize");
        let obj = raw.as_object().expect("object");
        for key in COLUMNS {
            assert!(obj.contains_key(key), "missing key: {key}");
        }
        assert_eq!(obj.len(), COLUMNS.len());
    }
}
