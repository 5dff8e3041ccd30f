use std::path::PathBuf;

use crate::stripper::DroppedSegment;

use super::*;

fn sample_report() -> StripReport {
    StripReport {
        strategy: "segment".to_string(),
        input: PathBuf::from("Logo_optimized.svg"),
        output: PathBuf::from("Logo_clean.svg"),
        original_bytes: 48_213,
        written_bytes: 1_180,
        replaced: 1,
        dropped: vec![DroppedSegment {
            index: 3,
            bytes: 1200,
        }],
    }
}

#[test]
fn json_report_exposes_sizes_and_strategy() {
    let rendered = JsonFormatter.format(&sample_report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["strategy"], "segment");
    assert_eq!(value["original_bytes"], 48_213);
    assert_eq!(value["written_bytes"], 1_180);
    assert_eq!(value["replaced"], 1);
}

#[test]
fn json_report_lists_dropped_segments() {
    let rendered = JsonFormatter.format(&sample_report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["dropped"][0]["index"], 3);
    assert_eq!(value["dropped"][0]["bytes"], 1200);
}

#[test]
fn json_report_serializes_paths_as_strings() {
    let rendered = JsonFormatter.format(&sample_report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["input"], "Logo_optimized.svg");
    assert_eq!(value["output"], "Logo_clean.svg");
}
