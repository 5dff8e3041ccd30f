use std::path::PathBuf;

use crate::stripper::{SegmentAction, SegmentInfo};

use super::*;

fn sample_survey() -> SurveyReport {
    SurveyReport {
        input: PathBuf::from("Logo_optimized.svg"),
        total_bytes: 48_213,
        segments: vec![
            SegmentInfo {
                index: 1,
                bytes: 120,
                has_fill: false,
                action: SegmentAction::Keep,
            },
            SegmentInfo {
                index: 2,
                bytes: 45_000,
                has_fill: true,
                action: SegmentAction::Replace,
            },
            SegmentInfo {
                index: 3,
                bytes: 1500,
                has_fill: true,
                action: SegmentAction::Drop,
            },
        ],
    }
}

#[test]
fn text_survey_summarizes_actions() {
    let rendered = SurveyTextFormatter.format(&sample_survey()).unwrap();
    assert!(rendered.contains("Document: Logo_optimized.svg (48213 bytes)"));
    assert!(rendered.contains("Summary: 3 segments, 1 kept, 1 replaced, 1 dropped"));
}

#[test]
fn text_survey_lists_every_segment() {
    let rendered = SurveyTextFormatter.format(&sample_survey()).unwrap();
    // Header + one line per segment + summary
    assert_eq!(rendered.lines().count(), 5);
    assert!(rendered.contains("replace"));
    assert!(rendered.contains("drop"));
}

#[test]
fn json_survey_serializes_actions_lowercase() {
    let rendered = SurveyJsonFormatter.format(&sample_survey()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["total_bytes"], 48_213);
    assert_eq!(value["segments"][0]["action"], "keep");
    assert_eq!(value["segments"][1]["action"], "replace");
    assert_eq!(value["segments"][2]["action"], "drop");
    assert_eq!(value["segments"][1]["has_fill"], true);
}
