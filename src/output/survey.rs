use std::fmt::Write;

use crate::error::Result;
use crate::stripper::SegmentAction;

use super::{SurveyFormatter, SurveyReport};

/// Per-segment listing with a one-line summary.
pub struct SurveyTextFormatter;

impl SurveyFormatter for SurveyTextFormatter {
    fn format(&self, report: &SurveyReport) -> Result<String> {
        let mut output = String::new();

        let _ = writeln!(
            output,
            "Document: {} ({} bytes)",
            report.input.display(),
            report.total_bytes
        );

        let (mut kept, mut replaced, mut dropped) = (0, 0, 0);
        for segment in &report.segments {
            let action = match segment.action {
                SegmentAction::Keep => {
                    kept += 1;
                    "keep"
                }
                SegmentAction::Replace => {
                    replaced += 1;
                    "replace"
                }
                SegmentAction::Drop => {
                    dropped += 1;
                    "drop"
                }
            };
            let fill_marker = if segment.has_fill { "fill" } else { "-" };
            let _ = writeln!(
                output,
                "  #{:<3} {:>8} bytes  {fill_marker:<4}  {action}",
                segment.index, segment.bytes
            );
        }

        let _ = writeln!(
            output,
            "Summary: {} segments, {kept} kept, {replaced} replaced, {dropped} dropped",
            report.segments.len()
        );

        Ok(output)
    }
}

pub struct SurveyJsonFormatter;

impl SurveyFormatter for SurveyJsonFormatter {
    fn format(&self, report: &SurveyReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

#[cfg(test)]
#[path = "survey_tests.rs"]
mod tests;
