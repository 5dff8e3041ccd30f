mod json;
mod survey;
mod text;

pub use json::JsonFormatter;
pub use survey::{SurveyJsonFormatter, SurveyTextFormatter};
pub use text::TextFormatter;

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::stripper::{DroppedSegment, SegmentInfo};

/// Summary of one strip run, assembled after the output file is written
/// so the written size reflects the file on disk.
#[derive(Debug, Clone, Serialize)]
pub struct StripReport {
    pub strategy: String,
    pub input: PathBuf,
    pub output: PathBuf,
    /// Byte length of the document as read.
    pub original_bytes: usize,
    /// Byte length of the output file on disk.
    pub written_bytes: u64,
    pub replaced: usize,
    pub dropped: Vec<DroppedSegment>,
}

/// Per-segment classification of a document, produced by `inspect`.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyReport {
    pub input: PathBuf,
    pub total_bytes: usize,
    pub segments: Vec<SegmentInfo>,
}

/// Trait for formatting a strip report.
pub trait ReportFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &StripReport) -> Result<String>;
}

/// Trait for formatting a segment survey.
pub trait SurveyFormatter {
    /// Format the survey into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &SurveyReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
