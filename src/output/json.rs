use crate::error::Result;

use super::{ReportFormatter, StripReport};

pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &StripReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
