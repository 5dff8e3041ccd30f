use std::fmt::Write;

use crate::error::Result;

use super::{ReportFormatter, StripReport};

/// Two-line `label: value` size report. Verbose mode adds replacement
/// and drop detail.
pub struct TextFormatter {
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_verbose(0)
    }

    #[must_use]
    pub const fn with_verbose(verbose: u8) -> Self {
        Self { verbose }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &StripReport) -> Result<String> {
        let mut output = String::new();

        let _ = writeln!(output, "Original size: {} bytes", report.original_bytes);
        let _ = writeln!(output, "Stripped size: {} bytes", report.written_bytes);

        if self.verbose >= 1 {
            let _ = writeln!(output, "Textures replaced: {}", report.replaced);
            for segment in &report.dropped {
                let _ = writeln!(
                    output,
                    "Dropped segment #{} ({} bytes)",
                    segment.index, segment.bytes
                );
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
