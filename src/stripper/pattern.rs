use std::borrow::Cow;

use regex::Regex;

use crate::error::Result;

use super::{StripOutcome, TextureStripper, replacement_rect};

/// Single-substitution regex strategy.
///
/// Matches a `<path` tag whose `fill` attribute equals the target color
/// exactly, followed eventually by a non-empty `d` attribute, up to the
/// element's closing `>`. Only the first match is replaced.
pub struct PatternStripper {
    pattern: Regex,
    replacement: String,
}

impl PatternStripper {
    /// Compile the stripper for a fill color.
    ///
    /// # Errors
    /// Returns an error if the assembled pattern fails to compile.
    pub fn new(fill: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(
            r#"<path[^>]*fill="{}"[^>]*\bd="[^"]+"[^>]*>"#,
            regex::escape(fill)
        ))?;
        Ok(Self {
            pattern,
            replacement: replacement_rect(fill),
        })
    }
}

impl TextureStripper for PatternStripper {
    fn strip(&self, document: &str) -> StripOutcome {
        match self.pattern.replacen(document, 1, self.replacement.as_str()) {
            Cow::Borrowed(_) => StripOutcome {
                text: document.to_owned(),
                replaced: 0,
                dropped: Vec::new(),
            },
            Cow::Owned(text) => StripOutcome {
                text,
                replaced: 1,
                dropped: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
