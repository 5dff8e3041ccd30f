//! Texture removal strategies.
//!
//! The document is opaque text throughout; both strategies locate the
//! grunge texture by its fill color and substitute a fixed rectangle.

mod pattern;
mod segment;

pub use pattern::PatternStripper;
pub use segment::{SegmentAction, SegmentInfo, SegmentStripper};

use serde::Serialize;

/// Fill color identifying the grunge texture path.
pub const TARGET_FILL: &str = "#EFECE1";

/// Width of the rectangle substituted for the texture.
pub const RECT_WIDTH: u32 = 1024;

/// Height of the rectangle substituted for the texture.
pub const RECT_HEIGHT: u32 = 1024;

/// Builds the rectangle element substituted for a removed texture path.
#[must_use]
pub fn replacement_rect(fill: &str) -> String {
    format!(r#"<rect width="{RECT_WIDTH}" height="{RECT_HEIGHT}" fill="{fill}"/>"#)
}

/// A segment the filter heuristic removed without a replacement.
///
/// The heuristic loses fill-bearing segments between its two length
/// bounds; callers must surface these instead of swallowing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedSegment {
    /// 1-based position among the `<path` splits.
    pub index: usize,
    /// Byte length of the dropped segment, excluding the `<path` prefix.
    pub bytes: usize,
}

/// Result of one strategy pass over a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOutcome {
    pub text: String,
    pub replaced: usize,
    pub dropped: Vec<DroppedSegment>,
}

impl StripOutcome {
    /// True when the pass changed nothing and the text equals the input.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.replaced == 0 && self.dropped.is_empty()
    }
}

/// Strategy seam for texture removal.
pub trait TextureStripper {
    /// Transform the document, removing the texture where found.
    ///
    /// A document with no match comes back byte-identical; that is not
    /// an error.
    fn strip(&self, document: &str) -> StripOutcome;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
