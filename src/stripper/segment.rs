use serde::Serialize;

use super::{DroppedSegment, StripOutcome, TextureStripper, replacement_rect};

/// Literal the document is split on. Everything before the first
/// occurrence is preamble and always kept.
const PATH_DELIMITER: &str = "<path";

/// Segments at least this long that contain the fill are replaced.
pub const REPLACE_MIN_LEN: usize = 2000;

/// Segments under this length are always kept.
pub const KEEP_MAX_LEN: usize = 1000;

/// What the filter heuristic does with one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentAction {
    /// Re-emitted unchanged with the `<path` prefix restored.
    Keep,
    /// Substituted with the replacement rectangle.
    Replace,
    /// Removed with no replacement. Fill-bearing segments with a length
    /// in `[KEEP_MAX_LEN, REPLACE_MIN_LEN)` land here; the intended
    /// bound is unspecified, so drops are surfaced to the caller rather
    /// than silently remapped.
    Drop,
}

/// Classification of one `<path` segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentInfo {
    /// 1-based position among the splits.
    pub index: usize,
    /// Byte length, excluding the `<path` prefix.
    pub bytes: usize,
    /// Whether the target fill occurs in the segment, case-insensitive.
    pub has_fill: bool,
    pub action: SegmentAction,
}

/// Segment-filter strategy: split on `<path` and decide per segment by
/// length and fill color content.
pub struct SegmentStripper {
    fill_lower: String,
    replacement: String,
}

impl SegmentStripper {
    #[must_use]
    pub fn new(fill: &str) -> Self {
        Self {
            fill_lower: fill.to_lowercase(),
            replacement: replacement_rect(fill),
        }
    }

    fn classify(&self, segment: &str) -> (bool, SegmentAction) {
        let has_fill = segment.to_lowercase().contains(&self.fill_lower);
        let action = if has_fill && segment.len() >= REPLACE_MIN_LEN {
            SegmentAction::Replace
        } else if segment.len() < KEEP_MAX_LEN || !has_fill {
            SegmentAction::Keep
        } else {
            SegmentAction::Drop
        };
        (has_fill, action)
    }

    /// Classify every segment without rewriting the document.
    #[must_use]
    pub fn survey(&self, document: &str) -> Vec<SegmentInfo> {
        document
            .split(PATH_DELIMITER)
            .skip(1)
            .enumerate()
            .map(|(i, segment)| {
                let (has_fill, action) = self.classify(segment);
                SegmentInfo {
                    index: i + 1,
                    bytes: segment.len(),
                    has_fill,
                    action,
                }
            })
            .collect()
    }
}

impl TextureStripper for SegmentStripper {
    fn strip(&self, document: &str) -> StripOutcome {
        let mut pieces = document.split(PATH_DELIMITER);
        let mut text = pieces.next().unwrap_or_default().to_owned();
        let mut replaced = 0;
        let mut dropped = Vec::new();

        for (i, segment) in pieces.enumerate() {
            match self.classify(segment).1 {
                SegmentAction::Replace => {
                    text.push_str(&self.replacement);
                    replaced += 1;
                }
                SegmentAction::Keep => {
                    text.push_str(PATH_DELIMITER);
                    text.push_str(segment);
                }
                SegmentAction::Drop => dropped.push(DroppedSegment {
                    index: i + 1,
                    bytes: segment.len(),
                }),
            }
        }

        StripOutcome {
            text,
            replaced,
            dropped,
        }
    }
}

#[cfg(test)]
#[path = "segment_tests.rs"]
mod tests;
