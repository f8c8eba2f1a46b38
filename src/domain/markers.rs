// SPDX-License-Identifier: MIT OR Apache-2.0

//! Start and end fences of the merged partials section.

use crate::domain::CommentStyle;

const RULE: &str = "============================";
const OPEN_TAG: &str = "PARTIALS>>>>>";
const CLOSE_TAG: &str = "PARTIALS<<<<<";

/// The two comment blocks that delimit the partials section.
///
/// # Examples
///
/// ```
/// use parts::domain::{CommentStyle, SectionMarkers};
///
/// let markers = SectionMarkers::new(&CommentStyle::line("#"));
/// assert_eq!(
///     markers.start,
///     "# ============================\n# PARTIALS>>>>>\n# ============================"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionMarkers {
    /// Block written before the first partial.
    pub start: String,
    /// Block written after the last partial.
    pub end: String,
}

/// Byte offsets of a located section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionSpan {
    /// Offset of the first byte of the start marker.
    pub start: usize,
    /// Offset just past the end marker and, if present, one newline after it.
    pub end: usize,
}

impl SectionMarkers {
    /// Builds the fences for `style`.
    pub fn new(style: &CommentStyle) -> Self {
        Self {
            start: Self::fence(style, OPEN_TAG),
            end: Self::fence(style, CLOSE_TAG),
        }
    }

    fn fence(style: &CommentStyle, tag: &str) -> String {
        let s = &style.start;
        if style.is_block() {
            format!("{s}\n{s} {tag}\n{}", style.end)
        } else {
            format!("{s} {RULE}\n{s} {tag}\n{s} {RULE}")
        }
    }

    /// Finds the first start fence and the first end fence in `text`.
    ///
    /// Works on raw bytes so files in any encoding can be searched. Returns
    /// `None` unless both fences are present with the start fence first.
    pub fn locate(&self, text: &[u8]) -> Option<SectionSpan> {
        let start = find(text, self.start.as_bytes())?;
        let end_at = find(text, self.end.as_bytes())?;
        if end_at < start {
            tracing::warn!(
                "end marker at offset {} precedes start marker at offset {}, ignoring section",
                end_at,
                start
            );
            return None;
        }

        let mut end = end_at + self.end.len();
        if text[end..].starts_with(b"\n") {
            end += 1;
        }
        Some(SectionSpan { start, end })
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
