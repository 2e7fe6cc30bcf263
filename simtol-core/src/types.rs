//! Core value types produced by the matching pipeline
//!
//! All offsets in [`OffsetSpan`], [`CharMatch`] and [`MergedSpan`] are
//! *character* offsets into the original, un-normalized input text.
//! [`MatchBlock`] positions index comparison units instead.

use core::fmt;

/// Half-open character range `[start, end)` in an original text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetSpan {
    /// First character of the span
    pub start: usize,
    /// One past the last character of the span
    pub end: usize,
}

impl OffsetSpan {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} past end {end}");
        Self { start, end }
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no characters
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slice the original text this span was computed from
    ///
    /// Offsets past the end of `text` are clamped to its length. Each call
    /// walks `text` from the start; use [`CharIndex`] to slice many spans.
    pub fn slice<'t>(&self, text: &'t str) -> &'t str {
        let start = byte_offset(text, self.start);
        let end = byte_offset(text, self.end).max(start);
        &text[start..end]
    }
}

impl fmt::Display for OffsetSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Convert a character offset to a byte offset
fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(byte, _)| byte)
}

/// Character-to-byte offset table for one text
///
/// Built once in O(n), then every slice is O(1). Used when many spans are
/// cut out of the same text.
#[derive(Debug, Clone)]
pub struct CharIndex<'t> {
    text: &'t str,
    // Byte offset of every char, plus `text.len()` as the final entry
    bytes: Vec<usize>,
}

impl<'t> CharIndex<'t> {
    /// Index the character boundaries of `text`
    pub fn new(text: &'t str) -> Self {
        let bytes = text
            .char_indices()
            .map(|(byte, _)| byte)
            .chain([text.len()])
            .collect();
        Self { text, bytes }
    }

    /// Number of characters in the text
    pub fn char_len(&self) -> usize {
        self.bytes.len() - 1
    }

    /// Byte offset of a character offset, clamped to the text length
    pub fn byte_offset(&self, char_offset: usize) -> usize {
        self.bytes
            .get(char_offset)
            .copied()
            .unwrap_or(self.text.len())
    }

    /// Slice `span` out of the text, with the same clamping as [`OffsetSpan::slice`]
    pub fn slice(&self, span: OffsetSpan) -> &'t str {
        let start = self.byte_offset(span.start);
        let end = self.byte_offset(span.end).max(start);
        &self.text[start..end]
    }
}

/// Equal run of comparison units shared by both sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchBlock {
    /// Start index in sequence A
    pub pos_a: usize,
    /// Start index in sequence B
    pub pos_b: usize,
    /// Number of matching units (always at least 1)
    pub len: usize,
}

impl MatchBlock {
    /// Create a new block
    pub fn new(pos_a: usize, pos_b: usize, len: usize) -> Self {
        Self { pos_a, pos_b, len }
    }

    /// One past the last matched unit in A
    pub fn end_a(&self) -> usize {
        self.pos_a + self.len
    }

    /// One past the last matched unit in B
    pub fn end_b(&self) -> usize {
        self.pos_b + self.len
    }
}

/// A [`MatchBlock`] translated to character offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharMatch {
    /// Start character in text A
    pub a_start: usize,
    /// End character (exclusive) in text A
    pub a_end: usize,
    /// Start character in text B
    pub b_start: usize,
    /// End character (exclusive) in text B
    pub b_end: usize,
}

impl CharMatch {
    /// Create a new character match
    pub fn new(a_start: usize, a_end: usize, b_start: usize, b_end: usize) -> Self {
        Self {
            a_start,
            a_end,
            b_start,
            b_end,
        }
    }

    /// Range covered in text A
    pub fn a_span(&self) -> OffsetSpan {
        OffsetSpan::new(self.a_start, self.a_end)
    }

    /// Range covered in text B
    pub fn b_span(&self) -> OffsetSpan {
        OffsetSpan::new(self.b_start, self.b_end)
    }
}

/// One reported similar passage, built from one or more [`CharMatch`]es
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MergedSpan {
    /// Start character in text A
    pub a_start: usize,
    /// End character (exclusive) in text A
    pub a_end: usize,
    /// Start character in text B
    pub b_start: usize,
    /// End character (exclusive) in text B
    pub b_end: usize,
}

impl MergedSpan {
    /// Create a new merged span
    pub fn new(a_start: usize, a_end: usize, b_start: usize, b_end: usize) -> Self {
        Self {
            a_start,
            a_end,
            b_start,
            b_end,
        }
    }

    /// Range covered in text A
    pub fn a_span(&self) -> OffsetSpan {
        OffsetSpan::new(self.a_start, self.a_end)
    }

    /// Range covered in text B
    ///
    /// B bounds come from the first and last merged block, so they are not
    /// guaranteed to be ordered when the blocks crossed over in B. The
    /// returned span is normalized to `min..max`.
    pub fn b_span(&self) -> OffsetSpan {
        OffsetSpan::new(
            self.b_start.min(self.b_end),
            self.b_start.max(self.b_end),
        )
    }

    /// The passage as it appears in the original text A
    pub fn text_a<'t>(&self, text_a: &'t str) -> &'t str {
        self.a_span().slice(text_a)
    }

    /// The passage as it appears in the original text B
    pub fn text_b<'t>(&self, text_b: &'t str) -> &'t str {
        self.b_span().slice(text_b)
    }
}

impl From<CharMatch> for MergedSpan {
    fn from(m: CharMatch) -> Self {
        Self::new(m.a_start, m.a_end, m.b_start, m.b_end)
    }
}

impl fmt::Display for MergedSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A[{}..{}] ~ B[{}..{}]",
            self.a_start, self.a_end, self.b_start, self.b_end
        )
    }
}
