//! Coalescing character matches into reported passages

use crate::types::{CharMatch, MergedSpan};
use tracing::trace;

/// Merge nearby matches into similar-passage spans
///
/// `a_chars` is text A as characters; it is only used to measure how long a
/// match is once leading and trailing whitespace are ignored. See
/// [`filter_displayable`] and [`coalesce`] for the two steps.
pub fn merge(
    a_chars: &[char],
    matches: &[CharMatch],
    merge_gap_threshold: usize,
    min_display_length: usize,
) -> Vec<MergedSpan> {
    coalesce(
        filter_displayable(a_chars, matches, min_display_length),
        merge_gap_threshold,
    )
}

/// Keep matches whose trimmed text in A is longer than `min_display_length`
///
/// Offsets of kept matches are not altered by the trimming.
pub fn filter_displayable(
    a_chars: &[char],
    matches: &[CharMatch],
    min_display_length: usize,
) -> Vec<CharMatch> {
    let kept: Vec<CharMatch> = matches
        .iter()
        .filter(|m| trimmed_len(a_chars, m.a_start, m.a_end) > min_display_length)
        .copied()
        .collect();

    trace!(
        matches = matches.len(),
        kept = kept.len(),
        min_display_length,
        "filtered short matches"
    );
    kept
}

/// Fold matches into spans, left to right by start in A
///
/// A match that overlaps the running span, or starts fewer than
/// `merge_gap_threshold` characters after it ends, extends the running span.
/// The B end is taken from the latest merged match, not unioned.
///
/// The A end is the maximum of the running end and the match end, so a
/// match nested inside the running span never shrinks it. Matcher output
/// never overlaps in A, so this only matters for hand-built input; for
/// non-overlapping matches it is the same as taking the latest end.
pub fn coalesce(mut matches: Vec<CharMatch>, merge_gap_threshold: usize) -> Vec<MergedSpan> {
    // Stable, so matches with equal starts keep their input order
    matches.sort_by_key(|m| m.a_start);

    let mut iter = matches.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut spans = Vec::new();
    let mut running = MergedSpan::from(first);
    for m in iter {
        let mergeable =
            m.a_start < running.a_end || m.a_start - running.a_end < merge_gap_threshold;
        if mergeable {
            running.a_end = running.a_end.max(m.a_end);
            running.b_end = m.b_end;
        } else {
            spans.push(running);
            running = MergedSpan::from(m);
        }
    }
    spans.push(running);

    spans
}

/// Character length of `a_chars[start..end]` without surrounding whitespace
fn trimmed_len(a_chars: &[char], start: usize, end: usize) -> usize {
    let end = end.min(a_chars.len());
    let start = start.min(end);
    let slice = &a_chars[start..end];

    let Some(first) = slice.iter().position(|c| !c.is_whitespace()) else {
        return 0;
    };
    let last = slice
        .iter()
        .rposition(|c| !c.is_whitespace())
        .unwrap_or(first);
    last + 1 - first
}
