//! Hash-anchored block matching
//!
//! Every `min_length`-unit window of sequence B is indexed once. Sequence A
//! is then scanned left to right; a window of A found in the index is
//! extended greedily against the first recorded position in B, and the scan
//! jumps past the matched region. This is linear on typical inputs instead
//! of comparing every pair of positions.
//!
//! The result is **not globally optimal by design**: the first anchor
//! candidate in B wins even when a later candidate would give a longer run,
//! and consumed regions of A are never revisited. Downstream thresholds are
//! tuned for exactly this first-match-wins, advance-past behavior.

use crate::error::{MatchError, Result};
use crate::types::MatchBlock;
use core::hash::Hash;
use std::collections::HashMap;
use tracing::trace;

/// Positions of every fixed-length window of a sequence
///
/// Windows map to their start positions in ascending order, so lookups
/// yield the earliest occurrence first.
#[derive(Debug)]
pub struct AnchorIndex<'b, T> {
    sequence: &'b [T],
    window: usize,
    anchors: HashMap<&'b [T], Vec<usize>>,
}

impl<'b, T: Eq + Hash> AnchorIndex<'b, T> {
    /// Index every `window`-unit slice of `sequence`
    pub fn build(sequence: &'b [T], window: usize) -> Result<Self> {
        if window == 0 {
            return Err(MatchError::invalid_config(
                "min_match_length must be greater than 0",
            ));
        }

        let mut anchors: HashMap<&'b [T], Vec<usize>> = HashMap::new();
        // windows() yields nothing when the sequence is shorter than the window
        for (pos, slice) in sequence.windows(window).enumerate() {
            anchors.entry(slice).or_default().push(pos);
        }

        trace!(
            units = sequence.len(),
            window,
            distinct_anchors = anchors.len(),
            "built anchor index"
        );

        Ok(Self {
            sequence,
            window,
            anchors,
        })
    }

    /// Window length in units
    pub fn window(&self) -> usize {
        self.window
    }

    /// The indexed sequence
    pub fn sequence(&self) -> &'b [T] {
        self.sequence
    }

    /// Number of distinct windows
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Whether the sequence was too short to hold a single window
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Start positions of `key` in the indexed sequence, earliest first
    pub fn candidates(&self, key: &[T]) -> &[usize] {
        self.anchors.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Find the matching blocks between `a` and the indexed sequence
    ///
    /// Blocks are sorted by position in `a`, never overlap in `a`, and are
    /// at least [`window`](Self::window) units long.
    pub fn find_blocks(&self, a: &[T]) -> Vec<MatchBlock> {
        let window = self.window;
        let b = self.sequence;
        let mut blocks = Vec::new();

        if a.len() < window || self.is_empty() {
            return blocks;
        }

        let mut i = 0;
        while i + window <= a.len() {
            let mut advance = 1;
            for &j in self.candidates(&a[i..i + window]) {
                let size = extend_match(a, b, i, j, window);
                if size >= window {
                    blocks.push(MatchBlock::new(i, j, size));
                    advance = size;
                    break;
                }
            }
            i += advance;
        }

        blocks.sort_by_key(|block| block.pos_a);
        let kept = retain_outermost(blocks);
        trace!(blocks = kept.len(), "matched blocks");
        kept
    }
}

/// Length of the run of equal units starting at `a[i]` and `b[j]`
///
/// The first `known` units are already known to be equal.
fn extend_match<T: Eq>(a: &[T], b: &[T], i: usize, j: usize, known: usize) -> usize {
    known
        + a[i + known..]
            .iter()
            .zip(&b[j + known..])
            .take_while(|(x, y)| x == y)
            .count()
}

/// Drop blocks that start inside an earlier kept block
///
/// Input must be sorted by `pos_a`.
fn retain_outermost(blocks: Vec<MatchBlock>) -> Vec<MatchBlock> {
    let mut kept = Vec::with_capacity(blocks.len());
    let mut last_end = 0;
    for block in blocks {
        if block.pos_a >= last_end {
            last_end = block.end_a();
            kept.push(block);
        }
    }
    kept
}

/// Find matching blocks of at least `min_length` units between `a` and `b`
///
/// Convenience wrapper that indexes `b` and scans `a` once. Fails only when
/// `min_length` is zero.
pub fn find_blocks<T: Eq + Hash>(a: &[T], b: &[T], min_length: usize) -> Result<Vec<MatchBlock>> {
    Ok(AnchorIndex::build(b, min_length)?.find_blocks(a))
}
