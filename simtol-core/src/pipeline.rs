//! Main similarity finder and builder
//!
//! Orchestrates one comparison: validate configuration, tokenize both texts,
//! match blocks, translate them to character offsets and merge them into
//! passages. Every call is independent; nothing is cached between calls.

use crate::{
    config::{Granularity, MatchConfig, MatchConfigBuilder},
    error::Result,
    matcher::AnchorIndex,
    merger::{coalesce, filter_displayable},
    tokenizer::{CharTokenizer, TokenStream, Tokenizer, WordTokenizer},
    types::{CharMatch, MatchBlock, MergedSpan, OffsetSpan},
};
use std::time::{Duration, Instant};
use tracing::debug;

/// Find similar passages between two texts
///
/// Returned spans are character offsets into the original `text_a` and
/// `text_b`, ordered by start in A. Empty texts produce an empty result.
///
/// # Errors
///
/// [`MatchError::InvalidConfiguration`](crate::MatchError::InvalidConfiguration)
/// when `config` fails validation.
pub fn find_similar_patterns(
    text_a: &str,
    text_b: &str,
    config: &MatchConfig,
) -> Result<Vec<MergedSpan>> {
    SimilarityFinder::with_config(config.clone())?.find(text_a, text_b)
}

/// Passages found between two texts plus statistics
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    /// Similar passages ordered by start in A
    pub spans: Vec<MergedSpan>,
    /// Statistics about the comparison
    pub stats: ComparisonStats,
}

/// Statistics gathered while comparing two texts
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonStats {
    /// Comparison units in text A
    pub units_a: usize,
    /// Comparison units in text B
    pub units_b: usize,
    /// Blocks found by the matcher
    pub blocks_found: usize,
    /// Blocks long enough to be reported
    pub blocks_kept: usize,
    /// Characters in text A
    pub chars_a: usize,
    /// Characters of A inside reported passages
    pub covered_chars_a: usize,
    /// Share of A inside reported passages (0.0 to 1.0)
    pub coverage_a: f64,
    /// Wall-clock time of the comparison
    pub duration: Duration,
}

/// Reusable comparison entry point holding a validated configuration
#[derive(Debug, Clone)]
pub struct SimilarityFinder {
    config: MatchConfig,
}

impl SimilarityFinder {
    /// Create a finder with the default configuration
    pub fn new() -> Self {
        Self {
            config: MatchConfig::default(),
        }
    }

    /// Create a finder with a custom configuration
    pub fn with_config(config: MatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a builder
    pub fn builder() -> SimilarityFinderBuilder {
        SimilarityFinderBuilder::new()
    }

    /// Get the configuration
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Find similar passages between two texts
    pub fn find(&self, text_a: &str, text_b: &str) -> Result<Vec<MergedSpan>> {
        Ok(self.compare(text_a, text_b)?.spans)
    }

    /// Find similar passages and collect statistics
    pub fn compare(&self, text_a: &str, text_b: &str) -> Result<Comparison> {
        let start = Instant::now();
        let normalize = self.config.normalize_case;

        let alignment = match self.config.granularity {
            Granularity::Character => {
                self.align(&CharTokenizer::new(normalize), text_a, text_b)?
            }
            Granularity::Word => self.align(&WordTokenizer::new(normalize), text_a, text_b)?,
        };

        let a_chars: Vec<char> = text_a.chars().collect();
        let displayable = filter_displayable(
            &a_chars,
            &alignment.matches,
            self.config.min_display_length,
        );
        let blocks_kept = displayable.len();
        let spans = coalesce(displayable, self.config.merge_gap_threshold);

        let covered_chars_a: usize = spans.iter().map(|s| s.a_span().len()).sum();
        let chars_a = a_chars.len();
        let coverage_a = if chars_a == 0 {
            0.0
        } else {
            covered_chars_a as f64 / chars_a as f64
        };

        let duration = start.elapsed();
        debug!(
            granularity = %self.config.granularity,
            units_a = alignment.units_a,
            units_b = alignment.units_b,
            blocks = alignment.matches.len(),
            spans = spans.len(),
            coverage_a,
            elapsed_ms = duration.as_secs_f64() * 1000.0,
            "comparison finished"
        );

        Ok(Comparison {
            spans,
            stats: ComparisonStats {
                units_a: alignment.units_a,
                units_b: alignment.units_b,
                blocks_found: alignment.matches.len(),
                blocks_kept,
                chars_a,
                covered_chars_a,
                coverage_a,
                duration,
            },
        })
    }

    /// Tokenize both texts, match them and map blocks to character offsets
    fn align<T: Tokenizer>(
        &self,
        tokenizer: &T,
        text_a: &str,
        text_b: &str,
    ) -> Result<Alignment> {
        let tokens_a = tokenizer.tokenize(text_a);
        let tokens_b = tokenizer.tokenize(text_b);

        let min_length = self.config.effective_min_match_length();
        let index = AnchorIndex::build(&tokens_b.units, min_length)?;
        let matches = index
            .find_blocks(&tokens_a.units)
            .iter()
            .map(|block| to_char_match(block, &tokens_a, &tokens_b))
            .collect();

        Ok(Alignment {
            units_a: tokens_a.len(),
            units_b: tokens_b.len(),
            matches,
        })
    }
}

impl Default for SimilarityFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Matcher output translated to character offsets
struct Alignment {
    units_a: usize,
    units_b: usize,
    matches: Vec<CharMatch>,
}

/// Map a unit-indexed block onto the character ranges of its units
fn to_char_match<U>(block: &MatchBlock, a: &TokenStream<U>, b: &TokenStream<U>) -> CharMatch {
    let a_span = covering_span(&a.offsets[block.pos_a..block.end_a()]);
    let b_span = covering_span(&b.offsets[block.pos_b..block.end_b()]);
    CharMatch::new(a_span.start, a_span.end, b_span.start, b_span.end)
}

/// Span from the first unit's start to the last unit's end
fn covering_span(units: &[OffsetSpan]) -> OffsetSpan {
    match (units.first(), units.last()) {
        (Some(first), Some(last)) => OffsetSpan::new(first.start, last.end),
        _ => OffsetSpan::default(),
    }
}

/// Builder for [`SimilarityFinder`]
///
/// Provides a fluent interface for configuring the finder.
#[derive(Debug, Default)]
pub struct SimilarityFinderBuilder {
    config_builder: MatchConfigBuilder,
}

impl SimilarityFinderBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comparison granularity
    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.config_builder = self.config_builder.granularity(granularity);
        self
    }

    /// Set the minimum block length in units
    pub fn min_match_length(mut self, units: usize) -> Self {
        self.config_builder = self.config_builder.min_match_length(units);
        self
    }

    /// Set the merge gap threshold in characters
    pub fn merge_gap_threshold(mut self, chars: usize) -> Self {
        self.config_builder = self.config_builder.merge_gap_threshold(chars);
        self
    }

    /// Set the minimum trimmed length of a reported block
    pub fn min_display_length(mut self, chars: usize) -> Self {
        self.config_builder = self.config_builder.min_display_length(chars);
        self
    }

    /// Enable or disable lowercasing before matching
    pub fn normalize_case(mut self, enabled: bool) -> Self {
        self.config_builder = self.config_builder.normalize_case(enabled);
        self
    }

    /// Build the finder
    pub fn build(self) -> Result<SimilarityFinder> {
        SimilarityFinder::with_config(self.config_builder.build()?)
    }
}
