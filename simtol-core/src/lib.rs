//! Tolerant passage alignment between two texts
//!
//! Finds regions of substantial overlap between two documents and reports
//! them as aligned spans, tolerating small gaps and insertions. Intended for
//! near-duplicate and copied-passage detection where exact equality of the
//! whole text is too strict.
//!
//! # Architecture
//!
//! - [`tokenizer`]: text to comparison units (characters or words) with
//!   character offsets into the original text
//! - [`matcher`]: hash-anchored greedy block matching
//! - [`merger`]: short-block filtering and gap-tolerant merging
//! - [`pipeline`]: the end-to-end comparison
//! - [`batch`]: one text against many, optionally in parallel
//!
//! # Example
//!
//! ```rust
//! use simtol_core::{find_similar_patterns, Granularity, MatchConfig};
//!
//! let a = "the quick brown fox jumps over the lazy dog";
//! let b = "a quick brown fox jumps over a very lazy dog";
//!
//! let config = MatchConfig::builder()
//!     .granularity(Granularity::Word)
//!     .min_match_length(3)
//!     .merge_gap_threshold(5)
//!     .build()
//!     .unwrap();
//!
//! let spans = find_similar_patterns(a, b, &config).unwrap();
//! assert_eq!(spans.len(), 1);
//! assert_eq!(spans[0].text_a(a), "quick brown fox jumps over");
//! ```

#![warn(missing_docs)]

pub mod batch;
pub mod config;
pub mod error;
pub mod matcher;
pub mod merger;
pub mod pipeline;
pub mod tokenizer;
pub mod types;

// Re-export key types
pub use batch::{compare_many, BatchComparer, ExecutionMode};
pub use config::{Granularity, MatchConfig, MatchConfigBuilder};
pub use error::{MatchError, Result};
pub use matcher::{find_blocks, AnchorIndex};
pub use merger::merge;
pub use pipeline::{
    find_similar_patterns, Comparison, ComparisonStats, SimilarityFinder, SimilarityFinderBuilder,
};
pub use tokenizer::{CharTokenizer, TokenStream, Tokenizer, WordTokenizer};
pub use types::{CharIndex, CharMatch, MatchBlock, MergedSpan, OffsetSpan};
