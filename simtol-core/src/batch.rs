//! One-against-many comparison
//!
//! Each pair is an independent pipeline run with no shared mutable state,
//! so pairs can be spread over the rayon pool. Results always come back in
//! the order of the input texts.

use crate::{
    config::MatchConfig,
    error::Result,
    pipeline::{Comparison, SimilarityFinder},
};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default total size (in bytes) above which adaptive mode goes parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256 * 1024;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Compare pairs one after another on the calling thread
    Sequential,
    /// Compare pairs on the rayon thread pool
    Parallel,
    /// Pick sequential or parallel from the amount of text
    #[default]
    Adaptive,
}

/// Select an execution mode from the workload size
///
/// A single pair never benefits from the pool; otherwise go parallel once
/// the combined input size reaches `threshold` bytes.
pub fn auto_select(pair_count: usize, total_bytes: usize, threshold: usize) -> ExecutionMode {
    if pair_count < 2 || total_bytes < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}

/// Compares one text against many others
#[derive(Debug, Clone)]
pub struct BatchComparer {
    finder: SimilarityFinder,
    mode: ExecutionMode,
    parallel_threshold: usize,
}

impl BatchComparer {
    /// Create a comparer in adaptive mode
    pub fn new(config: MatchConfig) -> Result<Self> {
        Ok(Self {
            finder: SimilarityFinder::with_config(config)?,
            mode: ExecutionMode::Adaptive,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        })
    }

    /// Force an execution mode
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the adaptive threshold in bytes
    pub fn with_parallel_threshold(mut self, bytes: usize) -> Self {
        self.parallel_threshold = bytes;
        self
    }

    /// The finder used for every pair
    pub fn finder(&self) -> &SimilarityFinder {
        &self.finder
    }

    /// Compare `text_a` against each of `others`
    ///
    /// The i-th result belongs to `others[i]`.
    pub fn compare_all<S>(&self, text_a: &str, others: &[S]) -> Result<Vec<Comparison>>
    where
        S: AsRef<str> + Sync,
    {
        let mode = match self.mode {
            ExecutionMode::Adaptive => {
                let total = text_a.len() * others.len()
                    + others.iter().map(|t| t.as_ref().len()).sum::<usize>();
                auto_select(others.len(), total, self.parallel_threshold)
            }
            mode => mode,
        };

        debug!(pairs = others.len(), ?mode, "comparing batch");

        match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => others
                .par_iter()
                .map(|text_b| self.finder.compare(text_a, text_b.as_ref()))
                .collect::<Result<Vec<_>>>(),
            _ => others
                .iter()
                .map(|text_b| self.finder.compare(text_a, text_b.as_ref()))
                .collect::<Result<Vec<_>>>(),
        }
    }
}

/// Compare `text_a` against each of `others` with adaptive execution
pub fn compare_many<S>(
    text_a: &str,
    others: &[S],
    config: &MatchConfig,
) -> Result<Vec<Comparison>>
where
    S: AsRef<str> + Sync,
{
    BatchComparer::new(config.clone())?.compare_all(text_a, others)
}
