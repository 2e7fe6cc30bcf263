//! Error types for the matching engine
//!
//! Matching itself is total: every pair of texts, including empty ones,
//! produces a (possibly empty) result. The only failure is a configuration
//! that cannot describe a meaningful match, rejected before any work starts.

use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Configuration rejected during validation
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Why the configuration was rejected
        reason: String,
    },
}

impl MatchError {
    /// Shorthand for an [`MatchError::InvalidConfiguration`] error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        MatchError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, MatchError>;
