//! Error handling for the CLI application

use thiserror::Error;

/// Custom error type for CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// File not found or not a regular file
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),

    /// No file matched any of the given patterns
    #[error("No files found matching: {0}")]
    NoFilesMatched(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Input file is not UTF-8 text
    #[error("{path} is not valid UTF-8 text (first invalid byte at offset {offset})")]
    InvalidEncoding {
        /// Offending file
        path: String,
        /// Byte offset of the first invalid sequence
        offset: usize,
    },
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
