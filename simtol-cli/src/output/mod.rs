//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use simtol_core::{CharIndex, Comparison};
use std::io::Write;

use crate::config::OutputConfig;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the passages found in one B file
    fn format_report(&mut self, report: &FileReport) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One block per passage with offsets and both texts
    #[default]
    Text,
    /// JSON array with one object per B file
    Json,
    /// Markdown sections with numbered passages
    Markdown,
}

impl OutputFormat {
    /// All formats with a short description
    pub fn describe_all() -> [(&'static str, &'static str); 3] {
        [
            ("text", "Passages with offsets and snippets (default)"),
            ("json", "JSON array of files with spans and coverage"),
            ("markdown", "Markdown sections with numbered passages"),
        ]
    }
}

/// One similar passage with its text in both files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageData {
    /// Start offset in A (characters)
    pub a_start: usize,
    /// End offset in A (characters, exclusive)
    pub a_end: usize,
    /// Start offset in B (characters)
    pub b_start: usize,
    /// End offset in B (characters)
    pub b_end: usize,
    /// Passage text in A
    pub text_a: String,
    /// Passage text in B
    pub text_b: String,
}

/// Comparison result of file A against one B file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    /// Path of the B file
    pub file_b: String,
    /// Passages ordered by start in A
    pub spans: Vec<PassageData>,
    /// Share of A covered by the passages
    pub coverage_a: f64,
}

impl FileReport {
    /// Build a report by slicing the passages out of both texts
    ///
    /// Each text is indexed once, so cost stays linear in text length
    /// however many passages were found.
    pub fn new(
        file_b: impl Into<String>,
        text_a: &str,
        text_b: &str,
        comparison: &Comparison,
    ) -> Self {
        let index_a = CharIndex::new(text_a);
        let index_b = CharIndex::new(text_b);
        let spans = comparison
            .spans
            .iter()
            .map(|span| PassageData {
                a_start: span.a_start,
                a_end: span.a_end,
                b_start: span.b_start,
                b_end: span.b_end,
                text_a: index_a.slice(span.a_span()).to_string(),
                text_b: index_b.slice(span.b_span()).to_string(),
            })
            .collect();

        Self {
            file_b: file_b.into(),
            spans,
            coverage_a: comparison.stats.coverage_a,
        }
    }
}

/// Create the formatter for `format` writing into `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    config: &OutputConfig,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => {
            Box::new(TextFormatter::new(writer).with_snippet_width(config.snippet_width))
        }
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(config.pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
