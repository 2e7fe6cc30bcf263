//! Plain text output formatter

use super::{FileReport, OutputFormatter};
use crate::config::DEFAULT_SNIPPET_WIDTH;
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - one block per passage with both snippets
pub struct TextFormatter<W: Write> {
    writer: W,
    snippet_width: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            snippet_width: DEFAULT_SNIPPET_WIDTH,
        }
    }

    /// Truncate snippets to `width` characters (0 = no limit)
    pub fn with_snippet_width(mut self, width: usize) -> Self {
        self.snippet_width = width;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, report: &FileReport) -> Result<()> {
        writeln!(
            self.writer,
            "{}: {} similar passage(s), {:.1}% of A covered",
            report.file_b,
            report.spans.len(),
            report.coverage_a * 100.0
        )?;

        for (i, span) in report.spans.iter().enumerate() {
            writeln!(
                self.writer,
                "  [{}] A {}..{} ~ B {}..{}",
                i + 1,
                span.a_start,
                span.a_end,
                span.b_start,
                span.b_end
            )?;
            writeln!(self.writer, "      A: {}", snippet(&span.text_a, self.snippet_width))?;
            writeln!(self.writer, "      B: {}", snippet(&span.text_b, self.snippet_width))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Collapse whitespace runs and truncate to `width` characters
fn snippet(text: &str, width: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if width == 0 || collapsed.chars().count() <= width {
        return collapsed;
    }

    let mut truncated: String = collapsed.chars().take(width.saturating_sub(3)).collect();
    truncated.push_str("...");
    truncated
}
