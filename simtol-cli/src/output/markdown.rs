//! Markdown output formatter

use super::{FileReport, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - one section per B file with numbered passages
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    file_count: usize,
    passage_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            file_count: 0,
            passage_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, report: &FileReport) -> Result<()> {
        self.file_count += 1;
        self.passage_count += report.spans.len();

        writeln!(self.writer, "## {}", report.file_b)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "*{} passage(s), {:.1}% of A covered*",
            report.spans.len(),
            report.coverage_a * 100.0
        )?;
        writeln!(self.writer)?;

        for (i, span) in report.spans.iter().enumerate() {
            writeln!(
                self.writer,
                "{}. A `{}..{}` ~ B `{}..{}`",
                i + 1,
                span.a_start,
                span.a_end,
                span.b_start,
                span.b_end
            )?;
            writeln!(self.writer, "   > {}", quote(&span.text_a))?;
        }
        if !report.spans.is_empty() {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total passages: {} in {} file(s)*",
            self.passage_count, self.file_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Passage text as a single blockquote line
fn quote(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
