//! Compare command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, total_size, InputFile};
use crate::output::{create_formatter, FileReport, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use simtol_core::batch::auto_select;
use simtol_core::{ExecutionMode, Granularity, MatchConfig, SimilarityFinder};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the compare command
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Reference file (text A)
    #[arg(short = 'a', long = "file-a", value_name = "FILE")]
    pub file_a: PathBuf,

    /// Files or patterns to compare against A (supports glob)
    #[arg(
        short = 'b',
        long = "file-b",
        value_name = "FILE/PATTERN",
        required = true,
        num_args = 1..
    )]
    pub file_b: Vec<String>,

    /// Comparison unit: word or character
    #[arg(short, long, value_name = "UNIT")]
    pub granularity: Option<Granularity>,

    /// Minimum block length in units
    #[arg(short, long, value_name = "UNITS")]
    pub min_match: Option<usize>,

    /// Merge blocks separated by fewer than this many characters in A
    #[arg(long, value_name = "CHARS")]
    pub merge_gap: Option<usize>,

    /// Drop blocks whose trimmed text is this many characters or fewer
    #[arg(long, value_name = "CHARS")]
    pub min_display: Option<usize>,

    /// Match case-sensitively
    #[arg(long)]
    pub keep_case: bool,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE", env = "SIMTOL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Force parallel comparison even for small inputs
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel comparison
    #[arg(short, long, value_name = "COUNT")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CompareArgs {
    /// Execute the compare command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting comparison");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let finder = SimilarityFinder::with_config(self.match_config(&config.matching))
            .context("Invalid matching options")?;
        self.init_thread_pool(&config)?;

        let file_a = InputFile::load(&self.file_a)?;
        let files_b = resolve_patterns(&self.file_b)?;

        let mode = self.execution_mode(&file_a.text, &files_b, &config)?;
        log::info!(
            "Comparing {} against {} file(s) ({:?})",
            file_a.name(),
            files_b.len(),
            mode
        );

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files_b.len() as u64);
        let reports = compare_files(&finder, &file_a.text, &files_b, mode, &progress)?;

        self.write_reports(&reports, &config)
    }

    /// Matching configuration with command-line flags applied over `base`
    pub fn match_config(&self, base: &MatchConfig) -> MatchConfig {
        let mut config = base.clone();
        if let Some(granularity) = self.granularity {
            config.granularity = granularity;
        }
        if let Some(min_match) = self.min_match {
            config.min_match_length = Some(min_match);
        }
        if let Some(merge_gap) = self.merge_gap {
            config.merge_gap_threshold = merge_gap;
        }
        if let Some(min_display) = self.min_display {
            config.min_display_length = min_display;
        }
        if self.keep_case {
            config.normalize_case = false;
        }
        config
    }

    /// Choose sequential or parallel comparison for this workload
    fn execution_mode(
        &self,
        text_a: &str,
        files_b: &[PathBuf],
        config: &CliConfig,
    ) -> Result<ExecutionMode> {
        if self.parallel {
            return Ok(ExecutionMode::Parallel);
        }

        let total_bytes = total_size(files_b)? as usize + text_a.len() * files_b.len();
        Ok(auto_select(
            files_b.len(),
            total_bytes,
            config.performance.parallel_threshold_kb * 1024,
        ))
    }

    /// Size the global rayon pool when a thread count is requested
    fn init_thread_pool(&self, config: &CliConfig) -> Result<()> {
        let threads = self
            .threads
            .or(Some(config.performance.worker_threads).filter(|&n| n > 0));

        if let Some(threads) = threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to configure worker threads")?;
            log::debug!("Using {} worker thread(s)", threads);
        }
        Ok(())
    }

    /// Render all reports with the selected formatter
    fn write_reports(&self, reports: &[FileReport], config: &CliConfig) -> Result<()> {
        let format = self.format.unwrap_or(config.output.format);
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path).with_context(|| {
                    format!("Failed to create output file: {}", path.display())
                })?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        let mut formatter = create_formatter(format, writer, &config.output);
        for report in reports {
            formatter.format_report(report)?;
        }
        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Compare `text_a` with every file in `files_b`, keeping their order
///
/// The progress bar is finished before returning, also when a file fails.
fn compare_files(
    finder: &SimilarityFinder,
    text_a: &str,
    files_b: &[PathBuf],
    mode: ExecutionMode,
    progress: &ProgressReporter,
) -> Result<Vec<FileReport>> {
    let compare_one = |path: &PathBuf| -> Result<FileReport> {
        let file_b = InputFile::load(path)?;
        let comparison = finder.compare(text_a, &file_b.text)?;
        let name = file_b.name();

        log::info!(
            "{}: {} passage(s), {:.1}% of A covered",
            name,
            comparison.spans.len(),
            comparison.stats.coverage_a * 100.0
        );
        progress.file_completed(&name);

        Ok(FileReport::new(name, text_a, &file_b.text, &comparison))
    };

    let reports = match mode {
        ExecutionMode::Parallel => files_b.par_iter().map(compare_one).collect(),
        _ => files_b.iter().map(compare_one).collect(),
    };
    progress.finish();
    reports
}
