//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = CliConfig::template();

        let Some(path) = &self.output else {
            print!("{template}");
            return Ok(());
        };

        if path.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                path.display()
            );
        }

        fs::write(path, template)
            .with_context(|| format!("Failed to write to {}", path.display()))?;

        println!("✓ Configuration template written to {}", path.display());
        println!();
        println!("Use it with:");
        println!(
            "   simtol compare -a original.txt -b 'submissions/*.txt' --config {}",
            path.display()
        );

        Ok(())
    }
}
