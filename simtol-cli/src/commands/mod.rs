//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use simtol_core::Granularity;

use crate::output::OutputFormat;

pub mod compare;
pub mod generate_config;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find passages of file A that also appear in one or more B files
    Compare(compare::CompareArgs),

    /// Write a configuration template with the default settings
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Compare(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
        }
    }
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List available comparison granularities
    Granularities,
}

impl ListCommands {
    /// Listing text, one entry per line
    pub fn render(&self) -> String {
        let entries: Vec<(&str, String)> = match self {
            ListCommands::Formats => OutputFormat::describe_all()
                .iter()
                .map(|(name, description)| (*name, description.to_string()))
                .collect(),
            ListCommands::Granularities => [Granularity::Word, Granularity::Character]
                .iter()
                .map(|g| {
                    let description = match g {
                        Granularity::Word => "Whitespace-separated words",
                        Granularity::Character => "Individual characters",
                    };
                    (
                        g.as_str(),
                        format!(
                            "{description} (default min match: {})",
                            g.default_min_match_length()
                        ),
                    )
                })
                .collect(),
        };

        entries
            .iter()
            .map(|(name, description)| format!("  {name:<10} {description}\n"))
            .collect()
    }
}
