//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use simtol_core::batch::DEFAULT_PARALLEL_THRESHOLD;
use simtol_core::config::defaults;
use simtol_core::MatchConfig;
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Matching configuration passed to the core pipeline
    #[serde(default)]
    pub matching: MatchConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load and validate a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config
            .matching
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Commented TOML document holding the default configuration
    pub fn template() -> String {
        format!(
            r#"# simtol configuration

[matching]
# Comparison unit: "word" or "character"
granularity = "word"

# Minimum block length in units. When unset: {words} for words, {chars} for characters.
# min_match_length = {words}

# Blocks separated by fewer characters than this in text A are merged
merge_gap_threshold = {gap}

# Blocks whose trimmed text is this many characters or fewer are dropped
min_display_length = {display}

# Lowercase both texts before matching
normalize_case = true

[output]
# Default output format: "text", "json" or "markdown"
format = "text"

# Pretty-print JSON output
pretty_json = true

# Truncate passages in text output to this many characters (0 = no limit)
snippet_width = {width}

[performance]
# Combined input size in KB above which files are compared in parallel
parallel_threshold_kb = {threshold}

# Number of worker threads (0 = one per core)
worker_threads = 0
"#,
            words = defaults::MIN_MATCH_WORDS,
            chars = defaults::MIN_MATCH_CHARS,
            gap = defaults::MERGE_GAP_THRESHOLD,
            display = defaults::MIN_DISPLAY_LENGTH,
            width = DEFAULT_SNIPPET_WIDTH,
            threshold = DEFAULT_PARALLEL_THRESHOLD / 1024,
        )
    }
}

/// Default passage width in text output
pub const DEFAULT_SNIPPET_WIDTH: usize = 80;

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Maximum passage length in text output (0 = no limit)
    pub snippet_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
            snippet_width: DEFAULT_SNIPPET_WIDTH,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceConfig {
    /// Combined input size (KB) above which comparison runs in parallel
    pub parallel_threshold_kb: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_threshold_kb: DEFAULT_PARALLEL_THRESHOLD / 1024,
            worker_threads: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simtol_core::Granularity;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_to_defaults() {
        let config = CliConfig::from_toml(&CliConfig::template()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(CliConfig::from_toml("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = CliConfig::from_toml(
            r#"
            [matching]
            granularity = "character"
            min_match_length = 12

            [output]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.matching.granularity, Granularity::Character);
        assert_eq!(config.matching.min_match_length, Some(12));
        assert_eq!(
            config.matching.merge_gap_threshold,
            defaults::MERGE_GAP_THRESHOLD
        );
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.pretty_json);
        assert_eq!(config.performance, PerformanceConfig::default());
    }

    #[test]
    fn test_zero_min_match_rejected() {
        let err = CliConfig::from_toml("[matching]\nmin_match_length = 0\n").unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert!(matches!(cli_err, CliError::ConfigError(_)));
        assert!(err.to_string().contains("min_match_length"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = CliConfig::from_toml("[output]\ncolour = true\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_unknown_matching_field_rejected() {
        let err = CliConfig::from_toml("[matching]\nmin_match = 3\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
        assert!(err.to_string().contains("min_match"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(CliConfig::from_toml("[output]\nformat = \"html\"\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("simtol.toml");
        fs::write(&path, "[matching]\nnormalize_case = false\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert!(!config.matching.normalize_case);
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/simtol.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
