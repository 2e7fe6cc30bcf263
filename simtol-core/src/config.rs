//! Configuration types for the matching pipeline

use crate::error::{MatchError, Result};
use core::fmt;
use core::str::FromStr;

/// Default configuration constants
pub mod defaults {
    /// Minimum block length in words for word granularity
    pub const MIN_MATCH_WORDS: usize = 10;

    /// Minimum block length in characters for character granularity
    pub const MIN_MATCH_CHARS: usize = 20;

    /// Largest character gap in A that still merges two blocks
    pub const MERGE_GAP_THRESHOLD: usize = 20;

    /// Blocks whose trimmed text is this long or shorter are discarded
    pub const MIN_DISPLAY_LENGTH: usize = 20;
}

/// Unit of comparison used by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Granularity {
    /// Every character is a unit
    Character,
    /// Every maximal run of non-whitespace characters is a unit
    #[default]
    Word,
}

impl Granularity {
    /// Default minimum match length for this granularity
    pub fn default_min_match_length(&self) -> usize {
        match self {
            Granularity::Character => defaults::MIN_MATCH_CHARS,
            Granularity::Word => defaults::MIN_MATCH_WORDS,
        }
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Character => "character",
            Granularity::Word => "word",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "character" | "char" | "chars" => Ok(Granularity::Character),
            "word" | "words" => Ok(Granularity::Word),
            other => Err(MatchError::invalid_config(format!(
                "unknown granularity '{other}' (expected 'character' or 'word')"
            ))),
        }
    }
}

/// Matching configuration
///
/// Every field has a default, so partial TOML/JSON documents deserialize
/// into a complete configuration. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct MatchConfig {
    /// Character or word comparison units
    pub granularity: Granularity,
    /// Minimum block length in units (None = granularity default)
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub min_match_length: Option<usize>,
    /// Largest character gap in A that merges adjacent blocks
    pub merge_gap_threshold: usize,
    /// Minimum trimmed character length for a block to be reported
    pub min_display_length: usize,
    /// Lowercase both texts before matching
    pub normalize_case: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            granularity: Granularity::default(),
            min_match_length: None,
            merge_gap_threshold: defaults::MERGE_GAP_THRESHOLD,
            min_display_length: defaults::MIN_DISPLAY_LENGTH,
            normalize_case: true,
        }
    }
}

impl MatchConfig {
    /// Create a configuration builder
    pub fn builder() -> MatchConfigBuilder {
        MatchConfigBuilder::default()
    }

    /// Word granularity with default thresholds
    pub fn words() -> Self {
        Self::default()
    }

    /// Character granularity with default thresholds
    pub fn characters() -> Self {
        Self {
            granularity: Granularity::Character,
            ..Default::default()
        }
    }

    /// Minimum match length after applying the granularity default
    pub fn effective_min_match_length(&self) -> usize {
        self.min_match_length
            .unwrap_or_else(|| self.granularity.default_min_match_length())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.min_match_length == Some(0) {
            return Err(MatchError::invalid_config(
                "min_match_length must be greater than 0",
            ));
        }

        Ok(())
    }
}

/// Fluent builder for [`MatchConfig`]
#[derive(Debug, Default)]
pub struct MatchConfigBuilder {
    config: MatchConfig,
}

impl MatchConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comparison granularity
    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.config.granularity = granularity;
        self
    }

    /// Set the minimum block length in units
    pub fn min_match_length(mut self, units: usize) -> Self {
        self.config.min_match_length = Some(units);
        self
    }

    /// Set the merge gap threshold in characters
    pub fn merge_gap_threshold(mut self, chars: usize) -> Self {
        self.config.merge_gap_threshold = chars;
        self
    }

    /// Set the minimum trimmed length of a reported block
    pub fn min_display_length(mut self, chars: usize) -> Self {
        self.config.min_display_length = chars;
        self
    }

    /// Enable or disable lowercasing before matching
    pub fn normalize_case(mut self, enabled: bool) -> Self {
        self.config.normalize_case = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<MatchConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.granularity, Granularity::Word);
        assert_eq!(config.effective_min_match_length(), 10);
        assert_eq!(config.merge_gap_threshold, 20);
        assert_eq!(config.min_display_length, 20);
        assert!(config.normalize_case);
    }

    #[test]
    fn test_character_preset_min_length() {
        let config = MatchConfig::characters();
        assert_eq!(config.effective_min_match_length(), 20);
    }

    #[test]
    fn test_explicit_min_length_overrides_granularity() {
        let config = MatchConfig::builder()
            .granularity(Granularity::Character)
            .min_match_length(7)
            .build()
            .unwrap();
        assert_eq!(config.effective_min_match_length(), 7);
    }

    #[test]
    fn test_zero_min_match_length_rejected() {
        let err = MatchConfig::builder().min_match_length(0).build().unwrap_err();
        assert!(matches!(err, MatchError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_zero_thresholds_accepted() {
        let config = MatchConfig::builder()
            .merge_gap_threshold(0)
            .min_display_length(0)
            .build();
        assert!(config.is_ok());
    }

    #[test]
    fn test_granularity_from_str() {
        assert_eq!("word".parse::<Granularity>().unwrap(), Granularity::Word);
        assert_eq!(
            "Character".parse::<Granularity>().unwrap(),
            Granularity::Character
        );
        assert!("sentence".parse::<Granularity>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_json_uses_defaults() {
        let config: MatchConfig =
            serde_json::from_str(r#"{"granularity": "character", "merge_gap_threshold": 5}"#)
                .unwrap();
        assert_eq!(config.granularity, Granularity::Character);
        assert_eq!(config.merge_gap_threshold, 5);
        assert_eq!(config.min_display_length, defaults::MIN_DISPLAY_LENGTH);
        assert_eq!(config.min_match_length, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_unknown_json_key_rejected() {
        let err = serde_json::from_str::<MatchConfig>(r#"{"min_match": 3}"#).unwrap_err();
        assert!(err.to_string().contains("unknown field `min_match`"));
    }
}
