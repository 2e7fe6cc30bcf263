//! Loading comparison inputs

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A text document loaded for comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    /// Path the text was read from
    pub path: PathBuf,
    /// Full UTF-8 content
    pub text: String,
}

impl InputFile {
    /// Load a regular file as UTF-8 text
    ///
    /// Missing paths and directories are [`CliError::FileNotFound`]; content
    /// that is not UTF-8 is [`CliError::InvalidEncoding`] with the offset of
    /// the first bad byte.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let text = String::from_utf8(bytes).map_err(|e| CliError::InvalidEncoding {
            path: path.display().to_string(),
            offset: e.utf8_error().valid_up_to(),
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Display name used in reports and log lines
    pub fn name(&self) -> String {
        self.path.display().to_string()
    }
}

/// Combined on-disk size of `paths` in bytes
pub fn total_size(paths: &[PathBuf]) -> Result<u64> {
    paths
        .iter()
        .map(|path| {
            fs::metadata(path)
                .map(|metadata| metadata.len())
                .with_context(|| format!("Failed to get metadata for: {}", path.display()))
        })
        .sum()
}
