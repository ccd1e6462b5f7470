//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then `CASE_INDEXER_*` environment variables. Command-line flags are
//! applied last by the CLI.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_OUTPUT_FILENAME, DEFAULT_TAGGED_LENDER,
    OUTPUT_EXTENSION, env_vars,
};
use crate::error::{IndexerError, Result};
use crate::models::{Convention, FileOrder};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parsing: ParsingConfig,
    pub output: OutputConfig,
}

/// How filenames are interpreted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// Naming convention for the whole batch
    pub convention: Convention,

    /// Lender written on every row when the convention does not carry one
    pub tagged_lender: String,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            convention: Convention::default(),
            tagged_lender: DEFAULT_TAGGED_LENDER.to_string(),
        }
    }
}

/// Where and how the table is written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File name created inside the input directory
    pub file_name: String,

    /// Row ordering
    pub file_order: FileOrder,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_OUTPUT_FILENAME.to_string(),
            file_order: FileOrder::default(),
        }
    }
}

impl Config {
    /// `<config dir>/case-indexer/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            IndexerError::configuration("Could not determine user config directory")
        })?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Read a TOML config file; missing sections fall back to defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            IndexerError::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&contents).map_err(|e| {
            IndexerError::configuration(format!(
                "Invalid config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Defaults, then `config_file` if given, then the process environment
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        debug!("Layered configuration: {:?}", config);
        Ok(config)
    }

    /// Apply environment overrides through a lookup function
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(env_vars::CONVENTION) {
            self.parsing.convention = value.parse().map_err(|e: String| {
                IndexerError::configuration(format!("{}: {}", env_vars::CONVENTION, e))
            })?;
        }
        if let Some(value) = lookup(env_vars::LENDER) {
            self.parsing.tagged_lender = value;
        }
        if let Some(value) = lookup(env_vars::OUTPUT) {
            self.output.file_name = value;
        }
        Ok(())
    }

    /// Lender to stamp on every row, if the convention does not derive one
    pub fn batch_lender(&self) -> Option<&str> {
        if self.parsing.convention.derives_lender() {
            None
        } else {
            Some(self.parsing.tagged_lender.trim())
        }
    }

    /// Full path of the output workbook for an input directory
    pub fn output_path(&self, directory: &Path) -> PathBuf {
        directory.join(&self.output.file_name)
    }

    pub fn validate(&self) -> Result<()> {
        let file_name = &self.output.file_name;

        if file_name.trim().is_empty() {
            return Err(IndexerError::configuration(
                "Output file name cannot be empty",
            ));
        }

        let path = Path::new(file_name);
        if path.components().count() != 1 || path.file_name().is_none() {
            return Err(IndexerError::configuration(format!(
                "Output file name must not contain a directory: {}",
                file_name
            )));
        }

        if !file_name.to_ascii_lowercase().ends_with(OUTPUT_EXTENSION) {
            return Err(IndexerError::configuration(format!(
                "Output file name must end with {}: {}",
                OUTPUT_EXTENSION, file_name
            )));
        }

        if self.parsing.tagged_lender.trim().is_empty() {
            return Err(IndexerError::configuration(
                "Tagged lender cannot be empty",
            ));
        }

        Ok(())
    }
}
