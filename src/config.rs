//! Configuration management and validation.
//!
//! Provides configuration structures for the record parser and the CLI data
//! source, with defaults matching the Hawaii Tourism LOS export.

use crate::constants::{DEFAULT_DATA_PATH, DEFAULT_UNITS, FOOTER_MARKERS};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Record parser configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Substrings that mark a `Group` cell as a footer/metadata row
    pub footer_markers: Vec<String>,

    /// Unit assigned to rows without a `Units` cell
    pub default_units: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            footer_markers: FOOTER_MARKERS.iter().map(|m| m.to_string()).collect(),
            default_units: DEFAULT_UNITS.to_string(),
        }
    }
}

impl ParserConfig {
    /// Add an extra footer marker on top of the defaults
    pub fn with_footer_marker(mut self, marker: impl Into<String>) -> Self {
        self.footer_markers.push(marker.into());
        self
    }

    /// Set the unit used when a row carries none
    pub fn with_default_units(mut self, units: impl Into<String>) -> Self {
        self.default_units = units.into();
        self
    }

    /// Check whether a group cell names a footer row
    pub fn is_footer(&self, group: &str) -> bool {
        self.footer_markers
            .iter()
            .any(|marker| group.contains(marker.as_str()))
    }
}

/// Global configuration for the LOS calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the CSV export to load (`-` for stdin)
    pub data_path: PathBuf,

    /// Record parser settings
    pub parser: ParserConfig,

    /// Colourize human-readable output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            parser: ParserConfig::default(),
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file, filling gaps with defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = serde_json::from_str(&text).map_err(|e| {
            Error::configuration(format!(
                "Invalid config file {}: {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded configuration from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    /// Set the data path
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Set the parser configuration
    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.data_path.as_os_str().is_empty() {
            return Err(Error::configuration("Data path cannot be empty"));
        }

        if self.parser.default_units.trim().is_empty() {
            return Err(Error::configuration("Default units cannot be empty"));
        }

        // An empty marker would match every group and drop the whole table
        if self.parser.footer_markers.iter().any(|m| m.is_empty()) {
            return Err(Error::configuration("Footer markers cannot be empty strings"));
        }

        Ok(())
    }
}
