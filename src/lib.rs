//! Hawaii Tourism Length-of-Stay Calculator Library
//!
//! A Rust library for turning the Hawaii Tourism Authority "Length of Stay"
//! CSV export into summary statistics and per-year trend series.
//!
//! This library provides tools for:
//! - Tokenizing loosely-structured CSV exports with footer/metadata rows
//! - Validating rows into typed tourism records with per-row skip accounting
//! - Holding the loaded records in a catalog that is replaced atomically
//! - Aggregating a category/location selection into statistics and a trend
//! - Rendering results as text, JSON or CSV through pluggable sinks

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod catalog;
        pub mod los_service;
        pub mod record_parser;
    }
    pub mod adapters {
        pub mod sink;
        pub mod source;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AggregationResult, ChartPoint, Extreme, Statistics, TourismRecord, YearValue};
pub use app::services::catalog::Catalog;
pub use app::services::los_service::{LoadOutcome, LosService};
pub use config::Config;

/// Result type alias for the LOS calculator
pub type Result<T> = std::result::Result<T, Error>;

/// Why a query produced no result
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoMatchReason {
    /// No category was selected
    MissingCategory,
    /// No record matched the category/location filter
    NoRecords,
    /// Records matched but none carried a usable data point
    NoDataPoints,
}

impl NoMatchReason {
    /// User-facing message for this reason
    pub fn message(&self) -> &'static str {
        match self {
            NoMatchReason::MissingCategory => {
                "Please select a visitor category before calculating."
            }
            NoMatchReason::NoRecords => {
                "No data found for the selected criteria. Try a different combination."
            }
            NoMatchReason::NoDataPoints => {
                "No valid numeric data points found for this selection."
            }
        }
    }
}

/// Error types for LOS loading and query operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The CSV source could not be retrieved
    #[error("Error loading data from '{source_name}': {message}")]
    Fetch {
        source_name: String,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The CSV text could not be tokenized
    #[error("Error parsing CSV from '{source_name}': {message}")]
    CsvSyntax {
        source_name: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// A query matched nothing usable
    #[error(
        "{} (category: '{category}', location: '{}')",
        .reason.message(),
        .location.as_deref().unwrap_or(crate::constants::ALL_LOCATIONS_LABEL)
    )]
    NoMatch {
        category: String,
        location: Option<String>,
        reason: NoMatchReason,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing rendered output failed
    #[error("Output error: {message}")]
    Output { message: String },
}

impl Error {
    /// Create a fetch error with an optional underlying I/O cause
    pub fn fetch(
        source_name: impl Into<String>,
        message: impl Into<String>,
        source: Option<std::io::Error>,
    ) -> Self {
        Self::Fetch {
            source_name: source_name.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a CSV syntax error
    pub fn csv_syntax(
        source_name: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvSyntax {
            source_name: source_name.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a no-match error for a selection
    pub fn no_match(category: &str, location: Option<&str>, reason: NoMatchReason) -> Self {
        Self::NoMatch {
            category: category.to_string(),
            location: location.filter(|l| !l.is_empty()).map(str::to_string),
            reason,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// True when the load failed at the transport or CSV syntax level
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, Self::Fetch { .. } | Self::CsvSyntax { .. })
    }

    /// True when a query matched nothing usable
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvSyntax {
            source_name: "unknown".to_string(),
            message: error.to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Output {
            message: format!("JSON serialization failed: {}", error),
        }
    }
}
