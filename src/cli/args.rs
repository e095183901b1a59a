//! Command-line argument definitions for the LOS calculator
//!
//! This module defines the CLI interface using the clap derive API. Global
//! flags (data source, config file, verbosity) apply to every subcommand.

use crate::constants::STDIN_DATA_PATH;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the Hawaii Tourism length-of-stay calculator
///
/// Loads the Hawaii Tourism Authority "Length of Stay" CSV export and
/// reports average, minimum and maximum stay with a per-year trend.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "los-calculator",
    version,
    about = "Summarize Hawaii Tourism length-of-stay statistics from a CSV export",
    long_about = "Loads the Hawaii Tourism Authority \"Length of Stay\" CSV export, drops footer and \
                  malformed rows, and reports the average, minimum and maximum length of stay for \
                  a visitor category, optionally narrowed to one location, together with a \
                  per-year trend."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the CSV export
    ///
    /// Use `-` to read from standard input. Defaults to `data.csv`, or the
    /// `data_path` of the configuration file when one is given.
    #[arg(
        short = 'd',
        long = "data",
        value_name = "PATH",
        global = true,
        help = "Path to the CSV export (- for stdin)"
    )]
    pub data: Option<PathBuf>,

    /// Path to a JSON configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress log output (quiet mode)
    ///
    /// Only errors are logged. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Disable coloured output
    #[arg(long = "no-color", global = true, help = "Disable coloured output")]
    pub no_color: bool,
}

/// Available subcommands for the LOS calculator
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List the visitor categories and locations found in the export
    Categories(CategoriesArgs),
    /// Calculate length-of-stay statistics for a category
    Query(QueryArgs),
    /// Check an export and report parse statistics
    Validate(ValidateArgs),
}

/// Arguments for the categories command
#[derive(Debug, Clone, Parser)]
pub struct CategoriesArgs {
    /// Output format for the selection lists
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub format: OutputFormat,
}

/// Arguments for the query command
#[derive(Debug, Clone, Parser)]
pub struct QueryArgs {
    /// Visitor category, matched exactly against the `Group` column
    #[arg(long = "category", value_name = "NAME", help = "Visitor category to summarize")]
    pub category: String,

    /// Location, matched exactly against the `Indicator` column
    ///
    /// Omit (or pass an empty string) to aggregate across all locations.
    #[arg(
        short = 'l',
        long = "location",
        value_name = "NAME",
        help = "Narrow the query to one location"
    )]
    pub location: Option<String>,

    /// Output format for the result
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Output format for the report (human or json)
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the report (human or json)"
    )]
    pub format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the selected subcommand, if any
    pub fn get_command(&self) -> Option<&Commands> {
        self.command.as_ref()
    }

    /// Get log level based on verbosity and quiet flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// True when the export comes from standard input
    pub fn reads_stdin(&self) -> bool {
        self.data
            .as_ref()
            .is_some_and(|p| p.as_os_str() == STDIN_DATA_PATH)
    }

    /// Validate argument combinations clap cannot express
    pub fn validate(&self) -> Result<()> {
        if let Some(data) = &self.data {
            if data.as_os_str().is_empty() {
                return Err(Error::configuration("Data path cannot be empty"));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.is_file() {
                return Err(Error::configuration(format!(
                    "Configuration file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(Commands::Validate(validate_args)) = &self.command {
            validate_args.validate()?;
        }

        Ok(())
    }
}

impl ValidateArgs {
    /// The report has no CSV rendering
    pub fn validate(&self) -> Result<()> {
        if self.format == OutputFormat::Csv {
            return Err(Error::configuration(
                "The validate report supports only human and json formats",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_query_args_parsing() {
        let args = Args::try_parse_from([
            "los-calculator",
            "query",
            "--category",
            "All visitors by air",
            "--location",
            "LOS on Maui",
            "--format",
            "json",
        ])
        .unwrap();

        match args.get_command() {
            Some(Commands::Query(query)) => {
                assert_eq!(query.category, "All visitors by air");
                assert_eq!(query.location.as_deref(), Some("LOS on Maui"));
                assert_eq!(query.format, OutputFormat::Json);
            }
            other => panic!("expected query command, got {:?}", other),
        }
    }

    #[test]
    fn test_query_requires_category() {
        assert!(Args::try_parse_from(["los-calculator", "query"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["los-calculator", "categories", "--data", "-", "-vv"]).unwrap();

        assert!(args.reads_stdin());
        assert_eq!(args.get_log_level(), "debug");
        assert!(matches!(args.command, Some(Commands::Categories(_))));
    }

    #[test]
    fn test_no_subcommand_is_accepted() {
        let args = Args::try_parse_from(["los-calculator"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.get_log_level(), "warn");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["los-calculator", "validate", "-q", "-v"]).is_err());

        let args = Args::try_parse_from(["los-calculator", "validate", "-q"]).unwrap();
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_validate_rejects_csv_report() {
        let args =
            Args::try_parse_from(["los-calculator", "validate", "--format", "csv"]).unwrap();
        assert!(args.validate().is_err());

        let args =
            Args::try_parse_from(["los-calculator", "validate", "--format", "json"]).unwrap();
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validate_config_file_must_exist() {
        let args = Args::try_parse_from([
            "los-calculator",
            "categories",
            "--config",
            "/nonexistent/los.json",
        ])
        .unwrap();
        assert!(args.validate().is_err());

        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let args =
            Args::try_parse_from(["los-calculator", "categories", "--config", path]).unwrap();
        assert!(args.validate().is_ok());
    }
}
