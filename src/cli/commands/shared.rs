//! Shared components for CLI commands
//!
//! Logging setup, configuration layering, sink selection and the catalog
//! load every command starts with.

use std::io::stdout;
use tracing::{debug, info, warn};

use crate::app::adapters::sink::{CsvSink, JsonSink, ResultSink, TextSink};
use crate::app::adapters::source::PathSource;
use crate::app::services::los_service::{LoadOutcome, LoadReport, LosService};
use crate::cli::args::{Args, OutputFormat};
use crate::config::Config;
use crate::constants::LOG_TARGET;
use crate::{Error, Result};

/// Set up structured logging on stderr
///
/// `RUST_LOG` overrides the level chosen by `-v`/`-q`.
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration: defaults, then the config file, then CLI flags
pub fn load_configuration(args: &Args) -> Result<Config> {
    let mut config = match &args.config_file {
        Some(path) => {
            info!("Using config file: {}", path.display());
            Config::from_file(path)?
        }
        None => {
            debug!("No config file given, using defaults");
            Config::default()
        }
    };

    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(data) = &args.data {
        config.data_path = data.clone();
    }
    if args.reads_stdin() {
        debug!("CSV export will be read from standard input");
    }
    if args.no_color {
        config.color = false;
    }
}

/// Sink writing to stdout in the requested format
pub fn make_sink(format: OutputFormat, config: &Config) -> Box<dyn ResultSink> {
    match format {
        OutputFormat::Human if config.color => Box::new(TextSink::new(stdout())),
        OutputFormat::Human => Box::new(TextSink::plain(stdout())),
        OutputFormat::Json => Box::new(JsonSink::new(stdout())),
        OutputFormat::Csv => Box::new(CsvSink::new(stdout())),
    }
}

/// Create a service and load the configured export into it
pub async fn load_catalog(config: &Config) -> Result<(LosService, LoadReport)> {
    let service = LosService::new(config.parser.clone());
    let source = PathSource::from_path(&config.data_path);

    match service.load(&source).await? {
        LoadOutcome::Loaded(report) => {
            info!("{}", report.stats.summary());
            if report.record_count == 0 {
                warn!("'{}' contains no usable records", report.source_name);
            }
            Ok((service, report))
        }
        // A fresh service has no load in flight
        LoadOutcome::Skipped => Err(Error::configuration("Catalog load was skipped")),
    }
}
