//! Command implementations for the LOS calculator CLI
//!
//! Each command lives in its own module:
//! - `categories`: selection lists built from the loaded catalog
//! - `query`: statistics and trend for a category/location selection
//! - `validate`: parse accounting for an export

pub mod categories;
pub mod query;
pub mod shared;
pub mod validate;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the LOS calculator
///
/// Sets up logging and configuration once, then dispatches to the
/// subcommand handler. Running without a subcommand is a configuration error;
/// the binary shows help before it gets here.
pub async fn run(args: Args) -> Result<()> {
    shared::setup_logging(&args)?;
    args.validate()?;

    let config = shared::load_configuration(&args)?;

    match args.get_command() {
        Some(Commands::Categories(categories_args)) => {
            categories::run_categories(categories_args, &config).await
        }
        Some(Commands::Query(query_args)) => query::run_query(query_args, &config).await,
        Some(Commands::Validate(validate_args)) => {
            validate::run_validate(validate_args, &config).await
        }
        None => Err(crate::Error::configuration("No command given")),
    }
}

/// True when a failure was already shown to the user by a result sink
///
/// The binary skips its own `Error:` line for these so the message is not
/// printed twice.
pub fn is_rendered(error: &crate::Error) -> bool {
    error.is_no_match()
}
