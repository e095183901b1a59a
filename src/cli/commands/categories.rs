//! Categories command implementation
//!
//! Prints the category and location selection lists, placeholder first.

use tracing::info;

use super::shared::{load_catalog, make_sink};
use crate::Result;
use crate::cli::args::CategoriesArgs;
use crate::config::Config;

/// Categories command runner
pub async fn run_categories(args: &CategoriesArgs, config: &Config) -> Result<()> {
    let (service, _report) = load_catalog(config).await?;
    let catalog = service.catalog();

    let categories = catalog.category_options();
    let locations = catalog.location_options();
    info!(
        "{} categories and {} locations available",
        categories.len() - 1,
        locations.len() - 1
    );

    make_sink(args.format, config).render_options(&categories, &locations)
}
