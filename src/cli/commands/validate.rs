//! Validate command implementation
//!
//! Loads an export and reports how many rows and cells were kept or dropped,
//! and why. Useful when a new export yields fewer records than expected.

use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use tracing::info;

use super::shared::load_catalog;
use crate::app::services::catalog::CatalogMetadata;
use crate::app::services::record_parser::ParseStats;
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::Config;
use crate::{Error, Result};

/// Validation report emitted by the validate command
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub catalog: CatalogMetadata,
    pub stats: ParseStats,
}

/// Validate command runner
pub async fn run_validate(args: &ValidateArgs, config: &Config) -> Result<()> {
    let (service, load_report) = load_catalog(config).await?;

    let report = ValidationReport {
        catalog: service.catalog().metadata(),
        stats: load_report.stats,
    };
    info!(
        "Validated '{}': {} rows skipped, {} cells dropped",
        report.catalog.source_name,
        report.stats.rows_skipped(),
        report.stats.cells_skipped()
    );

    let mut out = std::io::stdout();
    match args.format {
        OutputFormat::Human => {
            let text = format_human_report(&report, config.color);
            out.write_all(text.as_bytes())
                .map_err(|e| Error::io("Failed to write validation report", e))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out).map_err(|e| Error::io("Failed to write validation report", e))?;
        }
        OutputFormat::Csv => {
            return Err(Error::configuration(
                "The validate report supports only human and json formats",
            ));
        }
    }

    Ok(())
}

/// Render the report as indented text
pub fn format_human_report(report: &ValidationReport, color: bool) -> String {
    let title = "LOS Export Validation Report";
    let title = if color {
        title.bright_green().bold().to_string()
    } else {
        title.to_string()
    };

    let catalog = &report.catalog;
    let stats = &report.stats;

    format!(
        "{}\n\
         ============================\n\
         Source:          {}\n\
         Loaded at:       {}\n\
         Rows read:       {}\n\
         Records kept:    {}\n\
         Categories:      {}\n\
         Locations:       {}\n\
         Data points:     {}\n\
         \n\
         Rows skipped:    {}\n\
         \x20 missing group: {}\n\
         \x20 footer rows:   {}\n\
         \x20 without data:  {}\n\
         Cells dropped:   {}\n\
         \x20 absent:        {}\n\
         \x20 blank:         {}\n\
         \x20 non-numeric:   {}\n",
        title,
        catalog.source_name,
        catalog.loaded_at.format("%Y-%m-%d %H:%M:%S UTC"),
        stats.total_rows,
        stats.records_parsed,
        catalog.category_count,
        catalog.location_count,
        catalog.data_points,
        stats.rows_skipped(),
        stats.missing_group_rows,
        stats.footer_rows,
        stats.empty_rows,
        stats.cells_skipped(),
        stats.absent_cells,
        stats.blank_cells,
        stats.non_numeric_cells
    )
}
