//! Core LOS record parser implementation
//!
//! This module validates tokenized rows and builds tourism records from the
//! ones that carry data.

use std::collections::BTreeSet;
use tracing::{debug, info};

use super::field_parsers::{get_optional_text, is_year_header, parse_year_value};
use super::row::RawRow;
use super::stats::{ParseResult, ParseStats, SkipReason};
use crate::app::models::{TourismRecord, YearValue};
use crate::config::ParserConfig;
use crate::constants::{GROUP_COLUMN, INDICATOR_COLUMN, UNITS_COLUMN};

/// Parser from header-keyed rows to tourism records
///
/// Pure: no I/O, and no row can fail the batch. Rows are dropped when
/// their group is missing, when the group names a footer row, or when no
/// year cell holds a usable value.
#[derive(Debug, Clone, Default)]
pub struct RecordParser {
    config: ParserConfig,
}

impl RecordParser {
    /// Create a new parser with the given configuration
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse rows into records with statistics
    pub fn parse(&self, rows: &[RawRow]) -> ParseResult {
        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        // Every row is checked against every year column of the table, so a
        // short row shows up as absent cells rather than silently shrinking
        let year_columns: BTreeSet<&str> = rows
            .iter()
            .flat_map(|row| row.iter().map(|(key, _)| key))
            .filter(|key| is_year_header(key))
            .collect();

        debug!("Found {} year columns", year_columns.len());

        for (index, row) in rows.iter().enumerate() {
            stats.total_rows += 1;

            match self.parse_row(row, &year_columns, &mut stats) {
                Ok(record) => {
                    records.push(record);
                    stats.records_parsed += 1;
                }
                Err(reason) => {
                    stats.record_skip(reason);
                    debug!("Skipped row {}: {}", index + 1, reason);
                }
            }
        }

        info!("Parsed LOS data: {}", stats.summary());

        ParseResult { records, stats }
    }

    /// Validate a single row and build its record
    fn parse_row(
        &self,
        row: &RawRow,
        year_columns: &BTreeSet<&str>,
        stats: &mut ParseStats,
    ) -> Result<TourismRecord, SkipReason> {
        // Only an absent or empty group is missing; whitespace is kept as a label
        let group = row
            .get(GROUP_COLUMN)
            .filter(|g| !g.is_empty())
            .ok_or(SkipReason::MissingGroup)?;

        if self.config.is_footer(group) {
            return Err(SkipReason::FooterRow);
        }

        let indicator = row.get(INDICATOR_COLUMN).unwrap_or_default();
        let units =
            get_optional_text(row, UNITS_COLUMN).unwrap_or(self.config.default_units.as_str());

        let mut yearly_data = Vec::new();
        for &year in year_columns {
            match parse_year_value(row.get(year)) {
                Ok(value) => yearly_data.push(YearValue::new(year, value)),
                Err(skip) => {
                    stats.record_cell_skip(skip);
                    debug!("Dropped {} cell '{}' for group '{}'", skip, year, group);
                }
            }
        }

        TourismRecord::new(group, indicator, units, yearly_data).ok_or(SkipReason::NoDataPoints)
    }
}
