//! Record parser for the Hawaii Tourism LOS export
//!
//! The export is a wide CSV table: one row per visitor category and location,
//! one column per year, followed by free-text footer rows carrying source
//! notes. This module turns that table into validated [`TourismRecord`]s.
//!
//! ## Architecture
//!
//! - [`csv_reader`] - Tokenizes CSV text into header-keyed [`RawRow`]s
//! - [`row`] - The header-keyed row mapping consumed by the parser
//! - [`field_parsers`] - Year header detection and cell value parsing
//! - [`parser`] - Row validation and record construction
//! - [`stats`] - Skip accounting and result structures
//!
//! Malformed rows and cells are never errors: they are dropped, counted in
//! [`ParseStats`] and logged at debug level. Only CSV syntax failures in
//! [`csv_reader`] abort a load.
//!
//! ## Usage
//!
//! ```rust
//! use los_calculator::app::services::record_parser::{read_rows, RecordParser};
//! use los_calculator::config::ParserConfig;
//!
//! # fn example() -> los_calculator::Result<()> {
//! let csv = "Group,Indicator,Units,2020,2021\nAll visitors,LOS on Maui,days,8.9,9.2\n";
//! let rows = read_rows(csv, "inline")?;
//! let result = RecordParser::new(ParserConfig::default()).parse(&rows);
//!
//! assert_eq!(result.records.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! [`TourismRecord`]: crate::app::models::TourismRecord

pub mod csv_reader;
pub mod field_parsers;
pub mod parser;
pub mod row;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use csv_reader::read_rows;
pub use parser::RecordParser;
pub use row::RawRow;
pub use stats::{CellSkip, ParseResult, ParseStats, SkipReason};
