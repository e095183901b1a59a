//! Field parsing utilities for LOS rows
//!
//! This module provides the year header test and the cell value parser used
//! when building tourism records.

use regex::Regex;
use std::sync::LazyLock;

use super::row::RawRow;
use super::stats::CellSkip;
use crate::constants::{NUMERIC_PREFIX_PATTERN, YEAR_HEADER_PATTERN};

static YEAR_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(YEAR_HEADER_PATTERN).expect("year header pattern is valid"));

static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(NUMERIC_PREFIX_PATTERN).expect("numeric prefix pattern is valid")
});

/// Check whether a column header names a year column
///
/// Only exactly four ASCII digits qualify. "19990", "199", "" and "19.9" do
/// not, nor do headers with surrounding whitespace.
pub fn is_year_header(header: &str) -> bool {
    header.is_ascii() && YEAR_HEADER.is_match(header)
}

/// Parse a year cell into a value
///
/// The longest leading number is taken, so footnoted cells such as `"7.1*"`
/// or `"5.2 (p)"` keep their value. Absent, blank and non-numeric cells are
/// reported as a [`CellSkip`]; a blank cell is a missing data point, never
/// zero.
pub fn parse_year_value(cell: Option<&str>) -> Result<f64, CellSkip> {
    let raw = cell.ok_or(CellSkip::Absent)?;

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CellSkip::Blank);
    }

    let prefix = NUMERIC_PREFIX
        .find(trimmed)
        .ok_or(CellSkip::NotNumeric)?
        .as_str();

    match prefix.parse::<f64>() {
        // Overlong exponents overflow to infinity
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CellSkip::NotNumeric),
    }
}

/// Get a text field, treating absent and blank cells alike
pub fn get_optional_text<'a>(row: &'a RawRow, column: &str) -> Option<&'a str> {
    row.get(column).filter(|s| !s.trim().is_empty())
}
