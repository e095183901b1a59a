//! Parsing statistics and result structures for LOS record parsing
//!
//! Dropped rows and cells are not errors. They are counted here so a reduced
//! record count can be diagnosed.

use serde::Serialize;
use std::fmt;

use crate::app::models::TourismRecord;

/// Why a whole row was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// `Group` cell absent or empty
    MissingGroup,
    /// `Group` cell contains a footer marker
    FooterRow,
    /// No year cell held a usable value
    NoDataPoints,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingGroup => write!(f, "missing group"),
            SkipReason::FooterRow => write!(f, "footer row"),
            SkipReason::NoDataPoints => write!(f, "no data points"),
        }
    }
}

/// Why a single year cell was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellSkip {
    /// The row ends before this column
    Absent,
    /// Empty or whitespace-only cell
    Blank,
    /// Cell is not a finite number
    NotNumeric,
}

impl fmt::Display for CellSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellSkip::Absent => write!(f, "absent"),
            CellSkip::Blank => write!(f, "blank"),
            CellSkip::NotNumeric => write!(f, "not numeric"),
        }
    }
}

/// Parsing result with records and statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Validated records in input row order
    pub records: Vec<TourismRecord>,

    pub stats: ParseStats,
}

/// Row and cell accounting for one parse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Total number of data rows seen
    pub total_rows: usize,

    /// Number of records kept
    pub records_parsed: usize,

    /// Rows dropped for a missing group
    pub missing_group_rows: usize,

    /// Rows dropped as footer/metadata
    pub footer_rows: usize,

    /// Rows dropped for lack of any usable value
    pub empty_rows: usize,

    /// Year cells the row did not reach
    pub absent_cells: usize,

    /// Blank year cells
    pub blank_cells: usize,

    /// Non-numeric year cells
    pub non_numeric_cells: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a dropped row
    pub fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::MissingGroup => self.missing_group_rows += 1,
            SkipReason::FooterRow => self.footer_rows += 1,
            SkipReason::NoDataPoints => self.empty_rows += 1,
        }
    }

    /// Count a dropped cell
    pub fn record_cell_skip(&mut self, skip: CellSkip) {
        match skip {
            CellSkip::Absent => self.absent_cells += 1,
            CellSkip::Blank => self.blank_cells += 1,
            CellSkip::NotNumeric => self.non_numeric_cells += 1,
        }
    }

    /// Total rows dropped for any reason
    pub fn rows_skipped(&self) -> usize {
        self.missing_group_rows + self.footer_rows + self.empty_rows
    }

    /// Total year cells dropped for any reason
    pub fn cells_skipped(&self) -> usize {
        self.absent_cells + self.blank_cells + self.non_numeric_cells
    }

    /// Summary line for logging
    pub fn summary(&self) -> String {
        format!(
            "{} records from {} rows | skipped: {} missing group, {} footer, {} without data | \
             cells dropped: {} absent, {} blank, {} non-numeric",
            self.records_parsed,
            self.total_rows,
            self.missing_group_rows,
            self.footer_rows,
            self.empty_rows,
            self.absent_cells,
            self.blank_cells,
            self.non_numeric_cells
        )
    }
}
