//! Application constants for the LOS calculator
//!
//! This module contains the CSV column names, footer markers, display labels
//! and default values used throughout the LOS calculator.

// =============================================================================
// CSV Schema
// =============================================================================

/// Column holding the visitor category
pub const GROUP_COLUMN: &str = "Group";

/// Column holding the location/sub-metric label
pub const INDICATOR_COLUMN: &str = "Indicator";

/// Optional column holding the display unit
pub const UNITS_COLUMN: &str = "Units";

/// Strict pattern for year column headers
pub const YEAR_HEADER_PATTERN: &str = r"^\d{4}$";

/// Leading number of a year cell; trailing footnote marks are ignored
pub const NUMERIC_PREFIX_PATTERN: &str = r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?";

/// Unit used when a row has no `Units` cell
pub const DEFAULT_UNITS: &str = "days";

/// Substrings that identify trailing footer/metadata rows in the `Group` column
///
/// The Hawaii Tourism exports append source notes below the data table; these
/// rows land in the `Group` column and must never become records.
pub const FOOTER_MARKERS: &[&str] = &[
    "Data is updated",
    "Source of Data",
    "Seasonally adjusted",
    "Hotel performance",
];

// =============================================================================
// Display Labels
// =============================================================================

/// Location label shown when no location filter was applied
pub const ALL_LOCATIONS_LABEL: &str = "All Locations";

/// Placeholder shown first in the category selection list
pub const CATEGORY_PLACEHOLDER: &str = "-- Select Category --";

/// Placeholder shown first in the location selection list
pub const LOCATION_PLACEHOLDER: &str = "-- All Locations --";

/// Decimal places used for displayed averages
pub const DISPLAY_DECIMALS: i32 = 2;

// =============================================================================
// CLI Defaults
// =============================================================================

/// Default CSV data path, relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "data.csv";

/// Data path value that selects standard input
pub const STDIN_DATA_PATH: &str = "-";

/// Crate target used for the default log filter
pub const LOG_TARGET: &str = "los_calculator";
