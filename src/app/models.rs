//! Data models for LOS processing
//!
//! This module contains the core data structures for representing tourism
//! records parsed from the Hawaii Tourism LOS export and the results produced
//! by aggregating them.

use serde::{Deserialize, Serialize};

// =============================================================================
// Tourism Record Structure
// =============================================================================

/// A single yearly observation within a tourism record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearValue {
    /// Four-digit calendar year taken from the column header
    pub year: String,

    /// Observed value for that year
    pub value: f64,
}

impl YearValue {
    pub fn new(year: impl Into<String>, value: f64) -> Self {
        Self {
            year: year.into(),
            value,
        }
    }
}

/// One validated row of the LOS export
///
/// Records are built only by the record parser and never mutated afterwards.
/// Every record carries at least one yearly value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourismRecord {
    /// Visitor category (e.g. "All visitors by air")
    pub group: String,

    /// Location or sub-metric label (e.g. "LOS on Maui"); may be empty
    pub indicator: String,

    /// Display unit (e.g. "days")
    pub units: String,

    /// Yearly values in ascending year order
    pub yearly_data: Vec<YearValue>,
}

impl TourismRecord {
    /// Create a record, ordering its yearly values by year
    ///
    /// Returns `None` when no yearly value is supplied.
    pub fn new(
        group: impl Into<String>,
        indicator: impl Into<String>,
        units: impl Into<String>,
        mut yearly_data: Vec<YearValue>,
    ) -> Option<Self> {
        if yearly_data.is_empty() {
            return None;
        }

        // Four-digit years sort chronologically as strings
        yearly_data.sort_by(|a, b| a.year.cmp(&b.year));

        Some(Self {
            group: group.into(),
            indicator: indicator.into(),
            units: units.into(),
            yearly_data,
        })
    }

    /// Number of yearly values
    pub fn data_point_count(&self) -> usize {
        self.yearly_data.len()
    }
}

// =============================================================================
// Aggregation Results
// =============================================================================

/// An extreme value and where it was observed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extreme {
    pub value: f64,
    pub year: String,
    pub location: String,
}

/// Summary statistics for a selection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Mean of all values, rounded to two decimals for display
    pub average: f64,
    pub min: Extreme,
    pub max: Extreme,
    pub data_points: usize,
}

/// One point of the per-year trend series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub year: String,

    /// Mean across every contributing location for that year
    pub average: f64,
}

/// Result of a category/location query
///
/// Created fresh per query and never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationResult {
    pub category: String,

    /// Selected location, or "All Locations" when unfiltered
    pub location: String,

    /// Unit of the first matching record, for axis labels
    pub units: String,

    pub statistics: Statistics,

    /// Trend series in ascending year order
    pub chart_data: Vec<ChartPoint>,
}

/// An entry in a selection list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Submitted value; empty for the placeholder
    pub value: String,

    /// Displayed text
    pub label: String,
}

impl SelectOption {
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            label: label.into(),
        }
    }

    pub fn item(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}
