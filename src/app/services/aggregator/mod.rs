//! Aggregation of tourism records into statistics and a trend series
//!
//! This module turns the records matched by a query into an
//! [`AggregationResult`]. The pipeline is:
//!
//! 1. Flatten every yearly value of the matched records into one list, each
//!    value tagged with the location that produced it
//! 2. Summarize the list: mean, extremes and data point count ([`summary`])
//! 3. Bucket the list by year and average each bucket ([`trend`])
//!
//! Aggregation never caches; every call builds a fresh result.

use crate::app::models::{AggregationResult, TourismRecord};
use crate::constants::ALL_LOCATIONS_LABEL;
use crate::{Error, NoMatchReason, Result};

pub mod summary;
pub mod trend;

#[cfg(test)]
pub mod tests;

pub use summary::{compute_statistics, round_for_display};
pub use trend::build_chart_data;

/// A yearly value tagged with the location that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaggedValue<'a> {
    pub year: &'a str,
    pub value: f64,
    pub location: &'a str,
}

/// Flatten records into tagged values
///
/// Values keep record order, then year order within each record.
pub fn flatten<'a>(records: &[&'a TourismRecord]) -> Vec<TaggedValue<'a>> {
    records
        .iter()
        .flat_map(|&record| {
            record.yearly_data.iter().map(move |yv| TaggedValue {
                year: yv.year.as_str(),
                value: yv.value,
                location: record.indicator.as_str(),
            })
        })
        .collect()
}

/// Aggregate the records matched for a selection
///
/// `records` must already be filtered for `category`/`location`. Fails with
/// a no-match error when `records` is empty or carries no yearly value.
pub fn aggregate(
    records: &[&TourismRecord],
    category: &str,
    location: Option<&str>,
) -> Result<AggregationResult> {
    let location = location.filter(|l| !l.is_empty());

    let first = records
        .first()
        .ok_or_else(|| Error::no_match(category, location, NoMatchReason::NoRecords))?;

    let values = flatten(records);
    let statistics = compute_statistics(&values)
        .ok_or_else(|| Error::no_match(category, location, NoMatchReason::NoDataPoints))?;
    let chart_data = build_chart_data(&values);

    Ok(AggregationResult {
        category: category.to_string(),
        location: location.unwrap_or(ALL_LOCATIONS_LABEL).to_string(),
        units: first.units.clone(),
        statistics,
        chart_data,
    })
}
