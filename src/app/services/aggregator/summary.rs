//! Summary statistics over tagged values

use super::TaggedValue;
use crate::app::models::{Extreme, Statistics};
use crate::constants::DISPLAY_DECIMALS;

/// Round a value to the display precision
pub fn round_for_display(value: f64) -> f64 {
    let factor = 10f64.powi(DISPLAY_DECIMALS);
    (value * factor).round() / factor
}

/// Compute mean, extremes and count for a set of values
///
/// The mean is computed at full precision and rounded once for display.
/// Extremes come from a single linear scan that only replaces the current
/// extreme on a strictly better value, so among equal values the first one
/// in input order is reported. Returns `None` for an empty slice.
pub fn compute_statistics(values: &[TaggedValue<'_>]) -> Option<Statistics> {
    let first = values.first()?;

    let mut sum = 0.0;
    let mut min = first;
    let mut max = first;

    for tagged in values {
        sum += tagged.value;
        if tagged.value < min.value {
            min = tagged;
        }
        if tagged.value > max.value {
            max = tagged;
        }
    }

    let average = sum / values.len() as f64;

    Some(Statistics {
        average: round_for_display(average),
        min: to_extreme(min),
        max: to_extreme(max),
        data_points: values.len(),
    })
}

fn to_extreme(tagged: &TaggedValue<'_>) -> Extreme {
    Extreme {
        value: tagged.value,
        year: tagged.year.to_string(),
        location: tagged.location.to_string(),
    }
}
