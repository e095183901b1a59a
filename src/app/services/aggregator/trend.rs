//! Per-year trend series

use std::collections::BTreeMap;

use super::TaggedValue;
use crate::app::models::ChartPoint;

/// Build the per-year trend series
///
/// Values sharing a year form one bucket, averaged across every contributing
/// location. Buckets come out in ascending year order, one per distinct year.
pub fn build_chart_data(values: &[TaggedValue<'_>]) -> Vec<ChartPoint> {
    let mut buckets: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

    for tagged in values {
        let bucket = buckets.entry(tagged.year).or_insert((0.0, 0));
        bucket.0 += tagged.value;
        bucket.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(year, (sum, count))| ChartPoint {
            year: year.to_string(),
            average: sum / count as f64,
        })
        .collect()
}
