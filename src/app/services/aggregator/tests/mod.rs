//! Test utilities for aggregator testing

use crate::app::models::{TourismRecord, YearValue};

mod summary_tests;
mod trend_tests;

/// Build a record from `(year, value)` pairs
pub fn create_test_record(group: &str, indicator: &str, values: &[(&str, f64)]) -> TourismRecord {
    TourismRecord::new(
        group,
        indicator,
        "days",
        values
            .iter()
            .map(|(year, value)| YearValue::new(*year, *value))
            .collect(),
    )
    .unwrap()
}

/// The Air/Oahu/Maui scenario: Maui has no 2021 value
pub fn create_scenario_records() -> Vec<TourismRecord> {
    vec![
        create_test_record("Air", "Oahu", &[("2020", 5.0), ("2021", 7.0)]),
        create_test_record("Air", "Maui", &[("2020", 3.0)]),
    ]
}
