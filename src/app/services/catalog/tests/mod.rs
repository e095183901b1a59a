//! Test utilities for catalog testing

use crate::app::models::{TourismRecord, YearValue};

mod query_tests;

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

/// Records spanning two categories and three locations
pub fn create_test_records() -> Vec<TourismRecord> {
    vec![
        create_test_record("Domestic", "Oahu", &[("2020", 6.0)]),
        create_test_record("Air", "Oahu", &[("2020", 5.0), ("2021", 7.0)]),
        create_test_record("Air", "Maui", &[("2020", 3.0)]),
        create_test_record("Air", "", &[("2021", 4.0)]),
        create_test_record("Domestic", "Kauai", &[("2021", 8.0)]),
    ]
}
