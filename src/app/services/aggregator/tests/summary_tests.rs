//! Tests for summary statistics

use crate::app::services::aggregator::{TaggedValue, compute_statistics, round_for_display};

fn tagged<'a>(year: &'a str, value: f64, location: &'a str) -> TaggedValue<'a> {
    TaggedValue {
        year,
        value,
        location,
    }
}

#[test]
fn test_mean_of_simple_values() {
    let values = vec![
        tagged("2019", 2.0, "Oahu"),
        tagged("2020", 4.0, "Oahu"),
        tagged("2021", 6.0, "Oahu"),
    ];
    let stats = compute_statistics(&values).unwrap();

    assert_eq!(stats.average, 4.0);
    assert_eq!(stats.data_points, 3);
}

#[test]
fn test_average_rounded_for_display() {
    let values = vec![
        tagged("2019", 1.0, "Oahu"),
        tagged("2020", 1.0, "Oahu"),
        tagged("2021", 2.0, "Oahu"),
    ];
    let stats = compute_statistics(&values).unwrap();
    assert_eq!(stats.average, 1.33);
}

#[test]
fn test_round_for_display() {
    assert_eq!(round_for_display(9.876), 9.88);
    assert_eq!(round_for_display(9.874), 9.87);
    assert_eq!(round_for_display(-1.234), -1.23);
    assert_eq!(round_for_display(7.0), 7.0);
}

#[test]
fn test_extremes_report_year_and_location() {
    let values = vec![
        tagged("2020", 5.0, "Oahu"),
        tagged("2021", 7.0, "Oahu"),
        tagged("2020", 3.0, "Maui"),
    ];
    let stats = compute_statistics(&values).unwrap();

    assert_eq!(stats.min.value, 3.0);
    assert_eq!(stats.min.year, "2020");
    assert_eq!(stats.min.location, "Maui");
    assert_eq!(stats.max.value, 7.0);
    assert_eq!(stats.max.year, "2021");
    assert_eq!(stats.max.location, "Oahu");
}

#[test]
fn test_tied_maximum_reports_first_in_order() {
    let values = vec![
        tagged("2020", 4.0, "Oahu"),
        tagged("2021", 9.0, "Oahu"),
        tagged("2019", 9.0, "Maui"),
        tagged("2021", 9.0, "Maui"),
    ];
    let stats = compute_statistics(&values).unwrap();

    assert_eq!(stats.max.location, "Oahu");
    assert_eq!(stats.max.year, "2021");
}

#[test]
fn test_tied_minimum_reports_first_in_order() {
    let values = vec![
        tagged("2020", 2.0, "Kauai"),
        tagged("2020", 2.0, "Maui"),
        tagged("2021", 8.0, "Maui"),
    ];
    let stats = compute_statistics(&values).unwrap();
    assert_eq!(stats.min.location, "Kauai");
}

#[test]
fn test_single_value_is_both_extremes() {
    let values = vec![tagged("2020", 5.5, "Oahu")];
    let stats = compute_statistics(&values).unwrap();

    assert_eq!(stats.min, stats.max);
    assert_eq!(stats.average, 5.5);
}

#[test]
fn test_empty_values_yield_none() {
    assert!(compute_statistics(&[]).is_none());
}
