//! Tests for the per-year trend series

use super::*;
use crate::app::services::aggregator::{build_chart_data, flatten};

#[test]
fn test_chart_averages_across_locations() {
    let records = create_scenario_records();
    let refs: Vec<&TourismRecord> = records.iter().collect();
    let chart = build_chart_data(&flatten(&refs));

    assert_eq!(chart.len(), 2);
    assert_eq!(chart[0].year, "2020");
    assert_eq!(chart[0].average, 4.0);
    assert_eq!(chart[1].year, "2021");
    assert_eq!(chart[1].average, 7.0);
}

#[test]
fn test_chart_years_ascending_and_distinct() {
    let records = vec![
        create_test_record("Air", "Oahu", &[("2021", 1.0), ("1999", 2.0), ("2010", 3.0)]),
        create_test_record("Air", "Maui", &[("2010", 5.0), ("2005", 4.0)]),
        create_test_record("Air", "Kauai", &[("1999", 6.0), ("2021", 7.0)]),
    ];
    let refs: Vec<&TourismRecord> = records.iter().collect();
    let chart = build_chart_data(&flatten(&refs));

    let years: Vec<&str> = chart.iter().map(|p| p.year.as_str()).collect();
    assert_eq!(years, vec!["1999", "2005", "2010", "2021"]);
    assert!(years.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_single_location_bucket_is_identity() {
    let records = vec![create_test_record("Air", "Oahu", &[("2020", 5.25), ("2021", 7.5)])];
    let refs: Vec<&TourismRecord> = records.iter().collect();
    let chart = build_chart_data(&flatten(&refs));

    assert_eq!(chart[0].average, 5.25);
    assert_eq!(chart[1].average, 7.5);
}

#[test]
fn test_chart_keeps_full_precision() {
    let records = vec![
        create_test_record("Air", "Oahu", &[("2020", 1.0)]),
        create_test_record("Air", "Maui", &[("2020", 1.0)]),
        create_test_record("Air", "Kauai", &[("2020", 2.0)]),
    ];
    let refs: Vec<&TourismRecord> = records.iter().collect();
    let chart = build_chart_data(&flatten(&refs));

    assert!((chart[0].average - 4.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_flatten_preserves_record_then_year_order() {
    let records = create_scenario_records();
    let refs: Vec<&TourismRecord> = records.iter().collect();
    let values = flatten(&refs);

    let order: Vec<(&str, &str)> = values.iter().map(|v| (v.location, v.year)).collect();
    assert_eq!(
        order,
        vec![("Oahu", "2020"), ("Oahu", "2021"), ("Maui", "2020")]
    );
}
