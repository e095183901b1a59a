//! Tests for catalog enumeration and filtering

use super::*;
use crate::app::services::catalog::Catalog;

#[test]
fn test_categories_sorted_distinct() {
    let catalog = Catalog::from_records(create_test_records(), "test");
    assert_eq!(catalog.categories(), vec!["Air", "Domestic"]);
}

#[test]
fn test_locations_sorted_distinct_with_empty_label() {
    let catalog = Catalog::from_records(create_test_records(), "test");
    assert_eq!(catalog.locations(), vec!["", "Kauai", "Maui", "Oahu"]);
}

#[test]
fn test_category_options_placeholder_first() {
    let catalog = Catalog::from_records(create_test_records(), "test");
    let options = catalog.category_options();

    assert_eq!(options.len(), 3);
    assert!(options[0].is_placeholder());
    assert_eq!(options[0].label, "-- Select Category --");
    assert_eq!(options[1].value, "Air");
    assert_eq!(options[2].label, "Domestic");
}

#[test]
fn test_location_options_placeholder_first_without_empty_label() {
    let catalog = Catalog::from_records(create_test_records(), "test");
    let options = catalog.location_options();

    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["-- All Locations --", "Kauai", "Maui", "Oahu"]);
    assert_eq!(options.iter().filter(|o| o.is_placeholder()).count(), 1);
}

#[test]
fn test_empty_catalog_options_still_have_placeholder() {
    let catalog = Catalog::new();
    assert_eq!(catalog.category_options().len(), 1);
    assert!(catalog.location_options()[0].is_placeholder());
}

#[test]
fn test_filter_by_category() {
    let catalog = Catalog::from_records(create_test_records(), "test");
    let matched = catalog.filter("Air", None);

    let locations: Vec<&str> = matched.iter().map(|r| r.indicator.as_str()).collect();
    assert_eq!(locations, vec!["Oahu", "Maui", ""]);
}

#[test]
fn test_filter_by_category_and_location() {
    let catalog = Catalog::from_records(create_test_records(), "test");

    let matched = catalog.filter("Air", Some("Maui"));
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].yearly_data[0].value, 3.0);

    // Empty location is "all locations"
    assert_eq!(catalog.filter("Air", Some("")).len(), 3);
}

#[test]
fn test_filter_is_exact_match() {
    let catalog = Catalog::from_records(create_test_records(), "test");

    assert!(catalog.filter("air", None).is_empty());
    assert!(catalog.filter("Air ", None).is_empty());
    assert!(catalog.filter("Air", Some("oahu")).is_empty());
}
