//! Catalog enumeration and filtering
//!
//! This module provides the category/location enumerations used to populate
//! selection lists and the exact-match filter used by queries.

use std::collections::BTreeSet;

use super::Catalog;
use crate::app::models::{SelectOption, TourismRecord};
use crate::constants::{CATEGORY_PLACEHOLDER, LOCATION_PLACEHOLDER};

impl Catalog {
    /// Distinct visitor categories in lexicographic order
    pub fn categories(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.group.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct location labels in lexicographic order
    ///
    /// An empty indicator is a valid label and sorts first.
    pub fn locations(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.indicator.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Category selection list, placeholder first
    pub fn category_options(&self) -> Vec<SelectOption> {
        with_placeholder(CATEGORY_PLACEHOLDER, self.categories())
    }

    /// Location selection list, placeholder first
    ///
    /// The empty label is left out: its value would be indistinguishable from
    /// the placeholder, which already selects every location.
    pub fn location_options(&self) -> Vec<SelectOption> {
        let mut locations = self.locations();
        locations.retain(|l| !l.is_empty());
        with_placeholder(LOCATION_PLACEHOLDER, locations)
    }

    /// Records matching `category` exactly, and `location` exactly when given
    ///
    /// An empty location means every location in the category. Input row
    /// order is preserved.
    pub fn filter(&self, category: &str, location: Option<&str>) -> Vec<&TourismRecord> {
        let location = location.filter(|l| !l.is_empty());

        self.records
            .iter()
            .filter(|r| r.group == category)
            .filter(|r| location.is_none_or(|l| r.indicator == l))
            .collect()
    }
}

fn with_placeholder(placeholder: &str, values: Vec<&str>) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder(placeholder))
        .chain(values.into_iter().map(SelectOption::item))
        .collect()
}
