//! In-memory catalog of tourism records
//!
//! The catalog holds every record from the most recent successful load and
//! answers the enumeration questions used to build selection lists. A load
//! replaces the whole record set; there is no incremental merge.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::app::models::TourismRecord;

pub mod query;

#[cfg(test)]
pub mod tests;

/// Catalog of loaded tourism records
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Records in input row order
    pub(crate) records: Vec<TourismRecord>,

    /// Name of the source the records came from
    pub(crate) source_name: String,

    /// When the current record set was installed
    pub(crate) loaded_at: DateTime<Utc>,
}

/// Summary of the catalog contents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogMetadata {
    pub source_name: String,
    pub record_count: usize,
    pub category_count: usize,
    pub location_count: usize,
    pub data_points: usize,
    pub loaded_at: DateTime<Utc>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            source_name: String::new(),
            loaded_at: Utc::now(),
        }
    }

    /// Create a catalog holding `records`
    pub fn from_records(records: Vec<TourismRecord>, source_name: impl Into<String>) -> Self {
        Self {
            records,
            source_name: source_name.into(),
            loaded_at: Utc::now(),
        }
    }

    /// All records in input row order
    pub fn records(&self) -> &[TourismRecord] {
        &self.records
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Get catalog metadata
    pub fn metadata(&self) -> CatalogMetadata {
        CatalogMetadata {
            source_name: self.source_name.clone(),
            record_count: self.records.len(),
            category_count: self.categories().len(),
            location_count: self.locations().len(),
            data_points: self.records.iter().map(|r| r.data_point_count()).sum(),
            loaded_at: self.loaded_at,
        }
    }
}
