//! Length-of-stay service
//!
//! [`LosService`] ties the pipeline together. It owns the current
//! [`Catalog`] and a loading flag, and exposes the two operations a front end
//! needs:
//!
//! - [`LosService::load`] fetches a CSV export, parses it and installs the
//!   result as the new catalog
//! - [`LosService::query`] aggregates a category/location selection against
//!   the current catalog
//!
//! Only one load runs at a time. A load requested while another is in flight
//! is dropped and reported as [`LoadOutcome::Skipped`]. A failed load leaves
//! the previous catalog in place. Queries read a snapshot of the catalog and
//! never see a half-installed record set.

use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

use crate::app::adapters::source::CsvSource;
use crate::app::models::AggregationResult;
use crate::app::services::aggregator::aggregate;
use crate::app::services::catalog::Catalog;
use crate::app::services::record_parser::{ParseStats, RecordParser, read_rows};
use crate::config::ParserConfig;
use crate::{Error, NoMatchReason, Result};

mod guard;

#[cfg(test)]
pub mod tests;

pub use guard::LoadingGuard;

/// Summary of a completed load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadReport {
    pub source_name: String,
    pub record_count: usize,
    pub stats: ParseStats,
}

/// Result of a load request
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The catalog was replaced
    Loaded(LoadReport),
    /// Another load was in flight; nothing happened
    Skipped,
}

impl LoadOutcome {
    pub fn report(&self) -> Option<&LoadReport> {
        match self {
            LoadOutcome::Loaded(report) => Some(report),
            LoadOutcome::Skipped => None,
        }
    }
}

/// Owner of the catalog and entry point for loads and queries
#[derive(Debug)]
pub struct LosService {
    parser: RecordParser,
    catalog: RwLock<Arc<Catalog>>,
    loading: AtomicBool,
}

impl Default for LosService {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

impl LosService {
    /// Create a service with an empty catalog
    pub fn new(config: ParserConfig) -> Self {
        Self {
            parser: RecordParser::new(config),
            catalog: RwLock::new(Arc::new(Catalog::new())),
            loading: AtomicBool::new(false),
        }
    }

    /// True while a load is in flight
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Snapshot of the current catalog
    pub fn catalog(&self) -> Arc<Catalog> {
        let guard = self.catalog.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Fetch, parse and install a CSV export
    ///
    /// The catalog is replaced only after the whole text has been tokenized
    /// and parsed. A fetch or CSV syntax failure returns the error and keeps
    /// the previous catalog.
    pub async fn load<S: CsvSource>(&self, source: &S) -> Result<LoadOutcome> {
        let source_name = source.name();

        let Some(_guard) = LoadingGuard::acquire(&self.loading) else {
            warn!("Load of '{}' dropped: another load is in flight", source_name);
            return Ok(LoadOutcome::Skipped);
        };

        info!("Loading LOS data from '{}'", source_name);
        let data = source.fetch().await?;
        debug!("Fetched {} bytes from '{}'", data.len(), source_name);

        let rows = read_rows(&data, &source_name)?;
        let result = self.parser.parse(&rows);

        let record_count = result.records.len();
        if record_count == 0 {
            warn!("No usable records found in '{}'", source_name);
        }

        let catalog = Arc::new(Catalog::from_records(result.records, source_name.clone()));
        *self.catalog.write().unwrap_or_else(PoisonError::into_inner) = catalog;

        info!(
            "Catalog replaced with {} records from '{}'",
            record_count, source_name
        );

        Ok(LoadOutcome::Loaded(LoadReport {
            source_name,
            record_count,
            stats: result.stats,
        }))
    }

    /// Aggregate a category and optional location against the current catalog
    ///
    /// An empty location means all locations. An empty category is rejected
    /// before the catalog is consulted.
    pub fn query(&self, category: &str, location: Option<&str>) -> Result<AggregationResult> {
        if category.is_empty() {
            return Err(Error::no_match(
                category,
                location,
                NoMatchReason::MissingCategory,
            ));
        }

        let location = location.filter(|l| !l.is_empty());
        let catalog = self.catalog();
        let matched = catalog.filter(category, location);
        debug!(
            "Query category='{}' location={:?} matched {} records",
            category,
            location,
            matched.len()
        );

        aggregate(&matched, category, location)
    }
}
