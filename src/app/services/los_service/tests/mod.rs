//! Test utilities for LOS service testing

use std::future::Future;
use std::sync::Arc;
use tokio::sync::Notify;

use crate::Result;
use crate::app::adapters::source::CsvSource;


/// Export used by the service scenarios
pub fn create_scenario_csv() -> String {
    "Group,Indicator,Units,2020,2021\n\
     Air,Oahu,days,5.0,7.0\n\
     Air,Maui,days,3.0,\n\
     Cruise,Oahu,days,2.5,2.0\n\
     Data is updated monthly,,,,\n"
        .to_string()
}

/// Source whose fetch fails with a transport error
pub struct FailingSource;

impl CsvSource for FailingSource {
    fn name(&self) -> String {
        "unreachable.csv".to_string()
    }

    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>>> + Send {
        async { Err(crate::Error::fetch("unreachable.csv", "could not load unreachable.csv", None)) }
    }
}

/// Source returning raw bytes, used to feed malformed input
pub struct BytesSource(pub Vec<u8>);

impl CsvSource for BytesSource {
    fn name(&self) -> String {
        "bytes".to_string()
    }

    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>>> + Send {
        let data = self.0.clone();
        async move { Ok(data) }
    }
}

/// Source that holds its fetch open until released
pub struct GatedSource {
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
    pub content: String,
}

impl GatedSource {
    pub fn new(content: String) -> Self {
        Self {
            started: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
            content,
        }
    }
}

impl CsvSource for GatedSource {
    fn name(&self) -> String {
        "gated".to_string()
    }

    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>>> + Send {
        let started = Arc::clone(&self.started);
        let release = Arc::clone(&self.release);
        let data = self.content.clone().into_bytes();
        async move {
            started.notify_one();
            release.notified().await;
            Ok(data)
        }
    }
}
