//! CSV sources
//!
//! A [`CsvSource`] hands raw CSV bytes to the loader. Fetching is the only
//! asynchronous step of a load; everything after it runs synchronously.

use std::future::Future;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::debug;

use crate::constants::STDIN_DATA_PATH;
use crate::{Error, Result};

/// Capability to retrieve the raw content of a CSV export
pub trait CsvSource {
    /// Name used in log lines and error messages
    fn name(&self) -> String;

    /// Retrieve the raw CSV content
    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// CSV export read from a file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CsvSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>>> + Send {
        async move {
            debug!("Reading CSV file {}", self.path.display());
            tokio::fs::read(&self.path).await.map_err(|e| {
                Error::fetch(
                    self.name(),
                    format!("could not load {}", self.path.display()),
                    Some(e),
                )
            })
        }
    }
}

/// CSV export read from standard input
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl CsvSource for StdinSource {
    fn name(&self) -> String {
        "<stdin>".to_string()
    }

    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>>> + Send {
        async move {
            let mut data = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut data)
                .await
                .map_err(|e| Error::fetch(self.name(), "could not read standard input", Some(e)))?;
            Ok(data)
        }
    }
}

/// CSV export held in memory
#[derive(Debug, Clone)]
pub struct StringSource {
    name: String,
    content: String,
}

impl StringSource {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

impl CsvSource for StringSource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>>> + Send {
        let data = self.content.clone().into_bytes();
        async move { Ok(data) }
    }
}

/// Source selected by a CLI data path
///
/// `-` selects standard input; anything else is a file path.
#[derive(Debug, Clone)]
pub enum PathSource {
    File(FileSource),
    Stdin(StdinSource),
}

impl PathSource {
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == STDIN_DATA_PATH {
            Self::Stdin(StdinSource)
        } else {
            Self::File(FileSource::new(path))
        }
    }
}

impl CsvSource for PathSource {
    fn name(&self) -> String {
        match self {
            Self::File(source) => source.name(),
            Self::Stdin(source) => source.name(),
        }
    }

    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>>> + Send {
        async move {
            match self {
                Self::File(source) => source.fetch().await,
                Self::Stdin(source) => source.fetch().await,
            }
        }
    }
}
