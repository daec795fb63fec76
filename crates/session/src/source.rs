//! Where a session gets its listings from.

use data_loader::{parser, DataLoadError, Listing, Result};
use std::future::Future;
use std::path::{Path, PathBuf};

/// A read-only provider of the full listings collection.
pub trait ListingSource {
    fn fetch_listings(&self) -> impl Future<Output = Result<Vec<Listing>>> + Send;
}

/// Reads the JSON fixture from disk without blocking the runtime.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ListingSource for JsonFileSource {
    async fn fetch_listings(&self) -> Result<Vec<Listing>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|err| DataLoadError::read_failed(&self.path, err))?;
        parser::parse_listings(&content, &parser::file_label(&self.path))
    }
}

/// Serves a fixed, in-memory collection.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    listings: Vec<Listing>,
}

impl StaticSource {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }
}

impl ListingSource for StaticSource {
    async fn fetch_listings(&self) -> Result<Vec<Listing>> {
        Ok(self.listings.clone())
    }
}
