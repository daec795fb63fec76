//! Building a `ListingStore` from the fixture.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;

impl ListingStore {
    /// Load and validate every listing in a JSON fixture.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        tracing::info!("Loading listings from {}", path.display());

        let listings = parser::parse_listings_file(path)?;
        let store = ListingStore::from_listings(listings);
        store.validate()?;

        tracing::info!("Loaded {} listings", store.len());
        Ok(store)
    }

    /// Check the invariants the filter layer relies on: ids are unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.listings.len());
        for listing in &self.listings {
            if !seen.insert(listing.id) {
                return Err(DataLoadError::ValidationError(format!(
                    "duplicate listing id {}",
                    listing.id
                )));
            }
        }
        Ok(())
    }
}
