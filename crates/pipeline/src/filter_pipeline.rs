//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern, and
//! `filter_listings`, the engine every caller goes through.

use crate::criteria::FilterCriteria;
use crate::filters::{CapacityFilter, PriceRangeFilter, RoomTypeFilter};
use crate::traits::Filter;
use data_loader::Listing;
use std::sync::LazyLock;

static STANDARD_PIPELINE: LazyLock<FilterPipeline> = LazyLock::new(FilterPipeline::standard);

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(RoomTypeFilter)
///     .add_filter(PriceRangeFilter);
///
/// let filtered = pipeline.apply(listings, &criteria);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Room type, bedrooms, beds, bathrooms, then price.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(RoomTypeFilter)
            .add_filter(CapacityFilter::bedrooms())
            .add_filter(CapacityFilter::beds())
            .add_filter(CapacityFilter::bathrooms())
            .add_filter(PriceRangeFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the listings.
    ///
    /// Each filter only removes listings, so the result keeps the input
    /// order and holds exactly the listings that pass every filter.
    pub fn apply(&self, listings: Vec<Listing>, criteria: &FilterCriteria) -> Vec<Listing> {
        let mut current = listings;
        for filter in &self.filters {
            if current.is_empty() {
                break;
            }
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, criteria);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

    /// Whether a single listing passes every filter.
    pub fn accepts(&self, listing: &Listing, criteria: &FilterCriteria) -> bool {
        self.filters
            .iter()
            .all(|filter| filter.matches(listing, criteria))
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the standard pipeline over a borrowed collection.
///
/// Pure and synchronous: the same inputs always give the same output, in
/// the same order as `listings`.
pub fn filter_listings(listings: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    let filtered = STANDARD_PIPELINE.apply(listings.to_vec(), criteria);
    tracing::debug!(
        total = listings.len(),
        matched = filtered.len(),
        ids = ?filtered.iter().map(|listing| listing.id).collect::<Vec<_>>(),
        "filtered listings"
    );
    filtered
}
