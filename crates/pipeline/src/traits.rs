//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a listing set.

use crate::criteria::FilterCriteria;
use data_loader::Listing;

/// Core trait for filtering listings.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Filters are pure predicates over a listing and the current criteria;
///   they cannot fail and never reorder their input
/// - `apply` takes ownership of the Vec<Listing> and returns the survivors
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single listing satisfies this filter's constraint.
    fn matches(&self, listing: &Listing, criteria: &FilterCriteria) -> bool;

    /// Keep the listings that satisfy this filter, in their original order.
    fn apply(&self, listings: Vec<Listing>, criteria: &FilterCriteria) -> Vec<Listing> {
        listings
            .into_iter()
            .filter(|listing| self.matches(listing, criteria))
            .collect()
    }
}
