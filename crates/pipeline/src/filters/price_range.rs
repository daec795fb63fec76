//! Filter on the nightly price.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use data_loader::Listing;

/// Keeps listings priced inside the selected range, both ends inclusive.
/// An unbounded ceiling never removes a listing on its own.
pub struct PriceRangeFilter;

impl Filter for PriceRangeFilter {
    fn name(&self) -> &str {
        "PriceRangeFilter"
    }

    fn matches(&self, listing: &Listing, criteria: &FilterCriteria) -> bool {
        criteria.price_range.contains(listing.price)
    }
}
