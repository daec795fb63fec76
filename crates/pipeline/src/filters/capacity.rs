//! Filters on bedroom, bed and bathroom counts.

use crate::criteria::{CountFilter, FilterCriteria};
use crate::traits::Filter;
use data_loader::Listing;

/// Which capacity count a `CapacityFilter` looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityField {
    Bedrooms,
    Beds,
    Bathrooms,
}

/// Keeps listings whose count for one field equals the required count.
///
/// ## Algorithm
/// 1. Pick the requirement for `field` out of `criteria.bedrooms`
/// 2. `Any` keeps the listing
/// 3. `Exactly(n)` keeps it only when the listing specifies exactly `n`;
///    an unspecified count is a non-match, never an error
pub struct CapacityFilter {
    field: CapacityField,
}

impl CapacityFilter {
    pub fn new(field: CapacityField) -> Self {
        Self { field }
    }

    pub fn bedrooms() -> Self {
        Self::new(CapacityField::Bedrooms)
    }

    pub fn beds() -> Self {
        Self::new(CapacityField::Beds)
    }

    pub fn bathrooms() -> Self {
        Self::new(CapacityField::Bathrooms)
    }

    fn requirement(&self, criteria: &FilterCriteria) -> CountFilter {
        match self.field {
            CapacityField::Bedrooms => criteria.bedrooms.bedrooms,
            CapacityField::Beds => criteria.bedrooms.beds,
            CapacityField::Bathrooms => criteria.bedrooms.bathrooms,
        }
    }

    fn count(&self, listing: &Listing) -> Option<u32> {
        match self.field {
            CapacityField::Bedrooms => listing.capacity.bedrooms,
            CapacityField::Beds => listing.capacity.beds,
            CapacityField::Bathrooms => listing.capacity.bathrooms,
        }
    }
}

impl Filter for CapacityFilter {
    fn name(&self) -> &str {
        match self.field {
            CapacityField::Bedrooms => "BedroomsFilter",
            CapacityField::Beds => "BedsFilter",
            CapacityField::Bathrooms => "BathroomsFilter",
        }
    }

    fn matches(&self, listing: &Listing, criteria: &FilterCriteria) -> bool {
        self.requirement(criteria).matches(self.count(listing))
    }

    fn apply(&self, listings: Vec<Listing>, criteria: &FilterCriteria) -> Vec<Listing> {
        let requirement = self.requirement(criteria);
        if requirement == CountFilter::Any {
            return listings;
        }
        listings
            .into_iter()
            .filter(|listing| requirement.matches(self.count(listing)))
            .collect()
    }
}
