//! Core domain types for room listings.
//!
//! A `Listing` is read-only once loaded; everything downstream (filters,
//! the session controller, the CLI) borrows or clones it.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a listing
pub type ListingId = u32;

/// Nightly price in won
pub type Price = u64;

// =============================================================================
// Listing-related Types
// =============================================================================

/// Kind of place being rented.
///
/// `Room` and `House` are the types the site offers filters and copy for.
/// Any other string in the fixture is carried through as `Other` so it can
/// still be matched literally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum RoomType {
    /// A private room with shared common areas
    Room,
    /// The entire place
    House,
    Other(String),
}

impl RoomType {
    pub fn as_str(&self) -> &str {
        match self {
            RoomType::Room => "room",
            RoomType::House => "house",
            RoomType::Other(value) => value,
        }
    }
}

impl From<&str> for RoomType {
    fn from(value: &str) -> Self {
        match value {
            "room" => RoomType::Room,
            "house" => RoomType::House,
            other => RoomType::Other(other.to_string()),
        }
    }
}

impl From<String> for RoomType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "room" => RoomType::Room,
            "house" => RoomType::House,
            _ => RoomType::Other(value),
        }
    }
}

impl From<RoomType> for String {
    fn from(value: RoomType) -> Self {
        match value {
            RoomType::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bedroom, bed and bathroom counts used by the capacity filters.
///
/// `None` means the listing did not specify that count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capacity {
    pub bedrooms: Option<u32>,
    pub beds: Option<u32>,
    pub bathrooms: Option<u32>,
}

/// A photo shown in the listing's gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomImage {
    pub id: u32,
    pub url: String,
}

/// A single rentable unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    /// Title shown on the detail page, empty when the fixture has none
    pub name: String,
    pub room_type: RoomType,
    pub price: Price,
    pub capacity: Capacity,
    pub images: Vec<RoomImage>,
}

impl Listing {
    /// Build a listing with no title or images.
    pub fn new(
        id: ListingId,
        room_type: impl Into<RoomType>,
        price: Price,
        capacity: Capacity,
    ) -> Self {
        Self {
            id,
            name: String::new(),
            room_type: room_type.into(),
            price,
            capacity,
            images: Vec::new(),
        }
    }
}

// =============================================================================
// ListingStore - the fetched snapshot
// =============================================================================

/// All listings fetched for a session, in fixture order, with an id index.
///
/// The store is replaced wholesale on every fetch and never edited in place
/// by the filter layer.
#[derive(Debug, Clone, Default)]
pub struct ListingStore {
    pub(crate) listings: Vec<Listing>,
    pub(crate) by_id: HashMap<ListingId, usize>,
}

impl ListingStore {
    /// Creates a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from listings in their original order.
    ///
    /// When ids repeat, `get` returns the first occurrence; `validate`
    /// reports the repetition.
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        let mut by_id = HashMap::with_capacity(listings.len());
        for (position, listing) in listings.iter().enumerate() {
            by_id.entry(listing.id).or_insert(position);
        }
        Self { listings, by_id }
    }

    /// Get a listing by id
    pub fn get(&self, id: ListingId) -> Option<&Listing> {
        self.by_id.get(&id).map(|&position| &self.listings[position])
    }

    pub fn as_slice(&self) -> &[Listing] {
        &self.listings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Listing> {
        self.listings.iter()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
