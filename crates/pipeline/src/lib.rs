//! Filter engine for room listings.
//!
//! This crate provides:
//! - FilterCriteria and its parts (room type, capacity counts, price range)
//! - Filter trait and implementations for listing filtering
//! - FilterPipeline for composing filters
//! - `filter_listings`, the pure engine the session controller calls
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{filter_listings, FilterCriteria, PriceRange, RoomTypeSelection};
//! use data_loader::RoomType;
//!
//! let criteria = FilterCriteria {
//!     room_type: RoomTypeSelection::Only(RoomType::House),
//!     price_range: PriceRange::at_least(60_000),
//!     ..FilterCriteria::default()
//! };
//!
//! let visible = filter_listings(store.as_slice(), &criteria);
//! ```

pub mod criteria;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use criteria::{
    BedroomCriteria, CountFilter, CriteriaParseError, FilterCriteria, PriceCeiling, PriceRange,
    RoomTypeSelection, DEFAULT_MIN_PRICE, PRICE_SLIDER_MAX,
};
pub use filter_pipeline::{filter_listings, FilterPipeline};
pub use traits::Filter;
