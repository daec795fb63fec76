//! Filter implementations for the listing pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod capacity;
pub mod price_range;
pub mod room_type;

// Re-export for convenience
pub use capacity::{CapacityField, CapacityFilter};
pub use price_range::PriceRangeFilter;
pub use room_type::RoomTypeFilter;
