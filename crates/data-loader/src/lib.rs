//! # Data Loader Crate
//!
//! Loads the room listings fixture and keeps it as an ordered, id-indexed
//! snapshot.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Listing, RoomType, Capacity, ListingStore)
//! - **parser**: Parse the JSON fixture into listings
//! - **index**: Build and validate a ListingStore
//! - **gallery**: Detail page photo layout
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::ListingStore;
//! use std::path::Path;
//!
//! let store = ListingStore::load_from_file(Path::new("data/roomDetail.json"))?;
//! let listing = store.get(1).unwrap();
//! println!("{} costs {} per night", listing.name, listing.price);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod gallery;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use gallery::{Gallery, GALLERY_TILE_LIMIT};
pub use types::{
    // Type aliases
    ListingId,
    Price,
    // Core types
    Capacity,
    Listing,
    ListingStore,
    RoomImage,
    RoomType,
};
