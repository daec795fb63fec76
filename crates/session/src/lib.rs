//! Session crate for the room listings browser.
//!
//! A `FilterController` is created per application session and passed to
//! whatever renders listings. It owns the fetched snapshot, the current
//! criteria and the derived filtered view.
//!
//! ## Example Usage
//!
//! ```ignore
//! use session::{FilterController, JsonFileSource};
//! use pipeline::RoomTypeSelection;
//! use data_loader::RoomType;
//!
//! let mut controller = FilterController::new();
//! controller.initialize(&JsonFileSource::new("data/roomDetail.json")).await;
//!
//! controller.set_room_type(RoomTypeSelection::Only(RoomType::House));
//! for listing in controller.filtered_listings() {
//!     println!("{} {}", listing.id, listing.name);
//! }
//! ```

pub mod controller;
pub mod source;
pub mod status;

pub use controller::{FilterController, FilterSessionState, FilteredView};
pub use source::{JsonFileSource, ListingSource, StaticSource};
pub use status::{status_message, DEFAULT_STATUS, HOUSE_STATUS, ROOM_STATUS};
