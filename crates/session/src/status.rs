//! Explanatory copy shown under the room type selector.

use data_loader::RoomType;
use pipeline::RoomTypeSelection;

/// Shown when no room type is selected.
pub const DEFAULT_STATUS: &str =
    "Search for the kind of place you want, from private rooms to entire homes.";

pub const ROOM_STATUS: &str = "A private room of your own, with access to shared spaces.";

pub const HOUSE_STATUS: &str = "The entire place to yourself.";

/// Copy for a selection; room types the site has no copy for get none.
pub fn status_message(selection: &RoomTypeSelection) -> Option<&'static str> {
    match selection {
        RoomTypeSelection::Any => Some(DEFAULT_STATUS),
        RoomTypeSelection::Only(RoomType::Room) => Some(ROOM_STATUS),
        RoomTypeSelection::Only(RoomType::House) => Some(HOUSE_STATUS),
        RoomTypeSelection::Only(RoomType::Other(_)) => None,
    }
}
