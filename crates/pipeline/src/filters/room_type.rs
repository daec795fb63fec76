//! Filter on the kind of place (private room, entire house, ...).

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use data_loader::Listing;

/// Keeps listings whose room type equals the selected one.
///
/// The `Any` selection keeps everything, including listings whose type is
/// not one the site knows about.
pub struct RoomTypeFilter;

impl Filter for RoomTypeFilter {
    fn name(&self) -> &str {
        "RoomTypeFilter"
    }

    fn matches(&self, listing: &Listing, criteria: &FilterCriteria) -> bool {
        criteria.room_type.matches(&listing.room_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::RoomTypeSelection as Selection;
    use data_loader::{Capacity, RoomType};

    fn listings() -> Vec<Listing> {
        vec![
            Listing::new(1, "house", 100_000, Capacity::default()),
            Listing::new(2, "room", 50_000, Capacity::default()),
            Listing::new(3, "glamping", 80_000, Capacity::default()),
            Listing::new(4, "house", 90_000, Capacity::default()),
        ]
    }

    #[test]
    fn test_selected_type_only() {
        let criteria = FilterCriteria {
            room_type: Selection::Only(RoomType::House),
            ..FilterCriteria::unrestricted()
        };

        let filtered = RoomTypeFilter.apply(listings(), &criteria);
        let ids: Vec<u32> = filtered.iter().map(|listing| listing.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_unknown_type_matches_literally() {
        let criteria = FilterCriteria {
            room_type: Selection::Only(RoomType::Other("glamping".into())),
            ..FilterCriteria::unrestricted()
        };

        let filtered = RoomTypeFilter.apply(listings(), &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 3);
    }

    #[test]
    fn test_any_keeps_everything() {
        let filtered = RoomTypeFilter.apply(listings(), &FilterCriteria::unrestricted());
        assert_eq!(filtered.len(), 4);
    }
}
