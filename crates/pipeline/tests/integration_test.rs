//! Integration tests for the filter engine.
//!
//! These tests run the full standard pipeline through `filter_listings`
//! against small, hand-built listing sets.

use data_loader::{Capacity, Listing, ListingId, RoomType};
use pipeline::{
    filter_listings, BedroomCriteria, CountFilter, FilterCriteria, PriceRange, RoomTypeSelection,
};

fn capacity(bedrooms: u32, beds: u32, bathrooms: u32) -> Capacity {
    Capacity {
        bedrooms: Some(bedrooms),
        beds: Some(beds),
        bathrooms: Some(bathrooms),
    }
}

fn two_listings() -> Vec<Listing> {
    vec![
        Listing::new(1, "house", 100_000, capacity(2, 2, 1)),
        Listing::new(2, "room", 50_000, capacity(1, 1, 1)),
    ]
}

fn mixed_listings() -> Vec<Listing> {
    vec![
        Listing::new(10, "house", 240_000, capacity(3, 4, 2)),
        Listing::new(11, "room", 14_000, capacity(1, 1, 1)),
        Listing::new(12, "house", 100_000, capacity(2, 2, 1)),
        Listing::new(13, "room", 78_000, capacity(1, 2, 1)),
        Listing::new(14, "house", 610_000, capacity(4, 5, 3)),
        Listing::new(15, "cabin", 90_000, Capacity::default()),
        Listing::new(16, "room", 50_000, capacity(1, 1, 1)),
    ]
}

fn ids(listings: &[Listing]) -> Vec<ListingId> {
    listings.iter().map(|listing| listing.id).collect()
}

fn is_ordered_subsequence(sub: &[Listing], full: &[Listing]) -> bool {
    let mut remaining = full.iter();
    sub.iter().all(|wanted| remaining.any(|listing| listing == wanted))
}

#[test]
fn test_house_with_unbounded_price() {
    let criteria = FilterCriteria {
        room_type: RoomTypeSelection::Only(RoomType::House),
        bedrooms: BedroomCriteria::ANY,
        price_range: PriceRange::at_least(0),
    };

    let result = filter_listings(&two_listings(), &criteria);
    assert_eq!(result, vec![two_listings()[0].clone()]);
}

#[test]
fn test_price_floor_excludes_cheap_room() {
    let criteria = FilterCriteria {
        room_type: RoomTypeSelection::Any,
        bedrooms: BedroomCriteria::ANY,
        price_range: PriceRange::at_least(60_000),
    };

    let result = filter_listings(&two_listings(), &criteria);
    assert_eq!(ids(&result), vec![1]);
}

#[test]
fn test_unrestricted_criteria_is_identity() {
    let listings = mixed_listings();
    assert_eq!(filter_listings(&listings, &FilterCriteria::unrestricted()), listings);
}

#[test]
fn test_empty_input_gives_empty_output() {
    let criteria_sets = [
        FilterCriteria::default(),
        FilterCriteria::unrestricted(),
        FilterCriteria {
            room_type: RoomTypeSelection::Only(RoomType::Room),
            price_range: PriceRange::new(0, 1),
            ..FilterCriteria::default()
        },
    ];

    for criteria in &criteria_sets {
        assert!(filter_listings(&[], criteria).is_empty());
    }
}

#[test]
fn test_results_are_ordered_subsequences() {
    let listings = mixed_listings();
    let criteria_sets = [
        FilterCriteria::default(),
        FilterCriteria {
            room_type: RoomTypeSelection::Only(RoomType::Room),
            ..FilterCriteria::unrestricted()
        },
        FilterCriteria {
            bedrooms: BedroomCriteria {
                bedrooms: CountFilter::Exactly(1),
                beds: CountFilter::Any,
                bathrooms: CountFilter::Exactly(1),
            },
            ..FilterCriteria::unrestricted()
        },
        FilterCriteria {
            price_range: PriceRange::new(50_000, 240_000),
            ..FilterCriteria::unrestricted()
        },
    ];

    for criteria in &criteria_sets {
        let result = filter_listings(&listings, criteria);
        assert!(
            is_ordered_subsequence(&result, &listings),
            "not a subsequence for {criteria:?}"
        );
    }
}

#[test]
fn test_unbounded_ceiling_never_drops_on_price_alone() {
    let listings = mixed_listings();
    let criteria = FilterCriteria {
        price_range: PriceRange::at_least(0),
        ..FilterCriteria::unrestricted()
    };

    let result = filter_listings(&listings, &criteria);
    assert!(ids(&result).contains(&14));
    assert_eq!(result.len(), listings.len());
}

#[test]
fn test_all_criteria_combined() {
    let criteria = FilterCriteria {
        room_type: RoomTypeSelection::Only(RoomType::Room),
        bedrooms: BedroomCriteria {
            bedrooms: CountFilter::Exactly(1),
            beds: CountFilter::Exactly(1),
            bathrooms: CountFilter::Any,
        },
        price_range: PriceRange::new(20_000, 100_000),
    };

    let result = filter_listings(&mixed_listings(), &criteria);
    assert_eq!(ids(&result), vec![16]);
}

#[test]
fn test_unspecified_counts_do_not_panic() {
    let criteria = FilterCriteria {
        bedrooms: BedroomCriteria {
            bedrooms: CountFilter::Exactly(0),
            beds: CountFilter::Exactly(0),
            bathrooms: CountFilter::Exactly(0),
        },
        ..FilterCriteria::unrestricted()
    };

    assert!(filter_listings(&mixed_listings(), &criteria).is_empty());
}

#[test]
fn test_engine_is_deterministic() {
    let listings = mixed_listings();
    let criteria = FilterCriteria::default();

    let first = filter_listings(&listings, &criteria);
    let second = filter_listings(&listings, &criteria);
    assert_eq!(first, second);
}
