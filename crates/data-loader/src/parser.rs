//! Parser for the listings JSON fixture.
//!
//! The fixture is a JSON array of objects shaped like
//!
//! ```json
//! {
//!   "id": 1,
//!   "roomName": "Hanok stay near Bukchon",
//!   "roomType": "house",
//!   "price": 100000,
//!   "filter": { "bedRooms": 2, "beds": 2, "bathRooms": 1 },
//!   "RoomImages": [{ "id": 1, "url": "/images/1-1.jpg" }]
//! }
//! ```
//!
//! Counts are hand-edited and show up as numbers, numeric strings, or a
//! placeholder word. Numbers and numeric strings both become `Some(n)`;
//! anything else becomes `None` ("unspecified") rather than an error.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawListing {
    id: Value,
    #[serde(rename = "roomName", default)]
    room_name: Option<String>,
    #[serde(rename = "roomType")]
    room_type: String,
    price: Value,
    #[serde(default)]
    filter: RawCapacity,
    #[serde(rename = "RoomImages", default)]
    room_images: Vec<RawImage>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCapacity {
    #[serde(rename = "bedRooms", default)]
    bed_rooms: Value,
    #[serde(default)]
    beds: Value,
    #[serde(rename = "bathRooms", default)]
    bath_rooms: Value,
}

#[derive(Debug, Deserialize)]
struct RawImage {
    id: u32,
    url: String,
}

/// Read and parse a listings fixture from disk.
pub fn parse_listings_file(path: &Path) -> Result<Vec<Listing>> {
    let content =
        std::fs::read_to_string(path).map_err(|err| DataLoadError::read_failed(path, err))?;
    parse_listings(&content, &file_label(path))
}

/// Name used for `path` in parse errors.
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse the fixture contents.
///
/// `file` is only used to label parse errors.
pub fn parse_listings(json: &str, file: &str) -> Result<Vec<Listing>> {
    let raw: Vec<RawListing> =
        serde_json::from_str(json).map_err(|err| DataLoadError::ParseError {
            file: file.to_string(),
            line: err.line(),
            reason: err.to_string(),
        })?;

    raw.into_iter().map(convert_listing).collect()
}

fn convert_listing(raw: RawListing) -> Result<Listing> {
    let id = parse_id(&raw.id)?;
    let price = parse_price(&raw.price)?;

    Ok(Listing {
        id,
        name: raw.room_name.unwrap_or_default(),
        room_type: RoomType::from(raw.room_type),
        price,
        capacity: Capacity {
            bedrooms: parse_count(&raw.filter.bed_rooms),
            beds: parse_count(&raw.filter.beds),
            bathrooms: parse_count(&raw.filter.bath_rooms),
        },
        images: raw
            .room_images
            .into_iter()
            .map(|image| RoomImage {
                id: image.id,
                url: image.url,
            })
            .collect(),
    })
}

fn parse_id(value: &Value) -> Result<ListingId> {
    parse_whole_number(value)
        .and_then(|n| ListingId::try_from(n).ok())
        .ok_or_else(|| DataLoadError::InvalidValue {
            field: "id".to_string(),
            value: value.to_string(),
        })
}

/// Prices may be written as `100000`, `"100,000"` or `49999.5`.
/// Fractional amounts round to the nearest whole won.
fn parse_price(value: &Value) -> Result<Price> {
    let amount = match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().and_then(round_to_won)),
        Value::String(text) => {
            let text = text.trim().replace(',', "");
            text.parse::<Price>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(round_to_won))
        }
        _ => None,
    };

    amount.ok_or_else(|| DataLoadError::InvalidValue {
        field: "price".to_string(),
        value: value.to_string(),
    })
}

/// `None` for negative, non-finite, or out-of-range amounts.
fn round_to_won(amount: f64) -> Option<Price> {
    let rounded = amount.round();
    (rounded.is_finite() && rounded >= 0.0 && rounded < Price::MAX as f64)
        .then_some(rounded as Price)
}

fn parse_count(value: &Value) -> Option<u32> {
    parse_whole_number(value).and_then(|n| u32::try_from(n).ok())
}

fn parse_whole_number(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && *f < u64::MAX as f64)
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as u64)
        }),
        Value::String(text) => text.trim().replace(',', "").parse::<u64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_listing() {
        let json = r#"[{
            "id": 7,
            "roomName": "Seaside loft",
            "roomType": "house",
            "price": 120000,
            "filter": { "bedRooms": 2, "beds": 3, "bathRooms": 1 },
            "RoomImages": [{ "id": 1, "url": "/a.jpg" }, { "id": 2, "url": "/b.jpg" }]
        }]"#;

        let listings = parse_listings(json, "roomDetail.json").unwrap();
        assert_eq!(listings.len(), 1);

        let listing = &listings[0];
        assert_eq!(listing.id, 7);
        assert_eq!(listing.name, "Seaside loft");
        assert_eq!(listing.room_type, RoomType::House);
        assert_eq!(listing.price, 120000);
        assert_eq!(listing.capacity.bedrooms, Some(2));
        assert_eq!(listing.capacity.beds, Some(3));
        assert_eq!(listing.capacity.bathrooms, Some(1));
        assert_eq!(listing.images.len(), 2);
        assert_eq!(listing.images[1].url, "/b.jpg");
    }

    #[test]
    fn test_numeric_strings_become_counts() {
        let json = r#"[{
            "id": "3",
            "roomType": "room",
            "price": "55,000",
            "filter": { "bedRooms": "1", "beds": " 2 ", "bathRooms": 1.0 }
        }]"#;

        let listing = &parse_listings(json, "test.json").unwrap()[0];
        assert_eq!(listing.id, 3);
        assert_eq!(listing.price, 55000);
        assert_eq!(listing.capacity.bedrooms, Some(1));
        assert_eq!(listing.capacity.beds, Some(2));
        assert_eq!(listing.capacity.bathrooms, Some(1));
    }

    #[test]
    fn test_unparseable_counts_are_unspecified() {
        let json = r#"[{
            "id": 1,
            "roomType": "room",
            "price": 10000,
            "filter": { "bedRooms": "any", "beds": null, "bathRooms": 1.5 }
        }, {
            "id": 2,
            "roomType": "room",
            "price": 10000
        }]"#;

        let listings = parse_listings(json, "test.json").unwrap();
        assert_eq!(listings[0].capacity, Capacity::default());
        assert_eq!(listings[1].capacity, Capacity::default());
        assert!(listings[1].name.is_empty());
        assert!(listings[1].images.is_empty());
    }

    #[test]
    fn test_unknown_room_type_is_kept() {
        let json = r#"[{ "id": 1, "roomType": "hotel", "price": 1 }]"#;
        let listing = &parse_listings(json, "test.json").unwrap()[0];
        assert_eq!(listing.room_type, RoomType::Other("hotel".to_string()));
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let json = r#"[{ "id": 1, "roomType": "room", "price": -5 }]"#;
        let err = parse_listings(json, "test.json").unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidValue { ref field, .. } if field == "price"));
    }

    #[test]
    fn test_fractional_price_rounds_to_whole_won() {
        let json = r#"[
            { "id": 1, "roomType": "house", "price": 100000 },
            { "id": 2, "roomType": "room", "price": 49999.5 },
            { "id": 3, "roomType": "room", "price": "12,000.4" }
        ]"#;

        let listings = parse_listings(json, "test.json").unwrap();
        let prices: Vec<Price> = listings.iter().map(|listing| listing.price).collect();
        assert_eq!(prices, vec![100_000, 50_000, 12_000]);
    }

    #[test]
    fn test_out_of_range_price_is_rejected() {
        for price in ["1e30", "\"1e30\"", "18446744073709551616"] {
            let json = format!(r#"[{{ "id": 1, "roomType": "room", "price": {price} }}]"#);
            let err = parse_listings(&json, "test.json").unwrap_err();
            assert!(
                matches!(err, DataLoadError::InvalidValue { ref field, .. } if field == "price"),
                "price {price} was not rejected"
            );
        }
    }

    #[test]
    fn test_malformed_json_reports_line() {
        let json = "[\n  { \"id\": 1,\n    \"roomType\": }\n]";
        let err = parse_listings(json, "broken.json").unwrap_err();
        match err {
            DataLoadError::ParseError { file, line, .. } => {
                assert_eq!(file, "broken.json");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = parse_listings_file(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_empty_array() {
        assert!(parse_listings("[]", "empty.json").unwrap().is_empty());
    }
}
