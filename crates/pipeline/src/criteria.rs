//! Filter criteria chosen by the user.
//!
//! Every constraint has an explicit "no restriction" value (`Any`, or an
//! `Unbounded` price ceiling) instead of a magic string.

use data_loader::{Price, RoomType};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lowest stop on the price slider.
pub const DEFAULT_MIN_PRICE: Price = 14_000;

/// Highest labelled stop on the price slider; the stop itself means
/// "this much or more" and maps to `PriceCeiling::Unbounded`.
pub const PRICE_SLIDER_MAX: Price = 580_000;

/// A criteria value typed on the command line could not be understood.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {value:?} ({expected})")]
pub struct CriteriaParseError {
    pub field: &'static str,
    pub value: String,
    pub expected: &'static str,
}

// =============================================================================
// Room type
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum RoomTypeSelection {
    #[default]
    Any,
    Only(RoomType),
}

impl RoomTypeSelection {
    pub fn matches(&self, room_type: &RoomType) -> bool {
        match self {
            RoomTypeSelection::Any => true,
            RoomTypeSelection::Only(wanted) => wanted == room_type,
        }
    }
}

impl From<RoomType> for RoomTypeSelection {
    fn from(room_type: RoomType) -> Self {
        RoomTypeSelection::Only(room_type)
    }
}

/// `all` and `any` are the wildcard; anything else is matched literally.
impl From<&str> for RoomTypeSelection {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") || s.eq_ignore_ascii_case("any") {
            RoomTypeSelection::Any
        } else {
            RoomTypeSelection::Only(RoomType::from(s))
        }
    }
}

impl FromStr for RoomTypeSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RoomTypeSelection::from(s))
    }
}

impl fmt::Display for RoomTypeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomTypeSelection::Any => f.write_str("all"),
            RoomTypeSelection::Only(room_type) => write!(f, "{room_type}"),
        }
    }
}

// =============================================================================
// Bedrooms, beds, bathrooms
// =============================================================================

/// Requirement on one capacity count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CountFilter {
    #[default]
    Any,
    Exactly(u32),
}

impl CountFilter {
    /// An unspecified count only satisfies `Any`.
    pub fn matches(&self, count: Option<u32>) -> bool {
        match self {
            CountFilter::Any => true,
            CountFilter::Exactly(wanted) => count == Some(*wanted),
        }
    }
}

impl FromStr for CountFilter {
    type Err = CriteriaParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("any") {
            return Ok(CountFilter::Any);
        }
        s.parse::<u32>()
            .map(CountFilter::Exactly)
            .map_err(|_| CriteriaParseError {
                field: "count",
                value: s.to_string(),
                expected: "a whole number or \"any\"",
            })
    }
}

impl fmt::Display for CountFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountFilter::Any => f.write_str("any"),
            CountFilter::Exactly(count) => write!(f, "{count}"),
        }
    }
}

/// The bedrooms/beds/bathrooms triple, always replaced as a whole.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BedroomCriteria {
    pub bedrooms: CountFilter,
    pub beds: CountFilter,
    pub bathrooms: CountFilter,
}

impl BedroomCriteria {
    pub const ANY: Self = Self {
        bedrooms: CountFilter::Any,
        beds: CountFilter::Any,
        bathrooms: CountFilter::Any,
    };

    pub fn is_unrestricted(&self) -> bool {
        *self == Self::ANY
    }
}

// =============================================================================
// Price
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PriceCeiling {
    Bounded(Price),
    #[default]
    Unbounded,
}

impl FromStr for PriceCeiling {
    type Err = CriteriaParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("unbounded") || s.eq_ignore_ascii_case("any") {
            return Ok(PriceCeiling::Unbounded);
        }
        s.replace(',', "")
            .parse::<Price>()
            .map(PriceCeiling::Bounded)
            .map_err(|_| CriteriaParseError {
                field: "price ceiling",
                value: s.to_string(),
                expected: "a price or \"unbounded\"",
            })
    }
}

/// Inclusive price window. `min > max` is allowed and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriceRange {
    pub min: Price,
    pub max: PriceCeiling,
}

impl PriceRange {
    /// A range that admits every price.
    pub const ANY: Self = Self {
        min: 0,
        max: PriceCeiling::Unbounded,
    };

    pub fn new(min: Price, max: Price) -> Self {
        Self {
            min,
            max: PriceCeiling::Bounded(max),
        }
    }

    pub fn at_least(min: Price) -> Self {
        Self {
            min,
            max: PriceCeiling::Unbounded,
        }
    }

    pub fn contains(&self, price: Price) -> bool {
        let under_ceiling = match self.max {
            PriceCeiling::Bounded(max) => price <= max,
            PriceCeiling::Unbounded => true,
        };
        price >= self.min && under_ceiling
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::at_least(DEFAULT_MIN_PRICE)
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            PriceCeiling::Bounded(max) => write!(f, "{} ~ {}", won(self.min), won(max)),
            PriceCeiling::Unbounded => write!(f, "{}+", won(self.min)),
        }
    }
}

fn won(amount: Price) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    grouped.push('₩');
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

// =============================================================================
// FilterCriteria
// =============================================================================

/// Everything the filter engine needs to decide whether a listing is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterCriteria {
    pub room_type: RoomTypeSelection,
    pub bedrooms: BedroomCriteria,
    pub price_range: PriceRange,
}

impl FilterCriteria {
    /// Criteria that keep every listing.
    pub fn unrestricted() -> Self {
        Self {
            room_type: RoomTypeSelection::Any,
            bedrooms: BedroomCriteria::ANY,
            price_range: PriceRange::ANY,
        }
    }
}
