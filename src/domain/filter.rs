use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Radio value meaning "no restriction" on a facet.
pub const ALL: &str = "all";

/// A single filterable dimension: either unrestricted or pinned to one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facet<T> {
    All,
    Only(T),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Facet::All
    }
}

impl<T> Facet<T> {
    pub fn selected(&self) -> Option<&T> {
        match self {
            Facet::All => None,
            Facet::Only(value) => Some(value),
        }
    }
}

impl<T: PartialEq> Facet<T> {
    /// `All` admits every value, `Only(v)` admits exactly `v`.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(selected) => selected == value,
        }
    }
}

impl<T: FromStr> Facet<T> {
    /// Builds a facet from a radio input value, treating `"all"` as no restriction.
    pub fn from_value(value: &str) -> Result<Self, T::Err> {
        if value == ALL {
            Ok(Facet::All)
        } else {
            value.parse().map(Facet::Only)
        }
    }
}

impl<T: fmt::Display> Facet<T> {
    pub fn value(&self) -> String {
        match self {
            Facet::All => ALL.to_string(),
            Facet::Only(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid price bucket '{0}', expected 'min-max' or 'min+'")]
pub struct InvalidPriceBucket(pub String);

/// Inclusive price range over `ProductRecord::price_value`.
///
/// `max: None` is open-ended. The `"1500-99999"` form still parses as a
/// bounded range for compatibility with stored radio values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBucket {
    pub min: u64,
    pub max: Option<u64>,
}

impl PriceBucket {
    pub const fn new(min: u64, max: Option<u64>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: u64) -> bool {
        match self.max {
            Some(max) => price >= self.min && price <= max,
            None => price >= self.min,
        }
    }
}

/// Buckets offered in the product sidebar, with their labels.
pub const PRICE_BUCKETS: [(&str, PriceBucket); 4] = [
    ("Under $100", PriceBucket::new(0, Some(100))),
    ("$100 - $500", PriceBucket::new(100, Some(500))),
    ("$500 - $1,500", PriceBucket::new(500, Some(1500))),
    ("$1,500+", PriceBucket::new(1500, None)),
];

impl FromStr for PriceBucket {
    type Err = InvalidPriceBucket;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidPriceBucket(s.to_string());
        let s = s.trim();
        if let Some(min) = s.strip_suffix('+') {
            let min = min.trim().parse().map_err(|_| invalid())?;
            return Ok(PriceBucket::new(min, None));
        }
        let (min, max) = s.split_once('-').ok_or_else(invalid)?;
        let min = min.trim().parse().map_err(|_| invalid())?;
        let max = match max.trim() {
            "" => None,
            max => Some(max.parse().map_err(|_| invalid())?),
        };
        Ok(PriceBucket::new(min, max))
    }
}

impl fmt::Display for PriceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}-{}", self.min, max),
            None => write!(f, "{}+", self.min),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortKey {
    #[default]
    Name,
    PriceLow,
    PriceHigh,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::PriceLow, SortKey::PriceHigh];

    pub fn value(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Sort: Name",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
        }
    }
}

impl FromStr for SortKey {
    type Err = InvalidSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.value() == s)
            .ok_or_else(|| InvalidSortKey(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key '{0}'")]
pub struct InvalidSortKey(pub String);

/// Everything a user can do to a catalog's filter controls.
///
/// Widgets translate DOM events into these and hand them to
/// [`FilterState::reduce`]; variants a widget has no control for are ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    Category(Facet<String>),
    Price(Facet<PriceBucket>),
    DocType(Facet<String>),
    Query(String),
    Sort(SortKey),
    Reset,
}

pub trait FilterState: Clone + Default + PartialEq {
    fn reduce(self, event: FilterEvent) -> Self;

    fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductFilter {
    pub category: Facet<String>,
    pub price: Facet<PriceBucket>,
    pub query: String,
    pub sort: SortKey,
}

impl ProductFilter {
    pub fn with_category(category: impl Into<String>) -> Self {
        Self {
            category: Facet::Only(category.into()),
            ..Default::default()
        }
    }
}

impl FilterState for ProductFilter {
    fn reduce(self, event: FilterEvent) -> Self {
        match event {
            FilterEvent::Category(category) => Self { category, ..self },
            FilterEvent::Price(price) => Self { price, ..self },
            FilterEvent::Query(query) => Self { query, ..self },
            FilterEvent::Sort(sort) => Self { sort, ..self },
            FilterEvent::Reset => Self::default(),
            FilterEvent::DocType(_) => self,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentFilter {
    pub category: Facet<String>,
    pub doc_type: Facet<String>,
    pub query: String,
}

impl FilterState for DocumentFilter {
    fn reduce(self, event: FilterEvent) -> Self {
        match event {
            FilterEvent::Category(category) => Self { category, ..self },
            FilterEvent::DocType(doc_type) => Self { doc_type, ..self },
            FilterEvent::Query(query) => Self { query, ..self },
            FilterEvent::Reset => Self::default(),
            // documents have a fixed order and no price
            FilterEvent::Price(_) | FilterEvent::Sort(_) => self,
        }
    }
}
