use crate::domain::catalog::DocumentLink;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Shown when a model carries no price text.
pub const PRICE_ON_REQUEST: &str = "Contact for price";

static PRICE_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\d,]+").unwrap());

/// One product model flattened out of its category and series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub id: u32,
    pub name: String,
    pub full_name: String,
    pub price: String,
    pub price_value: u64,
    pub image: Option<String>,
    pub category: String,
    pub category_id: String,
    pub series: String,
    pub series_id: String,
    pub description: String,
    pub specs: Vec<DocumentLink>,
    pub submittals: Vec<DocumentLink>,
    pub other_docs: Vec<DocumentLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductBadge {
    Premium,
    BestValue,
}

impl ProductBadge {
    pub fn label(self) -> &'static str {
        match self {
            ProductBadge::Premium => "Premium",
            ProductBadge::BestValue => "Best Value",
        }
    }
}

impl ProductRecord {
    pub fn badge(&self) -> Option<ProductBadge> {
        if self.price_value > 1500 {
            Some(ProductBadge::Premium)
        } else if self.price_value < 100 {
            Some(ProductBadge::BestValue)
        } else {
            None
        }
    }

    /// Candidate fields for free-text search.
    pub fn search_fields(&self) -> [&str; 4] {
        [&self.name, &self.series, &self.category, &self.full_name]
    }
}

/// Sort/filter key pulled out of free-form price text.
///
/// Takes the first run of digits and commas, drops the commas and parses
/// what is left. Anything that does not yield a number is `0`. This is not a
/// currency parser: `"$1.5k"` gives `1`.
pub fn derived_price(price: Option<&str>) -> u64 {
    let Some(text) = price else {
        return 0;
    };
    PRICE_DIGITS
        .find(text)
        .map(|m| m.as_str().replace(',', ""))
        .and_then(|digits| digits.parse::<u64>().ok())
        .unwrap_or(0)
}
