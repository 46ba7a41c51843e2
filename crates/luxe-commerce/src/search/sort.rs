//! Sort keys for product listings.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::CommerceError;

/// Ordering applied to a filtered product listing.
///
/// Every key sorts stably, so ties keep catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog order.
    #[default]
    Popular,
    /// Price, low to high.
    PriceLow,
    /// Price, high to low.
    PriceHigh,
    /// New arrivals first.
    New,
    /// Highest rated first.
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Popular,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::New,
        SortKey::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Popular => "popular",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::New => "new",
            SortKey::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Popular => "Most Popular",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::New => "New Arrivals",
            SortKey::Rating => "Highest Rated",
        }
    }

    /// Parse a wire name, falling back to [`SortKey::Popular`].
    pub fn parse_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    pub(crate) fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Popular => Ordering::Equal,
            SortKey::PriceLow => a.price.amount_cents.cmp(&b.price.amount_cents),
            SortKey::PriceHigh => b.price.amount_cents.cmp(&a.price.amount_cents),
            SortKey::New => b.is_new.cmp(&a.is_new),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s.trim())
            .ok_or_else(|| CommerceError::UnknownSortKey(s.to_string()))
    }
}
