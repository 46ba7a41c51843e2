//! Product listing filters.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::config::StoreConfig;
use crate::money::{Currency, Money};
use crate::search::SortKey;

/// Default upper bound of the price filter, in minor units.
pub const DEFAULT_PRICE_FILTER_MAX_CENTS: i64 = 200_000;

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    pub fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    /// True when `price` lies within both bounds, in the same currency.
    pub fn contains(&self, price: &Money) -> bool {
        price.currency == self.min.currency
            && price.amount_cents >= self.min.amount_cents
            && price.amount_cents <= self.max.amount_cents
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: Money::zero(Currency::USD),
            max: Money::usd(DEFAULT_PRICE_FILTER_MAX_CENTS),
        }
    }
}

/// Category, brand and price filters plus a sort key.
///
/// Filters are AND-combined. An empty category or brand set matches every
/// product.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductFilter {
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub price_range: PriceRange,
    pub in_stock_only: bool,
    pub sort: SortKey,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default filter with the configured price ceiling.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self {
            price_range: PriceRange::new(Money::zero(config.currency), config.price_filter_max()),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.push(brand.into());
        self
    }

    pub fn with_price_range(mut self, min: Money, max: Money) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    pub fn with_min_price(mut self, min: Money) -> Self {
        self.price_range.min = min;
        self
    }

    pub fn with_max_price(mut self, max: Money) -> Self {
        self.price_range.max = max;
        self
    }

    pub fn in_stock_only(mut self) -> Self {
        self.in_stock_only = true;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Add the category when absent, remove it when present.
    pub fn toggle_category(&mut self, category: &str) {
        toggle(&mut self.categories, category);
    }

    /// Add the brand when absent, remove it when present.
    pub fn toggle_brand(&mut self, brand: &str) {
        toggle(&mut self.brands, brand);
    }

    /// Drop category and brand selections and restore the default price range.
    /// The sort key is kept.
    pub fn clear(&mut self) {
        let currency = self.price_range.min.currency;
        self.categories.clear();
        self.brands.clear();
        self.in_stock_only = false;
        self.price_range = PriceRange::new(
            Money::zero(currency),
            Money::new(DEFAULT_PRICE_FILTER_MAX_CENTS, currency),
        );
    }

    /// True when any category or brand is selected.
    pub fn is_active(&self) -> bool {
        !self.categories.is_empty() || !self.brands.is_empty()
    }

    pub fn matches(&self, product: &Product) -> bool {
        (self.categories.is_empty() || self.categories.iter().any(|c| *c == product.category))
            && (self.brands.is_empty() || self.brands.iter().any(|b| *b == product.brand))
            && self.price_range.contains(&product.price)
            && (!self.in_stock_only || product.in_stock)
    }

    /// Filter then stably sort `products`.
    pub fn apply(&self, products: &[Arc<Product>]) -> Vec<Arc<Product>> {
        let mut filtered: Vec<Arc<Product>> = products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();
        filtered.sort_by(|a, b| self.sort.compare(a, b));
        filtered
    }
}

fn toggle(values: &mut Vec<String>, value: &str) {
    match values.iter().position(|v| v == value) {
        Some(index) => {
            values.remove(index);
        }
        None => values.push(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn ids(products: &[Arc<Product>]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_default_matches_everything() {
        let catalog = Catalog::builtin();
        let all = ProductFilter::new().apply(catalog.list_products());
        assert_eq!(ids(&all), vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_category_filter_keeps_catalog_order() {
        let catalog = Catalog::builtin();
        let watches = ProductFilter::new()
            .with_category("Watches")
            .apply(catalog.list_products());
        assert_eq!(ids(&watches), vec!["1", "8"]);
    }

    #[test]
    fn test_filters_are_and_combined() {
        let catalog = Catalog::builtin();
        let filter = ProductFilter::new()
            .with_category("Handbags")
            .with_category("Watches")
            .with_brand("Luxora")
            .with_max_price(Money::usd(50000));
        assert_eq!(ids(&filter.apply(catalog.list_products())), vec!["7"]);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let catalog = Catalog::builtin();
        let filter = ProductFilter::new().with_price_range(Money::usd(24999), Money::usd(32999));
        assert_eq!(ids(&filter.apply(catalog.list_products())), vec!["1", "4", "6"]);
    }

    #[test]
    fn test_price_sorts() {
        let products: Vec<Arc<Product>> = [("a", 29999), ("b", 54999), ("c", 18999)]
            .into_iter()
            .map(|(id, cents)| Arc::new(Product::new(id, id, "B", "C", Money::usd(cents))))
            .collect();

        let low = ProductFilter::new().with_sort(SortKey::PriceLow).apply(&products);
        let prices: Vec<String> = low.iter().map(|p| p.price.display()).collect();
        assert_eq!(prices, vec!["$189.99", "$299.99", "$549.99"]);

        let high = ProductFilter::new().with_sort(SortKey::PriceHigh).apply(&products);
        assert_eq!(ids(&high), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_new_and_rating_sorts_are_stable() {
        let catalog = Catalog::builtin();

        let newest = ProductFilter::new()
            .with_sort(SortKey::New)
            .apply(catalog.list_products());
        assert_eq!(ids(&newest), vec!["3", "6", "8", "1", "2", "4", "5", "7"]);

        // 4.9 ties (2, 8) and 4.7 ties (3, 7) keep catalog order
        let rated = ProductFilter::new()
            .with_sort(SortKey::Rating)
            .apply(catalog.list_products());
        assert_eq!(ids(&rated), vec!["5", "2", "8", "1", "3", "7", "4", "6"]);
    }

    #[test]
    fn test_toggle_and_clear() {
        let mut filter = ProductFilter::new().with_sort(SortKey::Rating);
        assert!(!filter.is_active());

        filter.toggle_category("Watches");
        filter.toggle_brand("Vista");
        assert!(filter.is_active());
        filter.toggle_category("Watches");
        assert!(filter.categories.is_empty());
        assert!(filter.is_active());

        filter.clear();
        assert!(!filter.is_active());
        assert_eq!(filter.sort, SortKey::Rating);
        assert_eq!(filter.price_range, PriceRange::default());
    }

    #[test]
    fn test_in_stock_only() {
        let products = vec![
            Arc::new(Product::new("a", "A", "B", "C", Money::usd(100))),
            Arc::new(Product::new("b", "B", "B", "C", Money::usd(100)).with_stock(false, Some(0))),
        ];
        let filtered = ProductFilter::new().in_stock_only().apply(&products);
        assert_eq!(ids(&filtered), vec!["a"]);
    }

    #[test]
    fn test_from_config_uses_price_ceiling() {
        let config = StoreConfig {
            price_filter_max_cents: 30_000,
            ..StoreConfig::default()
        };
        let catalog = Catalog::builtin();
        let cheap = ProductFilter::from_config(&config).apply(catalog.list_products());
        assert_eq!(ids(&cheap), vec!["1", "3", "6", "7"]);
    }
}
