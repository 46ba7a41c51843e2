//! Read-only catalog store.

use std::collections::HashSet;
use std::sync::Arc;

use crate::catalog::{data, Category, Product, Review, Testimonial};
use crate::error::CommerceError;
use crate::money::Currency;

/// Default number of quick-search suggestions.
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// The immutable product catalog.
///
/// Products are held behind `Arc` so cart lines and wishlist entries can point
/// at the catalog record instead of copying it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
    categories: Vec<Category>,
    testimonials: Vec<Testimonial>,
    reviews: Vec<Review>,
}

impl Catalog {
    /// The storefront's built-in mock catalog.
    pub fn builtin() -> Self {
        Self {
            products: data::products().into_iter().map(Arc::new).collect(),
            categories: data::categories(),
            testimonials: data::testimonials(),
            reviews: data::reviews(),
        }
    }

    /// Build a catalog from custom products.
    ///
    /// Rejects invalid records, duplicate ids and mixed currencies.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::new();
        let mut currency: Option<Currency> = None;

        for product in &products {
            product.validate()?;

            if !seen.insert(product.id.clone()) {
                return Err(CommerceError::DuplicateProduct(product.id.to_string()));
            }

            match currency {
                None => currency = Some(product.price.currency),
                Some(c) if c != product.price.currency => {
                    return Err(CommerceError::CurrencyMismatch {
                        expected: c.code().to_string(),
                        got: product.price.currency.code().to_string(),
                    });
                }
                Some(_) => {}
            }
        }

        Ok(Self {
            products: products.into_iter().map(Arc::new).collect(),
            ..Self::default()
        })
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_testimonials(mut self, testimonials: Vec<Testimonial>) -> Self {
        self.testimonials = testimonials;
        self
    }

    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.reviews = reviews;
        self
    }

    /// All products in catalog order.
    pub fn list_products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Look up a product by id.
    pub fn find_by_id(&self, id: &str) -> Option<&Arc<Product>> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Currency of the catalog's prices, `None` for an empty catalog.
    pub fn currency(&self) -> Option<Currency> {
        self.products.first().map(|p| p.price.currency)
    }

    /// Distinct brands in first-seen order.
    pub fn brands(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.brand.as_str())
            .filter(|brand| seen.insert(*brand))
            .collect()
    }

    /// Number of products per category name, in first-seen order.
    pub fn category_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for product in &self.products {
            match counts.iter_mut().find(|(name, _)| *name == product.category) {
                Some((_, count)) => *count += 1,
                None => counts.push((product.category.as_str(), 1)),
            }
        }
        counts
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn reviews_for(&self, product_id: &str) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| r.product_id.as_str() == product_id)
            .collect()
    }

    /// Products flagged for the landing page.
    pub fn featured(&self) -> Vec<Arc<Product>> {
        self.products
            .iter()
            .filter(|p| p.featured)
            .cloned()
            .collect()
    }

    pub fn new_arrivals(&self) -> Vec<Arc<Product>> {
        self.products.iter().filter(|p| p.is_new).cloned().collect()
    }

    /// Case-insensitive match on name or category.
    ///
    /// A blank query yields no suggestions.
    pub fn search(&self, query: &str, limit: usize) -> Vec<Arc<Product>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .take(limit)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 8);
        for product in catalog.list_products() {
            product.validate().unwrap();
        }

        let rebuilt = Catalog::from_products(
            catalog.list_products().iter().map(|p| (**p).clone()).collect(),
        );
        assert!(rebuilt.is_ok());
        assert_eq!(catalog.currency(), Some(Currency::USD));
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::builtin();
        let product = catalog.find_by_id("5").unwrap();
        assert_eq!(product.name, "Diamond Tennis Bracelet");
        assert_eq!(product.price.display(), "$1299.99");
        assert!(catalog.find_by_id("999").is_none());
    }

    #[test]
    fn test_list_products_keeps_catalog_order() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog
            .list_products()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_brands_are_distinct_in_first_seen_order() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.brands(),
            vec!["Elegance", "Luxora", "Essence", "StepLux", "Brilliance", "Vista"]
        );
    }

    #[test]
    fn test_category_counts() {
        let catalog = Catalog::builtin();
        let counts = catalog.category_counts();
        assert_eq!(counts[0], ("Watches", 2));
        assert_eq!(counts[1], ("Handbags", 2));
        assert_eq!(counts.len(), 6);
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 8);
    }

    #[test]
    fn test_metadata() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.categories().len(), 6);
        assert_eq!(catalog.categories()[3].name, "Footwear");
        assert_eq!(catalog.testimonials().len(), 3);
        assert_eq!(catalog.reviews_for("1").len(), 2);
        assert_eq!(catalog.reviews_for("2").len(), 1);
        assert!(catalog.reviews_for("8").is_empty());
        assert_eq!(catalog.reviews_for("1")[0].date.to_string(), "2026-01-10");
    }

    #[test]
    fn test_featured_and_new() {
        let catalog = Catalog::builtin();
        let featured: Vec<String> = catalog
            .featured()
            .iter()
            .map(|p| p.id.to_string())
            .collect();
        assert_eq!(featured, vec!["1", "2", "3", "4", "5"]);

        let new_ids: Vec<String> = catalog
            .new_arrivals()
            .iter()
            .map(|p| p.id.to_string())
            .collect();
        assert_eq!(new_ids, vec!["3", "6", "8"]);
    }

    #[test]
    fn test_search() {
        let catalog = Catalog::builtin();

        let hits = catalog.search("WATCH", DEFAULT_SEARCH_LIMIT);
        let ids: Vec<String> = hits.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "8"]);

        // category match
        let hits = catalog.search("handbags", DEFAULT_SEARCH_LIMIT);
        assert_eq!(hits.len(), 2);

        assert!(catalog.search("   ", DEFAULT_SEARCH_LIMIT).is_empty());
        assert_eq!(catalog.search("e", 3).len(), 3);
    }

    #[test]
    fn test_from_products_rejects_duplicates() {
        let a = Product::new("1", "A", "B", "C", Money::usd(100));
        let b = Product::new("1", "A2", "B", "C", Money::usd(200));
        assert_eq!(
            Catalog::from_products(vec![a, b]).unwrap_err(),
            CommerceError::DuplicateProduct("1".to_string())
        );
    }

    #[test]
    fn test_from_products_rejects_mixed_currency() {
        let a = Product::new("1", "A", "B", "C", Money::usd(100));
        let b = Product::new("2", "B", "B", "C", Money::new(100, Currency::EUR));
        assert!(matches!(
            Catalog::from_products(vec![a, b]),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }
}
