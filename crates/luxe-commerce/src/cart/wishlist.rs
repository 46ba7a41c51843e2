//! Wishlist: product membership without quantities.

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::Product;
use crate::ids::ProductId;

/// Saved products, unique by id, in the order they were saved.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Wishlist {
    items: Vec<Arc<Product>>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a product. Returns `false` if it was already saved.
    pub fn add(&mut self, product: &Arc<Product>) -> bool {
        if self.contains(product.id.as_str()) {
            return false;
        }
        self.items.push(Arc::clone(product));
        true
    }

    /// Remove a product. Returns `false` if it was not saved.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let len_before = self.items.len();
        self.items.retain(|p| p.id.as_str() != product_id);
        self.items.len() < len_before
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.items.iter().any(|p| p.id.as_str() == product_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Arc<Product>] {
        &self.items
    }

    pub fn ids(&self) -> Vec<ProductId> {
        self.items.iter().map(|p| p.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: &str) -> Arc<Product> {
        Arc::new(Product::new(id, "Item", "Brand", "Cat", Money::usd(1000)))
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut wishlist = Wishlist::new();
        let p = product("1");

        assert!(!wishlist.contains("1"));
        assert!(wishlist.add(&p));
        assert!(!wishlist.add(&p));
        assert!(wishlist.contains("1"));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut wishlist = Wishlist::new();
        wishlist.add(&product("1"));
        wishlist.add(&product("2"));

        assert!(wishlist.remove("1"));
        assert!(!wishlist.remove("1"));
        assert_eq!(wishlist.ids(), vec![ProductId::new("2")]);
    }

    #[test]
    fn test_entries_share_the_catalog_record() {
        let mut wishlist = Wishlist::new();
        let p = product("7");
        wishlist.add(&p);
        assert!(Arc::ptr_eq(&wishlist.items()[0], &p));
    }
}
