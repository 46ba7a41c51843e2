//! Cart manager and line item types.

use std::sync::Arc;

use serde::Serialize;

use crate::cart::{CartEvent, Wishlist};
use crate::catalog::Product;
use crate::config::{StoreConfig, DEFAULT_MAX_QUANTITY_PER_ITEM};
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// Identity of a cart line: product plus selected variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LineKey {
    pub product_id: ProductId,
    pub color: Option<String>,
    pub size: Option<String>,
}

impl LineKey {
    pub fn new(
        product_id: impl Into<ProductId>,
        color: Option<&str>,
        size: Option<&str>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            color: color.map(str::to_string),
            size: size.map(str::to_string),
        }
    }
}

/// A line in the cart.
#[derive(Debug, Clone, Serialize)]
pub struct LineItem {
    /// Catalog record this line points at.
    pub product: Arc<Product>,
    /// Always at least 1.
    pub quantity: i64,
    pub selected_color: Option<String>,
    pub selected_size: Option<String>,
}

impl LineItem {
    pub fn key(&self) -> LineKey {
        LineKey {
            product_id: self.product.id.clone(),
            color: self.selected_color.clone(),
            size: self.selected_size.clone(),
        }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    fn matches(&self, key: &LineKey) -> bool {
        self.product.id == key.product_id
            && self.selected_color == key.color
            && self.selected_size == key.size
    }

    /// Current price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.saturating_multiply(self.quantity)
    }

    /// Variant label, e.g. "Black / 9".
    pub fn variant_label(&self) -> Option<String> {
        let parts: Vec<&str> = [self.selected_color.as_deref(), self.selected_size.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" / "))
        }
    }
}

/// Owns the cart lines and the wishlist for one session.
///
/// Mutations never fail: non-positive add quantities are clamped to 1,
/// quantities saturate at the per-line ceiling, and unknown ids are ignored.
/// Each mutation returns the resulting [`CartEvent`], or `None` when nothing
/// changed.
#[derive(Debug, Clone, Serialize)]
pub struct CartManager {
    items: Vec<LineItem>,
    wishlist: Wishlist,
    currency: Currency,
    max_quantity_per_item: i64,
    revision: u64,
}

impl CartManager {
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            wishlist: Wishlist::new(),
            currency,
            max_quantity_per_item: DEFAULT_MAX_QUANTITY_PER_ITEM,
            revision: 0,
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.currency).with_max_quantity(config.max_quantity_per_item)
    }

    pub fn with_max_quantity(mut self, max: i64) -> Self {
        self.max_quantity_per_item = max.max(1);
        self
    }

    /// Add `quantity` of a product variant.
    ///
    /// Lines merge when product id, color and size all match; otherwise a new
    /// line is appended. A quantity of zero or less counts as 1. Products
    /// priced in another currency are ignored.
    pub fn add_to_cart(
        &mut self,
        product: &Arc<Product>,
        quantity: i64,
        color: Option<&str>,
        size: Option<&str>,
    ) -> Option<CartEvent> {
        if product.price.currency != self.currency {
            return None;
        }

        let quantity = quantity.max(1);
        let key = LineKey::new(product.id.clone(), color, size);
        let max = self.max_quantity_per_item;

        let event = if let Some(existing) = self.items.iter_mut().find(|i| i.matches(&key)) {
            existing.quantity = existing.quantity.saturating_add(quantity).min(max);
            CartEvent::ItemMerged {
                product_id: key.product_id,
                color: key.color,
                size: key.size,
                quantity: existing.quantity,
            }
        } else {
            let quantity = quantity.min(max);
            self.items.push(LineItem {
                product: Arc::clone(product),
                quantity,
                selected_color: key.color.clone(),
                selected_size: key.size.clone(),
            });
            CartEvent::ItemAdded {
                product_id: key.product_id,
                color: key.color,
                size: key.size,
                quantity,
            }
        };

        self.touch();
        Some(event)
    }

    /// Add one unit with no variant selected.
    pub fn add_product(&mut self, product: &Arc<Product>) -> Option<CartEvent> {
        self.add_to_cart(product, 1, None, None)
    }

    /// Set the quantity of the first line for `product_id`.
    ///
    /// Variants are not distinguished: with several lines for one product only
    /// the first is updated. `new_quantity <= 0` removes every line for the
    /// product. Use [`CartManager::update_line`] to target one variant.
    pub fn update_quantity(&mut self, product_id: &str, new_quantity: i64) -> Option<CartEvent> {
        if new_quantity <= 0 {
            return self.remove_from_cart(product_id);
        }

        let quantity = new_quantity.min(self.max_quantity_per_item);
        let item = self
            .items
            .iter_mut()
            .find(|i| i.product.id.as_str() == product_id)?;
        item.quantity = quantity;
        let product_id = item.product.id.clone();

        self.touch();
        Some(CartEvent::QuantityUpdated {
            product_id,
            quantity,
        })
    }

    /// Remove every line for `product_id`, whatever its variant.
    pub fn remove_from_cart(&mut self, product_id: &str) -> Option<CartEvent> {
        let len_before = self.items.len();
        self.items.retain(|i| i.product.id.as_str() != product_id);
        let removed = len_before - self.items.len();
        if removed == 0 {
            return None;
        }

        self.touch();
        Some(CartEvent::ItemRemoved {
            product_id: ProductId::new(product_id),
            lines: removed,
        })
    }

    /// Set the quantity of exactly one variant line; `<= 0` removes it.
    pub fn update_line(&mut self, key: &LineKey, new_quantity: i64) -> Option<CartEvent> {
        if new_quantity <= 0 {
            return self.remove_line(key);
        }

        let quantity = new_quantity.min(self.max_quantity_per_item);
        let item = self.items.iter_mut().find(|i| i.matches(key))?;
        item.quantity = quantity;

        self.touch();
        Some(CartEvent::QuantityUpdated {
            product_id: key.product_id.clone(),
            quantity,
        })
    }

    /// Remove exactly one variant line.
    pub fn remove_line(&mut self, key: &LineKey) -> Option<CartEvent> {
        let position = self.items.iter().position(|i| i.matches(key))?;
        self.items.remove(position);

        self.touch();
        Some(CartEvent::ItemRemoved {
            product_id: key.product_id.clone(),
            lines: 1,
        })
    }

    /// Empty the cart. The wishlist is untouched.
    pub fn clear_cart(&mut self) -> Option<CartEvent> {
        if self.items.is_empty() {
            return None;
        }
        let lines = self.items.len();
        self.items.clear();

        self.touch();
        Some(CartEvent::CartCleared { lines })
    }

    /// Sum of quantities across all lines.
    pub fn get_cart_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Sum of current price times quantity.
    pub fn get_cart_total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(self.currency), |acc, i| {
                acc.saturating_add(&i.line_total())
            })
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get_line(&self, key: &LineKey) -> Option<&LineItem> {
        self.items.iter().find(|i| i.matches(key))
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn max_quantity_per_item(&self) -> i64 {
        self.max_quantity_per_item
    }

    /// Incremented on every effective mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn add_to_wishlist(&mut self, product: &Arc<Product>) -> Option<CartEvent> {
        if !self.wishlist.add(product) {
            return None;
        }
        self.touch();
        Some(CartEvent::WishlistAdded {
            product_id: product.id.clone(),
        })
    }

    pub fn remove_from_wishlist(&mut self, product_id: &str) -> Option<CartEvent> {
        if !self.wishlist.remove(product_id) {
            return None;
        }
        self.touch();
        Some(CartEvent::WishlistRemoved {
            product_id: ProductId::new(product_id),
        })
    }

    /// Save the product if absent, otherwise drop it. Returns the new membership.
    pub fn toggle_wishlist(&mut self, product: &Arc<Product>) -> bool {
        if self.wishlist.remove(product.id.as_str()) {
            self.touch();
            return false;
        }
        self.wishlist.add(product);
        self.touch();
        true
    }

    pub fn is_in_wishlist(&self, product_id: &str) -> bool {
        self.wishlist.contains(product_id)
    }

    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub fn wishlist_len(&self) -> usize {
        self.wishlist.len()
    }

    pub fn wishlist_items(&self) -> &[Arc<Product>] {
        self.wishlist.items()
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

impl Default for CartManager {
    fn default() -> Self {
        Self::new(Currency::USD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, cents: i64) -> Arc<Product> {
        Arc::new(Product::new(id, format!("Product {}", id), "Brand", "Cat", Money::usd(cents)))
    }

    #[test]
    fn test_repeated_adds_merge() {
        let mut cart = CartManager::default();
        let p = product("1", 1000);

        cart.add_to_cart(&p, 1, Some("Black"), None);
        cart.add_to_cart(&p, 2, Some("Black"), None);
        cart.add_to_cart(&p, 4, Some("Black"), None);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.get_cart_count(), 7);
    }

    #[test]
    fn test_variants_create_distinct_lines() {
        let mut cart = CartManager::default();
        let p = product("4", 32999);

        cart.add_to_cart(&p, 1, Some("White"), Some("9"));
        cart.add_to_cart(&p, 1, Some("Black"), Some("9"));
        cart.add_to_cart(&p, 1, Some("White"), Some("10"));
        cart.add_to_cart(&p, 1, None, None);

        assert_eq!(cart.line_count(), 4);
        assert_eq!(cart.get_cart_count(), 4);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = CartManager::default();
        cart.add_product(&product("3", 100));
        cart.add_product(&product("1", 100));
        cart.add_product(&product("2", 100));
        cart.add_product(&product("1", 100));

        let ids: Vec<&str> = cart
            .line_items()
            .iter()
            .map(|i| i.product_id().as_str())
            .collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_non_positive_add_clamps_to_one() {
        let mut cart = CartManager::default();
        let p = product("1", 1000);

        let event = cart.add_to_cart(&p, 0, None, None);
        assert!(matches!(event, Some(CartEvent::ItemAdded { quantity: 1, .. })));
        cart.add_to_cart(&p, -5, None, None);
        assert_eq!(cart.get_cart_count(), 2);
    }

    #[test]
    fn test_quantity_saturates_at_ceiling() {
        let mut cart = CartManager::default().with_max_quantity(10);
        let p = product("1", 1000);

        cart.add_to_cart(&p, 8, None, None);
        cart.add_to_cart(&p, 8, None, None);
        assert_eq!(cart.get_cart_count(), 10);

        cart.add_to_cart(&p, i64::MAX, None, None);
        assert_eq!(cart.get_cart_count(), 10);

        cart.update_quantity("1", 500);
        assert_eq!(cart.get_cart_count(), 10);
    }

    #[test]
    fn test_update_quantity_sets_exactly() {
        let mut cart = CartManager::default();
        cart.add_to_cart(&product("1", 1000), 3, None, None);

        cart.update_quantity("1", 5);
        assert_eq!(cart.get_cart_count(), 5);
        cart.update_quantity("1", 2);
        assert_eq!(cart.get_cart_count(), 2);
    }

    #[test]
    fn test_update_to_zero_or_negative_removes() {
        let mut cart = CartManager::default();
        cart.add_to_cart(&product("1", 1000), 3, None, None);
        cart.add_to_cart(&product("2", 1000), 2, None, None);

        cart.update_quantity("1", 0);
        assert_eq!(cart.get_cart_count(), 2);
        assert_eq!(cart.line_count(), 1);

        cart.update_quantity("2", -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_by_id_only_touches_first_variant() {
        let mut cart = CartManager::default();
        let p = product("1", 1000);
        cart.add_to_cart(&p, 1, Some("Black"), None);
        cart.add_to_cart(&p, 1, Some("Brown"), None);

        cart.update_quantity("1", 6);

        let quantities: Vec<i64> = cart.line_items().iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![6, 1]);
    }

    #[test]
    fn test_remove_by_id_drops_all_variants() {
        let mut cart = CartManager::default();
        let p = product("1", 1000);
        cart.add_to_cart(&p, 1, Some("Black"), None);
        cart.add_to_cart(&p, 1, Some("Brown"), None);
        cart.add_product(&product("2", 500));

        let event = cart.remove_from_cart("1");
        assert!(matches!(event, Some(CartEvent::ItemRemoved { lines: 2, .. })));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_line_level_operations_target_one_variant() {
        let mut cart = CartManager::default();
        let p = product("1", 1000);
        cart.add_to_cart(&p, 1, Some("Black"), None);
        cart.add_to_cart(&p, 1, Some("Brown"), None);

        let brown = LineKey::new("1", Some("Brown"), None);
        cart.update_line(&brown, 4);
        assert_eq!(cart.get_line(&brown).map(|l| l.quantity), Some(4));
        assert_eq!(cart.get_cart_count(), 5);

        cart.remove_line(&brown);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.line_items()[0].selected_color.as_deref(), Some("Black"));
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut cart = CartManager::default();
        cart.add_product(&product("1", 1000));
        let revision = cart.revision();

        assert_eq!(cart.update_quantity("nope", 3), None);
        assert_eq!(cart.remove_from_cart("nope"), None);
        assert_eq!(cart.revision(), revision);
    }

    #[test]
    fn test_cart_total() {
        let mut cart = CartManager::default();
        cart.add_to_cart(&product("a", 1000), 2, None, None);
        cart.add_to_cart(&product("b", 2550), 1, None, None);

        assert_eq!(cart.get_cart_total(), Money::usd(4550));
        assert_eq!(cart.get_cart_total().display(), "$45.50");
    }

    #[test]
    fn test_total_uses_current_price_not_original() {
        let mut cart = CartManager::default();
        let discounted = Arc::new(
            Product::new("1", "Watch", "Elegance", "Watches", Money::usd(29999))
                .with_original_price(Money::usd(39999)),
        );
        cart.add_to_cart(&discounted, 2, None, None);
        assert_eq!(cart.get_cart_total(), Money::usd(59998));
    }

    #[test]
    fn test_clear_cart_keeps_wishlist() {
        let mut cart = CartManager::default();
        let p = product("1", 1000);
        cart.add_to_cart(&p, 3, None, None);
        cart.add_to_wishlist(&p);

        assert_eq!(cart.clear_cart(), Some(CartEvent::CartCleared { lines: 1 }));
        assert_eq!(cart.get_cart_count(), 0);
        assert_eq!(cart.get_cart_total(), Money::usd(0));
        assert!(cart.is_in_wishlist("1"));
        assert_eq!(cart.clear_cart(), None);
    }

    #[test]
    fn test_wishlist_membership() {
        let mut cart = CartManager::default();
        let p = product("2", 54999);

        assert!(!cart.is_in_wishlist("2"));
        assert!(cart.add_to_wishlist(&p).is_some());
        assert!(cart.is_in_wishlist("2"));
        assert!(cart.add_to_wishlist(&p).is_none());
        assert_eq!(cart.wishlist().len(), 1);

        assert!(cart.remove_from_wishlist("2").is_some());
        assert!(!cart.is_in_wishlist("2"));
    }

    #[test]
    fn test_toggle_wishlist() {
        let mut cart = CartManager::default();
        let p = product("6", 24999);

        assert!(cart.toggle_wishlist(&p));
        assert!(cart.is_in_wishlist("6"));
        assert_eq!(cart.wishlist_len(), 1);
        assert!(!cart.toggle_wishlist(&p));
        assert!(!cart.is_in_wishlist("6"));
        assert!(cart.wishlist_items().is_empty());
    }

    #[test]
    fn test_foreign_currency_product_is_ignored() {
        let mut cart = CartManager::default();
        let euro = Arc::new(Product::new("e", "Euro", "B", "C", Money::new(100, Currency::EUR)));
        assert_eq!(cart.add_product(&euro), None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_variant_label() {
        let mut cart = CartManager::default();
        cart.add_to_cart(&product("4", 100), 1, Some("White"), Some("9"));
        cart.add_product(&product("5", 100));

        assert_eq!(cart.line_items()[0].variant_label().as_deref(), Some("White / 9"));
        assert_eq!(cart.line_items()[1].variant_label(), None);
    }

    #[test]
    fn test_revision_tracks_mutations() {
        let mut cart = CartManager::default();
        assert_eq!(cart.revision(), 0);
        cart.add_product(&product("1", 100));
        cart.update_quantity("1", 4);
        cart.clear_cart();
        assert_eq!(cart.revision(), 3);
    }
}
