//! Serializable view of a cart, re-read by the presentation layer after
//! each mutation.

use serde::Serialize;

use crate::cart::{CartManager, LineItem};
use crate::ids::ProductId;
use crate::money::Money;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSnapshot {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub color: Option<String>,
    pub size: Option<String>,
    pub line_total: Money,
}

impl From<&LineItem> for LineSnapshot {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.product.id.clone(),
            name: item.product.name.clone(),
            unit_price: item.product.price,
            quantity: item.quantity,
            color: item.selected_color.clone(),
            size: item.selected_size.clone(),
            line_total: item.line_total(),
        }
    }
}

/// Point-in-time copy of cart and wishlist state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSnapshot {
    pub lines: Vec<LineSnapshot>,
    pub item_count: i64,
    pub total: Money,
    pub wishlist: Vec<ProductId>,
    pub revision: u64,
}

impl CartSnapshot {
    pub fn capture(cart: &CartManager) -> Self {
        Self {
            lines: cart.line_items().iter().map(LineSnapshot::from).collect(),
            item_count: cart.get_cart_count(),
            total: cart.get_cart_total(),
            wishlist: cart.wishlist().ids(),
            revision: cart.revision(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalog::Product;

    #[test]
    fn test_capture() {
        let mut cart = CartManager::default();
        let watch = Arc::new(Product::new("1", "Watch", "Elegance", "Watches", Money::usd(29999)));
        cart.add_to_cart(&watch, 2, Some("Tan"), None);
        cart.add_to_wishlist(&watch);

        let snapshot = CartSnapshot::capture(&cart);
        assert_eq!(snapshot.item_count, 2);
        assert_eq!(snapshot.total, Money::usd(59998));
        assert_eq!(snapshot.lines[0].color.as_deref(), Some("Tan"));
        assert_eq!(snapshot.lines[0].line_total, Money::usd(59998));
        assert_eq!(snapshot.wishlist, vec![ProductId::new("1")]);
        assert_eq!(snapshot.revision, 2);

        let text = snapshot.to_json().unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["lines"][0]["product_id"], "1");
        assert_eq!(json["item_count"], 2);
    }
}
