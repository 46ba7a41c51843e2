//! Change notifications emitted by cart and wishlist mutations.

use serde::Serialize;

use crate::ids::{OrderNumber, ProductId};

/// What changed in a session's cart or wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
    /// A new line item was appended.
    ItemAdded {
        product_id: ProductId,
        color: Option<String>,
        size: Option<String>,
        quantity: i64,
    },
    /// An existing line item absorbed more quantity.
    ItemMerged {
        product_id: ProductId,
        color: Option<String>,
        size: Option<String>,
        quantity: i64,
    },
    QuantityUpdated { product_id: ProductId, quantity: i64 },
    /// One or more line items were dropped.
    ItemRemoved { product_id: ProductId, lines: usize },
    CartCleared { lines: usize },
    WishlistAdded { product_id: ProductId },
    WishlistRemoved { product_id: ProductId },
    OrderPlaced { order_number: OrderNumber },
}

impl CartEvent {
    /// Short machine name, used as the log message.
    pub fn name(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded { .. } => "item_added",
            CartEvent::ItemMerged { .. } => "item_merged",
            CartEvent::QuantityUpdated { .. } => "quantity_updated",
            CartEvent::ItemRemoved { .. } => "item_removed",
            CartEvent::CartCleared { .. } => "cart_cleared",
            CartEvent::WishlistAdded { .. } => "wishlist_added",
            CartEvent::WishlistRemoved { .. } => "wishlist_removed",
            CartEvent::OrderPlaced { .. } => "order_placed",
        }
    }

    /// Product the event concerns, if any.
    pub fn product_id(&self) -> Option<&ProductId> {
        match self {
            CartEvent::ItemAdded { product_id, .. }
            | CartEvent::ItemMerged { product_id, .. }
            | CartEvent::QuantityUpdated { product_id, .. }
            | CartEvent::ItemRemoved { product_id, .. }
            | CartEvent::WishlistAdded { product_id }
            | CartEvent::WishlistRemoved { product_id } => Some(product_id),
            CartEvent::CartCleared { .. } | CartEvent::OrderPlaced { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_with_tag() {
        let event = CartEvent::QuantityUpdated {
            product_id: ProductId::new("4"),
            quantity: 3,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "quantity_updated");
        assert_eq!(json["product_id"], "4");
        assert_eq!(json["quantity"], 3);
        assert_eq!(event.name(), "quantity_updated");
    }

    #[test]
    fn test_product_id_accessor() {
        let cleared = CartEvent::CartCleared { lines: 2 };
        assert_eq!(cleared.product_id(), None);

        let saved = CartEvent::WishlistAdded {
            product_id: ProductId::new("2"),
        };
        assert_eq!(saved.product_id(), Some(&ProductId::new("2")));
    }
}
