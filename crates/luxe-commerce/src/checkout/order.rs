//! Placed orders.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cart::{CartManager, LineSnapshot};
use crate::checkout::{OrderSummary, ShippingDetails};
use crate::ids::OrderNumber;

/// A confirmed order, detached from the cart it was placed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub number: OrderNumber,
    pub lines: Vec<LineSnapshot>,
    pub item_count: i64,
    pub summary: OrderSummary,
    pub ship_to: ShippingDetails,
    /// Card number with all but the last four digits hidden.
    pub payment_card: String,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    pub(crate) fn from_cart(
        number: OrderNumber,
        cart: &CartManager,
        summary: OrderSummary,
        ship_to: ShippingDetails,
        payment_card: String,
    ) -> Self {
        Self {
            number,
            lines: cart.line_items().iter().map(LineSnapshot::from).collect(),
            item_count: cart.get_cart_count(),
            summary,
            ship_to,
            payment_card,
            placed_at: Utc::now(),
        }
    }
}
