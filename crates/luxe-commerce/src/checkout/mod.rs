//! Checkout module.
//!
//! Contains the three-step checkout flow, its form details, the order summary
//! and placed orders.

mod details;
mod flow;
mod order;
mod summary;

pub use details::{PaymentDetails, ShippingDetails};
pub use flow::{CheckoutFlow, CheckoutStep};
pub use order::Order;
pub use summary::OrderSummary;
