//! Cart module.
//!
//! Contains the cart manager, line items, the wishlist and change events.

mod cart;
mod events;
mod snapshot;
mod wishlist;

pub use cart::{CartManager, LineItem, LineKey};
pub use events::CartEvent;
pub use snapshot::{CartSnapshot, LineSnapshot};
pub use wishlist::Wishlist;
