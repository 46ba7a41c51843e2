//! Storefront domain logic for Luxe.
//!
//! This crate provides the state behind a luxury storefront:
//!
//! - **Catalog**: Products, categories, testimonials, reviews, quick search
//! - **Cart**: Line items keyed by product and variant, wishlist, change events
//! - **Search**: Category, brand and price filters with stable sort keys
//! - **Checkout**: Three-step flow, order summary, simulated order placement
//!
//! # Example
//!
//! ```rust,ignore
//! use luxe_commerce::prelude::*;
//!
//! let mut store = Storefront::builtin();
//! store.add_to_cart_by_id("1", 2, Some("Black"), None)?;
//!
//! let summary = store.order_summary();
//! println!("Total: {}", summary.total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod search;
pub mod storefront;

pub use config::StoreConfig;
pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use storefront::{Storefront, SubscriptionId};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StoreConfig;
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::storefront::{Storefront, SubscriptionId};

    // Catalog
    pub use crate::catalog::{
        Catalog, Category, Product, ProductVariants, Review, Specification, Testimonial,
    };

    // Cart
    pub use crate::cart::{CartEvent, CartManager, CartSnapshot, LineItem, LineKey, Wishlist};

    // Checkout
    pub use crate::checkout::{
        CheckoutFlow, CheckoutStep, Order, OrderSummary, PaymentDetails, ShippingDetails,
    };

    // Search
    pub use crate::search::{PriceRange, ProductFilter, SortKey};
}
