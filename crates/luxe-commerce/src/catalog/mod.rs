//! Product catalog module.
//!
//! Contains the product record, category/testimonial/review metadata, and the
//! read-only catalog store.

mod category;
mod data;
mod product;
mod store;

pub use category::{Category, Review, Testimonial};
pub use product::{Product, ProductVariants, Specification};
pub use store::{Catalog, DEFAULT_SEARCH_LIMIT};
