//! Search module.
//!
//! Contains the listing filter and sort keys. Quick search lives on
//! [`crate::catalog::Catalog::search`].

mod filter;
mod sort;

pub use filter::{PriceRange, ProductFilter, DEFAULT_PRICE_FILTER_MAX_CENTS};
pub use sort::SortKey;
