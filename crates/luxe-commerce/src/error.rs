//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Cart and wishlist mutations never fail; these surface from lookups by id,
/// catalog construction, checkout transitions and configuration parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Two catalog entries share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    /// A product record violates a catalog invariant.
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: String, reason: String },

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// Checkout step is missing required details.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Order placement with nothing in the cart.
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Sort key name not recognised.
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Configuration could not be parsed or rendered.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for CommerceError {
    fn from(e: toml::ser::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}
