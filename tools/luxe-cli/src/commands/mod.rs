//! CLI command implementations.

pub mod categories;
pub mod checkout;
pub mod config;
pub mod products;
pub mod quote;
pub mod search;
pub mod show;

use std::str::FromStr;

use clap::{Args, Subcommand};
use luxe_commerce::{CommerceError, Storefront};
use thiserror::Error;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only these categories (repeatable).
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Only these brands (repeatable).
    #[arg(long = "brand")]
    pub brands: Vec<String>,

    /// Minimum price in dollars.
    #[arg(long)]
    pub min: Option<f64>,

    /// Maximum price in dollars.
    #[arg(long)]
    pub max: Option<f64>,

    /// Sort key: popular, price-low, price-high, new, rating.
    #[arg(short, long, default_value = "popular")]
    pub sort: String,

    /// Hide out-of-stock products.
    #[arg(long)]
    pub in_stock: bool,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Text to match against product names and categories.
    pub query: String,

    /// Maximum number of suggestions (default from config).
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    /// Also list brands.
    #[arg(short, long)]
    pub brands: bool,
}

/// Arguments for the quote command.
#[derive(Args)]
pub struct QuoteArgs {
    /// Cart lines as ID[:QTY[:COLOR[:SIZE]]].
    #[arg(required = true)]
    pub items: Vec<LineSpec>,

    /// Product IDs to save to the wishlist.
    #[arg(short, long)]
    pub wishlist: Vec<String>,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Cart lines as ID[:QTY[:COLOR[:SIZE]]].
    #[arg(required = true)]
    pub items: Vec<LineSpec>,

    /// TOML file with [shipping] and [payment] tables instead of prompts.
    #[arg(short, long)]
    pub details: Option<String>,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Write a default luxe.toml.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

/// A cart line given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSpec {
    pub product_id: String,
    pub quantity: i64,
    pub color: Option<String>,
    pub size: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum LineSpecError {
    #[error("empty product id in '{0}'")]
    MissingId(String),
    #[error("invalid quantity '{quantity}' in '{spec}'")]
    BadQuantity { spec: String, quantity: String },
}

impl FromStr for LineSpec {
    type Err = LineSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(4, ':');
        let product_id = parts.next().unwrap_or_default().trim();
        if product_id.is_empty() {
            return Err(LineSpecError::MissingId(s.to_string()));
        }

        let quantity = match parts.next().map(str::trim) {
            None | Some("") => 1,
            Some(q) => q.parse().map_err(|_| LineSpecError::BadQuantity {
                spec: s.to_string(),
                quantity: q.to_string(),
            })?,
        };

        let optional = |part: Option<&str>| {
            part.map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
        };
        let color = optional(parts.next());
        let size = optional(parts.next());

        Ok(Self {
            product_id: product_id.to_string(),
            quantity,
            color,
            size,
        })
    }
}

/// Add every line to the session's cart.
pub fn fill_cart(store: &mut Storefront, items: &[LineSpec]) -> Result<(), CommerceError> {
    for item in items {
        store.add_to_cart_by_id(
            &item.product_id,
            item.quantity,
            item.color.as_deref(),
            item.size.as_deref(),
        )?;
    }
    Ok(())
}
