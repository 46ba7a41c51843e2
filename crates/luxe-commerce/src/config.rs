//! Storefront configuration.
//!
//! Every field has a default matching the storefront's stock behaviour, so an
//! empty (or partial) TOML document is a valid configuration.

use std::time::Duration;

use luxe_observability::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_SEARCH_LIMIT;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use crate::search::DEFAULT_PRICE_FILTER_MAX_CENTS;

/// Default per-line quantity ceiling.
pub const DEFAULT_MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// Tunable storefront behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Currency every catalog price is quoted in.
    pub currency: Currency,
    /// Subtotals strictly above this ship for free (minor units).
    pub free_shipping_threshold_cents: i64,
    /// Shipping charged at or below the threshold (minor units).
    pub flat_shipping_rate_cents: i64,
    /// Sales tax applied to the subtotal, in percent.
    pub tax_rate_percent: f64,
    /// Simulated order placement latency.
    pub order_placement_delay_ms: u64,
    /// Quantity ceiling for a single cart line.
    pub max_quantity_per_item: i64,
    /// Upper bound of the default price filter (minor units).
    pub price_filter_max_cents: i64,
    /// Number of quick-search suggestions.
    pub search_limit: usize,
    pub log_format: LogFormat,
    pub log_level: LogLevel,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            free_shipping_threshold_cents: 10_000,
            flat_shipping_rate_cents: 1_500,
            tax_rate_percent: 8.0,
            order_placement_delay_ms: 1_000,
            max_quantity_per_item: DEFAULT_MAX_QUANTITY_PER_ITEM,
            price_filter_max_cents: DEFAULT_PRICE_FILTER_MAX_CENTS,
            search_limit: DEFAULT_SEARCH_LIMIT,
            log_format: LogFormat::Json,
            log_level: LogLevel::Info,
        }
    }
}

impl StoreConfig {
    /// Parse a TOML document; missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        let config: StoreConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document; missing keys take their defaults.
    pub fn from_json_str(content: &str) -> Result<Self, CommerceError> {
        let config: StoreConfig =
            serde_json::from_str(content).map_err(|e| CommerceError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, CommerceError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values no storefront could run with.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.free_shipping_threshold_cents < 0 || self.flat_shipping_rate_cents < 0 {
            return Err(CommerceError::Config(
                "shipping amounts must not be negative".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.tax_rate_percent) {
            return Err(CommerceError::Config(format!(
                "tax_rate_percent must be within 0-100, got {}",
                self.tax_rate_percent
            )));
        }
        if self.max_quantity_per_item < 1 {
            return Err(CommerceError::Config(
                "max_quantity_per_item must be at least 1".to_string(),
            ));
        }
        if self.price_filter_max_cents < 0 {
            return Err(CommerceError::Config(
                "price_filter_max_cents must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    pub fn free_shipping_threshold(&self) -> Money {
        Money::new(self.free_shipping_threshold_cents, self.currency)
    }

    pub fn flat_shipping_rate(&self) -> Money {
        Money::new(self.flat_shipping_rate_cents, self.currency)
    }

    pub fn price_filter_max(&self) -> Money {
        Money::new(self.price_filter_max_cents, self.currency)
    }

    pub fn order_placement_delay(&self) -> Duration {
        Duration::from_millis(self.order_placement_delay_ms)
    }
}
