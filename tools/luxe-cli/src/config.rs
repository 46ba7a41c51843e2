//! Configuration file loading.

use std::path::Path;

use anyhow::{Context, Result};
use luxe_commerce::StoreConfig;

/// File names searched for, nearest directory first.
pub const CONFIG_NAMES: [&str; 3] = ["luxe.toml", ".luxe.toml", "luxe.json"];

/// Load a store config from a TOML or JSON file.
pub fn load(path: &Path) -> Result<StoreConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    if is_json(path) {
        StoreConfig::from_json_str(&content)
            .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
    } else {
        StoreConfig::from_toml_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "json")
}

/// Generate a default luxe.toml config file.
pub fn generate_default_config() -> String {
    let defaults = StoreConfig::default();
    format!(
        r#"# Luxe storefront configuration
# Amounts are in minor units (cents).

currency = "{currency}"

# Subtotals strictly above the threshold ship free.
free_shipping_threshold_cents = {threshold}
flat_shipping_rate_cents = {flat}
tax_rate_percent = {tax:.1}

# Simulated order placement latency.
order_placement_delay_ms = {delay}

max_quantity_per_item = {max_qty}
price_filter_max_cents = {price_max}
search_limit = {search_limit}

# "json" or "human"
log_format = "json"
log_level = "info"
"#,
        currency = defaults.currency.code(),
        threshold = defaults.free_shipping_threshold_cents,
        flat = defaults.flat_shipping_rate_cents,
        tax = defaults.tax_rate_percent,
        delay = defaults.order_placement_delay_ms,
        max_qty = defaults.max_quantity_per_item,
        price_max = defaults.price_filter_max_cents,
        search_limit = defaults.search_limit,
    )
}
