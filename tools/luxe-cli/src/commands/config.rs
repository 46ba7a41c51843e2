//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("source", &path.display().to_string()),
        None => ctx.output.kv("source", "built-in defaults"),
    }

    let config = &ctx.config;
    ctx.output.kv("currency", config.currency.code());
    ctx.output.kv(
        "free_shipping_threshold",
        &config.free_shipping_threshold().display(),
    );
    ctx.output.kv("flat_shipping_rate", &config.flat_shipping_rate().display());
    ctx.output.kv("tax_rate_percent", &config.tax_rate_percent.to_string());
    ctx.output.kv(
        "order_placement_delay_ms",
        &config.order_placement_delay_ms.to_string(),
    );
    ctx.output.kv(
        "max_quantity_per_item",
        &config.max_quantity_per_item.to_string(),
    );
    ctx.output.kv("price_filter_max", &config.price_filter_max().display());
    ctx.output.kv("search_limit", &config.search_limit.to_string());
    ctx.output.kv("log_level", &config.log_level.to_string());

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("luxe.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
