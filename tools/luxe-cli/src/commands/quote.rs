//! Cart quote command.

use anyhow::{Context as _, Result};
use luxe_commerce::checkout::OrderSummary;
use luxe_commerce::Storefront;
use serde_json::json;

use super::{fill_cart, QuoteArgs};
use crate::context::Context;
use crate::output::money_or_free;

/// Run the quote command.
pub async fn run(args: QuoteArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    fill_cart(&mut store, &args.items).context("Failed to build cart")?;
    for id in &args.wishlist {
        store
            .add_to_wishlist_by_id(id)
            .with_context(|| format!("Failed to save {} to the wishlist", id))?;
    }

    let summary = store.order_summary();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "cart": store.snapshot(),
            "summary": summary,
        }));
        return Ok(());
    }

    print_cart(&store, &summary, ctx);
    Ok(())
}

/// Print the cart lines and the order summary.
pub fn print_cart(store: &Storefront, summary: &OrderSummary, ctx: &Context) {
    ctx.output.header(&format!("Cart ({} items)", store.cart_count()));
    for line in store.cart().line_items() {
        let variant = line.variant_label().unwrap_or_default();
        ctx.output.table_row(
            &[
                line.product.name.as_str(),
                variant.as_str(),
                format!("{} x {}", line.quantity, line.product.price.display()).as_str(),
                line.line_total().display().as_str(),
            ],
            &[26, 14, 14, 10],
        );
    }

    let wishlist = store.cart().wishlist_items();
    if !wishlist.is_empty() {
        ctx.output.header("Wishlist");
        for product in wishlist {
            ctx.output.list_item(&product.name);
        }
    }

    ctx.output.header("Order Summary");
    ctx.output.kv("subtotal", &summary.subtotal.display());
    ctx.output.kv("shipping", &money_or_free(&summary.shipping));
    ctx.output.kv(
        &format!("tax ({}%)", ctx.config.tax_rate_percent),
        &summary.tax.display(),
    );
    ctx.output.kv("total", &summary.total.display());

    if let Some(remaining) = summary.amount_to_free_shipping() {
        ctx.output.info(&format!(
            "Add {} more for free shipping",
            remaining.display()
        ));
    }
}
