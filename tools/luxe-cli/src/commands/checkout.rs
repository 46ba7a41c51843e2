//! Checkout command: shipping, payment, review, then order placement.

use anyhow::{bail, Context as _, Result};
use dialoguer::{Confirm, Input};
use luxe_commerce::checkout::{CheckoutStep, Order, PaymentDetails, ShippingDetails};
use luxe_commerce::Storefront;
use serde::Deserialize;

use super::{fill_cart, quote::print_cart, CheckoutArgs};
use crate::context::Context;

/// Checkout details supplied from a file.
#[derive(Debug, Default, Deserialize)]
struct DetailsFile {
    #[serde(default)]
    shipping: ShippingDetails,
    #[serde(default)]
    payment: PaymentDetails,
}

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    fill_cart(&mut store, &args.items).context("Failed to build cart")?;

    let details = match args.details {
        Some(ref path) => Some(load_details(&ctx.resolve_path(path))?),
        None if ctx.output.is_json() => bail!("--details is required with --json"),
        None => None,
    };

    if !ctx.output.is_json() {
        print_cart(&store, &store.order_summary(), ctx);
    }

    let total_steps = CheckoutStep::Review.number();

    // Step 1: Shipping
    let step = store.checkout().step;
    ctx.output.step(step.number(), total_steps, step.display_name());
    let shipping = match details {
        Some(ref d) => d.shipping.clone(),
        None => prompt_shipping()?,
    };
    store.set_shipping_details(shipping);
    store.advance_checkout().context("Shipping details incomplete")?;

    // Step 2: Payment
    let step = store.checkout().step;
    ctx.output.step(step.number(), total_steps, step.display_name());
    let payment = match details {
        Some(ref d) => d.payment.clone(),
        None => prompt_payment()?,
    };
    store.set_payment_details(payment);
    store.advance_checkout().context("Payment details incomplete")?;

    // Step 3: Review
    let step = store.checkout().step;
    ctx.output.step(step.number(), total_steps, step.display_name());
    let summary = store.order_summary();
    ctx.output.kv("ship to", &store.checkout().shipping.full_name());
    ctx.output.kv("address", &store.checkout().shipping.one_line());
    ctx.output.kv("card", &store.checkout().payment.masked_card_number());
    ctx.output.kv("total", &summary.total.display());

    if !args.yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Place order for {}?", summary.total.display()))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.info("Order cancelled.");
            return Ok(());
        }
    }

    let order = place(&mut store, ctx).await?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    ctx.output.success(&format!("Order {} placed", order.number));
    ctx.output.kv("items", &order.item_count.to_string());
    ctx.output.kv("total", &order.summary.total.display());
    ctx.output.kv(
        "placed at",
        &order.placed_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    );
    ctx.output.info(&format!(
        "A confirmation will be sent to {}",
        order.ship_to.email
    ));

    Ok(())
}

async fn place(store: &mut Storefront, ctx: &Context) -> Result<Order> {
    let spinner = ctx.output.spinner("Placing order...");
    let result = store.place_order().await;
    spinner.finish_and_clear();
    result.context("Failed to place order")
}

fn load_details(path: &std::path::Path) -> Result<DetailsFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read details file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse details file: {}", path.display()))
}

fn ask(prompt: &str) -> Result<String> {
    Ok(Input::<String>::new().with_prompt(prompt).interact_text()?)
}

fn prompt_shipping() -> Result<ShippingDetails> {
    Ok(ShippingDetails {
        first_name: ask("First name")?,
        last_name: ask("Last name")?,
        email: ask("Email")?,
        phone: ask("Phone")?,
        address: ask("Address")?,
        city: ask("City")?,
        state: ask("State")?,
        zip: ask("ZIP code")?,
        country: ask("Country")?,
    })
}

fn prompt_payment() -> Result<PaymentDetails> {
    Ok(PaymentDetails {
        card_number: ask("Card number")?,
        card_name: ask("Name on card")?,
        expiry: ask("Expiry (MM/YY)")?,
        cvv: ask("CVV")?,
    })
}
