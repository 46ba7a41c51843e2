//! Product detail command.

use anyhow::Result;
use luxe_commerce::CommerceError;
use serde_json::json;

use super::ShowArgs;
use crate::context::Context;
use crate::output::{price_label, stars, stock_badge};

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let product = ctx
        .catalog
        .find_by_id(&args.id)
        .ok_or_else(|| CommerceError::ProductNotFound(args.id.clone()))?;
    let reviews = ctx.catalog.reviews_for(&args.id);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "product": product,
            "discount_percentage": product.discount_percentage(),
            "reviews": reviews,
        }));
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("id", product.id.as_str());
    ctx.output.kv("brand", &product.brand);
    ctx.output.kv("category", &product.category);
    ctx.output.kv("price", &price_label(product));
    if let Some(savings) = product.savings() {
        ctx.output.kv("you save", &savings.display());
    }
    ctx.output.kv(
        "rating",
        &format!("{} {:.1} ({} reviews)", stars(product.rating), product.rating, product.reviews),
    );
    ctx.output.kv("stock", &stock_badge(product));
    if !product.description.is_empty() {
        ctx.output.kv("about", &product.description);
    }

    if !product.variants.colors().is_empty() {
        ctx.output.kv("colors", &product.variants.colors().join(", "));
    }
    if !product.variants.sizes().is_empty() {
        ctx.output.kv("sizes", &product.variants.sizes().join(", "));
    }

    if !product.specifications.is_empty() {
        ctx.output.header("Specifications");
        for spec in &product.specifications {
            ctx.output.kv(&spec.name, &spec.value);
        }
    }

    if !reviews.is_empty() {
        ctx.output.header("Reviews");
        for review in reviews {
            ctx.output.list_item(&format!(
                "{} {} on {}",
                review.stars(),
                review.user_name,
                review.date.format("%B %-d, %Y")
            ));
            ctx.output.kv("said", &review.comment);
        }
    }

    Ok(())
}
