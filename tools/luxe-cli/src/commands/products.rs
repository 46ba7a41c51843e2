//! Product listing command.

use anyhow::Result;
use luxe_commerce::search::SortKey;
use luxe_commerce::Money;

use super::ProductsArgs;
use crate::context::Context;
use crate::output::{price_label, stars};

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let currency = ctx.config.currency;

    let sort = args.sort.parse::<SortKey>().unwrap_or_else(|e| {
        ctx.output.warn(&format!("{}, using '{}'", e, SortKey::Popular));
        SortKey::Popular
    });

    let mut filter = store.default_filter().with_sort(sort);
    filter.categories = args.categories;
    filter.brands = args.brands;
    if let Some(min) = args.min {
        filter = filter.with_min_price(Money::from_decimal(min, currency));
    }
    if let Some(max) = args.max {
        filter = filter.with_max_price(Money::from_decimal(max, currency));
    }
    if args.in_stock {
        filter = filter.in_stock_only();
    }

    let products = store.filter_products(&filter);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} of {} products, {}",
        products.len(),
        store.catalog().len(),
        sort.display_name()
    ));

    if products.is_empty() {
        ctx.output.info("No products match these filters.");
        return Ok(());
    }

    for product in &products {
        let rating = format!("{} ({})", stars(product.rating), product.reviews);
        ctx.output.table_row(
            &[product.id.as_str(), product.name.as_str(), product.brand.as_str(), rating.as_str()],
            &[3, 26, 11, 12],
        );
        ctx.output.kv("price", &price_label(product));
    }

    Ok(())
}
