//! Quick search command.

use anyhow::Result;

use super::SearchArgs;
use crate::context::Context;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let limit = args.limit.unwrap_or(ctx.config.search_limit);
    let hits = ctx.catalog.search(&args.query, limit);

    if ctx.output.is_json() {
        ctx.output.json(&hits);
        return Ok(());
    }

    if hits.is_empty() {
        ctx.output.info(&format!("No products found for '{}'", args.query));
        return Ok(());
    }

    ctx.output.header(&format!("Results for '{}'", args.query));
    for product in &hits {
        ctx.output.table_row(
            &[
                product.id.as_str(),
                product.name.as_str(),
                product.category.as_str(),
                product.price.display().as_str(),
            ],
            &[3, 26, 11, 10],
        );
    }

    Ok(())
}
