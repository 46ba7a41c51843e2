//! Category and brand listing command.

use anyhow::Result;
use serde_json::json;

use super::CategoriesArgs;
use crate::context::Context;

/// Run the categories command.
pub async fn run(args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let catalog = &ctx.catalog;
    let counts = catalog.category_counts();
    let in_catalog = |name: &str| {
        counts
            .iter()
            .find(|(category, _)| *category == name)
            .map_or(0, |(_, n)| *n)
    };

    if ctx.output.is_json() {
        let categories: Vec<_> = catalog
            .categories()
            .iter()
            .map(|c| {
                json!({
                    "id": c.id,
                    "name": c.name,
                    "advertised": c.count,
                    "in_catalog": in_catalog(&c.name),
                })
            })
            .collect();
        ctx.output.json(&json!({
            "categories": categories,
            "brands": catalog.brands(),
        }));
        return Ok(());
    }

    ctx.output.header("Categories");
    ctx.output.table_row(&["name", "advertised", "in catalog"], &[12, 10, 10]);
    for category in catalog.categories() {
        ctx.output.table_row(
            &[
                category.name.as_str(),
                category.count.to_string().as_str(),
                in_catalog(&category.name).to_string().as_str(),
            ],
            &[12, 10, 10],
        );
    }

    if args.brands {
        ctx.output.header("Brands");
        for brand in catalog.brands() {
            ctx.output.list_item(brand);
        }
    }

    Ok(())
}
