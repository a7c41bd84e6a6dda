//! Print the storefront.

use anyhow::Result;
use sock_commerce::review::{error_heading, NO_REVIEWS_MESSAGE};
use sock_commerce::Storefront;

use super::ShowArgs;
use crate::context::Context;
use crate::output::stock_badge;

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    if let Some(index) = args.variant {
        store.hover_variant(index)?;
    }
    print_storefront(&store, ctx);
    Ok(())
}

/// Print everything the page would show.
pub fn print_storefront(store: &Storefront, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&store.snapshot());
        return;
    }

    let selector = store.selector();

    ctx.output
        .header(&format!("{}  ·  Cart ({})", selector.brand(), store.cart().count()));
    ctx.output.kv("Product", &selector.title());
    ctx.output.kv("Stock", &stock_badge(selector.in_stock()));
    ctx.output.kv("Shipping", store.shipping());
    ctx.output.kv("Image", selector.image());
    for detail in selector.product().details() {
        ctx.output.list_item(detail);
    }

    ctx.output.header("Colors");
    for (index, variant) in selector.product().variants().iter().enumerate() {
        let marker = if index == selector.selected_index() { "*" } else { " " };
        ctx.output.list_item(&format!(
            "{} [{}] {} (#{}, {} left)",
            marker, index, variant.color, variant.id, variant.quantity
        ));
    }

    let panel = store.panel();
    ctx.output.header(&format!("Reviews  [{}]", panel.selected_tab()));
    if panel.is_empty() {
        ctx.output.info(NO_REVIEWS_MESSAGE);
    }
    for review in panel.reviews() {
        ctx.output.list_item(&format!(
            "{}  {}: {}",
            review.rating.stars(),
            review.name,
            review.review
        ));
    }

    let errors = store.intake().errors();
    if !errors.is_empty() {
        ctx.output.warn(&error_heading(errors.len()));
        for error in errors {
            ctx.output.list_item(error.message());
        }
    }
}
