//! Product section renderer.

use sock_commerce::Storefront;

use super::escape_html;

/// Render the product image, info, swatches, and cart buttons.
pub fn render_product(store: &Storefront) -> String {
    let selector = store.selector();
    let product = selector.product();

    let stock = if selector.in_stock() {
        "In Stock"
    } else {
        "Out of Stock"
    };

    let details: String = product
        .details()
        .iter()
        .map(|detail| format!("<li>{}</li>", escape_html(detail)))
        .collect();

    let swatches: String = product
        .variants()
        .iter()
        .enumerate()
        .map(|(index, variant)| {
            let selected = if index == selector.selected_index() {
                " color-box--selected"
            } else {
                ""
            };
            format!(
                r#"<div class="color-box{selected}" data-variant-id="{id}" data-index="{index}" style="background-color: {color};"></div>"#,
                selected = selected,
                id = variant.id,
                index = index,
                color = escape_html(&variant.color)
            )
        })
        .collect();

    let disabled = if store.cart_buttons_enabled() {
        ""
    } else {
        r#" disabled class="disabledButton""#
    };

    format!(
        r#"<div class="product" data-section="product">
    <div class="product-image">
        <img src="{image}" alt="{title}">
    </div>
    <div class="product-info">
        <h2>{title}</h2>
        <p>{stock}</p>
        <p>Shipping: {shipping}</p>
        <ul>{details}</ul>
        {swatches}
        <button data-action="add-to-cart"{disabled}>Add to cart</button>
        <button data-action="remove-from-cart"{disabled}>Remove</button>
    </div>
</div>"#,
        image = escape_html(selector.image()),
        title = escape_html(&selector.title()),
        stock = stock,
        shipping = store.shipping(),
        details = details,
        swatches = swatches,
        disabled = disabled
    )
}
