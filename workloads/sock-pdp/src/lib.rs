//! SockShop product detail page.
//!
//! Renders a [`Storefront`] to a static HTML page:
//! - Navigation bar with the cart count
//! - Product image, stock, shipping, details, color swatches, cart buttons
//! - Review tabs, review list, and the review form with its errors

pub mod sections;

use sock_commerce::Storefront;

use sections::*;

/// Render the complete page.
pub fn render_page(store: &Storefront) -> String {
    let selector = store.selector();
    let panel = store.panel();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{styles}</style>
</head>
<body>
<div id="app">
{nav}
{product}
<div class="review" data-section="reviews">
    {tabs}
    {reviews}
    {form}
</div>
</div>
</body>
</html>"#,
        title = sections::escape_html(&selector.title()),
        styles = PDP_STYLES,
        nav = render_nav_bar(selector.brand(), store.cart().count()),
        product = render_product(store),
        tabs = render_review_tabs(panel),
        reviews = render_review_list(panel),
        form = render_review_form(store.intake(), panel.selected_tab()),
    )
}

/// CSS styles for the page.
const PDP_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; color: #282828; }
.nav-bar { background: linear-gradient(-90deg, #84cf6a, #16c0b0); height: 60px; margin-bottom: 15px; display: flex; align-items: center; padding: 0 2rem; }
.nav-bar h1 { color: white; font-size: 1.5rem; margin: 0 2rem 0 0; }
.nav-bar ul { list-style: none; display: flex; gap: 1.5rem; color: white; margin: 0; padding: 0; }

/* Product */
.product { display: flex; flex-wrap: wrap; padding: 1rem; }
.product-image { width: 80%; max-width: 400px; border: 1px solid #d8d8d8; margin: 0 2rem 1rem 0; }
.product-image img { width: 100%; }
.product-info { flex-basis: 500px; }
.color-box { width: 40px; height: 40px; margin-top: 5px; display: inline-block; margin-right: 5px; cursor: pointer; }
.color-box--selected { outline: 2px solid #282828; }
button { margin-top: 30px; border: none; background-color: #1e95ea; color: white; height: 40px; width: 100px; font-size: 14px; cursor: pointer; }
.disabledButton { background-color: #d8d8d8; cursor: not-allowed; }

/* Reviews */
.review { padding: 1rem 2rem; }
.tab { margin-left: 20px; cursor: pointer; }
.activeTab { color: #16c0b0; text-decoration: underline; }
.review-form { width: 400px; padding: 20px; margin: 40px; border: 1px solid #d8d8d8; }
.review-form input, .review-form textarea, .review-form select { width: 100%; height: 40px; margin-bottom: 20px; }
.review-form textarea { height: 60px; }
.form-errors { color: #cc0c39; }
"#;
