//! Navigation bar renderer.

use super::escape_html;

/// Render the navigation bar with the brand and cart count.
pub fn render_nav_bar(brand: &str, cart_count: usize) -> String {
    format!(
        r#"<div class="nav-bar" data-section="nav">
    <h1>{brand}</h1>
    <ul>
        <li>Home</li>
        <li>Category</li>
        <li>Cart ({cart_count})</li>
    </ul>
</div>"#,
        brand = escape_html(brand),
        cart_count = cart_count
    )
}
