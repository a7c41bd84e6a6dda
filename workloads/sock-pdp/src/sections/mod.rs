//! Section renderers for the product page.

mod nav_bar;
mod product;
mod review_form;
mod reviews;

pub use nav_bar::*;
pub use product::*;
pub use review_form::*;
pub use reviews::*;

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
