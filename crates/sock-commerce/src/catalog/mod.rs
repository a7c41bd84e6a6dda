//! Product catalog module.
//!
//! Contains the product, its variants, and the variant selector.

mod product;
mod selector;

pub use product::{Product, Variant};
pub use selector::VariantSelector;
