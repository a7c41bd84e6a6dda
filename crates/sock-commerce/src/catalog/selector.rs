//! Variant selection and the values derived from it.

use crate::catalog::{Product, Variant};
use crate::error::CommerceError;

/// Tracks the currently selected variant of a product.
///
/// Every derived value (`title`, `image`, `in_stock`) is computed from the
/// current selection on each call, so a selection change is visible
/// immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSelector {
    brand: String,
    product: Product,
    selected: usize,
}

impl VariantSelector {
    /// Create a selector with the first variant selected.
    pub fn new(brand: impl Into<String>, product: Product) -> Self {
        Self {
            brand: brand.into(),
            product,
            selected: 0,
        }
    }

    /// Select the variant at `index`.
    pub fn select(&mut self, index: usize) -> Result<&Variant, CommerceError> {
        let len = self.product.variants().len();
        if index >= len {
            return Err(CommerceError::VariantIndexOutOfRange { index, len });
        }
        self.selected = index;
        Ok(self.selected_variant())
    }

    /// Index of the selected variant.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The selected variant.
    pub fn selected_variant(&self) -> &Variant {
        // `Product` guarantees at least one variant and `select` bounds-checks.
        &self.product.variants()[self.selected]
    }

    /// Brand followed by product name.
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.product.name())
    }

    /// Image of the selected variant.
    pub fn image(&self) -> &str {
        &self.selected_variant().image_url
    }

    /// Whether the selected variant has stock.
    pub fn in_stock(&self) -> bool {
        self.selected_variant().in_stock()
    }

    /// Brand name.
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// The product being shown.
    pub fn product(&self) -> &Product {
        &self.product
    }
}
