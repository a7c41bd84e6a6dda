//! Product and variant types.

use std::collections::HashSet;

use crate::error::CommerceError;
use crate::ids::VariantId;
use serde::{Deserialize, Serialize};

/// A purchasable option of a product (e.g., a color).
///
/// Variants are immutable for the lifetime of a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Variant {
    /// Identifier, unique within the product.
    pub id: VariantId,
    /// Display color (also used as the swatch background).
    pub color: String,
    /// Image shown while this variant is selected.
    pub image_url: String,
    /// Units in stock.
    pub quantity: u32,
}

impl Variant {
    /// Create a new variant.
    pub fn new(
        id: impl Into<VariantId>,
        color: impl Into<String>,
        image_url: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
            image_url: image_url.into(),
            quantity,
        }
    }

    /// Whether at least one unit is in stock.
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// A product with an ordered, non-empty list of variants.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Product {
    name: String,
    details: Vec<String>,
    variants: Vec<Variant>,
}

impl Product {
    /// Create a product.
    ///
    /// Returns an error if there are no variants or two variants share an id.
    pub fn new(
        name: impl Into<String>,
        details: Vec<String>,
        variants: Vec<Variant>,
    ) -> Result<Self, CommerceError> {
        if variants.is_empty() {
            return Err(CommerceError::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(variants.len());
        for variant in &variants {
            if !seen.insert(variant.id) {
                return Err(CommerceError::DuplicateVariant(variant.id));
            }
        }

        Ok(Self {
            name: name.into(),
            details,
            variants,
        })
    }

    /// Product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bullet-point details.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// Variants in display order.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Get a variant by index.
    pub fn variant(&self, index: usize) -> Option<&Variant> {
        self.variants.get(index)
    }

    /// Get a variant by ID.
    pub fn variant_by_id(&self, id: VariantId) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == id)
    }
}

impl Default for Product {
    /// The two-color sock the demo storefront ships with.
    fn default() -> Self {
        Self {
            name: "Socks".to_string(),
            details: vec![
                "80% cotton".to_string(),
                "20% polyester".to_string(),
                "Gender-neutral".to_string(),
            ],
            variants: vec![
                Variant::new(
                    2234,
                    "green",
                    "https://www.vuemastery.com/images/challenges/vmSocks-green-onWhite.jpg",
                    10,
                ),
                Variant::new(
                    2235,
                    "blue",
                    "https://www.vuemastery.com/images/challenges/vmSocks-blue-onWhite.jpg",
                    0,
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(id: u64, quantity: u32) -> Variant {
        Variant::new(id, "red", format!("https://img/{id}.jpg"), quantity)
    }

    #[test]
    fn test_product_creation() {
        let product =
            Product::new("Socks", vec!["wool".to_string()], vec![variant(1, 3), variant(2, 0)])
                .unwrap();
        assert_eq!(product.name(), "Socks");
        assert_eq!(product.variants().len(), 2);
        assert_eq!(product.variant(1).map(|v| v.id), Some(VariantId::new(2)));
        assert!(product.variant(2).is_none());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = Product::new("Socks", Vec::new(), Vec::new());
        assert_eq!(result, Err(CommerceError::EmptyCatalog));
    }

    #[test]
    fn test_duplicate_variant_rejected() {
        let result = Product::new("Socks", Vec::new(), vec![variant(5, 1), variant(5, 2)]);
        assert_eq!(
            result,
            Err(CommerceError::DuplicateVariant(VariantId::new(5)))
        );
    }

    #[test]
    fn test_variant_stock() {
        assert!(variant(1, 1).in_stock());
        assert!(!variant(1, 0).in_stock());
    }

    #[test]
    fn test_default_product() {
        let product = Product::default();
        assert_eq!(product.details().len(), 3);
        assert!(product.variant_by_id(VariantId::new(2234)).unwrap().in_stock());
        assert!(!product.variant_by_id(VariantId::new(2235)).unwrap().in_stock());
    }
}
