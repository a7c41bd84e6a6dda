//! Commerce error types.

use thiserror::Error;

use crate::ids::VariantId;

/// Errors that can occur while building or driving a storefront.
///
/// Cart operations never fail and review validation failures are values
/// (see [`crate::review::ValidationError`]), so these only cover malformed
/// catalogs and out-of-range input coming from outside the live UI.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// A product must offer at least one variant.
    #[error("Product has no variants")]
    EmptyCatalog,

    /// Two variants share the same id.
    #[error("Duplicate variant id: {0}")]
    DuplicateVariant(VariantId),

    /// Variant index outside the product's variant list.
    #[error("Variant index {index} out of range ({len} variants)")]
    VariantIndexOutOfRange { index: usize, len: usize },

    /// Rating outside 1..=5.
    #[error("Invalid rating: {0} (expected 1-5)")]
    InvalidRating(i64),

    /// Unknown review tab name.
    #[error("Unknown tab: {0}")]
    UnknownTab(String),
}
