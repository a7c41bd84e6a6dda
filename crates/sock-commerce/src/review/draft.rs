//! The review form draft.

use crate::review::Rating;
use serde::{Deserialize, Serialize};

/// Uncommitted contents of the review form.
///
/// Each form field writes straight into the draft through a setter; the
/// intake reads whatever the draft holds at submit time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormDraft {
    pub name: Option<String>,
    pub review: Option<String>,
    pub rating: Option<Rating>,
}

impl FormDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name field.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Set the review text field.
    pub fn set_review(&mut self, review: impl Into<String>) {
        self.review = Some(review.into());
    }

    /// Set the rating field.
    pub fn set_rating(&mut self, rating: Rating) {
        self.rating = Some(rating);
    }

    /// Builder-style name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }

    /// Builder-style review text.
    pub fn with_review(mut self, review: impl Into<String>) -> Self {
        self.set_review(review);
        self
    }

    /// Builder-style rating.
    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.set_rating(rating);
        self
    }

    /// Reset every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether every field is unset.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.review.is_none() && self.rating.is_none()
    }
}
