//! Review record and rating types.

use std::fmt;

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// A star rating between 1 and 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest rating.
    pub const MIN: u8 = 1;
    /// Highest rating.
    pub const MAX: u8 = 5;

    /// Create a rating, rejecting values outside 1..=5.
    pub fn new(value: i64) -> Result<Self, CommerceError> {
        match u8::try_from(value) {
            Ok(v) if (Self::MIN..=Self::MAX).contains(&v) => Ok(Self(v)),
            _ => Err(CommerceError::InvalidRating(value)),
        }
    }

    /// Numeric value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// All ratings in the order the form lists them (5 down to 1).
    pub fn descending() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).rev().map(Rating)
    }

    /// Filled and empty stars.
    pub fn stars(self) -> String {
        let filled = self.0 as usize;
        format!(
            "{}{}",
            "★".repeat(filled),
            "☆".repeat(Self::MAX as usize - filled)
        )
    }
}

impl TryFrom<i64> for Rating {
    type Error = CommerceError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated review.
///
/// Only [`crate::review::ReviewIntake`] creates these, after checking that
/// name and review are non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewRecord {
    /// Reviewer name.
    pub name: String,
    /// Review text.
    pub review: String,
    /// Star rating.
    pub rating: Rating,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(1).is_ok());
        assert!(Rating::new(5).is_ok());
        assert_eq!(Rating::new(0), Err(CommerceError::InvalidRating(0)));
        assert_eq!(Rating::new(6), Err(CommerceError::InvalidRating(6)));
        assert_eq!(Rating::new(-3), Err(CommerceError::InvalidRating(-3)));
        assert_eq!(Rating::new(300), Err(CommerceError::InvalidRating(300)));
    }

    #[test]
    fn test_rating_descending_order() {
        let values: Vec<u8> = Rating::descending().map(Rating::value).collect();
        assert_eq!(values, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_rating_stars() {
        assert_eq!(Rating::new(3).unwrap().stars(), "★★★☆☆");
    }

    #[test]
    fn test_rating_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Rating>("4").is_ok());
        assert!(serde_json::from_str::<Rating>("9").is_err());
    }
}
