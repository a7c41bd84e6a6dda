//! Tabbed review panel.

use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;
use crate::review::ReviewRecord;
use serde::{Deserialize, Serialize};

/// Shown on the Reviews tab while no review has been accepted.
pub const NO_REVIEWS_MESSAGE: &str = "there are no reviews yet.";

/// The two views of the review panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ReviewTab {
    /// List of accepted reviews.
    #[default]
    Reviews,
    /// The review form.
    MakeAReview,
}

impl ReviewTab {
    /// All tabs in display order.
    pub const ALL: [ReviewTab; 2] = [ReviewTab::Reviews, ReviewTab::MakeAReview];

    pub fn label(&self) -> &'static str {
        match self {
            ReviewTab::Reviews => "Reviews",
            ReviewTab::MakeAReview => "Make a Review",
        }
    }
}

impl fmt::Display for ReviewTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReviewTab {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reviews" => Ok(ReviewTab::Reviews),
            "make a review" | "make-a-review" | "write" => Ok(ReviewTab::MakeAReview),
            _ => Err(CommerceError::UnknownTab(s.to_string())),
        }
    }
}

/// Selected tab plus the accepted reviews, in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewPanel {
    selected: ReviewTab,
    reviews: Vec<ReviewRecord>,
}

impl ReviewPanel {
    /// Create a panel showing the Reviews tab.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch tabs.
    pub fn select_tab(&mut self, tab: ReviewTab) {
        self.selected = tab;
    }

    pub fn selected_tab(&self) -> ReviewTab {
        self.selected
    }

    /// Append an accepted review.
    pub fn add_review(&mut self, record: ReviewRecord) {
        self.reviews.push(record);
    }

    pub fn reviews(&self) -> &[ReviewRecord] {
        &self.reviews
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::Rating;

    fn record(name: &str) -> ReviewRecord {
        ReviewRecord {
            name: name.to_string(),
            review: "ok".to_string(),
            rating: Rating::new(3).unwrap(),
        }
    }

    #[test]
    fn test_default_tab() {
        let panel = ReviewPanel::new();
        assert_eq!(panel.selected_tab(), ReviewTab::Reviews);
        assert!(panel.is_empty());
    }

    #[test]
    fn test_tabs_are_exclusive() {
        let mut panel = ReviewPanel::new();
        panel.select_tab(ReviewTab::MakeAReview);
        assert_eq!(panel.selected_tab(), ReviewTab::MakeAReview);
        panel.select_tab(ReviewTab::Reviews);
        assert_eq!(panel.selected_tab(), ReviewTab::Reviews);
    }

    #[test]
    fn test_reviews_keep_insertion_order() {
        let mut panel = ReviewPanel::new();
        panel.add_review(record("first"));
        panel.add_review(record("second"));
        let names: Vec<&str> = panel.reviews().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!("Reviews".parse::<ReviewTab>().unwrap(), ReviewTab::Reviews);
        assert_eq!(
            "Make a Review".parse::<ReviewTab>().unwrap(),
            ReviewTab::MakeAReview
        );
        assert!("Questions".parse::<ReviewTab>().is_err());
    }
}
