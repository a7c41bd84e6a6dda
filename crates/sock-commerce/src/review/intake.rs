//! Review submission state machine.
//!
//! ```text
//! Editing --submit--> Validating --+--> Accepted --+
//!    ^                             |               |
//!    |                             +--> Rejected --+
//!    +---------------- draft cleared --------------+
//! ```
//!
//! Rejection is not sticky: the draft is cleared on every attempt, so a
//! rejected user starts over with empty fields and the error list.

use std::fmt;

use crate::review::{FormDraft, Rating, ReviewRecord};
use serde::{Deserialize, Serialize};

/// A missing required field.
///
/// Variants are declared in the order their messages are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ValidationError {
    NameRequired,
    ReviewRequired,
    RatingRequired,
}

impl ValidationError {
    /// Message shown above the form.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::NameRequired => "Name required",
            ValidationError::ReviewRequired => "Review required",
            ValidationError::RatingRequired => "Rating required",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Heading shown over a non-empty error list.
pub fn error_heading(error_count: usize) -> String {
    format!(
        "Please correct the following error{}",
        if error_count == 1 { "" } else { "s" }
    )
}

/// Phase of the intake state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IntakeState {
    /// Accepting edits to the draft.
    #[default]
    Editing,
    /// Checking the draft during a submit.
    Validating,
    /// Draft produced a record.
    Accepted,
    /// Draft was missing fields.
    Rejected,
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Submission {
    Accepted(ReviewRecord),
    Rejected(Vec<ValidationError>),
}

impl Submission {
    /// The accepted record, if any.
    pub fn record(&self) -> Option<&ReviewRecord> {
        match self {
            Submission::Accepted(record) => Some(record),
            Submission::Rejected(_) => None,
        }
    }

    /// Whether the draft was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted(_))
    }
}

/// Review form: draft, error list, and the submit transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewIntake {
    draft: FormDraft,
    errors: Vec<ValidationError>,
    state: IntakeState,
    last_outcome: Option<IntakeState>,
}

impl ReviewIntake {
    /// Create an intake with an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft.
    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    /// Mutable access to the draft for field bindings.
    pub fn draft_mut(&mut self) -> &mut FormDraft {
        &mut self.draft
    }

    /// Errors from the latest rejected attempt.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Current phase. Always `Editing` between calls.
    pub fn state(&self) -> IntakeState {
        self.state
    }

    /// Terminal phase reached by the latest submit, if any.
    pub fn last_outcome(&self) -> Option<IntakeState> {
        self.last_outcome
    }

    /// Set the name field.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.set_name(name);
    }

    /// Set the review text field.
    pub fn set_review(&mut self, review: impl Into<String>) {
        self.draft.set_review(review);
    }

    /// Set the rating field.
    pub fn set_rating(&mut self, rating: Rating) {
        self.draft.set_rating(rating);
    }

    /// Check a draft without touching any state.
    ///
    /// A field is present when it is set and, for text, non-empty. Errors
    /// come back in name, review, rating order.
    pub fn validate(draft: &FormDraft) -> Submission {
        let name = draft.name.as_deref().filter(|s| !s.is_empty());
        let review = draft.review.as_deref().filter(|s| !s.is_empty());

        match (name, review, draft.rating) {
            (Some(name), Some(review), Some(rating)) => Submission::Accepted(ReviewRecord {
                name: name.to_string(),
                review: review.to_string(),
                rating,
            }),
            (name, review, rating) => {
                let mut errors = Vec::with_capacity(3);
                if name.is_none() {
                    errors.push(ValidationError::NameRequired);
                }
                if review.is_none() {
                    errors.push(ValidationError::ReviewRequired);
                }
                if rating.is_none() {
                    errors.push(ValidationError::RatingRequired);
                }
                Submission::Rejected(errors)
            }
        }
    }

    /// Submit the current draft.
    ///
    /// On acceptance the error list is emptied; on rejection it is replaced
    /// by the new errors. The draft is cleared either way.
    pub fn submit(&mut self) -> Submission {
        self.state = IntakeState::Validating;
        let submission = Self::validate(&self.draft);

        self.state = match &submission {
            Submission::Accepted(_) => {
                self.errors.clear();
                IntakeState::Accepted
            }
            Submission::Rejected(errors) => {
                self.errors.clear();
                self.errors.extend_from_slice(errors);
                IntakeState::Rejected
            }
        };
        self.last_outcome = Some(self.state);

        self.draft.clear();
        self.state = IntakeState::Editing;
        submission
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(value: i64) -> Rating {
        Rating::new(value).unwrap()
    }

    fn messages(errors: &[ValidationError]) -> Vec<&'static str> {
        errors.iter().map(ValidationError::message).collect()
    }

    #[test]
    fn test_submit_complete_draft() {
        let mut intake = ReviewIntake::new();
        intake.set_name("Ada");
        intake.set_review("Warm and comfy");
        intake.set_rating(rating(5));

        let submission = intake.submit();
        assert_eq!(
            submission.record(),
            Some(&ReviewRecord {
                name: "Ada".to_string(),
                review: "Warm and comfy".to_string(),
                rating: rating(5),
            })
        );
        assert!(intake.errors().is_empty());
        assert_eq!(intake.last_outcome(), Some(IntakeState::Accepted));
    }

    #[test]
    fn test_submit_empty_draft() {
        let mut intake = ReviewIntake::new();
        let submission = intake.submit();

        assert!(!submission.is_accepted());
        assert_eq!(
            messages(intake.errors()),
            vec!["Name required", "Review required", "Rating required"]
        );
        assert_eq!(intake.last_outcome(), Some(IntakeState::Rejected));
    }

    #[test]
    fn test_submit_missing_rating_only() {
        let mut intake = ReviewIntake::new();
        intake.set_name("Ada");
        intake.set_review("Nice");

        assert_eq!(
            intake.submit(),
            Submission::Rejected(vec![ValidationError::RatingRequired])
        );
        assert_eq!(messages(intake.errors()), vec!["Rating required"]);
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        let mut intake = ReviewIntake::new();
        intake.set_name("");
        intake.set_review("Nice");
        intake.set_rating(rating(2));

        assert_eq!(
            intake.submit(),
            Submission::Rejected(vec![ValidationError::NameRequired])
        );
    }

    #[test]
    fn test_draft_cleared_after_every_attempt() {
        let mut intake = ReviewIntake::new();
        intake.set_name("Ada");
        intake.submit();
        assert!(intake.draft().is_empty());
        assert_eq!(intake.state(), IntakeState::Editing);

        intake.set_name("Ada");
        intake.set_review("Nice");
        intake.set_rating(rating(4));
        intake.submit();
        assert!(intake.draft().is_empty());
        assert_eq!(intake.state(), IntakeState::Editing);
    }

    #[test]
    fn test_errors_replaced_then_cleared() {
        let mut intake = ReviewIntake::new();
        intake.submit();
        assert_eq!(intake.errors().len(), 3);

        intake.set_name("Ada");
        intake.set_review("Nice");
        intake.submit();
        assert_eq!(intake.errors(), &[ValidationError::RatingRequired]);

        intake.set_name("Ada");
        intake.set_review("Nice");
        intake.set_rating(rating(1));
        intake.submit();
        assert!(intake.errors().is_empty());
    }

    #[test]
    fn test_error_heading() {
        assert_eq!(error_heading(1), "Please correct the following error");
        assert_eq!(error_heading(3), "Please correct the following errors");
    }
}
