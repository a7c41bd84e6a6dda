//! Product reviews module.
//!
//! Contains review records, the form draft, the submission state machine,
//! and the tabbed review panel.

mod draft;
mod intake;
mod panel;
mod record;

pub use draft::FormDraft;
pub use intake::{error_heading, IntakeState, ReviewIntake, Submission, ValidationError};
pub use panel::{ReviewPanel, ReviewTab, NO_REVIEWS_MESSAGE};
pub use record::{Rating, ReviewRecord};
