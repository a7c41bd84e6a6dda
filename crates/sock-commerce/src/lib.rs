//! Storefront domain types and logic for SockShop.
//!
//! This crate holds everything the single product page does besides drawing:
//!
//! - **Catalog**: the product, its color variants, and the variant selector
//! - **Cart**: a ledger of variant ids with one-unit removal
//! - **Review**: the review form draft, its validation state machine, and the
//!   tabbed review list
//! - **Events**: typed notifications for the presentation layer
//!
//! # Example
//!
//! ```rust
//! use sock_commerce::prelude::*;
//!
//! let mut store = Storefront::default();
//! store.dispatch(UiEvent::AddToCart).unwrap();
//! store.dispatch(UiEvent::AddToCart).unwrap();
//! store.dispatch(UiEvent::RemoveFromCart).unwrap();
//! assert_eq!(store.cart().count(), 1);
//!
//! store.dispatch(UiEvent::EditName("Ada".into())).unwrap();
//! store.dispatch(UiEvent::SubmitReview).unwrap();
//! let errors: Vec<String> = store.intake().errors().iter().map(|e| e.to_string()).collect();
//! assert_eq!(errors, ["Review required", "Rating required"]);
//! ```

pub mod error;
pub mod events;
pub mod ids;
pub mod storefront;

pub mod cart;
pub mod catalog;
pub mod review;

pub use error::CommerceError;
pub use ids::*;
pub use storefront::{Dispatch, Storefront, StorefrontSnapshot, UiEvent};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::events::{EventBus, StorefrontEvent, Subscriber};
    pub use crate::ids::*;
    pub use crate::storefront::{Dispatch, Storefront, StorefrontSnapshot, UiEvent};

    // Catalog
    pub use crate::catalog::{Product, Variant, VariantSelector};

    // Cart
    pub use crate::cart::CartLedger;

    // Review
    pub use crate::review::{
        FormDraft, IntakeState, Rating, ReviewIntake, ReviewPanel, ReviewRecord, ReviewTab,
        Submission, ValidationError,
    };
}
