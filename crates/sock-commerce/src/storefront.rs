//! The storefront: every piece of page state plus the UI event handler.

use crate::cart::CartLedger;
use crate::catalog::{Product, Variant, VariantSelector};
use crate::error::CommerceError;
use crate::events::{EventBus, StorefrontEvent, Subscriber};
use crate::review::{
    Rating, ReviewIntake, ReviewPanel, ReviewRecord, ReviewTab, Submission, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Brand shown when none is configured.
pub const DEFAULT_BRAND: &str = "Vue Mastery";

/// Shipping cost label for non-premium customers.
pub const STANDARD_SHIPPING: &str = "2.99";

/// A user interaction coming from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum UiEvent {
    /// Pointer moved over a color swatch.
    HoverVariant(usize),
    /// "Add to cart" clicked.
    AddToCart,
    /// "Remove" clicked.
    RemoveFromCart,
    /// Review tab clicked.
    SelectTab(ReviewTab),
    /// Name input changed.
    EditName(String),
    /// Review textarea changed.
    EditReview(String),
    /// Rating option picked.
    SelectRating(Rating),
    /// Review form submitted.
    SubmitReview,
}

/// What `dispatch` did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// State was updated.
    Applied,
    /// The control is disabled in the current state.
    Ignored { reason: &'static str },
}

const OUT_OF_STOCK: Dispatch = Dispatch::Ignored {
    reason: "selected variant is out of stock",
};

/// Single-page storefront state.
///
/// All mutation goes through `&mut self` and completes before returning, so
/// one event is fully applied before the next is looked at.
#[derive(Debug)]
pub struct Storefront {
    premium: bool,
    selector: VariantSelector,
    cart: CartLedger,
    panel: ReviewPanel,
    intake: ReviewIntake,
    bus: EventBus,
}

impl Storefront {
    /// Create a storefront with an empty cart and no reviews.
    pub fn new(brand: impl Into<String>, premium: bool, product: Product) -> Self {
        Self {
            premium,
            selector: VariantSelector::new(brand, product),
            cart: CartLedger::new(),
            panel: ReviewPanel::new(),
            intake: ReviewIntake::new(),
            bus: EventBus::new(),
        }
    }

    /// Register a subscriber for state-change events.
    pub fn subscribe(&mut self, subscriber: impl Subscriber + 'static) {
        self.bus.subscribe(subscriber);
    }

    pub fn selector(&self) -> &VariantSelector {
        &self.selector
    }

    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    pub fn panel(&self) -> &ReviewPanel {
        &self.panel
    }

    pub fn intake(&self) -> &ReviewIntake {
        &self.intake
    }

    pub fn is_premium(&self) -> bool {
        self.premium
    }

    /// Shipping label: "Free" for premium customers.
    pub fn shipping(&self) -> &'static str {
        if self.premium {
            "Free"
        } else {
            STANDARD_SHIPPING
        }
    }

    /// Whether the add/remove buttons are enabled.
    pub fn cart_buttons_enabled(&self) -> bool {
        self.selector.in_stock()
    }

    /// Select the variant under the pointer.
    pub fn hover_variant(&mut self, index: usize) -> Result<&Variant, CommerceError> {
        let variant_id = self.selector.select(index)?.id;
        self.bus
            .publish(&StorefrontEvent::VariantSelected { index, variant_id });
        Ok(self.selector.selected_variant())
    }

    /// Add one unit of the selected variant.
    pub fn add_to_cart(&mut self) -> Dispatch {
        if !self.cart_buttons_enabled() {
            return OUT_OF_STOCK;
        }
        self.cart.add_to_cart(self.selector.selected_variant().id);
        self.publish_cart();
        Dispatch::Applied
    }

    /// Remove one unit of the selected variant.
    pub fn remove_from_cart(&mut self) -> Dispatch {
        if !self.cart_buttons_enabled() {
            return OUT_OF_STOCK;
        }
        self.cart.remove_from_cart(self.selector.selected_variant().id);
        self.publish_cart();
        Dispatch::Applied
    }

    pub fn select_tab(&mut self, tab: ReviewTab) {
        self.panel.select_tab(tab);
        self.bus.publish(&StorefrontEvent::TabSelected { tab });
    }

    pub fn edit_name(&mut self, name: impl Into<String>) {
        self.intake.set_name(name);
    }

    pub fn edit_review(&mut self, review: impl Into<String>) {
        self.intake.set_review(review);
    }

    pub fn select_rating(&mut self, rating: Rating) {
        self.intake.set_rating(rating);
    }

    /// Submit the review form.
    ///
    /// Accepted records are appended to the review list.
    pub fn submit_review(&mut self) -> Submission {
        let submission = self.intake.submit();
        match &submission {
            Submission::Accepted(record) => {
                self.panel.add_review(record.clone());
                self.bus.publish(&StorefrontEvent::ReviewAccepted {
                    record: record.clone(),
                });
            }
            Submission::Rejected(errors) => {
                self.bus.publish(&StorefrontEvent::ReviewRejected {
                    errors: errors.clone(),
                });
            }
        }
        submission
    }

    /// Apply one UI event.
    ///
    /// Only `HoverVariant` with an index past the last variant fails; such
    /// events cannot come from the live page but can appear in a replayed
    /// session.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<Dispatch, CommerceError> {
        let outcome = match event {
            UiEvent::HoverVariant(index) => {
                self.hover_variant(index)?;
                Dispatch::Applied
            }
            UiEvent::AddToCart => self.add_to_cart(),
            UiEvent::RemoveFromCart => self.remove_from_cart(),
            UiEvent::SelectTab(tab) => {
                self.select_tab(tab);
                Dispatch::Applied
            }
            UiEvent::EditName(name) => {
                self.edit_name(name);
                Dispatch::Applied
            }
            UiEvent::EditReview(review) => {
                self.edit_review(review);
                Dispatch::Applied
            }
            UiEvent::SelectRating(rating) => {
                self.select_rating(rating);
                Dispatch::Applied
            }
            UiEvent::SubmitReview => {
                self.submit_review();
                Dispatch::Applied
            }
        };
        Ok(outcome)
    }

    /// Serializable view of the current state.
    pub fn snapshot(&self) -> StorefrontSnapshot {
        StorefrontSnapshot {
            title: self.selector.title(),
            image: self.selector.image().to_string(),
            in_stock: self.selector.in_stock(),
            shipping: self.shipping().to_string(),
            details: self.selector.product().details().to_vec(),
            variants: self.selector.product().variants().to_vec(),
            selected_variant: self.selector.selected_index(),
            cart: self.cart.count(),
            selected_tab: self.panel.selected_tab(),
            reviews: self.panel.reviews().to_vec(),
            errors: self.intake.errors().to_vec(),
        }
    }

    fn publish_cart(&mut self) {
        self.bus.publish(&StorefrontEvent::CartChanged {
            count: self.cart.count(),
        });
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(DEFAULT_BRAND, true, Product::default())
    }
}

/// Point-in-time copy of everything the page shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorefrontSnapshot {
    pub title: String,
    pub image: String,
    pub in_stock: bool,
    pub shipping: String,
    pub details: Vec<String>,
    pub variants: Vec<Variant>,
    pub selected_variant: usize,
    pub cart: usize,
    pub selected_tab: ReviewTab,
    pub reviews: Vec<ReviewRecord>,
    pub errors: Vec<ValidationError>,
}
