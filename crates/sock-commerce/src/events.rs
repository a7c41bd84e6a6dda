//! Typed events from the storefront to its presentation layer.

use std::fmt;

use crate::ids::VariantId;
use crate::review::{ReviewRecord, ReviewTab, ValidationError};
use serde::{Deserialize, Serialize};

/// New state is available for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorefrontEvent {
    /// A different variant is now selected.
    VariantSelected { index: usize, variant_id: VariantId },
    /// Cart contents changed.
    CartChanged { count: usize },
    /// Review panel switched tabs.
    TabSelected { tab: ReviewTab },
    /// A review was accepted and appended to the list.
    ReviewAccepted { record: ReviewRecord },
    /// A submit attempt was rejected.
    ReviewRejected { errors: Vec<ValidationError> },
}

impl StorefrontEvent {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            StorefrontEvent::VariantSelected { .. } => "variant_selected",
            StorefrontEvent::CartChanged { .. } => "cart_changed",
            StorefrontEvent::TabSelected { .. } => "tab_selected",
            StorefrontEvent::ReviewAccepted { .. } => "review_accepted",
            StorefrontEvent::ReviewRejected { .. } => "review_rejected",
        }
    }
}

/// Receives storefront events.
pub trait Subscriber {
    fn notify(&mut self, event: &StorefrontEvent);
}

impl<F> Subscriber for F
where
    F: FnMut(&StorefrontEvent),
{
    fn notify(&mut self, event: &StorefrontEvent) {
        self(event)
    }
}

/// Delivers events to subscribers in registration order.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Box<dyn Subscriber>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber.
    pub fn subscribe(&mut self, subscriber: impl Subscriber + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Deliver an event to every subscriber.
    pub fn publish(&mut self, event: &StorefrontEvent) {
        for subscriber in &mut self.subscribers {
            subscriber.notify(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
