//! Synchronous change notification for resources
//!
//! A resource owns a [`Notifier`] and emits a [`CaptureEvent`] at the point
//! of each observable mutation. Listeners run in subscription order on the
//! caller's thread and have returned before the mutating call does.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut capture = CaptureResource::new();
//!
//! let id = capture.subscribe(|event| {
//!     if let CaptureEvent::InvoiceNumberChanged { invoice_number } = event {
//!         println!("invoice is now {invoice_number}");
//!     }
//! });
//!
//! capture.set_invoice_number("INV-1");
//! capture.unsubscribe(id);
//! ```

use crate::core::enums::{ReasonCode, StateType};
use crate::core::link::LinkSet;
use crate::core::money::Money;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// A field of a capture changed; payloads borrow the new value
///
/// Serialized with a `field` tag holding the wire name of the field, e.g.
/// `{"field": "invoice_number", "invoice_number": "INV-1"}`.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "field")]
pub enum CaptureEvent<'a> {
    /// The server-assigned id changed
    #[serde(rename = "id")]
    IdChanged { id: &'a str },

    /// An amount was created, replaced or dropped (not edited in place)
    #[serde(rename = "amount")]
    AmountChanged { amount: Option<&'a Money> },

    /// The final-capture flag flipped
    #[serde(rename = "is_final_capture")]
    IsFinalCaptureChanged { is_final_capture: bool },

    /// The processing state changed
    #[serde(rename = "state")]
    StateChanged { state: StateType },

    /// The reason code changed
    #[serde(rename = "reason_code")]
    ReasonCodeChanged { reason_code: ReasonCode },

    /// The parent payment id changed
    #[serde(rename = "parent_payment")]
    ParentPaymentChanged { parent_payment: &'a str },

    /// The stored (untruncated) invoice number changed
    #[serde(rename = "invoice_number")]
    InvoiceNumberChanged { invoice_number: &'a str },

    /// A transaction fee was created, replaced or dropped
    #[serde(rename = "transaction_fee")]
    TransactionFeeChanged { transaction_fee: Option<&'a Money> },

    /// The creation timestamp changed
    #[serde(rename = "create_time")]
    CreateTimeChanged { create_time: Option<DateTime<Utc>> },

    /// The last-update timestamp changed
    #[serde(rename = "update_time")]
    UpdateTimeChanged { update_time: Option<DateTime<Utc>> },

    /// The link collection was cleared or rebuilt
    #[serde(rename = "links")]
    LinksChanged { links: &'a LinkSet },
}

impl CaptureEvent<'_> {
    /// Wire name of the field this event reports on, same as the serialized `field` tag
    pub fn field(&self) -> &'static str {
        match self {
            CaptureEvent::IdChanged { .. } => "id",
            CaptureEvent::AmountChanged { .. } => "amount",
            CaptureEvent::IsFinalCaptureChanged { .. } => "is_final_capture",
            CaptureEvent::StateChanged { .. } => "state",
            CaptureEvent::ReasonCodeChanged { .. } => "reason_code",
            CaptureEvent::ParentPaymentChanged { .. } => "parent_payment",
            CaptureEvent::InvoiceNumberChanged { .. } => "invoice_number",
            CaptureEvent::TransactionFeeChanged { .. } => "transaction_fee",
            CaptureEvent::CreateTimeChanged { .. } => "create_time",
            CaptureEvent::UpdateTimeChanged { .. } => "update_time",
            CaptureEvent::LinksChanged { .. } => "links",
        }
    }
}

/// Handle returned by [`Notifier::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&CaptureEvent<'_>)>;

/// Ordered list of listeners, invoked synchronously
#[derive(Default)]
pub struct Notifier {
    /// Id handed to the next subscriber
    next_id: u64,

    /// Registered listeners, in subscription order
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Notifier {
    /// Create a notifier with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it sees every event emitted after this call
    pub fn subscribe(&mut self, listener: impl FnMut(&CaptureEvent<'_>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(candidate, _)| *candidate != id);
        self.listeners.len() != before
    }

    /// Deliver an event to every listener, in subscription order
    pub fn emit(&mut self, event: &CaptureEvent<'_>) {
        tracing::trace!(field = event.field(), listeners = self.listeners.len(), "emit");
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
