//! Capture resource: money captured against an authorized payment
//!
//! The capture is hydrated from the service's JSON responses and projected
//! back to JSON when a capture request is submitted. Server-owned fields
//! (`id`, `state`, `reason_code`, `parent_payment`, timestamps, links) are
//! only ever written by [`WireObject::hydrate`].

use crate::config::CaptureConfig;
use crate::core::enums::{EnumCodec, ReasonCode, StateType};
use crate::core::error::CaptureError;
use crate::core::events::{CaptureEvent, Notifier, SubscriptionId};
use crate::core::link::LinkSet;
use crate::core::money::Money;
use crate::core::resource::{Resource, WireObject, parse_timestamp};
use crate::core::wire::{JsonObject, array_field, insert_truncated, object_field, string_field};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// A capture of funds against an authorized payment
///
/// Money sub-resources are boxed and exclusively owned: re-hydration edits
/// them in place, so their address is stable until they are dropped.
#[derive(Debug, Default)]
pub struct CaptureResource {
    /// Server-assigned identifier
    id: String,

    /// Captured amount, `None` when unset
    amount: Option<Box<Money>>,

    /// Whether this is the last capture against the authorization
    is_final_capture: bool,

    /// Processing state, from the `state` token
    state: StateType,

    /// Why the capture is in its state, from the `reason_code` token
    reason_code: ReasonCode,

    /// ID of the payment this capture belongs to
    parent_payment: String,

    /// Invoice number, stored untruncated
    invoice_number: String,

    /// Fee charged by the service for the capture, `None` when unset
    transaction_fee: Option<Box<Money>>,

    /// When the service created the capture
    create_time: Option<DateTime<Utc>>,

    /// When the service last updated the capture
    update_time: Option<DateTime<Utc>>,

    /// Hypermedia links, rebuilt on every hydrate
    links: LinkSet,

    /// Projection settings
    config: CaptureConfig,

    /// Change listeners
    notifier: Notifier,
}

impl CaptureResource {
    /// Create an empty capture with the default projection settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty capture that projects with the given settings
    pub fn with_config(config: CaptureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create a capture hydrated from a wire object
    pub fn from_object(json: &JsonObject) -> Self {
        let mut capture = Self::new();
        capture.hydrate(json);
        capture
    }

    /// Create a capture from a parsed JSON document
    ///
    /// A root that is not an object is treated like an empty object.
    pub fn from_document(document: &Value) -> Self {
        match document.as_object() {
            Some(json) => Self::from_object(json),
            None => Self::new(),
        }
    }

    /// Parse raw document text and hydrate a capture from it
    pub fn from_json_str(raw: &str) -> Result<Self, CaptureError> {
        let document: Value = serde_json::from_str(raw)?;
        Ok(Self::from_document(&document))
    }

    /// Projection settings in use
    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    // === Change notification ===

    /// Register a listener for field changes
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&CaptureEvent<'_>) + 'static,
    ) -> SubscriptionId {
        self.notifier.subscribe(listener)
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    // === Accessors ===

    /// The owned amount, `None` when unset
    pub fn amount(&self) -> Option<&Money> {
        self.amount.as_deref()
    }

    /// Mutable access to the owned amount. Edits made through it are not
    /// reported as `AmountChanged`: the owned instance stays the same.
    pub fn amount_mut(&mut self) -> Option<&mut Money> {
        self.amount.as_deref_mut()
    }

    /// Whether this is the final capture against the authorization
    pub fn is_final_capture(&self) -> bool {
        self.is_final_capture
    }

    /// Processing state; [`StateType::Unknown`] until hydrated
    pub fn state(&self) -> StateType {
        self.state
    }

    /// Reason code; [`ReasonCode::Unknown`] when the server sent none
    pub fn reason_code(&self) -> ReasonCode {
        self.reason_code
    }

    /// ID of the payment this capture belongs to
    pub fn parent_payment(&self) -> &str {
        &self.parent_payment
    }

    /// The invoice number as stored, never truncated
    pub fn invoice_number(&self) -> &str {
        &self.invoice_number
    }

    /// The owned transaction fee, `None` when unset
    pub fn transaction_fee(&self) -> Option<&Money> {
        self.transaction_fee.as_deref()
    }

    /// Mutable access to the owned fee; edits are not reported
    pub fn transaction_fee_mut(&mut self) -> Option<&mut Money> {
        self.transaction_fee.as_deref_mut()
    }

    // === Public mutators ===

    /// Replace the owned amount. `None` clears it.
    pub fn set_amount(&mut self, amount: Option<Money>) {
        if amount.is_none() && self.amount.is_none() {
            return;
        }
        self.amount = amount.map(Box::new);
        self.amount_changed();
    }

    /// Mark the capture as final or not
    pub fn set_is_final_capture(&mut self, is_final_capture: bool) {
        if is_final_capture == self.is_final_capture {
            return;
        }
        self.is_final_capture = is_final_capture;
        tracing::debug!(is_final_capture, "changed is_final_capture");
        self.notifier
            .emit(&CaptureEvent::IsFinalCaptureChanged { is_final_capture });
    }

    /// Set the invoice number. Stored as given; the length limit only
    /// applies to the projection.
    pub fn set_invoice_number(&mut self, invoice_number: impl Into<String>) {
        let invoice_number = invoice_number.into();
        if invoice_number == self.invoice_number {
            return;
        }
        self.invoice_number = invoice_number;
        tracing::debug!(invoice_number = %self.invoice_number, "changed invoice number");
        self.notifier.emit(&CaptureEvent::InvoiceNumberChanged {
            invoice_number: &self.invoice_number,
        });
    }

    /// Replace the owned transaction fee. `None` clears it.
    pub fn set_transaction_fee(&mut self, transaction_fee: Option<Money>) {
        if transaction_fee.is_none() && self.transaction_fee.is_none() {
            return;
        }
        self.transaction_fee = transaction_fee.map(Box::new);
        self.transaction_fee_changed();
    }

    // === Server-owned fields, written by hydrate only ===

    fn set_id(&mut self, id: &str) {
        if id == self.id {
            return;
        }
        self.id = id.to_string();
        tracing::debug!(id = %self.id, "changed id");
        self.notifier.emit(&CaptureEvent::IdChanged { id: &self.id });
    }

    fn set_state(&mut self, state: StateType) {
        if state == self.state {
            return;
        }
        self.state = state;
        tracing::debug!(?state, "changed state");
        self.notifier.emit(&CaptureEvent::StateChanged { state });
    }

    fn set_reason_code(&mut self, reason_code: ReasonCode) {
        if reason_code == self.reason_code {
            return;
        }
        self.reason_code = reason_code;
        tracing::debug!(?reason_code, "changed reason code");
        self.notifier
            .emit(&CaptureEvent::ReasonCodeChanged { reason_code });
    }

    fn set_parent_payment(&mut self, parent_payment: &str) {
        if parent_payment == self.parent_payment {
            return;
        }
        self.parent_payment = parent_payment.to_string();
        tracing::debug!(parent_payment = %self.parent_payment, "changed parent payment");
        self.notifier.emit(&CaptureEvent::ParentPaymentChanged {
            parent_payment: &self.parent_payment,
        });
    }

    fn set_create_time(&mut self, create_time: Option<DateTime<Utc>>) {
        if create_time == self.create_time {
            return;
        }
        self.create_time = create_time;
        tracing::debug!(?create_time, "changed create time");
        self.notifier
            .emit(&CaptureEvent::CreateTimeChanged { create_time });
    }

    fn set_update_time(&mut self, update_time: Option<DateTime<Utc>>) {
        if update_time == self.update_time {
            return;
        }
        self.update_time = update_time;
        tracing::debug!(?update_time, "changed update time");
        self.notifier
            .emit(&CaptureEvent::UpdateTimeChanged { update_time });
    }

    fn amount_changed(&mut self) {
        tracing::debug!(amount = ?self.amount, "changed amount");
        self.notifier.emit(&CaptureEvent::AmountChanged {
            amount: self.amount.as_deref(),
        });
    }

    fn transaction_fee_changed(&mut self) {
        tracing::debug!(transaction_fee = ?self.transaction_fee, "changed transaction fee");
        self.notifier.emit(&CaptureEvent::TransactionFeeChanged {
            transaction_fee: self.transaction_fee.as_deref(),
        });
    }
}

/// Hydrate an owned money slot, keeping the existing instance when both the
/// slot and the input are present. Returns true when the slot now holds a
/// different instance (created or dropped).
fn hydrate_owned(slot: &mut Option<Box<Money>>, json: Option<&JsonObject>) -> bool {
    match json {
        Some(json) => match slot {
            Some(existing) => {
                existing.hydrate(json);
                false
            }
            None => {
                *slot = Some(Box::new(Money::from_json(json)));
                true
            }
        },
        None => slot.take().is_some(),
    }
}

impl WireObject for CaptureResource {
    /// Load the capture from a service response
    ///
    /// An empty object is a no-op. Otherwise every field is overwritten, with
    /// absent members reset to their defaults. The link collection is cleared
    /// and announced as empty before it is rebuilt.
    fn hydrate(&mut self, json: &JsonObject) {
        if json.is_empty() {
            return;
        }

        tracing::trace!(resource = Self::resource_name(), "hydrate");

        self.set_id(string_field(json, "id"));

        if hydrate_owned(&mut self.amount, object_field(json, "amount")) {
            self.amount_changed();
        }

        // Only the string token "true" counts; a JSON boolean reads as false.
        self.set_is_final_capture(string_field(json, "is_final_capture") == "true");

        self.set_state(EnumCodec::token_to_state(string_field(json, "state")));
        self.set_reason_code(EnumCodec::token_to_reason(string_field(
            json,
            "reason_code",
        )));
        self.set_parent_payment(string_field(json, "parent_payment"));
        self.set_invoice_number(string_field(json, "invoice_number"));

        if hydrate_owned(
            &mut self.transaction_fee,
            object_field(json, "transaction_fee"),
        ) {
            self.transaction_fee_changed();
        }

        self.set_create_time(parse_timestamp(string_field(json, "create_time")));
        self.set_update_time(parse_timestamp(string_field(json, "update_time")));

        self.links.clear();
        self.notifier
            .emit(&CaptureEvent::LinksChanged { links: &self.links });
        let items = array_field(json, "links");
        if !items.is_empty() {
            self.links = LinkSet::from_json(items);
        }
    }

    /// Build the outbound capture request body
    ///
    /// Only client-submittable fields are emitted. `invoice_number` is cut
    /// to the configured length and omitted when empty.
    fn project(&self) -> JsonObject {
        tracing::trace!(resource = Self::resource_name(), "project");

        let mut json = JsonObject::new();

        if let Some(amount) = &self.amount {
            json.insert("amount".to_string(), Value::Object(amount.project()));
        }

        json.insert(
            "is_final_capture".to_string(),
            Value::Bool(self.is_final_capture),
        );

        insert_truncated(
            &mut json,
            "invoice_number",
            &self.invoice_number,
            self.config.invoice_number_max_chars,
        );

        if let Some(fee) = &self.transaction_fee {
            json.insert(
                self.config.transaction_fee_key.clone(),
                Value::Object(fee.project()),
            );
        }

        json
    }
}

impl Resource for CaptureResource {
    fn resource_name() -> &'static str {
        "capture"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn create_time(&self) -> Option<DateTime<Utc>> {
        self.create_time
    }

    fn update_time(&self) -> Option<DateTime<Utc>> {
        self.update_time
    }

    fn links(&self) -> &LinkSet {
        &self.links
    }
}
