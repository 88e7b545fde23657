//! Monetary sub-resource shared by the capture amount and the transaction fee

use crate::core::resource::WireObject;
use crate::core::wire::{JsonObject, object_field, string_field};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;

/// A currency code with a decimal value
///
/// Values go out as strings that keep their scale, so `7.50` stays `"7.50"`.
///
/// Input accepts the numeric part under `value` or, when that is absent,
/// under `total` (the key the service uses for capture amounts). Output is
/// always keyed `value`, so a `total`-keyed amount does not come back out
/// under the key it arrived with.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Money {
    /// Three-letter ISO-4217 currency code, as received
    currency: String,

    /// Numeric amount; zero when missing or malformed
    value: Decimal,

    /// Optional itemized breakdown
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<AmountDetails>,
}

impl Money {
    /// Create an amount without details
    pub fn new(currency: impl Into<String>, value: Decimal) -> Self {
        Self {
            currency: currency.into(),
            value,
            details: None,
        }
    }

    /// Build a new instance from its wire object
    pub fn from_json(json: &JsonObject) -> Self {
        let mut money = Self::default();
        money.hydrate(json);
        money
    }

    /// Three-letter ISO-4217 currency code
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Numeric amount
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Itemized breakdown, if the server sent one
    pub fn details(&self) -> Option<&AmountDetails> {
        self.details.as_ref()
    }

    /// Replace the currency code
    pub fn set_currency(&mut self, currency: impl Into<String>) {
        self.currency = currency.into();
    }

    /// Replace the numeric amount
    pub fn set_value(&mut self, value: Decimal) {
        self.value = value;
    }

    /// Replace or clear the breakdown
    pub fn set_details(&mut self, details: Option<AmountDetails>) {
        self.details = details;
    }
}

impl WireObject for Money {
    /// Overwrite currency, value and details in place
    fn hydrate(&mut self, json: &JsonObject) {
        self.currency = string_field(json, "currency").to_string();
        self.value = match json.get("value") {
            Some(value) => decimal_from(value),
            None => json.get("total").map(decimal_from).unwrap_or_default(),
        };
        self.details = object_field(json, "details").map(AmountDetails::from_json);
    }

    fn project(&self) -> JsonObject {
        let mut json = JsonObject::new();
        json.insert("currency".into(), Value::String(self.currency.clone()));
        json.insert("value".into(), Value::String(self.value.to_string()));
        if let Some(details) = &self.details {
            json.insert("details".into(), Value::Object(details.project()));
        }
        json
    }
}

/// Itemized breakdown of an amount
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AmountDetails {
    /// Sum of the line items
    pub subtotal: Option<Decimal>,

    /// Shipping charge
    pub shipping: Option<Decimal>,

    /// Tax charged
    pub tax: Option<Decimal>,

    /// Handling fee
    pub handling_fee: Option<Decimal>,

    /// Discount applied to shipping
    pub shipping_discount: Option<Decimal>,

    /// Shipping insurance
    pub insurance: Option<Decimal>,

    /// Gift wrapping charge
    pub gift_wrap: Option<Decimal>,
}

impl AmountDetails {
    fn fields_mut(&mut self) -> [(&'static str, &mut Option<Decimal>); 7] {
        [
            ("subtotal", &mut self.subtotal),
            ("shipping", &mut self.shipping),
            ("tax", &mut self.tax),
            ("handling_fee", &mut self.handling_fee),
            ("shipping_discount", &mut self.shipping_discount),
            ("insurance", &mut self.insurance),
            ("gift_wrap", &mut self.gift_wrap),
        ]
    }

    fn fields(&self) -> [(&'static str, Option<Decimal>); 7] {
        [
            ("subtotal", self.subtotal),
            ("shipping", self.shipping),
            ("tax", self.tax),
            ("handling_fee", self.handling_fee),
            ("shipping_discount", self.shipping_discount),
            ("insurance", self.insurance),
            ("gift_wrap", self.gift_wrap),
        ]
    }

    /// Read the breakdown; members that are absent stay `None`
    pub fn from_json(json: &JsonObject) -> Self {
        let mut details = Self::default();
        for (key, slot) in details.fields_mut() {
            *slot = json.get(key).map(decimal_from);
        }
        details
    }

    /// Emit only the members that are set
    pub fn project(&self) -> JsonObject {
        self.fields()
            .into_iter()
            .filter_map(|(key, value)| {
                value.map(|value| (key.to_string(), Value::String(value.to_string())))
            })
            .collect()
    }
}

/// Read a decimal from a string or number; anything else is zero
fn decimal_from(value: &Value) -> Decimal {
    let parsed = match value {
        Value::String(s) => Decimal::from_str(s.trim()),
        Value::Number(n) => Decimal::from_str(&n.to_string()),
        _ => return Decimal::ZERO,
    };

    parsed.unwrap_or_else(|err| {
        tracing::debug!(%value, error = %err, "malformed monetary value, using zero");
        Decimal::ZERO
    })
}
