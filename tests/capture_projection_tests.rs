//! Integration tests for building capture request bodies

mod common;

use capture::prelude::*;
use common::{completed_capture, object};
use serde_json::{Value, json};

#[test]
fn test_projection_is_a_strict_subset() {
    let capture = CaptureResource::from_document(&completed_capture());
    let json = capture.project();

    for key in [
        "id",
        "state",
        "reason_code",
        "parent_payment",
        "create_time",
        "update_time",
        "links",
    ] {
        assert!(!json.contains_key(key), "projection must not emit {key}");
    }

    assert_eq!(
        Value::Object(json),
        json!({
            "amount": {"currency": "USD", "value": "110.54"},
            "is_final_capture": true,
            "invoice_number": "INV-2016-0001",
            "transaction_feee": {"currency": "USD", "value": "3.50"}
        })
    );
}

#[test]
fn test_projection_of_empty_capture() {
    let capture = CaptureResource::new();
    assert_eq!(
        Value::Object(capture.project()),
        json!({"is_final_capture": false})
    );
}

#[test]
fn test_is_final_capture_is_a_boolean_on_output() {
    let mut capture = CaptureResource::new();
    capture.set_is_final_capture(true);
    assert_eq!(capture.project()["is_final_capture"], Value::Bool(true));
}

#[test]
fn test_invoice_number_is_truncated_only_on_output() {
    let long = "x".repeat(200);
    let mut capture = CaptureResource::new();
    capture.set_invoice_number(long.clone());

    let json = capture.project();

    assert_eq!(json["invoice_number"].as_str().unwrap().chars().count(), 127);
    assert_eq!(capture.invoice_number(), long);
    assert_eq!(capture.invoice_number().len(), 200);
}

#[test]
fn test_invoice_number_at_limit_is_kept() {
    let exact = "y".repeat(127);
    let mut capture = CaptureResource::new();
    capture.set_invoice_number(exact.clone());

    assert_eq!(capture.project()["invoice_number"], Value::String(exact));
}

#[test]
fn test_invoice_number_truncation_is_character_based() {
    let long = "€".repeat(130);
    let mut capture = CaptureResource::new();
    capture.set_invoice_number(long);

    let json = capture.project();
    assert_eq!(json["invoice_number"].as_str().unwrap(), "€".repeat(127));
}

#[test]
fn test_configured_invoice_limit() {
    let config = CaptureConfig {
        invoice_number_max_chars: 10,
        ..CaptureConfig::default()
    };
    let mut capture = CaptureResource::with_config(config);
    capture.set_invoice_number("INV-2016-000123");

    assert_eq!(capture.project()["invoice_number"], "INV-2016-0");
}

#[test]
fn test_fee_uses_legacy_key_by_default() {
    let mut capture = CaptureResource::new();
    capture.set_transaction_fee(Some(Money::new("USD", Decimal::new(25, 2))));

    let json = capture.project();
    assert!(json.contains_key("transaction_feee"));
    assert!(!json.contains_key("transaction_fee"));
}

#[test]
fn test_amount_details_are_projected() {
    let capture = CaptureResource::from_object(&object(json!({
        "id": "CAP-1",
        "amount": {
            "currency": "USD",
            "total": "12.00",
            "details": {"subtotal": "10.00", "shipping": "2.00"}
        }
    })));

    assert_eq!(
        capture.project()["amount"],
        json!({
            "currency": "USD",
            "value": "12.00",
            "details": {"subtotal": "10.00", "shipping": "2.00"}
        })
    );
}

#[test]
fn test_hydrate_then_project_does_not_reproduce_input() {
    let input = completed_capture();
    let capture = CaptureResource::from_document(&input);
    assert_ne!(Value::Object(capture.project()), input);
}
