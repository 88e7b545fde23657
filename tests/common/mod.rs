//! Shared fixtures for the integration tests

#![allow(dead_code)]

use capture::prelude::*;
use serde_json::{Value, json};
use std::cell::RefCell;
use std::rc::Rc;

/// Install a test-friendly subscriber; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A completed capture as returned by the service
pub fn completed_capture() -> Value {
    json!({
        "id": "8F148933LY9388354",
        "amount": {"currency": "USD", "total": "110.54"},
        "is_final_capture": "true",
        "state": "completed",
        "reason_code": "",
        "parent_payment": "PAY-8PT597110X687430LKGECATA",
        "invoice_number": "INV-2016-0001",
        "transaction_fee": {"currency": "USD", "value": "3.50"},
        "create_time": "2016-03-01T12:30:45Z",
        "update_time": "2016-03-01T12:31:02Z",
        "links": [
            {"rel": "self", "href": "https://api.example.com/v1/payments/capture/8F148933LY9388354", "method": "GET"},
            {"rel": "refund", "href": "https://api.example.com/v1/payments/capture/8F148933LY9388354/refund", "method": "POST"},
            {"rel": "parent_payment", "href": "https://api.example.com/v1/payments/payment/PAY-8PT597110X687430LKGECATA", "method": "GET"}
        ]
    })
}

pub fn object(value: Value) -> JsonObject {
    value.as_object().cloned().expect("fixture must be a JSON object")
}

/// Event log entry: field name, plus the link count for `LinksChanged`
#[derive(Debug, Clone, PartialEq)]
pub enum Seen {
    Field(&'static str),
    Links(usize),
}

/// Subscribe a listener that records every event in order
pub fn record_events(capture: &mut CaptureResource) -> Rc<RefCell<Vec<Seen>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    capture.subscribe(move |event| {
        let entry = match event {
            CaptureEvent::LinksChanged { links } => Seen::Links(links.len()),
            other => Seen::Field(other.field()),
        };
        sink.borrow_mut().push(entry);
    });
    seen
}
