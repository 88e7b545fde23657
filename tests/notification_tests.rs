//! Integration tests for change notification ordering
//!
//! These tests verify that:
//! - Events fire synchronously, in field order, during hydrate
//! - Unchanged fields stay quiet
//! - The link collection is always announced empty before it is repopulated

mod common;

use capture::prelude::*;
use common::{Seen, completed_capture, init_tracing, object, record_events};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_first_hydrate_event_order() {
    init_tracing();
    let mut capture = CaptureResource::new();
    let seen = record_events(&mut capture);

    capture.hydrate(&object(completed_capture()));

    assert_eq!(
        *seen.borrow(),
        vec![
            Seen::Field("id"),
            Seen::Field("amount"),
            Seen::Field("is_final_capture"),
            Seen::Field("state"),
            Seen::Field("parent_payment"),
            Seen::Field("invoice_number"),
            Seen::Field("transaction_fee"),
            Seen::Field("create_time"),
            Seen::Field("update_time"),
            Seen::Links(0),
        ]
    );
    assert_eq!(capture.links().len(), 3);
}

#[test]
fn test_links_are_announced_empty_before_repopulating() {
    let mut capture = CaptureResource::from_document(&completed_capture());
    assert_eq!(capture.links().len(), 3);
    let seen = record_events(&mut capture);

    let mut next = completed_capture();
    next["links"] = json!([
        {"rel": "self", "href": "https://api.example.com/v1/payments/capture/8F148933LY9388354"},
        {"rel": "refund", "href": "https://api.example.com/v1/payments/capture/8F148933LY9388354/refund"}
    ]);
    capture.hydrate(&object(next));

    assert_eq!(*seen.borrow(), vec![Seen::Links(0)]);
    assert_eq!(capture.links().len(), 2);
}

#[test]
fn test_links_changed_fires_even_when_already_empty() {
    let mut capture = CaptureResource::new();
    let seen = record_events(&mut capture);

    capture.hydrate(&object(json!({"id": "CAP-1"})));
    capture.hydrate(&object(json!({"id": "CAP-1"})));

    assert_eq!(
        *seen.borrow(),
        vec![Seen::Field("id"), Seen::Links(0), Seen::Links(0)]
    );
}

#[test]
fn test_rehydrate_same_payload_only_announces_links() {
    let json = object(completed_capture());
    let mut capture = CaptureResource::from_object(&json);
    let seen = record_events(&mut capture);

    capture.hydrate(&json);

    assert_eq!(*seen.borrow(), vec![Seen::Links(0)]);
}

#[test]
fn test_in_place_money_update_is_silent() {
    let mut capture = CaptureResource::from_document(&completed_capture());
    let seen = record_events(&mut capture);

    let mut next = completed_capture();
    next["amount"] = json!({"currency": "USD", "value": "1.00"});
    capture.hydrate(&object(next));

    assert!(!seen.borrow().contains(&Seen::Field("amount")));
    assert_eq!(capture.amount().unwrap().value(), Decimal::ONE);
}

#[test]
fn test_clearing_money_is_announced() {
    let mut capture = CaptureResource::from_document(&completed_capture());

    let cleared = Rc::new(RefCell::new(Vec::new()));
    let sink = cleared.clone();
    capture.subscribe(move |event| {
        if let CaptureEvent::AmountChanged { amount } = event {
            sink.borrow_mut().push(amount.is_none());
        }
    });

    let mut next = completed_capture();
    next.as_object_mut().unwrap().remove("amount");
    capture.hydrate(&object(next));

    assert_eq!(*cleared.borrow(), vec![true]);
}

#[test]
fn test_payload_carries_new_value() {
    let mut capture = CaptureResource::new();

    let states = Rc::new(RefCell::new(Vec::new()));
    let sink = states.clone();
    capture.subscribe(move |event| {
        if let CaptureEvent::StateChanged { state } = event {
            sink.borrow_mut().push(*state);
        }
    });

    capture.hydrate(&object(json!({"state": "pending"})));
    capture.hydrate(&object(json!({"state": "completed"})));
    capture.hydrate(&object(json!({"state": "completed"})));

    assert_eq!(*states.borrow(), vec![StateType::Pending, StateType::Completed]);
}

#[test]
fn test_unsubscribed_listener_is_not_called() {
    let mut capture = CaptureResource::new();
    let seen = Rc::new(RefCell::new(0));
    let sink = seen.clone();
    let id = capture.subscribe(move |_| *sink.borrow_mut() += 1);

    capture.set_invoice_number("INV-1");
    assert!(capture.unsubscribe(id));
    capture.set_invoice_number("INV-2");

    assert_eq!(*seen.borrow(), 1);
}
