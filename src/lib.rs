//! # Capture-RS
//!
//! Typed model of a payment-service capture resource: money captured against
//! an authorized payment.
//!
//! ## Features
//!
//! - **Lenient Hydration**: Load from service JSON; missing or malformed fields fall back to defaults
//! - **Request Projection**: Emit only the fields a client may submit, with length limits applied
//! - **Owned Sub-Resources**: Amount and fee are exclusively owned and updated in place on reload
//! - **Hypermedia Links**: Ordered links, looked up by relation (first occurrence wins)
//! - **Change Notification**: Synchronous listeners, called at the point of each mutation
//! - **Configurable Output**: Invoice length limit and fee key via YAML configuration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use capture::prelude::*;
//! use serde_json::json;
//!
//! let response = json!({
//!     "id": "8F148933LY9388354",
//!     "amount": {"currency": "USD", "value": "110.54"},
//!     "state": "completed",
//!     "links": [{"rel": "refund", "href": "https://api.example.com/v1/capture/8F14/refund", "method": "POST"}]
//! });
//!
//! let mut capture = CaptureResource::from_document(&response);
//! assert_eq!(capture.state(), StateType::Completed);
//!
//! let refund_url = capture.link_url("refund");
//!
//! capture.set_invoice_number("INV-2016-0001");
//! let body = capture.project(); // {"amount": ..., "is_final_capture": false, "invoice_number": ...}
//! ```

pub mod config;
pub mod core;
pub mod entities;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{Resource, WireObject};

    // === Wire Types ===
    pub use crate::core::{
        AmountDetails, EnumCodec, JsonObject, Link, LinkSet, LinkTarget, Money, ReasonCode,
        StateType,
    };

    // === Notification ===
    pub use crate::core::{CaptureEvent, SubscriptionId};

    // === Errors ===
    pub use crate::core::CaptureError;

    // === Config ===
    pub use crate::config::CaptureConfig;

    // === Resources ===
    pub use crate::entities::CaptureResource;

    // === External dependencies ===
    pub use chrono::{DateTime, Utc};
    pub use rust_decimal::Decimal;
    pub use url::Url;
}
