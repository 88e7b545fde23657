//! Concrete resources exposed by the payment service

pub mod capture;

pub use capture::CaptureResource;
