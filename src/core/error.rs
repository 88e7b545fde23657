//! Error types for the capture crate
//!
//! Hydration and projection are total and never produce these. Errors only
//! arise at the edges: parsing raw document text and loading configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    /// The raw document text is not valid JSON
    #[error("malformed JSON document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    /// A configuration value is out of range or inconsistent
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CaptureError {
    /// Stable error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CaptureError::MalformedDocument(_) => "MALFORMED_DOCUMENT",
            CaptureError::Config(_) => "CONFIG_ERROR",
            CaptureError::Io(_) => "IO_ERROR",
        }
    }
}
