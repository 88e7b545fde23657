//! Configuration loading and management

use crate::core::error::CaptureError;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Outbound key the payment service has historically accepted for the fee
pub const LEGACY_TRANSACTION_FEE_KEY: &str = "transaction_feee";

/// Projection settings for capture resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Maximum length of `invoice_number` on output, in characters
    ///
    /// Zero disables truncation.
    #[serde(default = "default_invoice_number_max_chars")]
    pub invoice_number_max_chars: usize,

    /// Key the transaction fee is projected under
    ///
    /// Defaults to the misspelled [`LEGACY_TRANSACTION_FEE_KEY`] for
    /// compatibility with the existing service contract.
    #[serde(default = "default_transaction_fee_key")]
    pub transaction_fee_key: String,
}

fn default_invoice_number_max_chars() -> usize {
    127
}

fn default_transaction_fee_key() -> String {
    LEGACY_TRANSACTION_FEE_KEY.to_string()
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            invoice_number_max_chars: default_invoice_number_max_chars(),
            transaction_fee_key: default_transaction_fee_key(),
        }
    }
}

impl CaptureConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(CaptureError::from)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would produce an unusable projection
    pub fn validate(&self) -> Result<(), CaptureError> {
        if self.transaction_fee_key.trim().is_empty() {
            return Err(CaptureError::Config(
                "transaction_fee_key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
