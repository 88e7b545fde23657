//! Wire token mapping for the closed enum sets carried by a capture
//!
//! Tokens are matched exactly. Anything unrecognized, including the empty
//! token, resolves to the `Unknown` member of the target enum.

use serde::Serialize;

macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $token:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
        pub enum $name {
            /// Empty or unrecognized wire token
            #[default]
            Unknown,
            $($variant,)+
        }

        impl $name {
            const TOKENS: &'static [($name, &'static str)] = &[$(($name::$variant, $token)),+];

            fn from_token(token: &str) -> Option<Self> {
                Self::TOKENS
                    .iter()
                    .find(|(_, candidate)| *candidate == token)
                    .map(|(value, _)| *value)
            }

            fn as_token(self) -> &'static str {
                Self::TOKENS
                    .iter()
                    .find(|(value, _)| *value == self)
                    .map(|(_, token)| *token)
                    .unwrap_or_default()
            }
        }
    };
}

token_enum! {
    /// Processing state of a capture
    StateType {
        Created => "created",
        Approved => "approved",
        Failed => "failed",
        Canceled => "canceled",
        Expired => "expired",
        Pending => "pending",
        Completed => "completed",
        PartiallyRefunded => "partially_refunded",
        Refunded => "refunded",
        Denied => "denied",
        Authorized => "authorized",
        Captured => "captured",
        PartiallyCaptured => "partially_captured",
        Voided => "voided",
        InProgress => "in_progress",
    }
}

token_enum! {
    /// Why a capture is in its current state, mostly set for pending captures
    ReasonCode {
        Chargeback => "CHARGEBACK",
        Guarantee => "GUARANTEE",
        BuyerComplaint => "BUYER_COMPLAINT",
        Refund => "REFUND",
        UnconfirmedShippingAddress => "UNCONFIRMED_SHIPPING_ADDRESS",
        Echeck => "ECHECK",
        InternationalWithdrawal => "INTERNATIONAL_WITHDRAWAL",
        ReceivingPreferenceMandatesManualAction => "RECEIVING_PREFERENCE_MANDATES_MANUAL_ACTION",
        PaymentReview => "PAYMENT_REVIEW",
        RegulatoryReview => "REGULATORY_REVIEW",
        Unilateral => "UNILATERAL",
        VerificationRequired => "VERIFICATION_REQUIRED",
        TransactionApprovedAwaitingFunding => "TRANSACTION_APPROVED_AWAITING_FUNDING",
    }
}

/// Stateless mapping between wire tokens and enum members
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumCodec;

impl EnumCodec {
    /// Resolve a `state` token
    pub fn token_to_state(token: &str) -> StateType {
        StateType::from_token(token).unwrap_or_else(|| {
            if !token.is_empty() {
                tracing::debug!(token, "unknown state token");
            }
            StateType::Unknown
        })
    }

    /// Resolve a `reason_code` token
    pub fn token_to_reason(token: &str) -> ReasonCode {
        ReasonCode::from_token(token).unwrap_or_else(|| {
            if !token.is_empty() {
                tracing::debug!(token, "unknown reason code token");
            }
            ReasonCode::Unknown
        })
    }

    /// Wire token for a state, empty for [`StateType::Unknown`]
    pub fn state_token(state: StateType) -> &'static str {
        state.as_token()
    }

    /// Wire token for a reason code, empty for [`ReasonCode::Unknown`]
    pub fn reason_token(reason: ReasonCode) -> &'static str {
        reason.as_token()
    }
}
