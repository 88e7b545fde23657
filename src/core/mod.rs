//! Core module containing the wire types and traits shared by resources

pub mod enums;
pub mod error;
pub mod events;
pub mod link;
pub mod money;
pub mod resource;
pub mod wire;

pub use enums::{EnumCodec, ReasonCode, StateType};
pub use error::CaptureError;
pub use events::{CaptureEvent, Notifier, SubscriptionId};
pub use link::{Link, LinkSet, LinkTarget};
pub use money::{AmountDetails, Money};
pub use resource::{Resource, WireObject};
pub use wire::JsonObject;
