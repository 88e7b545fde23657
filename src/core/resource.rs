//! Traits shared by the wire-backed resources of the crate

use crate::core::link::{Link, LinkSet, LinkTarget};
use crate::core::wire::JsonObject;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// An object that can be loaded from and projected to its wire representation
pub trait WireObject {
    /// Load state from a wire object. Never fails: missing or malformed
    /// members fall back to their defaults.
    fn hydrate(&mut self, json: &JsonObject);

    /// Produce the outbound representation of the current state
    fn project(&self) -> JsonObject;
}

/// Base trait for server-side resources.
///
/// Every resource has:
/// - id: Server-assigned identifier
/// - create_time / update_time: Server timestamps (absent until hydrated)
/// - links: Hypermedia links for navigating to related operations
pub trait Resource: WireObject {
    /// The resource name used in logs (e.g., "capture")
    fn resource_name() -> &'static str
    where
        Self: Sized;

    fn id(&self) -> &str;

    fn create_time(&self) -> Option<DateTime<Utc>>;

    fn update_time(&self) -> Option<DateTime<Utc>>;

    fn links(&self) -> &LinkSet;

    /// First link with the given relation
    fn find_link(&self, rel: &str) -> Option<&Link> {
        self.links().get(rel)
    }

    /// Target of the first link with the given relation, `None` if there
    /// is no such link or its `href` is empty
    fn link_url(&self, rel: &str) -> Option<&LinkTarget> {
        self.find_link(rel).and_then(Link::target_url)
    }
}

/// Parse an ISO-8601 timestamp. Empty or malformed input yields `None`.
///
/// Offsets are honoured; a timestamp without one is read as UTC, and a bare
/// date (`2016-03-01`) as midnight UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
        .or_else(|| {
            tracing::debug!(raw, "malformed timestamp, treating as absent");
            None
        })
}
