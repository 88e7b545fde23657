//! Hypermedia links attached to a resource
//!
//! A resource carries an ordered list of links. Each link names a relation
//! (`self`, `refund`, `parent_payment`, ...) and a target URL. Relations may
//! repeat; lookups by relation always resolve to the first occurrence.

use crate::core::wire::{JsonObject, string_field};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use url::Url;

/// Target of a link as sent on the wire
///
/// Absolute hrefs are parsed; anything else (a path like
/// `/v1/payments/capture/CAP-1`) is kept verbatim so it can be resolved
/// against a base URL later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LinkTarget {
    /// A fully qualified URL
    Absolute(Url),

    /// A relative or otherwise non-absolute reference, unchanged
    Reference(String),
}

impl LinkTarget {
    fn parse(href: &str) -> Option<Self> {
        if href.is_empty() {
            return None;
        }

        match Url::parse(href) {
            Ok(url) => Some(LinkTarget::Absolute(url)),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Some(LinkTarget::Reference(href.to_string()))
            }
            Err(err) => {
                tracing::debug!(href, error = %err, "keeping unparseable link href verbatim");
                Some(LinkTarget::Reference(href.to_string()))
            }
        }
    }

    /// The target as a string, exactly as the server sent it for references
    pub fn as_str(&self) -> &str {
        match self {
            LinkTarget::Absolute(url) => url.as_str(),
            LinkTarget::Reference(href) => href,
        }
    }

    /// The parsed URL, if the target is absolute
    pub fn absolute(&self) -> Option<&Url> {
        match self {
            LinkTarget::Absolute(url) => Some(url),
            LinkTarget::Reference(_) => None,
        }
    }

    /// Resolve the target against `base`; absolute targets ignore the base
    pub fn resolve(&self, base: &Url) -> Option<Url> {
        match self {
            LinkTarget::Absolute(url) => Some(url.clone()),
            LinkTarget::Reference(href) => base.join(href).ok(),
        }
    }
}

/// A single hypermedia link
///
/// Links are immutable once built and carry no structural equality: owners
/// hand out references for navigation, not for comparison.
#[derive(Debug, Clone, Serialize)]
pub struct Link {
    /// The relation name (e.g., "self", "refund", "parent_payment")
    rel: String,

    /// The raw `href` member, empty when the server sent none
    href: String,

    /// The parsed target, `None` when `href` is empty
    target: Option<LinkTarget>,

    /// HTTP method to use when following the link (e.g., "GET", "POST")
    method: Option<String>,
}

impl Link {
    /// Build a link from its wire object (`rel`, `href`, optional `method`)
    ///
    /// Only a missing or empty `href` leaves the target empty.
    pub fn from_json(json: &JsonObject) -> Self {
        let href = string_field(json, "href");
        let method = string_field(json, "method");

        Self {
            rel: string_field(json, "rel").to_string(),
            href: href.to_string(),
            target: LinkTarget::parse(href),
            method: (!method.is_empty()).then(|| method.to_string()),
        }
    }

    /// The relation name
    pub fn relation(&self) -> &str {
        &self.rel
    }

    /// The `href` exactly as received, `""` when absent
    pub fn href(&self) -> &str {
        &self.href
    }

    /// The target, `None` when empty
    pub fn target_url(&self) -> Option<&LinkTarget> {
        self.target.as_ref()
    }

    /// HTTP method to use when following the link, if the server named one
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// Whether the link has no target at all
    pub fn is_empty_target(&self) -> bool {
        self.target.is_none()
    }
}

/// Ordered collection of links, indexed by the first occurrence of each relation
#[derive(Debug, Clone, Default)]
pub struct LinkSet {
    /// Links in wire order
    links: Vec<Link>,

    /// Relation -> position of its first occurrence in `links`
    first_by_rel: IndexMap<String, usize>,
}

impl LinkSet {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from a wire array; non-object elements become empty links
    pub fn from_json(items: &[Value]) -> Self {
        let empty = JsonObject::new();
        items
            .iter()
            .map(|item| Link::from_json(item.as_object().unwrap_or(&empty)))
            .collect()
    }

    /// Append a link, indexing its relation if this is the first occurrence
    pub fn push(&mut self, link: Link) {
        let position = self.links.len();
        self.first_by_rel
            .entry(link.rel.clone())
            .or_insert(position);
        self.links.push(link);
    }

    /// First link with the given relation
    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.first_by_rel.get(rel).map(|&idx| &self.links[idx])
    }

    /// Distinct relations, in order of first occurrence
    pub fn relations(&self) -> impl Iterator<Item = &str> {
        self.first_by_rel.keys().map(String::as_str)
    }

    /// Links in wire order
    pub fn iter(&self) -> std::slice::Iter<'_, Link> {
        self.links.iter()
    }

    /// Links in wire order, as a slice
    pub fn as_slice(&self) -> &[Link] {
        &self.links
    }

    /// Number of links, counting repeated relations
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the collection holds no links
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Drop every link and the relation index
    pub fn clear(&mut self) {
        self.links.clear();
        self.first_by_rel.clear();
    }
}

impl FromIterator<Link> for LinkSet {
    fn from_iter<I: IntoIterator<Item = Link>>(iter: I) -> Self {
        let mut set = LinkSet::new();
        for link in iter {
            set.push(link);
        }
        set
    }
}

impl<'a> IntoIterator for &'a LinkSet {
    type Item = &'a Link;
    type IntoIter = std::slice::Iter<'a, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}

impl Serialize for LinkSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.links.serialize(serializer)
    }
}
