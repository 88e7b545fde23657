//! Lenient accessors over raw JSON objects
//!
//! Hydration never rejects input. These helpers read a member and coerce
//! anything of the wrong JSON type to the empty value of the requested type,
//! so `"amount": 12` reads as an empty object and `"id": null` as `""`.

use serde_json::{Map, Value};

/// A JSON object as delivered on the wire
pub type JsonObject = Map<String, Value>;

/// Read a string member, or `""` if absent or not a string
pub fn string_field<'a>(json: &'a JsonObject, key: &str) -> &'a str {
    json.get(key).and_then(Value::as_str).unwrap_or_default()
}

/// Read an object member, or `None` if absent, not an object, or empty
pub fn object_field<'a>(json: &'a JsonObject, key: &str) -> Option<&'a JsonObject> {
    json.get(key)
        .and_then(Value::as_object)
        .filter(|obj| !obj.is_empty())
}

/// Read an array member, or an empty slice if absent or not an array
pub fn array_field<'a>(json: &'a JsonObject, key: &str) -> &'a [Value] {
    json.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Insert a string, truncated to `max_chars` characters, skipping empty values
///
/// A `max_chars` of zero disables truncation.
pub fn insert_truncated(json: &mut JsonObject, key: &str, value: &str, max_chars: usize) {
    if value.is_empty() {
        return;
    }

    let value = if max_chars > 0 && value.chars().count() > max_chars {
        value.chars().take(max_chars).collect()
    } else {
        value.to_string()
    };

    json.insert(key.to_string(), Value::String(value));
}
