//! Field value normalization.
//!
//! Rich-text and reference fields arrive in several shapes depending on
//! content type and CMS configuration: a bare string, a
//! `{value, processed}` object, or an array of such objects. This module
//! collapses all of them into one canonical string.
//!
//! Precedence, first match wins:
//! - `null` -> `""`
//! - string -> itself
//! - array -> its first element, recursively (empty array -> `""`)
//! - object with `processed` -> that member, recursively
//! - object with `value` -> that member, recursively
//! - anything else -> best-effort stringification
//!
//! Normalization never fails; malformed input degrades to `""` or to the
//! value's JSON rendering.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use crate::document::Entity;

lazy_static! {
    // Any tag-shaped run, attribute-bearing and self-closing included.
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Output mode for [`normalize_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    /// Canonical string with all HTML tags stripped.
    Plain,
    /// Canonical string as-is. Sanitization is the consumer's concern.
    Html,
}

/// Normalize a raw field value into a canonical string.
pub fn normalize_text(value: &Value, mode: TextMode) -> String {
    let text = canonical_text(value);
    match mode {
        TextMode::Plain => strip_tags(&text),
        TextMode::Html => text,
    }
}

/// Normalize a named attribute of an entity. Absent fields yield `""`.
pub fn entity_text(entity: &Entity, field: &str, mode: TextMode) -> String {
    entity
        .attr(field)
        .map(|value| normalize_text(value, mode))
        .unwrap_or_default()
}

/// Remove every `<...>` occurrence from a string.
pub fn strip_tags(html: &str) -> String {
    TAG_REGEX.replace_all(html, "").into_owned()
}

fn canonical_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items.first().map(canonical_text).unwrap_or_default(),
        Value::Object(map) => match map.get("processed").or_else(|| map.get("value")) {
            Some(inner) => canonical_text(inner),
            None => value.to_string(),
        },
        other => other.to_string(),
    }
}
