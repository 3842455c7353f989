//! Page-level content aggregation.
//!
//! One module per page of the site. Each module builds its content
//! object from a fetched JSON:API document and carries a fallback used
//! when the CMS is unreachable, so a page render never depends on a
//! live fetch succeeding.

pub mod about;
pub mod home;
pub mod locations;
pub mod services;
pub mod toolbox;

use drupal_jsonapi::{to_safe_link_href, Entity, Hop};
use serde_json::Value;

/// Rendered by the frontend when a media chain fails to resolve.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";

/// The standard node -> media--image -> file--file chain, parameterized
/// by the node-side field name.
pub(crate) fn image_chain(field: &str) -> [Hop<'_>; 2] {
    [
        Hop::new(field, "media--image"),
        Hop::new("field_media_image", "file--file"),
    ]
}

/// Read a link field's `uri` member as a safe href.
pub(crate) fn link_href(entity: &Entity, field: &str) -> String {
    let uri = entity
        .attr(field)
        .and_then(|link| link.get("uri"))
        .and_then(Value::as_str)
        .unwrap_or_default();
    to_safe_link_href(uri)
}

/// Read a link field's `title` member.
pub(crate) fn link_title(entity: &Entity, field: &str) -> String {
    entity
        .attr(field)
        .and_then(|link| link.get("title"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Read a node's `path.alias` as a safe href.
pub(crate) fn path_alias(entity: &Entity) -> String {
    let alias = entity
        .attr("path")
        .and_then(|path| path.get("alias"))
        .and_then(Value::as_str)
        .unwrap_or_default();
    to_safe_link_href(alias)
}

pub(crate) fn image_or_placeholder(url: Option<String>) -> String {
    url.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
}
