//! Drupal JSON:API content client.
//!
//! Fetches sparse JSON:API documents from a Drupal-backed CMS and
//! reconstructs the dereferenced entity graph: a node's media reference,
//! that media's underlying file, and finally an absolute URL a page can
//! use. Also normalizes the heterogeneous shapes rich-text fields arrive
//! in.
//!
//! Resolution is deliberately forgiving. Content editors leave fields
//! half-filled and sparse fetches omit entities, so every lookup failure
//! degrades to "no value" instead of an error; only the HTTP transport
//! returns `Err`.
//!
//! # Example
//!
//! ```rust,ignore
//! use drupal_jsonapi::{ClientConfig, Hop, JsonApiClient, resolve_media_url};
//!
//! let client = JsonApiClient::new(ClientConfig::new("https://cms.example.com"))?;
//! let doc = client
//!     .fetch_document("node/home_page", &["field_hero_image.field_media_image"])
//!     .await?;
//!
//! let hero = doc.primary().and_then(|node| {
//!     resolve_media_url(
//!         node,
//!         &doc.included,
//!         &[
//!             Hop::new("field_hero_image", "media--image"),
//!             Hop::new("field_media_image", "file--file"),
//!         ],
//!         client.base_url(),
//!     )
//! });
//! ```

pub mod client;
pub mod document;
pub mod error;
pub mod fields;
pub mod links;
pub mod resolve;

pub use client::{ClientConfig, JsonApiClient};
pub use document::{Document, Entity, PrimaryData, Reference, ReferenceData, Relationship};
pub use error::{JsonApiError, Result};
pub use fields::{entity_text, normalize_text, strip_tags, TextMode};
pub use links::{to_absolute_url, to_safe_link_href};
pub use resolve::{
    file_url, find_included, resolve_entity, resolve_media_url, resolve_media_urls, Hop,
};
