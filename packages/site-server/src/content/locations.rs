//! Office locations content.

use drupal_jsonapi::{entity_text, resolve_media_urls, Document, Entity, JsonApiClient, TextMode};
use serde::Serialize;

use super::{image_chain, link_href};

const INCLUDES: &[&str] = &["field_photos.field_media_image"];

#[derive(Debug, Clone, Serialize)]
pub struct LocationsContent {
    pub locations: Vec<LocationItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationItem {
    pub name: String,
    pub address_html: String,
    pub phone: String,
    pub hours: String,
    pub photo_urls: Vec<String>,
    pub map_href: String,
}

impl LocationsContent {
    pub fn fallback() -> Self {
        Self {
            locations: Vec::new(),
        }
    }

    pub fn from_document(doc: &Document, base_url: &str) -> Self {
        let locations = doc
            .entities()
            .iter()
            .map(|node| LocationItem::from_entity(node, doc, base_url))
            .collect();
        Self { locations }
    }
}

impl LocationItem {
    fn from_entity(node: &Entity, doc: &Document, base_url: &str) -> Self {
        // Locations legitimately carry several photos; failed chains
        // drop out of the gallery rather than leaving gaps.
        let photo_urls = resolve_media_urls(
            node,
            &doc.included,
            &image_chain("field_photos"),
            base_url,
        );

        Self {
            name: entity_text(node, "title", TextMode::Plain),
            address_html: entity_text(node, "field_address", TextMode::Html),
            phone: entity_text(node, "field_phone", TextMode::Plain),
            hours: entity_text(node, "field_hours", TextMode::Plain),
            photo_urls,
            map_href: link_href(node, "field_map_link"),
        }
    }
}

pub async fn load(client: &JsonApiClient) -> LocationsContent {
    match client.fetch_document("node/location", INCLUDES).await {
        Ok(doc) => LocationsContent::from_document(&doc, client.base_url()),
        Err(error) => {
            tracing::warn!(error = %error, "Falling back to empty locations listing");
            LocationsContent::fallback()
        }
    }
}
