//! Services listing content.

use drupal_jsonapi::{entity_text, resolve_media_url, Document, Entity, JsonApiClient, TextMode};
use serde::Serialize;

use super::{image_chain, image_or_placeholder, path_alias};

const INCLUDES: &[&str] = &["field_icon.field_media_image"];

#[derive(Debug, Clone, Serialize)]
pub struct ServicesContent {
    pub services: Vec<ServiceItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceItem {
    pub title: String,
    pub summary: String,
    pub description_html: String,
    pub icon_url: String,
    pub href: String,
}

impl ServicesContent {
    /// An empty listing; the frontend renders its own "check back soon"
    /// state for zero services.
    pub fn fallback() -> Self {
        Self {
            services: Vec::new(),
        }
    }

    pub fn from_document(doc: &Document, base_url: &str) -> Self {
        let services = doc
            .entities()
            .iter()
            .map(|node| ServiceItem::from_entity(node, doc, base_url))
            .collect();
        Self { services }
    }
}

impl ServiceItem {
    fn from_entity(node: &Entity, doc: &Document, base_url: &str) -> Self {
        Self {
            title: entity_text(node, "title", TextMode::Plain),
            summary: entity_text(node, "field_summary", TextMode::Plain),
            description_html: entity_text(node, "body", TextMode::Html),
            icon_url: image_or_placeholder(resolve_media_url(
                node,
                &doc.included,
                &image_chain("field_icon"),
                base_url,
            )),
            href: path_alias(node),
        }
    }
}

pub async fn load(client: &JsonApiClient) -> ServicesContent {
    match client.fetch_document("node/service", INCLUDES).await {
        Ok(doc) => ServicesContent::from_document(&doc, client.base_url()),
        Err(error) => {
            tracing::warn!(error = %error, "Falling back to empty services listing");
            ServicesContent::fallback()
        }
    }
}
