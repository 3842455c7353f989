//! About page content.

use drupal_jsonapi::{entity_text, normalize_text, resolve_media_url, Document, JsonApiClient, TextMode};
use serde::Serialize;
use serde_json::Value;

use super::{image_chain, image_or_placeholder};

const INCLUDES: &[&str] = &["field_banner_image.field_media_image"];

#[derive(Debug, Clone, Serialize)]
pub struct AboutContent {
    pub title: String,
    pub body_html: String,
    pub mission: String,
    pub banner_image_url: String,
    pub values: Vec<String>,
}

impl AboutContent {
    pub fn fallback() -> Self {
        Self {
            title: "About Us".to_string(),
            body_html: String::new(),
            mission: "Helping our neighbors stay independent at home.".to_string(),
            banner_image_url: super::PLACEHOLDER_IMAGE.to_string(),
            values: Vec::new(),
        }
    }

    pub fn from_document(doc: &Document, base_url: &str) -> Self {
        let Some(node) = doc.primary() else {
            return Self::fallback();
        };

        // field_values is genuinely multi-valued plain text, so each
        // element normalizes on its own rather than first-element-wins.
        let values = node
            .attr("field_values")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .map(|item| normalize_text(item, TextMode::Plain))
                    .filter(|value| !value.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            title: entity_text(node, "title", TextMode::Plain),
            body_html: entity_text(node, "body", TextMode::Html),
            mission: entity_text(node, "field_mission", TextMode::Plain),
            banner_image_url: image_or_placeholder(resolve_media_url(
                node,
                &doc.included,
                &image_chain("field_banner_image"),
                base_url,
            )),
            values,
        }
    }
}

pub async fn load(client: &JsonApiClient) -> AboutContent {
    match client.fetch_document("node/about_page", INCLUDES).await {
        Ok(doc) => AboutContent::from_document(&doc, client.base_url()),
        Err(error) => {
            tracing::warn!(error = %error, "Falling back to default about content");
            AboutContent::fallback()
        }
    }
}
