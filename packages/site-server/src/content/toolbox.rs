//! Toolbox resource library content.
//!
//! Resources are either downloadable documents (a media--document chain
//! down to the file) or external links; many carry both a category term
//! and a summary.

use drupal_jsonapi::{
    entity_text, resolve_entity, resolve_media_url, to_safe_link_href, Document, Entity, Hop,
    JsonApiClient, TextMode,
};
use serde::Serialize;
use serde_json::Value;

const INCLUDES: &[&str] = &["field_document.field_media_document", "field_category"];

#[derive(Debug, Clone, Serialize)]
pub struct ToolboxContent {
    pub resources: Vec<ResourceItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceItem {
    pub title: String,
    pub summary: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_href: Option<String>,
}

impl ToolboxContent {
    pub fn fallback() -> Self {
        Self {
            resources: Vec::new(),
        }
    }

    pub fn from_document(doc: &Document, base_url: &str) -> Self {
        let resources = doc
            .entities()
            .iter()
            .map(|node| ResourceItem::from_entity(node, doc, base_url))
            .collect();
        Self { resources }
    }
}

impl ResourceItem {
    fn from_entity(node: &Entity, doc: &Document, base_url: &str) -> Self {
        let document_url = resolve_media_url(
            node,
            &doc.included,
            &[
                Hop::new("field_document", "media--document"),
                Hop::new("field_media_document", "file--file"),
            ],
            base_url,
        );

        let category = resolve_entity(
            node,
            &doc.included,
            &[Hop::new("field_category", "taxonomy_term--resource_category")],
        )
        .map(|term| entity_text(term, "name", TextMode::Plain))
        .unwrap_or_default();

        let external_href = node
            .attr("field_link")
            .and_then(|link| link.get("uri"))
            .and_then(Value::as_str)
            .map(to_safe_link_href);

        Self {
            title: entity_text(node, "title", TextMode::Plain),
            summary: entity_text(node, "field_summary", TextMode::Plain),
            category,
            document_url,
            external_href,
        }
    }
}

pub async fn load(client: &JsonApiClient) -> ToolboxContent {
    match client.fetch_document("node/toolbox_resource", INCLUDES).await {
        Ok(doc) => ToolboxContent::from_document(&doc, client.base_url()),
        Err(error) => {
            tracing::warn!(error = %error, "Falling back to empty toolbox listing");
            ToolboxContent::fallback()
        }
    }
}
