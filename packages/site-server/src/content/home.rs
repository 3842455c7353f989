//! Home page content.

use drupal_jsonapi::{
    entity_text, find_included, resolve_media_url, Document, JsonApiClient, TextMode,
};
use serde::Serialize;

use super::{image_chain, image_or_placeholder, link_href, link_title, path_alias};

/// Relationship paths the home page fetch asks the CMS to include.
const INCLUDES: &[&str] = &[
    "field_hero_image.field_media_image",
    "field_featured_services",
];

#[derive(Debug, Clone, Serialize)]
pub struct HomeContent {
    pub title: String,
    pub hero_heading: String,
    pub hero_body_html: String,
    pub hero_image_url: String,
    pub cta_label: String,
    pub cta_href: String,
    pub intro_html: String,
    pub featured_services: Vec<ServiceTeaser>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceTeaser {
    pub title: String,
    pub summary: String,
    pub href: String,
}

impl HomeContent {
    /// Content served when the CMS is unreachable.
    pub fn fallback() -> Self {
        Self {
            title: "Lakeshore Home Care".to_string(),
            hero_heading: "Care that comes to you".to_string(),
            hero_body_html: String::new(),
            hero_image_url: super::PLACEHOLDER_IMAGE.to_string(),
            cta_label: "Our services".to_string(),
            cta_href: "/services".to_string(),
            intro_html: String::new(),
            featured_services: Vec::new(),
        }
    }

    /// Build from a fetched document. Missing fields degrade per-field;
    /// a document with no primary entity degrades to the fallback.
    pub fn from_document(doc: &Document, base_url: &str) -> Self {
        let Some(node) = doc.primary() else {
            return Self::fallback();
        };

        let hero_image_url = image_or_placeholder(resolve_media_url(
            node,
            &doc.included,
            &image_chain("field_hero_image"),
            base_url,
        ));

        let featured_services = node
            .relationship("field_featured_services")
            .map(|relationship| {
                relationship
                    .refs()
                    .iter()
                    .filter_map(|reference| find_included(&doc.included, reference))
                    .map(|service| ServiceTeaser {
                        title: entity_text(service, "title", TextMode::Plain),
                        summary: entity_text(service, "field_summary", TextMode::Plain),
                        href: path_alias(service),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            title: entity_text(node, "title", TextMode::Plain),
            hero_heading: entity_text(node, "field_hero_heading", TextMode::Plain),
            hero_body_html: entity_text(node, "field_hero_body", TextMode::Html),
            hero_image_url,
            cta_label: link_title(node, "field_cta_link"),
            cta_href: link_href(node, "field_cta_link"),
            intro_html: entity_text(node, "body", TextMode::Html),
            featured_services,
        }
    }
}

/// Fetch the home page, falling back to default content on any
/// transport failure.
pub async fn load(client: &JsonApiClient) -> HomeContent {
    match client.fetch_document("node/home_page", INCLUDES).await {
        Ok(doc) => HomeContent::from_document(&doc, client.base_url()),
        Err(error) => {
            tracing::warn!(error = %error, "Falling back to default home content");
            HomeContent::fallback()
        }
    }
}
