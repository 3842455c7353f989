//! HTTP transport for the CMS JSON:API.
//!
//! Fetches one document per call and hands it to the caller as-is. No
//! retries, no caching, no revalidation: callers own their fallback
//! policy when a fetch fails.

use std::time::Duration;

use crate::document::Document;
use crate::error::{JsonApiError, Result};

/// Connection settings, passed in explicitly at construction. The client
/// never reads configuration from the process environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// CMS origin, e.g. `https://cms.example.com`.
    pub base_url: String,
    /// Optional bearer token for protected endpoints.
    pub auth_token: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
        }
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }
}

/// Client for the CMS JSON:API endpoint.
#[derive(Debug)]
pub struct JsonApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl JsonApiClient {
    /// Create a new client. Fails if the base URL is not an http(s)
    /// origin or the underlying HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if !config.base_url.starts_with("https://") && !config.base_url.starts_with("http://") {
            return Err(JsonApiError::InvalidBaseUrl(config.base_url));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token,
        })
    }

    /// CMS origin this client talks to, without a trailing slash.
    /// Resolved media URLs are joined against this value.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one JSON:API document.
    ///
    /// `path` is the resource path under `/jsonapi`, e.g.
    /// `node/home_page` or `node/service`. `include` lists the
    /// relationship paths the response's `included` table must satisfy,
    /// e.g. `["field_hero_image.field_media_image"]`.
    pub async fn fetch_document(&self, path: &str, include: &[&str]) -> Result<Document> {
        let url = format!("{}/jsonapi/{}", self.base_url, path.trim_start_matches('/'));
        tracing::debug!(url = %url, include = ?include, "Fetching CMS document");

        let mut request = self.client.get(&url);
        if !include.is_empty() {
            request = request.query(&[("include", include.join(","))]);
        }
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(JsonApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let document: Document = serde_json::from_str(&body)?;
        tracing::debug!(
            entities = document.entities().len(),
            included = document.included.len(),
            "CMS document fetched"
        );
        Ok(document)
    }
}
