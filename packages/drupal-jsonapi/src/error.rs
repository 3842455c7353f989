//! Typed errors for the CMS client.
//!
//! Uses `thiserror` for library errors (not `anyhow`). Only the
//! transport boundary produces these: resolution and normalization are
//! infallible by design and report "no value" through `Option`/empty
//! strings instead.

use thiserror::Error;

/// Errors that can occur while fetching a document from the CMS.
#[derive(Debug, Error)]
pub enum JsonApiError {
    /// HTTP request failed before a response was read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// CMS returned a non-success status
    #[error("CMS API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not a parseable JSON:API document
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Base URL is not an http(s) origin
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Result type alias for CMS client operations.
pub type Result<T> = std::result::Result<T, JsonApiError>;
