use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    cms: CmsHealth,
}

#[derive(Serialize)]
pub struct CmsHealth {
    base_url: String,
}

/// Health check endpoint
///
/// The service holds no stateful resources of its own; it reports which
/// CMS origin it is configured against. CMS outages surface as fallback
/// content on the content routes, not as an unhealthy service.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        cms: CmsHealth {
            base_url: state.client.base_url().to_string(),
        },
    })
}
