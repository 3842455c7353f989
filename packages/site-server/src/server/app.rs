//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use drupal_jsonapi::JsonApiClient;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::routes::{
    about_content_handler, health_handler, home_content_handler, locations_content_handler,
    services_content_handler, toolbox_content_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<JsonApiClient>,
}

/// Build the Axum application router
///
/// Content routes are read-only; an empty `allowed_origins` list means
/// a permissive CORS policy (development default).
pub fn build_app(client: JsonApiClient, allowed_origins: Vec<String>) -> Router {
    let state = AppState {
        client: Arc::new(client),
    };

    let cors = if allowed_origins.is_empty() {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_methods([Method::GET])
            .allow_headers([CONTENT_TYPE])
            .allow_origin(AllowOrigin::list(origins))
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/content/home", get(home_content_handler))
        .route("/api/content/about", get(about_content_handler))
        .route("/api/content/services", get(services_content_handler))
        .route("/api/content/locations", get(locations_content_handler))
        .route("/api/content/toolbox", get(toolbox_content_handler))
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
