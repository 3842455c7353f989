//! Content routes: one JSON content object per page.
//!
//! Handlers never fail. A CMS outage degrades to each page's documented
//! fallback content inside the content modules, so these routes always
//! return 200 with a renderable object.

use axum::{extract::Extension, Json};

use crate::content::{about, home, locations, services, toolbox};
use crate::server::app::AppState;

pub async fn home_content_handler(
    Extension(state): Extension<AppState>,
) -> Json<home::HomeContent> {
    Json(home::load(&state.client).await)
}

pub async fn about_content_handler(
    Extension(state): Extension<AppState>,
) -> Json<about::AboutContent> {
    Json(about::load(&state.client).await)
}

pub async fn services_content_handler(
    Extension(state): Extension<AppState>,
) -> Json<services::ServicesContent> {
    Json(services::load(&state.client).await)
}

pub async fn locations_content_handler(
    Extension(state): Extension<AppState>,
) -> Json<locations::LocationsContent> {
    Json(locations::load(&state.client).await)
}

pub async fn toolbox_content_handler(
    Extension(state): Extension<AppState>,
) -> Json<toolbox::ToolboxContent> {
    Json(toolbox::load(&state.client).await)
}
