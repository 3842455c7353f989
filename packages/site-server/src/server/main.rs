// Main entry point for the content API server

use anyhow::{Context, Result};
use drupal_jsonapi::{ClientConfig, JsonApiClient};
use site_core::{server::build_app, SiteConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,site_core=debug,drupal_jsonapi=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting content API server");

    // Load configuration
    let config = SiteConfig::from_env().context("Failed to load configuration")?;

    // Create the CMS client
    let mut client_config = ClientConfig::new(config.cms_base_url.clone());
    if let Some(token) = config.cms_auth_token.clone() {
        client_config = client_config.with_auth_token(token);
    }
    let client = JsonApiClient::new(client_config).context("Failed to create CMS client")?;
    tracing::info!(cms = %config.cms_base_url, "CMS client ready");

    // Build application
    let app = build_app(client, config.allowed_origins.clone());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
