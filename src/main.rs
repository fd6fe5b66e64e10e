//! Lectern HTTP server entry point
//!
//! Starts the REST API proxy over the upstream scripture content API.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lectern::core::config::Config;
use lectern::core::services::Services;
use lectern::http;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lectern=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Lectern scripture proxy");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load()?;
    config.log_config();

    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Create shared services
    let services = Arc::new(Services::new(config)?);

    // Build the API router
    let app = http::app(services);

    // Bind to address and start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - Health check at http://{}/api/health", addr);

    // Serve the application
    axum::serve(listener, app).await?;

    Ok(())
}
