//! Router assembly for the Lectern API.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::core::services::Services;
use crate::http::{handlers, middleware as http_middleware};

/// Build the application router with all routes and middleware
pub fn app(services: Arc<Services>) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health_handler))
        .route("/api/versions", get(handlers::versions_handler))
        .route(
            "/api/versions/:version_id/books",
            get(handlers::books_handler),
        )
        .route("/api/compare", post(handlers::compare_handler))
        .layer(middleware::from_fn(http_middleware::log_request))
        .layer(CorsLayer::permissive())
        .with_state(services)
}
