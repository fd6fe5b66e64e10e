//! HTTP request handlers for the Lectern API
//!
//! Implements handlers for all 4 REST endpoints: health, versions,
//! books, and compare.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::core::error::LecternError;
use crate::core::services::Services;
use crate::core::types::*;

/// Health check handler
///
/// Always succeeds; reports the service banner.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: concat!("lectern ", env!("CARGO_PKG_VERSION"), " is running").to_string(),
    })
}

/// Versions listing handler
///
/// Returns the preference-filtered, ranked version list (at most 50
/// entries).
///
/// # Errors
///
/// - `Upstream`: the bibles listing call failed
pub async fn versions_handler(
    State(services): State<Arc<Services>>,
) -> Result<Json<Vec<Version>>, LecternError> {
    let versions = services.catalog.versions().await?;
    Ok(Json(versions))
}

/// Books listing handler
///
/// Returns the version's books with numeric-only chapters. Individual
/// chapter listing failures degrade that book to an empty chapter
/// list rather than failing the request.
///
/// # Errors
///
/// - `Upstream`: the books listing call failed
pub async fn books_handler(
    State(services): State<Arc<Services>>,
    Path(version_id): Path<String>,
) -> Result<Json<Vec<Book>>, LecternError> {
    let books = services.catalog.books(&version_id).await?;
    Ok(Json(books))
}

/// Verse comparison handler
///
/// # Errors
///
/// - `InvalidRequest`: `version_ids` or `book_id` missing/empty,
///   rejected before any upstream call
pub async fn compare_handler(
    State(services): State<Arc<Services>>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<Comparison>, LecternError> {
    let comparison = services.compare.compare(&request).await?;
    Ok(Json(comparison))
}
