//! HTTP REST adapter
//!
//! Depends only on core/. Provides the four Lectern endpoints via the
//! Axum web framework and maps core errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::error::LecternError;

pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::*;
pub use router::app;

/// Map core errors to HTTP responses
///
/// Invalid caller input is a 400; everything else, including upstream
/// failures, surfaces as a 500 with the underlying message.
impl IntoResponse for LecternError {
    fn into_response(self) -> Response {
        let status = if self.is_bad_request() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = Json(json!({
            "error": self.message(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
