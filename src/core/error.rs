//! Error types and error handling for the Lectern service.
//!
//! This module defines the error types used throughout the
//! application. HTTP status mapping is handled in the http adapter.

use thiserror::Error;

/// Result type alias for Lectern operations
pub type Result<T> = std::result::Result<T, LecternError>;

/// Main error type for the Lectern service
#[derive(Error, Debug)]
pub enum LecternError {
    #[error("Missing required parameters: {0}")]
    InvalidRequest(String),

    #[error("Upstream request failed: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl LecternError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a bad request error (invalid caller input)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, LecternError::InvalidRequest(_))
    }

    /// Check if this error originated in the upstream content API
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            LecternError::Upstream(_) | LecternError::HttpError(_)
        )
    }
}
