//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of the HTTP transport.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures and upstream response shapes
//! - **text**: Verse text sanitization
//! - **provider**: Upstream content API client
//! - **catalog**: Version and book catalog assembly
//! - **compare**: Side-by-side verse comparison
//! - **services**: Unified service container

pub mod catalog;
pub mod compare;
pub mod config;
pub mod error;
pub mod provider;
pub mod services;
pub mod text;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{LecternError, Result};
pub use services::Services;
