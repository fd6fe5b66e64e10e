//! Lectern - Scripture Aggregation Proxy
//!
//! A thin HTTP proxy over a third-party scripture content API.
//! Translation storage, text retrieval, and canonicalization all live
//! upstream; Lectern filters, reshapes, merges, and sorts the
//! already-structured JSON it receives.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types
//!   - text (verse sanitization)
//!   - provider (upstream API client)
//!   - catalog (version/book listings)
//!   - compare (verse comparison aggregation)
//!   - services (unified service container)
//!
//! - **http**: REST adapter (depends on core)
//!   - handlers, middleware, error mapping
//!
//! # Endpoints
//!
//! - `GET  /api/health`: service status
//! - `GET  /api/versions`: preferred versions, ranked, capped at 50
//! - `GET  /api/versions/:version_id/books`: books with numeric chapters
//! - `POST /api/compare`: side-by-side verse comparison for one chapter

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{LecternError, Result};
pub use crate::core::services::Services;
pub use crate::core::types::*;
