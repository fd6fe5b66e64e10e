//! Unified service container for Lectern
//!
//! Provides shared access to the catalog and comparison services.

use std::sync::Arc;

use crate::core::catalog::CatalogService;
use crate::core::compare::ComparisonService;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::provider::{ApiBibleClient, ScriptureProvider};

/// Unified services container
///
/// One instance is shared across all request handlers.
#[derive(Clone)]
pub struct Services {
    /// Version and book catalog queries
    pub catalog: Arc<CatalogService>,

    /// Verse comparison queries
    pub compare: Arc<ComparisonService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services backed by the live upstream API
    pub fn new(config: Config) -> Result<Self> {
        let provider: Arc<dyn ScriptureProvider> =
            Arc::new(ApiBibleClient::new(&config.upstream)?);
        Ok(Self::with_provider(config, provider))
    }

    /// Create services with an explicit provider
    ///
    /// Used by tests to substitute a canned provider.
    pub fn with_provider(config: Config, provider: Arc<dyn ScriptureProvider>) -> Self {
        let catalog = Arc::new(CatalogService::new(
            provider.clone(),
            config.preferences.clone(),
        ));
        let compare = Arc::new(ComparisonService::new(provider));

        Self {
            catalog,
            compare,
            config: Arc::new(config),
        }
    }
}
