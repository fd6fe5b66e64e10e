//! Upstream scripture content provider.
//!
//! Defines the provider trait the aggregation services depend on and
//! the reqwest-backed client for the api.scripture.api.bible REST API.
//! All upstream responses arrive wrapped in a `data` envelope; the
//! client unwraps it and returns the inner records.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::core::config::UpstreamConfig;
use crate::core::error::{LecternError, Result};
use crate::core::types::{BibleSummary, BookSummary, ChapterSummary, DataEnvelope, VerseSummary};

/// Read-only access to the upstream content API
#[async_trait]
pub trait ScriptureProvider: Send + Sync {
    /// List all bibles known upstream
    async fn list_bibles(&self) -> Result<Vec<BibleSummary>>;

    /// List the books of one bible
    async fn list_books(&self, bible_id: &str) -> Result<Vec<BookSummary>>;

    /// List the chapters of one book
    async fn list_chapters(&self, bible_id: &str, book_id: &str) -> Result<Vec<ChapterSummary>>;

    /// List the verses of one chapter
    ///
    /// `chapter_id` is the composite `{book_id}.{chapter}` key.
    async fn list_verses(&self, bible_id: &str, chapter_id: &str) -> Result<Vec<VerseSummary>>;
}

/// Reqwest-backed client for the live content API
pub struct ApiBibleClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ApiBibleClient {
    /// Create a client from upstream configuration
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_sec))
            .user_agent(concat!("lectern/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// GET a data-enveloped list from the upstream API
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(url = %url, "Upstream request");

        let response = self
            .client
            .get(&url)
            .header("api-key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LecternError::Upstream(format!(
                "{path} returned status {status}"
            )));
        }

        let envelope: DataEnvelope<T> = response.json().await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl ScriptureProvider for ApiBibleClient {
    async fn list_bibles(&self) -> Result<Vec<BibleSummary>> {
        self.get_list("bibles").await
    }

    async fn list_books(&self, bible_id: &str) -> Result<Vec<BookSummary>> {
        self.get_list(&format!("bibles/{bible_id}/books")).await
    }

    async fn list_chapters(&self, bible_id: &str, book_id: &str) -> Result<Vec<ChapterSummary>> {
        self.get_list(&format!("bibles/{bible_id}/books/{book_id}/chapters"))
            .await
    }

    async fn list_verses(&self, bible_id: &str, chapter_id: &str) -> Result<Vec<VerseSummary>> {
        self.get_list(&format!("bibles/{bible_id}/chapters/{chapter_id}/verses"))
            .await
    }
}
