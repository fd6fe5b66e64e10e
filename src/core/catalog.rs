//! Version and book catalog assembly.
//!
//! Wraps the upstream listings into the shapes clients consume:
//! a preference-filtered, ranked version list and per-version book
//! lists with numeric-only chapters.

use std::sync::Arc;

use crate::core::config::PreferenceConfig;
use crate::core::error::Result;
use crate::core::provider::ScriptureProvider;
use crate::core::types::{Book, Chapter, Version};

/// Hard cap on the versions listing, applied after sorting
const MAX_VERSIONS: usize = 50;

/// Catalog queries against the upstream provider
pub struct CatalogService {
    provider: Arc<dyn ScriptureProvider>,
    preferences: PreferenceConfig,
}

impl CatalogService {
    pub fn new(provider: Arc<dyn ScriptureProvider>, preferences: PreferenceConfig) -> Self {
        Self {
            provider,
            preferences,
        }
    }

    /// List preferred versions, ranked and capped.
    ///
    /// A version is included iff its id is on the preferred-version
    /// list or its language code is on the preferred-language list.
    /// Pinned versions sort first in list order; everything else sorts
    /// by display name.
    pub async fn versions(&self) -> Result<Vec<Version>> {
        let bibles = self.provider.list_bibles().await?;

        let mut versions: Vec<Version> = bibles
            .into_iter()
            .filter(|bible| {
                self.preferences.versions.contains(&bible.id)
                    || self.preferences.languages.contains(&bible.language.id)
            })
            .map(|bible| Version {
                id: bible.id,
                name: bible.name,
                abbreviation: bible.abbreviation,
                language: bible.language.name,
            })
            .collect();

        versions.sort_by_key(|v| (self.version_rank(&v.id), v.name.clone()));
        versions.truncate(MAX_VERSIONS);

        Ok(versions)
    }

    /// List a version's books with their numeric chapters.
    ///
    /// The book listing itself failing is fatal. A chapter listing
    /// failing degrades that one book to an empty chapter list and
    /// processing continues.
    pub async fn books(&self, version_id: &str) -> Result<Vec<Book>> {
        let summaries = self.provider.list_books(version_id).await?;

        let mut books = Vec::with_capacity(summaries.len());
        for summary in summaries {
            let chapters = match self.provider.list_chapters(version_id, &summary.id).await {
                Ok(chapters) => chapters
                    .into_iter()
                    .filter(|ch| is_numeric(&ch.number))
                    .map(|ch| Chapter {
                        id: ch.id,
                        number: ch.number,
                    })
                    .collect(),
                Err(err) => {
                    tracing::warn!(
                        version = %version_id,
                        book = %summary.id,
                        error = %err,
                        "Chapter listing failed, returning book without chapters"
                    );
                    Vec::new()
                }
            };

            books.push(Book {
                id: summary.id,
                name: summary.name,
                abbreviation: summary.abbreviation,
                chapters,
            });
        }

        Ok(books)
    }

    /// Position on the preferred-version list, or a rank past any
    /// real position for unpinned versions
    fn version_rank(&self, id: &str) -> usize {
        self.preferences
            .versions
            .iter()
            .position(|pinned| pinned == id)
            .unwrap_or(usize::MAX)
    }
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
