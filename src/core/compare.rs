//! Side-by-side verse comparison.
//!
//! Fetches one chapter's verses for every requested version and
//! merges them into a unified per-verse table. Per-version fetch
//! failures degrade to empty contributions; only missing request
//! parameters abort the operation.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::core::error::{LecternError, Result};
use crate::core::provider::ScriptureProvider;
use crate::core::text::clean_verse_text;
use crate::core::types::{CompareRequest, Comparison, VerseRow, VERSE_PLACEHOLDER};

/// Comparison queries against the upstream provider
pub struct ComparisonService {
    provider: Arc<dyn ScriptureProvider>,
}

impl ComparisonService {
    pub fn new(provider: Arc<dyn ScriptureProvider>) -> Self {
        Self { provider }
    }

    /// Build the comparison table for one chapter.
    ///
    /// Versions are fetched sequentially in request order; the first
    /// verse reference seen supplies the book display name. The verse
    /// union keeps numeric identifiers sorted ascending and places
    /// non-numeric ones after them in encounter order.
    pub async fn compare(&self, request: &CompareRequest) -> Result<Comparison> {
        if request.version_ids.is_empty() || request.book_id.is_empty() {
            return Err(LecternError::InvalidRequest(
                "version_ids and book_id are required".to_string(),
            ));
        }

        let chapter_id = format!("{}.{}", request.book_id, request.chapter);

        // version id -> verse number -> sanitized text
        let mut texts_by_version: HashMap<String, HashMap<String, String>> = HashMap::new();
        // Union of verse numbers in encounter order.
        let mut verse_numbers: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut book_name = String::new();

        for version_id in &request.version_ids {
            let verses = match self.provider.list_verses(version_id, &chapter_id).await {
                Ok(verses) => verses,
                Err(err) => {
                    tracing::warn!(
                        version = %version_id,
                        chapter = %chapter_id,
                        error = %err,
                        "Verse listing failed, version contributes no verses"
                    );
                    texts_by_version.insert(version_id.clone(), HashMap::new());
                    continue;
                }
            };

            let recorded = texts_by_version.entry(version_id.clone()).or_default();
            for verse in verses {
                let number = verse
                    .number
                    .clone()
                    .unwrap_or_else(|| trailing_segment(&verse.id));

                if seen.insert(number.clone()) {
                    verse_numbers.push(number.clone());
                }
                recorded.insert(number, clean_verse_text(Some(&verse.text)));

                if book_name.is_empty() {
                    if let Some(reference) = verse.reference.as_deref() {
                        if let Some(token) = reference.split_whitespace().next() {
                            book_name = token.to_string();
                        }
                    }
                }
            }
        }

        verse_numbers.sort_by_key(|number| verse_sort_key(number));

        let verses = verse_numbers
            .into_iter()
            .map(|number| {
                let texts = request
                    .version_ids
                    .iter()
                    .map(|version_id| {
                        let text = texts_by_version
                            .get(version_id)
                            .and_then(|recorded| recorded.get(&number))
                            .cloned()
                            .unwrap_or_else(|| VERSE_PLACEHOLDER.to_string());
                        (version_id.clone(), text)
                    })
                    .collect();

                VerseRow {
                    verse: number,
                    texts,
                }
            })
            .collect();

        let book_name = if book_name.is_empty() {
            fallback_book_name(&request.book_id)
        } else {
            book_name
        };

        Ok(Comparison {
            book_id: request.book_id.clone(),
            book_name,
            chapter: request.chapter,
            verses,
        })
    }
}

/// Segment after the last `.` of an upstream verse id, e.g. `GEN.1.3` -> `3`
fn trailing_segment(id: &str) -> String {
    id.rsplit('.').next().unwrap_or_default().to_string()
}

/// Upper-cased portion of the book id before its first `.`
fn fallback_book_name(book_id: &str) -> String {
    book_id
        .split('.')
        .next()
        .unwrap_or(book_id)
        .to_uppercase()
}

/// Sort rank for a verse number.
///
/// All-digit identifiers rank first, ascending by value; anything
/// else ranks after them, relying on stable sort for encounter order.
fn verse_sort_key(number: &str) -> (u8, u64) {
    if !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit()) {
        (0, number.parse().unwrap_or(u64::MAX))
    } else {
        (1, 0)
    }
}
