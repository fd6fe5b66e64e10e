//! Core data types for the Lectern service.
//!
//! This module defines the domain entities returned to clients and
//! the upstream response shapes consumed from the content API.
//! Upstream shapes are validated and defaulted at the boundary so
//! business logic never sees missing fields.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Text substituted for a verse a version did not return
pub const VERSE_PLACEHOLDER: &str = "Verse not available";

/// A Bible version as returned to clients
///
/// `language` carries the display name, not the language code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Version {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    pub language: String,
}

/// A book within a version, with its numeric chapters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    pub chapters: Vec<Chapter>,
}

/// A chapter reference
///
/// `number` is always entirely ASCII digits; intro and other
/// non-numeric chapters are filtered out before this is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub number: String,
}

/// Request body for the compare endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    /// Version ids to compare, in display order
    #[serde(default)]
    pub version_ids: Vec<String>,

    /// Upstream book id, e.g. `GEN`
    #[serde(default)]
    pub book_id: String,

    /// Chapter number (defaults to 1)
    #[serde(default = "default_chapter")]
    pub chapter: u32,
}

fn default_chapter() -> u32 {
    1
}

/// One verse row in a comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerseRow {
    /// Verse number as reported upstream (usually digits)
    pub verse: String,

    /// Verse text per requested version id
    ///
    /// Contains one entry for every requested version, with
    /// [`VERSE_PLACEHOLDER`] where a version had no such verse.
    pub texts: BTreeMap<String, String>,
}

/// Side-by-side comparison of one chapter across versions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub book_id: String,
    pub book_name: String,
    pub chapter: u32,
    pub verses: Vec<VerseRow>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service banner
    pub message: String,
}

// ---------------------------------------------------------------------------
// Upstream response shapes
// ---------------------------------------------------------------------------

/// Envelope wrapping every upstream list response
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// One bible from the upstream `bibles` listing
#[derive(Debug, Clone, Deserialize)]
pub struct BibleSummary {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub language: LanguageSummary,
}

/// Language descriptor nested in a bible record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageSummary {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// One book from the upstream books listing
#[derive(Debug, Clone, Deserialize)]
pub struct BookSummary {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub abbreviation: String,
}

/// One chapter from the upstream chapters listing
#[derive(Debug, Clone, Deserialize)]
pub struct ChapterSummary {
    pub id: String,
    #[serde(default)]
    pub number: String,
}

/// One verse from the upstream verses listing
#[derive(Debug, Clone, Deserialize)]
pub struct VerseSummary {
    #[serde(default)]
    pub id: String,
    /// Explicit verse number, when upstream provides one
    pub number: Option<String>,
    /// Human-readable reference such as `Genesis 1:1`
    pub reference: Option<String>,
    #[serde(default)]
    pub text: String,
}
