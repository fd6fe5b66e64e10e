//! Verse text sanitization.
//!
//! Upstream verse text arrives with embedded markup and irregular
//! whitespace. This module reduces it to plain single-spaced text.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Strip markup tags and normalize whitespace in verse text.
///
/// Tags are removed, their enclosed text is kept. Any run of
/// whitespace (including newlines) collapses to a single space, and
/// leading/trailing whitespace is trimmed. Absent or empty input
/// yields an empty string. Idempotent.
pub fn clean_verse_text(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(text) if !text.is_empty() => text,
        _ => return String::new(),
    };

    let stripped = TAG.replace_all(raw, "");
    let collapsed = WHITESPACE.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}
