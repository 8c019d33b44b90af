//! Parsing model replies into discoverability tags.

use std::collections::HashSet;

use nearby_core::{MAX_TAGS, TagResult, is_valid_tag};

use super::AdapterFailure;

/// Parse a comma-separated model reply into tags.
///
/// Entries are trimmed (including stray quotes) and lowercased; entries that
/// end up empty or longer than the tag limit are dropped. Duplicates keep
/// their first position and the list is cut at the tag cap.
///
/// # Errors
///
/// Returns [`AdapterFailure::NoUsableTags`] if nothing survives filtering.
pub fn parse_tags(reply: &str) -> Result<TagResult, AdapterFailure> {
    let mut seen = HashSet::new();
    let tags: Vec<String> = reply
        .split([',', '\n'])
        .map(|entry| {
            entry
                .trim()
                .trim_matches(|c| matches!(c, '"' | '\'' | '`'))
                .trim()
                .to_lowercase()
        })
        .filter(|tag| is_valid_tag(tag))
        .filter(|tag| seen.insert(tag.clone()))
        .take(MAX_TAGS)
        .collect();

    if tags.is_empty() {
        return Err(AdapterFailure::NoUsableTags);
    }
    Ok(TagResult::new(tags))
}
