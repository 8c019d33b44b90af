//! Discoverability tags assigned to a business listing.

use serde::{Deserialize, Serialize};

/// Maximum number of tags a listing carries.
pub const MAX_TAGS: usize = 15;

/// Maximum length of a single tag, in characters.
pub const MAX_TAG_LEN: usize = 30;

/// Tags describing a business.
///
/// Every tag is lowercase, non-empty and at most [`MAX_TAG_LEN`] characters;
/// there are never more than [`MAX_TAGS`] and no two are equal ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TagResult {
    pub tags: Vec<String>,
}

impl TagResult {
    /// Wrap an already-validated tag list.
    #[must_use]
    pub const fn new(tags: Vec<String>) -> Self {
        Self { tags }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Returns true if `tag` is present (case-insensitive).
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Returns true if `tag` may appear in a [`TagResult`].
#[must_use]
pub fn is_valid_tag(tag: &str) -> bool {
    let len = tag.chars().count();
    len > 0 && len <= MAX_TAG_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignores_case() {
        let result = TagResult::new(vec!["wifi".to_string(), "cash only".to_string()]);
        assert!(result.contains("WiFi"));
        assert!(result.contains("cash only"));
        assert!(!result.contains("cash"));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_is_valid_tag_bounds() {
        assert!(!is_valid_tag(""));
        assert!(is_valid_tag("a"));
        assert!(is_valid_tag(&"x".repeat(MAX_TAG_LEN)));
        assert!(!is_valid_tag(&"x".repeat(MAX_TAG_LEN + 1)));
    }

    #[test]
    fn test_default_is_empty() {
        assert!(TagResult::default().is_empty());
    }

    #[test]
    fn test_serializes_as_object_with_tags() {
        let json = serde_json::to_value(TagResult::new(vec!["vegan".to_string()]))
            .expect("serialize");
        assert_eq!(json, serde_json::json!({ "tags": ["vegan"] }));
    }
}
