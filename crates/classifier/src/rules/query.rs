//! Rule-based query → search filter classification.

use nearby_core::{BusinessCategory, SearchFilterResult, SearchType};

use crate::lexicon::{
    BROAD_TERMS, CATEGORY_KEYWORDS, COFFEE_EXPANSION, COMPREHENSIVE_PATTERN,
    RESTAURANT_EXPANSION, TAG_KEYWORDS,
};

/// Classify a search query using keyword tables only.
///
/// Never fails and never performs I/O; identical input always yields an
/// identical result.
#[must_use]
pub fn classify_query(query: &str) -> SearchFilterResult {
    let lowered = query.to_lowercase();
    let search_type = detect_search_type(&lowered);

    let mut result = SearchFilterResult::for_query(query, search_type);
    result.category_filter = detect_category(&lowered);

    for (keyword, tags) in TAG_KEYWORDS {
        if lowered.contains(keyword) {
            for tag in *tags {
                result.push_tag(tag);
            }
        }
    }

    if let Some(expansion) = expansion_for(&lowered, search_type) {
        result.enhanced_query = expansion.to_owned();
    }

    result
}

/// Comprehensive beats broad, broad beats specific.
fn detect_search_type(lowered: &str) -> SearchType {
    if COMPREHENSIVE_PATTERN.is_match(lowered) {
        SearchType::Comprehensive
    } else if BROAD_TERMS.iter().any(|term| lowered.contains(term)) {
        SearchType::Broad
    } else {
        SearchType::Specific
    }
}

/// First keyword hit in table order.
fn detect_category(lowered: &str) -> Option<BusinessCategory> {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, category)| *category)
}

/// Only exhaustive searches are rewritten.
fn expansion_for(lowered: &str, search_type: SearchType) -> Option<&'static str> {
    if search_type != SearchType::Comprehensive {
        return None;
    }
    if lowered.contains("coffee") {
        Some(COFFEE_EXPANSION)
    } else if lowered.contains("restaurant") {
        Some(RESTAURANT_EXPANSION)
    } else {
        None
    }
}
