//! Integration tests for rule-based classification through the public engine.
//!
//! Every engine here is rules-only, so results must be fully deterministic.

use nearby_classifier::{ClassificationEngine, ClassificationSource};
use nearby_core::{BusinessCategory, MAX_TAG_LEN, MAX_TAGS, SearchType};

// =============================================================================
// Query Tests
// =============================================================================

#[tokio::test]
async fn test_comprehensive_phrases() {
    let engine = ClassificationEngine::rules_only();
    let queries = [
        "all bakeries",
        "find all dentists",
        "list all gyms downtown",
        "every pharmacy open now",
        "show all salons",
        "Show ALL Cinemas",
    ];

    for query in queries {
        let result = engine.classify_query(query).await;
        assert_eq!(
            result.search_type,
            SearchType::Comprehensive,
            "{query} should be comprehensive"
        );
        assert!((result.max_distance_km - 50.0).abs() < f64::EPSILON, "{query}");
        assert_eq!(result.limit, 20, "{query}");
    }
}

#[tokio::test]
async fn test_all_inside_a_word_is_not_comprehensive() {
    let engine = ClassificationEngine::rules_only();
    let result = engine.classify_query("small bakery").await;
    assert_eq!(result.search_type, SearchType::Specific);
}

#[tokio::test]
async fn test_broad_terms() {
    let engine = ClassificationEngine::rules_only();
    let cases = [
        ("coffee near me", BusinessCategory::Cafe),
        ("restaurant open now", BusinessCategory::Restaurant),
        ("medical help", BusinessCategory::Healthcare),
        ("walk-in clinic", BusinessCategory::Healthcare),
        ("phone repair", BusinessCategory::Services),
        ("grocery delivery", BusinessCategory::Grocery),
        ("farmers market", BusinessCategory::Grocery),
        ("hardware store", BusinessCategory::Retail),
    ];

    for (query, category) in cases {
        let result = engine.classify_query(query).await;
        assert_eq!(result.search_type, SearchType::Broad, "{query}");
        assert_eq!(result.category_filter, Some(category), "{query}");
        assert!((result.max_distance_km - 20.0).abs() < f64::EPSILON, "{query}");
        assert_eq!(result.limit, 10, "{query}");
    }
}

#[tokio::test]
async fn test_specific_query_defaults() {
    let engine = ClassificationEngine::rules_only();
    let result = engine.classify_query("pizza").await;
    assert_eq!(result.search_type, SearchType::Specific);
    assert_eq!(result.category_filter, Some(BusinessCategory::Restaurant));
    assert_eq!(result.tag_filters, vec!["pizza", "italian"]);
    assert_eq!(result.enhanced_query, "pizza");
    assert!((result.max_distance_km - 10.0).abs() < f64::EPSILON);
    assert_eq!(result.limit, 5);
}

#[tokio::test]
async fn test_unmatched_query() {
    let engine = ClassificationEngine::rules_only();
    let result = engine.classify_query("something interesting").await;
    assert_eq!(result.category_filter, None);
    assert!(result.tag_filters.is_empty());
    assert_eq!(result.enhanced_query, "something interesting");
    assert_eq!(result.search_type, SearchType::Specific);
}

#[tokio::test]
async fn test_find_all_coffee_shops() {
    let engine = ClassificationEngine::rules_only();
    let classified = engine
        .classify_query_with_source("find all coffee shops")
        .await;
    assert_eq!(classified.source, ClassificationSource::Rules);

    let result = classified.value;
    assert_eq!(result.category_filter, Some(BusinessCategory::Cafe));
    assert_eq!(result.search_type, SearchType::Comprehensive);
    assert!((result.max_distance_km - 50.0).abs() < f64::EPSILON);
    assert_eq!(result.limit, 20);
    assert_eq!(
        result.enhanced_query,
        "coffee cafe espresso coffee shop coffee house"
    );
    for tag in ["coffee", "espresso", "cafe"] {
        assert!(result.tag_filters.iter().any(|t| t == tag), "missing {tag}");
    }
}

#[tokio::test]
async fn test_query_is_idempotent() {
    let engine = ClassificationEngine::rules_only();
    let first = engine.classify_query("every vegan restaurant with wifi").await;
    let second = engine.classify_query("every vegan restaurant with wifi").await;
    assert_eq!(first, second);
}

// =============================================================================
// Description Tests
// =============================================================================

fn assert_tag_invariants(tags: &[String]) {
    assert!(tags.len() <= MAX_TAGS, "too many tags: {tags:?}");
    for tag in tags {
        let len = tag.chars().count();
        assert!((2..=MAX_TAG_LEN).contains(&len), "bad length: {tag}");
        assert_eq!(tag, &tag.to_lowercase(), "not lowercase: {tag}");
    }
    for (i, tag) in tags.iter().enumerate() {
        assert!(
            !tags.iter().skip(i + 1).any(|other| other.eq_ignore_ascii_case(tag)),
            "duplicate: {tag}"
        );
    }
    for pair in tags.windows(2) {
        if let [a, b] = pair {
            let key_a = (a.chars().count(), a.as_str());
            let key_b = (b.chars().count(), b.as_str());
            assert!(key_a < key_b, "not sorted: {a} before {b}");
        }
    }
}

#[tokio::test]
async fn test_joes_diner() {
    let engine = ClassificationEngine::rules_only();
    let result = engine
        .classify_description(
            "Joe's Diner",
            "Family friendly diner with free wifi and outdoor seating, cash only",
            Some("restaurant"),
        )
        .await;

    for tag in [
        "wifi",
        "outdoor seating",
        "cash only",
        "family friendly",
        "restaurant",
        "food",
        "dining",
    ] {
        assert!(result.contains(tag), "missing {tag}: {:?}", result.tags);
    }
    assert_tag_invariants(&result.tags);
}

#[tokio::test]
async fn test_description_tags_are_stable() {
    let engine = ClassificationEngine::rules_only();
    let name = "Sunrise Yoga Studio";
    let description = "Heated yoga classes, wheelchair accessible, by appointment only";

    let first = engine
        .classify_description(name, description, Some("fitness"))
        .await;
    let second = engine
        .classify_description(name, description, Some("fitness"))
        .await;
    assert_eq!(first, second);
    assert_tag_invariants(&first.tags);
}

#[tokio::test]
async fn test_long_listing_is_capped() {
    let engine = ClassificationEngine::rules_only();
    let result = engine
        .classify_description(
            "Grand Central Bistro Bakery Market Emporium Collective",
            "Vegan and vegetarian options, gluten free bread, free wifi, outdoor seating, \
             delivery and takeout, open late, free parking, live music, happy hour, \
             reservations recommended, pet friendly patio, family friendly, cash only",
            Some("restaurant"),
        )
        .await;
    assert_eq!(result.len(), MAX_TAGS);
    assert_tag_invariants(&result.tags);
}

#[tokio::test]
async fn test_empty_listing_has_no_tags() {
    let engine = ClassificationEngine::rules_only();
    let result = engine.classify_description("", "", None).await;
    assert!(result.is_empty());
}

#[tokio::test]
async fn test_unknown_category_is_ignored() {
    let engine = ClassificationEngine::rules_only();
    let result = engine
        .classify_description("", "", Some("spaceport"))
        .await;
    assert!(result.is_empty());
}
