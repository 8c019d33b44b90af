//! Parsing model replies into search filters.

use nearby_core::{SearchFilterResult, SearchType};
use serde_json::{Map, Value};

use super::AdapterFailure;

/// Parse a model reply for `query` into clamped search filters.
///
/// The reply must be a JSON object (optionally inside a Markdown code fence).
/// Each field is then coerced on its own: anything missing or of the wrong
/// type falls back to the original query or to the narrow defaults.
///
/// # Errors
///
/// Returns [`AdapterFailure::MalformedJson`] if the reply is not JSON and
/// [`AdapterFailure::NotAnObject`] if it is JSON but not an object.
pub fn parse_filters(reply: &str, query: &str) -> Result<SearchFilterResult, AdapterFailure> {
    let value: Value = serde_json::from_str(strip_code_fence(reply))?;
    let Value::Object(fields) = value else {
        return Err(AdapterFailure::NotAnObject);
    };

    let search_type = fields
        .get("search_type")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<SearchType>().ok())
        .unwrap_or_default();

    let mut result = SearchFilterResult::for_query(query, search_type);

    result.category_filter = fields
        .get("category_filter")
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok());

    if let Some(Value::Array(tags)) = fields.get("tag_filters") {
        for tag in tags.iter().filter_map(Value::as_str) {
            result.push_tag(tag);
        }
    }

    if let Some(enhanced) = fields
        .get("enhanced_query")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        result.enhanced_query = enhanced.to_owned();
    }

    // Missing numbers take the narrow defaults whatever the breadth.
    result.max_distance_km = number_field(&fields, "max_distance_km")
        .unwrap_or_else(|| SearchType::Specific.default_distance_km());
    result.limit = number_field(&fields, "limit")
        .map_or_else(|| SearchType::Specific.default_limit(), round_to_count);

    Ok(result.clamped())
}

/// Strip a surrounding Markdown code fence (```` ```json ... ``` ````), if any.
fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

/// A finite number, given either as a JSON number or a numeric string.
fn number_field(fields: &Map<String, Value>, key: &str) -> Option<f64> {
    let number = match fields.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to u32 range first
fn round_to_count(n: f64) -> u32 {
    n.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use nearby_core::BusinessCategory;

    use super::*;

    #[test]
    fn test_full_reply() {
        let reply = r#"{
            "category_filter": "Cafe",
            "tag_filters": ["coffee", "Outdoor Seating", "coffee"],
            "enhanced_query": "coffee cafe espresso",
            "search_type": "broad",
            "max_distance_km": 12.5,
            "limit": 8
        }"#;
        let result = parse_filters(reply, "coffee with a patio").expect("parsed");
        assert_eq!(result.category_filter, Some(BusinessCategory::Cafe));
        assert_eq!(result.tag_filters, vec!["coffee", "outdoor-seating"]);
        assert_eq!(result.enhanced_query, "coffee cafe espresso");
        assert_eq!(result.search_type, SearchType::Broad);
        assert!((result.max_distance_km - 12.5).abs() < f64::EPSILON);
        assert_eq!(result.limit, 8);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let result = parse_filters("{}", "pizza").expect("parsed");
        assert_eq!(result.category_filter, None);
        assert!(result.tag_filters.is_empty());
        assert_eq!(result.enhanced_query, "pizza");
        assert_eq!(result.search_type, SearchType::Specific);
        assert!((result.max_distance_km - 10.0).abs() < f64::EPSILON);
        assert_eq!(result.limit, 5);
    }

    #[test]
    fn test_wrong_types_are_coerced() {
        let reply = r#"{
            "category_filter": "Spaceport",
            "tag_filters": "coffee",
            "enhanced_query": "   ",
            "search_type": "galactic",
            "max_distance_km": "7",
            "limit": [3]
        }"#;
        let result = parse_filters(reply, "original").expect("parsed");
        assert_eq!(result.category_filter, None);
        assert!(result.tag_filters.is_empty());
        assert_eq!(result.enhanced_query, "original");
        assert_eq!(result.search_type, SearchType::Specific);
        assert!((result.max_distance_km - 7.0).abs() < f64::EPSILON);
        assert_eq!(result.limit, 5);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let reply = r#"{"search_type": "comprehensive", "max_distance_km": 5000, "limit": -4}"#;
        let result = parse_filters(reply, "every bakery").expect("parsed");
        assert_eq!(result.search_type, SearchType::Comprehensive);
        assert!((result.max_distance_km - 100.0).abs() < f64::EPSILON);
        assert_eq!(result.limit, 1);
    }

    #[test]
    fn test_non_string_tags_dropped() {
        let reply = r#"{"tag_filters": ["wifi", 3, null, "", "Vegan"]}"#;
        let result = parse_filters(reply, "q").expect("parsed");
        assert_eq!(result.tag_filters, vec!["wifi", "vegan"]);
    }

    #[test]
    fn test_null_category() {
        let result = parse_filters(r#"{"category_filter": null}"#, "q").expect("parsed");
        assert_eq!(result.category_filter, None);
    }

    #[test]
    fn test_code_fence_is_stripped() {
        let reply = "```json\n{\"category_filter\": \"healthcare\"}\n```";
        let result = parse_filters(reply, "clinic").expect("parsed");
        assert_eq!(result.category_filter, Some(BusinessCategory::Healthcare));
    }

    #[test]
    fn test_malformed_json_fails() {
        let err = parse_filters("Sure! Here are your filters: {", "q").unwrap_err();
        assert!(matches!(err, AdapterFailure::MalformedJson(_)));
    }

    #[test]
    fn test_non_object_fails() {
        for reply in ["[1, 2]", "\"cafe\"", "42", "null"] {
            let err = parse_filters(reply, "q").unwrap_err();
            assert!(matches!(err, AdapterFailure::NotAnObject), "reply: {reply}");
        }
    }

    #[test]
    fn test_round_to_count() {
        assert_eq!(round_to_count(7.6), 8);
        assert_eq!(round_to_count(-3.0), 0);
        assert_eq!(round_to_count(1e12), u32::MAX);
    }
}
