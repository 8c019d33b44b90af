//! Prompt construction for the model path.
//!
//! Prompts spell out the legal categories and every numeric bound so the
//! model's answer already fits the output schema; the parsers still enforce
//! the same bounds afterwards.

use std::fmt::Write;

use nearby_core::{BusinessCategory, MAX_TAG_LEN, MAX_TAGS, SearchType};

/// A system instruction plus the user turn carrying the raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Prompt asking for search filters as a single JSON object.
#[must_use]
pub fn filters_prompt(query: &str) -> Prompt {
    let mut system = String::from(
        "You convert search queries for a local business directory into structured search filters.\n\n",
    );
    push_categories(&mut system);

    system.push_str(
        "\nRespond with ONLY a single JSON object (no prose, no code fences) with these fields:\n\
         - category_filter: one of the categories above, or null\n\
         - tag_filters: array of short lowercase tags, words joined with hyphens\n\
         - enhanced_query: the query rewritten with helpful synonyms\n\
         - search_type: \"specific\", \"broad\" or \"comprehensive\"\n\
         - max_distance_km: number\n\
         - limit: integer\n\nBounds by search_type:\n",
    );
    for search_type in SearchType::ALL {
        let km = search_type.distance_range_km();
        let limit = search_type.limit_range();
        let _ = writeln!(
            system,
            "- {search_type}: max_distance_km {}-{} (default {}), limit {}-{} (default {})",
            km.start(),
            km.end(),
            search_type.default_distance_km(),
            limit.start(),
            limit.end(),
            search_type.default_limit(),
        );
    }
    system.push_str(
        "\nUse \"comprehensive\" when the user asks for all or every match, \"broad\" for a \
         general category, otherwise \"specific\".",
    );

    Prompt {
        system,
        user: format!("Query: {query}"),
    }
}

/// Prompt asking for discoverability tags as one comma-separated line.
#[must_use]
pub fn tags_prompt(name: &str, description: &str, category: Option<&str>) -> Prompt {
    let mut system =
        String::from("You assign discoverability tags to businesses in a local directory.\n\n");
    push_categories(&mut system);

    let _ = write!(
        system,
        "\nRules:\n\
         1. Return ONLY the tags, comma-separated, on a single line\n\
         2. Return at most {MAX_TAGS} tags\n\
         3. Each tag is lowercase and at most {MAX_TAG_LEN} characters\n\
         4. Prefer features customers search for: cuisine, services, amenities, payment options"
    );

    Prompt {
        system,
        user: format!(
            "Business name: {name}\nDescription: {description}\nCategory: {}",
            category.unwrap_or("unspecified")
        ),
    }
}

fn push_categories(prompt: &mut String) {
    prompt.push_str("Available categories:\n");
    for category in BusinessCategory::ALL {
        let _ = writeln!(prompt, "- {category}");
    }
}
