//! Structured search filters derived from a free-text query.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::BusinessCategory;

/// How wide a search should be.
///
/// The breadth decides the default distance and result caps, and the legal
/// range any other value is clamped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    /// A narrow lookup ("joe's diner on main street").
    #[default]
    Specific,
    /// A generic category search ("coffee near me").
    Broad,
    /// An exhaustive listing ("find all pharmacies").
    Comprehensive,
}

impl SearchType {
    /// Every breadth, narrowest first.
    pub const ALL: [Self; 3] = [Self::Specific, Self::Broad, Self::Comprehensive];

    /// Returns the wire name of the breadth.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Specific => "specific",
            Self::Broad => "broad",
            Self::Comprehensive => "comprehensive",
        }
    }

    /// Default search radius in kilometres.
    #[must_use]
    pub const fn default_distance_km(self) -> f64 {
        match self {
            Self::Specific => 10.0,
            Self::Broad => 20.0,
            Self::Comprehensive => 50.0,
        }
    }

    /// Default number of results.
    #[must_use]
    pub const fn default_limit(self) -> u32 {
        match self {
            Self::Specific => 5,
            Self::Broad => 10,
            Self::Comprehensive => 20,
        }
    }

    /// Legal search radius in kilometres.
    #[must_use]
    pub const fn distance_range_km(self) -> RangeInclusive<f64> {
        match self {
            Self::Specific => 1.0..=15.0,
            Self::Broad => 1.0..=30.0,
            Self::Comprehensive => 1.0..=100.0,
        }
    }

    /// Legal number of results.
    #[must_use]
    pub const fn limit_range(self) -> RangeInclusive<u32> {
        match self {
            Self::Specific => 1..=10,
            Self::Broad => 1..=15,
            Self::Comprehensive => 1..=50,
        }
    }

    /// Clamp a distance into [`Self::distance_range_km`].
    ///
    /// Non-finite input clamps to the lower bound.
    #[must_use]
    pub fn clamp_distance_km(self, km: f64) -> f64 {
        let range = self.distance_range_km();
        if km.is_nan() {
            return *range.start();
        }
        km.clamp(*range.start(), *range.end())
    }

    /// Clamp a result count into [`Self::limit_range`].
    #[must_use]
    pub fn clamp_limit(self, limit: u32) -> u32 {
        let range = self.limit_range();
        limit.clamp(*range.start(), *range.end())
    }
}

impl std::fmt::Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SearchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "specific" => Ok(Self::Specific),
            "broad" => Ok(Self::Broad),
            "comprehensive" => Ok(Self::Comprehensive),
            other => Err(format!("invalid search type: {other}")),
        }
    }
}

/// Filters the search layer applies to a business lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFilterResult {
    /// At most one category.
    pub category_filter: Option<BusinessCategory>,
    /// Lowercase, hyphenated, deduplicated tags.
    pub tag_filters: Vec<String>,
    /// Query text after synonym expansion (the original query if none applied).
    pub enhanced_query: String,
    pub search_type: SearchType,
    pub max_distance_km: f64,
    pub limit: u32,
}

impl SearchFilterResult {
    /// An unfiltered result for `query` using the defaults of `search_type`.
    #[must_use]
    pub fn for_query(query: &str, search_type: SearchType) -> Self {
        Self {
            category_filter: None,
            tag_filters: Vec::new(),
            enhanced_query: query.to_owned(),
            search_type,
            max_distance_km: search_type.default_distance_km(),
            limit: search_type.default_limit(),
        }
    }

    /// Clamp distance and limit into the legal range of the search type.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.max_distance_km = self.search_type.clamp_distance_km(self.max_distance_km);
        self.limit = self.search_type.clamp_limit(self.limit);
        self
    }

    /// Append a tag filter unless an equal one is already present.
    ///
    /// The tag is normalized first; blank tags are ignored.
    pub fn push_tag(&mut self, tag: &str) {
        let tag = normalize_filter_tag(tag);
        if !tag.is_empty() && !self.tag_filters.contains(&tag) {
            self.tag_filters.push(tag);
        }
    }
}

/// Lowercase a tag and join its words with hyphens (`"Outdoor Seating"` → `"outdoor-seating"`).
#[must_use]
pub fn normalize_filter_tag(tag: &str) -> String {
    tag.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
