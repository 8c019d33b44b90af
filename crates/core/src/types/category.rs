//! Business categories.

use serde::{Deserialize, Serialize};

/// Error returned when a category name is not one of [`BusinessCategory::ALL`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown business category: {0}")]
pub struct UnknownCategory(pub String);

/// The fixed set of categories a business can be listed under.
///
/// Serialized using the title-case variant name (`"Cafe"`, `"Healthcare"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessCategory {
    Restaurant,
    Cafe,
    Retail,
    Grocery,
    Healthcare,
    Services,
    Automotive,
    Beauty,
    Fitness,
    Entertainment,
}

impl BusinessCategory {
    /// Every category, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Restaurant,
        Self::Cafe,
        Self::Retail,
        Self::Grocery,
        Self::Healthcare,
        Self::Services,
        Self::Automotive,
        Self::Beauty,
        Self::Fitness,
        Self::Entertainment,
    ];

    /// Returns the display name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Restaurant => "Restaurant",
            Self::Cafe => "Cafe",
            Self::Retail => "Retail",
            Self::Grocery => "Grocery",
            Self::Healthcare => "Healthcare",
            Self::Services => "Services",
            Self::Automotive => "Automotive",
            Self::Beauty => "Beauty",
            Self::Fitness => "Fitness",
            Self::Entertainment => "Entertainment",
        }
    }
}

impl std::fmt::Display for BusinessCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BusinessCategory {
    type Err = UnknownCategory;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(trimmed.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("cafe".parse::<BusinessCategory>(), Ok(BusinessCategory::Cafe));
        assert_eq!(
            "  HEALTHCARE ".parse::<BusinessCategory>(),
            Ok(BusinessCategory::Healthcare)
        );
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "bakery".parse::<BusinessCategory>().unwrap_err();
        assert_eq!(err.to_string(), "unknown business category: bakery");
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for category in BusinessCategory::ALL {
            assert_eq!(category.to_string().parse::<BusinessCategory>(), Ok(category));
        }
    }

    #[test]
    fn test_serializes_as_title_case() {
        let json = serde_json::to_string(&BusinessCategory::Cafe).expect("serialize");
        assert_eq!(json, "\"Cafe\"");
    }
}
