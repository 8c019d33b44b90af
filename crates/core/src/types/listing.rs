//! Business listing input for tag assignment.

use serde::{Deserialize, Serialize};

/// Errors that can occur when building a [`BusinessListing`] from caller input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    /// The business name was not supplied.
    #[error("business name is required")]
    MissingName,
    /// The business description was not supplied.
    #[error("business description is required")]
    MissingDescription,
}

/// The text a business owner submits to be tagged.
///
/// Name and description must be present but may be empty; an empty listing
/// simply yields few or no tags. The category is free text and is matched
/// against known categories by the classifier.
///
/// ## Examples
///
/// ```
/// use nearby_core::{BusinessListing, ListingError};
///
/// let listing = BusinessListing::from_parts(
///     Some("Joe's Diner".to_string()),
///     Some(String::new()),
///     Some("  ".to_string()),
/// )
/// .unwrap();
/// assert_eq!(listing.category, None);
///
/// assert_eq!(
///     BusinessListing::from_parts(None, Some("x".to_string()), None),
///     Err(ListingError::MissingName)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessListing {
    pub name: String,
    pub description: String,
    pub category: Option<String>,
}

impl BusinessListing {
    /// Validate raw caller input.
    ///
    /// A blank category is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or description is missing.
    pub fn from_parts(
        name: Option<String>,
        description: Option<String>,
        category: Option<String>,
    ) -> Result<Self, ListingError> {
        let name = name.ok_or(ListingError::MissingName)?;
        let description = description.ok_or(ListingError::MissingDescription)?;
        let category = category.filter(|c| !c.trim().is_empty());

        Ok(Self {
            name,
            description,
            category,
        })
    }

    /// Returns the category as a string slice, if any.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_description() {
        let result = BusinessListing::from_parts(Some("Shop".to_string()), None, None);
        assert_eq!(result, Err(ListingError::MissingDescription));
    }

    #[test]
    fn test_empty_strings_are_valid() {
        let listing = BusinessListing::from_parts(Some(String::new()), Some(String::new()), None)
            .expect("valid listing");
        assert!(listing.name.is_empty());
        assert!(listing.description.is_empty());
    }

    #[test]
    fn test_category_kept_when_present() {
        let listing = BusinessListing::from_parts(
            Some("Joe's".to_string()),
            Some("diner".to_string()),
            Some("restaurant".to_string()),
        )
        .expect("valid listing");
        assert_eq!(listing.category(), Some("restaurant"));
    }
}
