//! Core types for the Nearby directory.
//!
//! These types describe the structured facets the classification engine
//! produces from free text.

pub mod category;
pub mod listing;
pub mod search;
pub mod tags;

pub use category::{BusinessCategory, UnknownCategory};
pub use listing::{BusinessListing, ListingError};
pub use search::{SearchFilterResult, SearchType, normalize_filter_tag};
pub use tags::{MAX_TAG_LEN, MAX_TAGS, TagResult, is_valid_tag};
