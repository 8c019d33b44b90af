//! Deterministic classifiers.
//!
//! These run with no network access and cannot fail, which makes them the
//! terminal state of every classification: whenever the model path is
//! unavailable the engine answers from here.
//!
//! - [`classify_query`] - search query → [`SearchFilterResult`](nearby_core::SearchFilterResult)
//! - [`classify_description`] - business listing → [`TagResult`](nearby_core::TagResult)

mod description;
mod query;

pub use description::classify_description;
pub use query::classify_query;
