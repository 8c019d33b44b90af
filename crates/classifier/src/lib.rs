//! Hybrid classification engine for the Nearby directory.
//!
//! Turns free-text search queries into structured filters and business
//! descriptions into discoverability tags. A generative model (Claude) is
//! tried first when configured; deterministic keyword rules answer whenever
//! the model is unavailable, slow, or returns something unusable.
//!
//! # Example
//!
//! ```
//! use nearby_classifier::ClassificationEngine;
//!
//! # async fn demo() {
//! let engine = ClassificationEngine::rules_only();
//! let filters = engine.classify_query("find all coffee shops").await;
//! assert_eq!(filters.limit, 20);
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod ai;
pub mod claude;
pub mod config;
pub mod engine;
pub mod lexicon;
pub mod rules;

pub use config::{ClassifierConfig, ClaudeConfig, ConfigError};
pub use engine::{ClassificationEngine, ClassificationSource, Classified};
