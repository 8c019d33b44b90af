//! Hybrid classification: model first, rules as the fallback.
//!
//! The public operations never fail. When a model is configured the engine
//! asks it once, bounded by the configured timeout; any failure (missing
//! credentials, provider error, timeout, unusable reply) is logged and the
//! deterministic rules answer instead.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use nearby_core::{SearchFilterResult, TagResult};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::ai::{AdapterFailure, AiClassifier, TextModel};
use crate::claude::ClaudeClient;
use crate::config::ClassifierConfig;
use crate::rules;

/// Which path produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationSource {
    Ai,
    Rules,
}

impl ClassificationSource {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Rules => "rules",
        }
    }
}

impl std::fmt::Display for ClassificationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classification together with the path that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Classified<T> {
    pub value: T,
    pub source: ClassificationSource,
}

impl<T> Classified<T> {
    const fn ai(value: T) -> Self {
        Self {
            value,
            source: ClassificationSource::Ai,
        }
    }

    const fn rules(value: T) -> Self {
        Self {
            value,
            source: ClassificationSource::Rules,
        }
    }
}

/// Entry point for query and description classification.
#[derive(Clone)]
pub struct ClassificationEngine {
    ai: Option<AiClassifier>,
    timeout: Duration,
}

impl std::fmt::Debug for ClassificationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassificationEngine")
            .field("ai_enabled", &self.ai.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClassificationEngine {
    /// Engine that never calls a model.
    #[must_use]
    pub fn rules_only() -> Self {
        Self {
            ai: None,
            timeout: ClassifierConfig::default().timeout,
        }
    }

    /// Engine that tries `model` first, giving up after `timeout`.
    #[must_use]
    pub fn with_model(model: Arc<dyn TextModel>, timeout: Duration) -> Self {
        Self {
            ai: Some(AiClassifier::new(model)),
            timeout,
        }
    }

    /// Build from configuration.
    ///
    /// Without Claude credentials, or if the HTTP client cannot be built,
    /// the engine runs rules-only.
    #[must_use]
    pub fn from_config(config: &ClassifierConfig) -> Self {
        let Some(claude) = &config.claude else {
            info!("No model configured, classifying with rules only");
            return Self {
                ai: None,
                timeout: config.timeout,
            };
        };

        match ClaudeClient::new(claude) {
            Ok(client) => {
                info!(model = %client.model(), timeout = ?config.timeout, "Model classification enabled");
                Self::with_model(Arc::new(client), config.timeout)
            }
            Err(e) => {
                warn!(error = %e, "Failed to build Claude client, classifying with rules only");
                Self {
                    ai: None,
                    timeout: config.timeout,
                }
            }
        }
    }

    /// Returns true if a model is consulted before the rules.
    #[must_use]
    pub const fn ai_enabled(&self) -> bool {
        self.ai.is_some()
    }

    /// Turn a free-text query into search filters.
    pub async fn classify_query(&self, query: &str) -> SearchFilterResult {
        self.classify_query_with_source(query).await.value
    }

    /// Suggest tags for a listing.
    pub async fn classify_description(
        &self,
        name: &str,
        description: &str,
        category: Option<&str>,
    ) -> TagResult {
        self.classify_description_with_source(name, description, category)
            .await
            .value
    }

    /// Like [`Self::classify_query`], reporting which path answered.
    #[instrument(skip_all, fields(query_len = query.len()))]
    pub async fn classify_query_with_source(&self, query: &str) -> Classified<SearchFilterResult> {
        let attempt = match &self.ai {
            Some(ai) => self.bounded(ai.classify_query(query)).await,
            None => Err(AdapterFailure::NotConfigured),
        };

        match attempt {
            Ok(filters) => {
                debug!(category = ?filters.category_filter, search_type = %filters.search_type, "Query classified by model");
                Classified::ai(filters)
            }
            Err(failure) => {
                log_fallback("query", &failure);
                Classified::rules(rules::classify_query(query))
            }
        }
    }

    /// Like [`Self::classify_description`], reporting which path answered.
    #[instrument(skip_all, fields(name_len = name.len(), description_len = description.len(), category = ?category))]
    pub async fn classify_description_with_source(
        &self,
        name: &str,
        description: &str,
        category: Option<&str>,
    ) -> Classified<TagResult> {
        let attempt = match &self.ai {
            Some(ai) => {
                self.bounded(ai.classify_description(name, description, category))
                    .await
            }
            None => Err(AdapterFailure::NotConfigured),
        };

        match attempt {
            Ok(tags) => {
                debug!(tags = tags.len(), "Description classified by model");
                Classified::ai(tags)
            }
            Err(failure) => {
                log_fallback("description", &failure);
                Classified::rules(rules::classify_description(name, description, category))
            }
        }
    }

    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, AdapterFailure>>,
    ) -> Result<T, AdapterFailure> {
        tokio::time::timeout(self.timeout, call)
            .await
            .unwrap_or(Err(AdapterFailure::Timeout {
                after: self.timeout,
            }))
    }
}

fn log_fallback(kind: &str, failure: &AdapterFailure) {
    match failure {
        AdapterFailure::NotConfigured => debug!(kind, "Using rule-based classification"),
        other => info!(kind, reason = %other, "Model classification failed, using rules"),
    }
}
