//! Model-backed classification.
//!
//! Builds a prompt, asks a [`TextModel`] for a reply and parses it into the
//! same output types the rules produce. Any problem along the way surfaces as
//! an [`AdapterFailure`]; deciding what to do about it is the engine's job.

mod error;
mod filters;
mod model;
pub mod prompt;
mod tags;

use std::sync::Arc;

use nearby_core::{SearchFilterResult, TagResult};
use tracing::{debug, instrument};

pub use error::AdapterFailure;
pub use filters::parse_filters;
pub use model::TextModel;
pub use prompt::Prompt;
pub use tags::parse_tags;

/// Classifier that answers with a generative model.
#[derive(Clone)]
pub struct AiClassifier {
    model: Arc<dyn TextModel>,
}

impl AiClassifier {
    #[must_use]
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    /// Ask the model for search filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the model call fails or the reply is unusable.
    #[instrument(skip_all, fields(query_len = query.len()))]
    pub async fn classify_query(&self, query: &str) -> Result<SearchFilterResult, AdapterFailure> {
        let reply = self.model.generate(&prompt::filters_prompt(query)).await?;
        debug!(reply_len = reply.len(), "Received filters reply");
        parse_filters(&reply, query)
    }

    /// Ask the model for listing tags.
    ///
    /// # Errors
    ///
    /// Returns an error if the model call fails or the reply has no usable tags.
    #[instrument(skip_all, fields(name_len = name.len(), description_len = description.len(), category = ?category))]
    pub async fn classify_description(
        &self,
        name: &str,
        description: &str,
        category: Option<&str>,
    ) -> Result<TagResult, AdapterFailure> {
        let reply = self
            .model
            .generate(&prompt::tags_prompt(name, description, category))
            .await?;
        debug!(reply_len = reply.len(), "Received tags reply");
        parse_tags(&reply)
    }
}

impl std::fmt::Debug for AiClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiClassifier").finish_non_exhaustive()
    }
}
