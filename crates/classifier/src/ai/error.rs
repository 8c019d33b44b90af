//! Failure type for the model path.

use std::time::Duration;

use thiserror::Error;

use crate::claude::ClaudeError;

/// Why the model path produced no result.
///
/// Every variant means the same thing to the engine: answer from the rules
/// instead. The distinction exists for logging and tests.
#[derive(Debug, Error)]
pub enum AdapterFailure {
    /// No API credentials are configured.
    #[error("no model configured")]
    NotConfigured,

    /// The model did not answer in time.
    #[error("model call timed out after {after:?}")]
    Timeout {
        /// The bound that was exceeded.
        after: Duration,
    },

    /// The request failed or the provider returned an error.
    #[error("model call failed: {0}")]
    Provider(#[from] ClaudeError),

    /// The reply could not be parsed as JSON.
    #[error("reply is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// The reply parsed as JSON but not as an object.
    #[error("reply JSON is not an object")]
    NotAnObject,

    /// The reply yielded no tag within bounds.
    #[error("reply contained no usable tags")]
    NoUsableTags,
}
