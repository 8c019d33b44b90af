//! The seam between the classifier and a generative text model.

use async_trait::async_trait;

use crate::claude::{ClaudeClient, ClaudeError};

use super::prompt::Prompt;

/// A generative model that answers a prompt with free text.
///
/// Implementations make a single attempt per call.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Send `prompt` and return the raw reply text.
    async fn generate(&self, prompt: &Prompt) -> Result<String, ClaudeError>;
}

#[async_trait]
impl TextModel for ClaudeClient {
    async fn generate(&self, prompt: &Prompt) -> Result<String, ClaudeError> {
        self.complete(Some(prompt.system.clone()), &prompt.user)
            .await
    }
}
