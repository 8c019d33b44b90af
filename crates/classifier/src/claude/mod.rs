//! Claude API integration.
//!
//! A thin client over the Anthropic Messages API used by the classifier for
//! single-shot text completions. Streaming and tool use are not needed here.

mod client;
mod error;
mod types;

pub use client::ClaudeClient;
pub use error::{ApiError, ApiErrorResponse, ClaudeError};
pub use types::{ChatRequest, ChatResponse, ContentBlock, Message};
