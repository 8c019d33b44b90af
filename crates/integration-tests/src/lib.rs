//! Integration tests for the Nearby classification engine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p nearby-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `rules_classification` - Deterministic query and description rules
//! - `engine_fallback` - Model path against a mock Messages endpoint
//!
//! No test talks to the real Anthropic API.

use std::net::TcpListener;
use std::time::Duration;

use nearby_classifier::{ClassificationEngine, ClassifierConfig, ClaudeConfig};
use secrecy::SecretString;
use serde_json::{Value, json};
use wiremock::MockServer;

/// Messages endpoint path served by the mock.
pub const MESSAGES_PATH: &str = "/v1/messages";

/// Engine whose Claude client points at `server`.
#[must_use]
pub fn engine_for(server: &MockServer, timeout: Duration) -> ClassificationEngine {
    engine_at(format!("{}{MESSAGES_PATH}", server.uri()), timeout)
}

/// Engine whose Claude client posts to `api_url`.
#[must_use]
pub fn engine_at(api_url: String, timeout: Duration) -> ClassificationEngine {
    let mut claude = ClaudeConfig::new(SecretString::from("sk-ant-test-9f3Kq"));
    claude.api_url = api_url;
    claude.request_timeout = timeout;

    ClassificationEngine::from_config(&ClassifierConfig {
        claude: Some(claude),
        timeout,
    })
}

/// A Messages URL on a local port with nothing listening.
///
/// # Errors
///
/// Returns an error if no ephemeral port can be bound.
pub fn refused_endpoint() -> std::io::Result<String> {
    let port = TcpListener::bind("127.0.0.1:0")?.local_addr()?.port();
    Ok(format!("http://127.0.0.1:{port}{MESSAGES_PATH}"))
}

/// A Messages API response carrying one text block.
#[must_use]
pub fn text_reply(text: &str) -> Value {
    json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "model": "claude-3-5-haiku-latest",
        "content": [{ "type": "text", "text": text }],
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 120, "output_tokens": 40 }
    })
}
