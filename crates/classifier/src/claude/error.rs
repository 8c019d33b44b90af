//! Failures of a single Messages API call.

use thiserror::Error;

/// Why a classification request to Claude produced no text.
///
/// None of these are retried; the engine answers from the rules instead.
#[derive(Debug, Error)]
pub enum ClaudeError {
    /// The request never got a response: refused connection, DNS failure,
    /// request timeout or a truncated body.
    #[error("transport failure: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx status. `error_type` is Anthropic's error type when the body
    /// carries one, `http_<status>` otherwise.
    #[error("API error ({error_type}): {message}")]
    Api { error_type: String, message: String },

    /// HTTP 429; carries the `Retry-After` seconds.
    #[error("rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// HTTP 401.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The API key cannot be sent as a header.
    #[error("invalid API key: {0}")]
    InvalidApiKey(String),

    /// A 2xx body that is not a Messages response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The reply contained no text.
    #[error("response contained no text")]
    EmptyResponse,
}

/// Body of a non-2xx Messages response: `{"type": "error", "error": {...}}`.
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failure() {
        let cases = [
            (ClaudeError::RateLimited(12), "rate limited, retry after 12 seconds"),
            (
                ClaudeError::Api {
                    error_type: "http_502".to_string(),
                    message: "bad gateway".to_string(),
                },
                "API error (http_502): bad gateway",
            ),
            (ClaudeError::EmptyResponse, "response contained no text"),
        ];
        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_overloaded_body() {
        let body = r#"{"type": "error", "error": {"type": "overloaded_error", "message": "Overloaded"}}"#;
        let parsed: ApiErrorResponse = serde_json::from_str(body).expect("deserialize");
        assert_eq!(parsed.error.error_type, "overloaded_error");
        assert_eq!(parsed.error.message, "Overloaded");
    }

    #[test]
    fn test_error_body_without_details_is_rejected() {
        assert!(serde_json::from_str::<ApiErrorResponse>(r#"{"type": "error"}"#).is_err());
    }
}
