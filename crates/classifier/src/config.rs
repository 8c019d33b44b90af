//! Classifier configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CLAUDE_API_KEY` - Anthropic API key. When unset the engine runs rules-only.
//! - `CLAUDE_MODEL` - Model ID (default: claude-3-5-haiku-latest)
//! - `CLAUDE_API_URL` - Messages endpoint (default: Anthropic production URL)
//! - `CLASSIFIER_TIMEOUT_MS` - Upper bound on a model call (default: 8000)
//! - `CLASSIFIER_MAX_TOKENS` - Maximum tokens per model reply (default: 300)

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

pub const DEFAULT_CLAUDE_MODEL: &str = "claude-3-5-haiku-latest";
pub const DEFAULT_CLAUDE_API_URL: &str = "https://api.anthropic.com/v1/messages";
const DEFAULT_TIMEOUT_MS: u64 = 8000;
const DEFAULT_MAX_TOKENS: u32 = 300;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "insert",
    "put-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Classification engine configuration.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Claude configuration; `None` disables the model path.
    pub claude: Option<ClaudeConfig>,
    /// Upper bound on a single model call, after which the rules answer.
    pub timeout: Duration,
}

/// Claude API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct ClaudeConfig {
    /// Anthropic API key
    pub api_key: SecretString,
    /// Model ID (e.g., claude-3-5-haiku-latest)
    pub model: String,
    /// Messages endpoint URL
    pub api_url: String,
    /// Maximum tokens in a reply
    pub max_tokens: u32,
    /// Per-request bound enforced by the HTTP client
    pub request_timeout: Duration,
}

impl std::fmt::Debug for ClaudeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClaudeConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .field("max_tokens", &self.max_tokens)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl ClaudeConfig {
    /// Configuration for `api_key` with every other setting at its default.
    #[must_use]
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            model: DEFAULT_CLAUDE_MODEL.to_string(),
            api_url: DEFAULT_CLAUDE_API_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl Default for ClassifierConfig {
    /// Rules-only configuration.
    fn default() -> Self {
        Self {
            claude: None,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl ClassifierConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a numeric variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a numeric variable is set but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let timeout = Duration::from_millis(
            parse_positive::<u64>(&lookup, "CLASSIFIER_TIMEOUT_MS")?.unwrap_or(DEFAULT_TIMEOUT_MS),
        );
        let max_tokens = parse_positive::<u32>(&lookup, "CLASSIFIER_MAX_TOKENS")?
            .unwrap_or(DEFAULT_MAX_TOKENS);

        let claude = non_blank(lookup("CLAUDE_API_KEY"))
            .filter(|key| match check_not_placeholder(key) {
                Ok(()) => true,
                Err(reason) => {
                    tracing::warn!("CLAUDE_API_KEY ignored, running rules-only: {reason}");
                    false
                }
            })
            .map(|key| ClaudeConfig {
                api_key: SecretString::from(key),
                model: non_blank(lookup("CLAUDE_MODEL"))
                    .unwrap_or_else(|| DEFAULT_CLAUDE_MODEL.to_string()),
                api_url: non_blank(lookup("CLAUDE_API_URL"))
                    .unwrap_or_else(|| DEFAULT_CLAUDE_API_URL.to_string()),
                max_tokens,
                request_timeout: timeout,
            });

        Ok(Self { claude, timeout })
    }

    /// Returns true if a model is configured.
    #[must_use]
    pub const fn ai_enabled(&self) -> bool {
        self.claude.is_some()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse an optional strictly positive integer variable.
fn parse_positive<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
    T::Err: std::fmt::Display,
{
    let Some(raw) = non_blank(lookup(key)) else {
        return Ok(None);
    };
    let value = raw
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if value <= T::default() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be greater than zero".to_string(),
        ));
    }
    Ok(Some(value))
}

/// Reject keys copied verbatim from a template.
fn check_not_placeholder(secret: &str) -> Result<(), String> {
    let lower = secret.to_lowercase();
    PLACEHOLDER_PATTERNS
        .iter()
        .find(|pattern| lower.contains(*pattern))
        .map_or(Ok(()), |pattern| {
            Err(format!("appears to be a placeholder (contains '{pattern}')"))
        })
}
