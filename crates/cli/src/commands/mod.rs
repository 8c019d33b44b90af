//! CLI subcommands.

pub mod classify;

use nearby_classifier::{ClassificationEngine, ClassifierConfig, ConfigError};

/// Build the engine from the environment, or rules-only when asked.
///
/// # Errors
///
/// Returns an error if a classifier environment variable is invalid.
pub fn engine(rules_only: bool) -> Result<ClassificationEngine, ConfigError> {
    if rules_only {
        return Ok(ClassificationEngine::rules_only());
    }
    let config = ClassifierConfig::from_env()?;
    Ok(ClassificationEngine::from_config(&config))
}
