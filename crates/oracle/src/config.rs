//! Service configuration
//!
//! Refiner settings come from the environment. A missing API key is a
//! supported mode, not an error: the service then serves offline estimates
//! only and says so at startup.

use std::env;

/// Model identifier used when `ORACLE_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for the generative-model client.
#[derive(Debug, Clone)]
pub struct RefinerConfig {
  /// API key; `None` runs the service in offline mode
  pub api_key: Option<String>,
  /// Model identifier sent to the generative API
  pub model: String,
  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Default for RefinerConfig {
  fn default() -> Self {
    Self { api_key: None, model: DEFAULT_MODEL.to_string(), timeout_secs: DEFAULT_TIMEOUT_SECS }
  }
}

impl RefinerConfig {
  /// Load refiner settings from the environment.
  ///
  /// `GEMINI_API_KEY` selects configured vs offline mode (empty counts as
  /// unset); `ORACLE_MODEL` overrides the default model.
  pub fn from_env() -> Self {
    let api_key = env::var("GEMINI_API_KEY").ok().filter(|key| !key.is_empty());
    let model = env::var("ORACLE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
    Self { api_key, model, ..Self::default() }
  }

  /// Whether an API key is present.
  pub fn is_configured(&self) -> bool {
    self.api_key.is_some()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  #[serial]
  fn test_from_env_without_key_is_offline() {
    env::remove_var("GEMINI_API_KEY");
    env::remove_var("ORACLE_MODEL");

    let config = RefinerConfig::from_env();
    assert!(!config.is_configured());
    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
  }

  #[test]
  #[serial]
  fn test_from_env_reads_key_and_model() {
    env::set_var("GEMINI_API_KEY", "test-key");
    env::set_var("ORACLE_MODEL", "test-model");

    let config = RefinerConfig::from_env();
    assert!(config.is_configured());
    assert_eq!(config.api_key.as_deref(), Some("test-key"));
    assert_eq!(config.model, "test-model");

    env::remove_var("GEMINI_API_KEY");
    env::remove_var("ORACLE_MODEL");
  }

  #[test]
  #[serial]
  fn test_empty_key_counts_as_unset() {
    env::set_var("GEMINI_API_KEY", "");

    let config = RefinerConfig::from_env();
    assert!(!config.is_configured());

    env::remove_var("GEMINI_API_KEY");
  }
}
