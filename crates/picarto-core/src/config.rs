//! Configuration management for the Picarto client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the Picarto client
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
  /// Application client identifier, sent as `Client-ID` on every request
  pub client_id: String,

  /// Optional bearer secret for elevated access
  pub client_secret: Option<String>,

  /// Per-attempt request timeout in milliseconds
  pub timeout_ms: u64,

  /// Maximum transport-level retries for connection failures
  pub max_retries: u32,

  /// Maximum re-issues of a request rejected with 429
  pub rate_limit_retries: u32,

  /// Cap on the accumulated time spent waiting out 429 rejections, in seconds
  pub rate_limit_wait_secs: u64,

  /// Base URL for the Picarto API
  pub base_url: String,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let client_id = env::var("PICARTO_CLIENT_ID")
      .map_err(|_| Error::ClientId("PICARTO_CLIENT_ID not set".to_string()))?;
    if client_id.trim().is_empty() {
      return Err(Error::ClientId("PICARTO_CLIENT_ID is empty".to_string()));
    }

    let client_secret = env::var("PICARTO_CLIENT_SECRET").ok().filter(|s| !s.is_empty());

    let timeout_ms = env::var("PICARTO_TIMEOUT_MS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_MS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid PICARTO_TIMEOUT_MS".to_string()))?;

    let max_retries = env::var("PICARTO_MAX_RETRIES")
      .unwrap_or_else(|_| crate::DEFAULT_MAX_RETRIES.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid PICARTO_MAX_RETRIES".to_string()))?;

    let rate_limit_retries = env::var("PICARTO_RATE_LIMIT_RETRIES")
      .unwrap_or_else(|_| crate::DEFAULT_RATE_LIMIT_RETRIES.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid PICARTO_RATE_LIMIT_RETRIES".to_string()))?;

    let rate_limit_wait_secs = env::var("PICARTO_RATE_LIMIT_WAIT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_RATE_LIMIT_WAIT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid PICARTO_RATE_LIMIT_WAIT_SECS".to_string()))?;

    let base_url = env::var("PICARTO_BASE_URL").unwrap_or_else(|_| crate::PICARTO_BASE_URL.to_string());

    Ok(Config {
      client_id,
      client_secret,
      timeout_ms,
      max_retries,
      rate_limit_retries,
      rate_limit_wait_secs,
      base_url,
    })
  }

  /// Create a config with default values and no secret
  pub fn new(client_id: impl Into<String>) -> Self {
    Config {
      client_id: client_id.into(),
      client_secret: None,
      timeout_ms: crate::DEFAULT_TIMEOUT_MS,
      max_retries: crate::DEFAULT_MAX_RETRIES,
      rate_limit_retries: crate::DEFAULT_RATE_LIMIT_RETRIES,
      rate_limit_wait_secs: crate::DEFAULT_RATE_LIMIT_WAIT_SECS,
      base_url: crate::PICARTO_BASE_URL.to_string(),
    }
  }

  /// Attach a bearer secret, enabling the `Authorization` header
  pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
    self.client_secret = Some(secret.into());
    self
  }

  /// Point the client at a different API root (mock servers, staging)
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }
}

impl std::fmt::Debug for Config {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Config")
      .field("client_id", &self.client_id)
      .field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
      .field("timeout_ms", &self.timeout_ms)
      .field("max_retries", &self.max_retries)
      .field("rate_limit_retries", &self.rate_limit_retries)
      .field("rate_limit_wait_secs", &self.rate_limit_wait_secs)
      .field("base_url", &self.base_url)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_from_env() {
    env::set_var("PICARTO_CLIENT_ID", "test_client");
    env::remove_var("PICARTO_CLIENT_SECRET");
    let config = Config::from_env().unwrap();
    assert_eq!(config.client_id, "test_client");
    assert_eq!(config.timeout_ms, 1000);
    assert_eq!(config.max_retries, 4);
    assert!(config.client_secret.is_none());
  }

  #[test]
  fn test_builder_defaults() {
    let config = Config::new("abc").with_secret("s3cret").with_base_url("http://localhost:9000");
    assert_eq!(config.client_id, "abc");
    assert_eq!(config.client_secret.as_deref(), Some("s3cret"));
    assert_eq!(config.base_url, "http://localhost:9000");
    assert_eq!(config.rate_limit_retries, 3);
    assert_eq!(config.rate_limit_wait_secs, 120);
  }

  #[test]
  fn test_debug_redacts_secret() {
    let rendered = format!("{:?}", Config::new("abc").with_secret("s3cret"));
    assert!(!rendered.contains("s3cret"));
    assert!(rendered.contains("<redacted>"));
  }
}
