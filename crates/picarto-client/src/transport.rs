//! HTTP transport layer for Picarto API requests
//!
//! Handles connection-level faults only (timeouts, refused or reset connections). Every response
//! the server actually sends, whatever its status, is handed back to the caller.

use picarto_core::{Config, Error, Result};
use rand::Rng;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Response};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Exponential backoff with jitter for transient network failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Delay before the first retry
    pub initial_backoff: Duration,
    /// Upper bound on the exponential part of the delay
    pub max_backoff: Duration,
    /// Multiplier applied per retry
    pub factor: u32,
    /// Random extra delay added to each retry, up to this amount
    pub max_jitter: Duration,
    /// Retries after the first attempt
    pub max_retries: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_backoff: Duration::from_millis(5),
            max_backoff: Duration::from_millis(500),
            factor: 2,
            max_jitter: Duration::from_millis(2),
            max_retries: picarto_core::DEFAULT_MAX_RETRIES,
        }
    }
}

impl RetryPolicy {
    /// Backoff before retry number `retry` (0-based), without jitter
    pub fn backoff(&self, retry: u32) -> Duration {
        let multiplier = self.factor.checked_pow(retry).unwrap_or(u32::MAX);
        self.initial_backoff
            .checked_mul(multiplier)
            .unwrap_or(self.max_backoff)
            .min(self.max_backoff)
    }

    /// Backoff plus a random jitter in `[0, max_jitter]`
    pub fn delay(&self, retry: u32) -> Duration {
        let jitter_ms = self.max_jitter.as_millis() as u64;
        let jitter = if jitter_ms == 0 {
            Duration::ZERO
        } else {
            Duration::from_millis(rand::rng().random_range(0..=jitter_ms))
        };
        self.backoff(retry) + jitter
    }
}

/// HTTP transport used by the dispatcher
#[derive(Debug)]
pub struct Transport {
    client: Client,
    timeout: Duration,
    retry: RetryPolicy,
}

impl Transport {
    /// Create a new transport instance
    pub fn new(config: &Config) -> Result<Self> {
        let timeout = Duration::from_millis(config.timeout_ms);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("picarto-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        let retry = RetryPolicy { max_retries: config.max_retries, ..RetryPolicy::default() };

        Ok(Self { client, timeout, retry })
    }

    /// Send one request, retrying connection failures per the retry policy
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] once the retry budget is spent, [`Error::Http`] if the request
    /// could not be built at all.
    #[instrument(skip(self, headers, body), fields(body_len = body.len()))]
    pub async fn send(
        &self,
        method: Method,
        url: &str,
        headers: &HeaderMap,
        body: Vec<u8>,
    ) -> Result<Response> {
        let mut attempt = 0;

        loop {
            let result = self
                .client
                .request(method.clone(), url)
                .headers(headers.clone())
                .body(body.clone())
                .send()
                .await;

            match result {
                Ok(response) => {
                    debug!("Attempt {} returned {}", attempt + 1, response.status());
                    return Ok(response);
                }
                Err(e) if e.is_builder() => {
                    return Err(Error::Http(format!("Invalid request: {}", e)));
                }
                Err(e) if attempt >= self.retry.max_retries => {
                    warn!("Giving up after {} attempts: {}", attempt + 1, e);
                    return Err(Error::Transport(format!(
                        "Request failed after {} attempts: {}",
                        attempt + 1,
                        e
                    )));
                }
                Err(e) => {
                    let delay = self.retry.delay(attempt);
                    warn!(
                        "Request failed (attempt {}): {}. Retrying in {}ms",
                        attempt + 1,
                        e,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Get the per-attempt timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the retry policy
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }
}
