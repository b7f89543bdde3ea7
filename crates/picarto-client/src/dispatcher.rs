/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Quota-disciplined request execution.
//!
//! Every API call goes through [`Dispatcher::request`]: take the quota permit, send, feed the
//! response headers back into the tracker, then decide whether the server pushed back.

use crate::quota::{QuotaState, QuotaTracker};
use crate::transport::Transport;
use chrono::Utc;
use picarto_core::{Config, Error, Result, CLIENT_ID_HEADER, JSON_CONTENT_TYPE};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Identity presented on every request of a session
#[derive(Clone)]
pub struct Credentials {
  client_id: String,
  secret: Option<String>,
  headers: HeaderMap,
}

impl Credentials {
  /// Build the request headers for a client id and optional bearer secret
  ///
  /// # Errors
  ///
  /// Returns [`Error::ClientId`] if either value cannot be carried in an HTTP header.
  pub fn new(client_id: impl Into<String>, secret: Option<String>) -> Result<Self> {
    let client_id = client_id.into();
    let mut headers = HeaderMap::new();

    let name = HeaderName::from_bytes(CLIENT_ID_HEADER.as_bytes())
      .map_err(|e| Error::Http(format!("Invalid header name {}: {}", CLIENT_ID_HEADER, e)))?;
    let value = HeaderValue::from_str(&client_id)
      .map_err(|_| Error::ClientId(format!("Client id {:?} is not a valid header value", client_id)))?;
    headers.insert(name, value);

    if let Some(secret) = &secret {
      let mut value = HeaderValue::from_str(&format!("Bearer {}", secret))
        .map_err(|_| Error::ClientId("Client secret is not a valid header value".to_string()))?;
      value.set_sensitive(true);
      headers.insert(AUTHORIZATION, value);
    }

    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

    Ok(Self { client_id, secret, headers })
  }

  /// The application client id
  pub fn client_id(&self) -> &str {
    &self.client_id
  }

  /// Whether a bearer secret was configured
  pub fn has_secret(&self) -> bool {
    self.secret.is_some()
  }

  /// Headers attached to every outgoing request
  pub fn headers(&self) -> &HeaderMap {
    &self.headers
  }
}

impl std::fmt::Debug for Credentials {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Credentials")
      .field("client_id", &self.client_id)
      .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
      .finish()
  }
}

/// Bounds on how long a caller may be held back by 429 responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitBudget {
  /// Re-issues allowed after the first rejection
  pub max_retries: u32,
  /// Total time allowed to sleep waiting for the window to reset
  pub max_wait: Duration,
}

impl Default for RateLimitBudget {
  fn default() -> Self {
    Self {
      max_retries: picarto_core::DEFAULT_RATE_LIMIT_RETRIES,
      max_wait: Duration::from_secs(picarto_core::DEFAULT_RATE_LIMIT_WAIT_SECS),
    }
  }
}

/// Executes API calls under the session's quota
#[derive(Debug)]
pub struct Dispatcher {
  transport: Transport,
  quota: QuotaTracker,
  credentials: Credentials,
  budget: RateLimitBudget,
}

impl Dispatcher {
  /// Create a dispatcher with a fresh quota bucket
  pub fn new(config: &Config) -> Result<Self> {
    Ok(Self {
      transport: Transport::new(config)?,
      quota: QuotaTracker::new(),
      credentials: Credentials::new(config.client_id.clone(), config.client_secret.clone())?,
      budget: RateLimitBudget {
        max_retries: config.rate_limit_retries,
        max_wait: Duration::from_secs(config.rate_limit_wait_secs),
      },
    })
  }

  /// Replace the quota bucket, e.g. to share one between dispatchers using the same client id
  pub fn with_quota(mut self, quota: QuotaTracker) -> Self {
    self.quota = quota;
    self
  }

  /// Perform one logical API call.
  ///
  /// `url` must already carry its query string. `body`, when present, is sent as JSON; an absent
  /// body sends an empty payload.
  ///
  /// 200, 201, 204 and 502 come back as-is, as does any status other than 429. Note that 502 is
  /// not retried here; callers wanting to ride out gateway failures need their own policy.
  /// A 429 makes the dispatcher sleep until the quota window resets and re-issue the identical
  /// request, within the [`RateLimitBudget`].
  ///
  /// # Errors
  ///
  /// - [`Error::Encoding`] if `body` cannot be serialized; nothing is sent
  /// - [`Error::Transport`] if the network failed beyond the transport's retries
  /// - [`Error::Parse`] if the server's remaining-quota header is malformed
  /// - [`Error::RateLimit`] if the server keeps answering 429 past the budget
  #[instrument(skip(self, body))]
  pub async fn request<B>(&self, method: Method, url: &str, body: Option<&B>) -> Result<Response>
  where
    B: Serialize + ?Sized,
  {
    let mut rejections = 0;
    let mut waited = Duration::ZERO;

    loop {
      let permit = self.quota.acquire().await;

      let payload = match encode_body(body) {
        Ok(payload) => payload,
        Err(e) => {
          drop(permit);
          return Err(e);
        }
      };

      let response = match self.transport.send(method.clone(), url, self.credentials.headers(), payload).await {
        Ok(response) => response,
        Err(e) => {
          drop(permit);
          return Err(e);
        }
      };

      let state = permit.release(Some(response.headers()))?;

      match response.status() {
        StatusCode::OK | StatusCode::CREATED | StatusCode::NO_CONTENT | StatusCode::BAD_GATEWAY => {
          return Ok(response);
        }
        StatusCode::TOO_MANY_REQUESTS => {
          warn!("Rate Limited!");
          info!(url, status = %response.status(), remaining = state.remaining, "Server rejected request");

          let wait = time_until_reset(&state);
          if rejections >= self.budget.max_retries || waited + wait > self.budget.max_wait {
            return Err(Error::RateLimit(format!(
              "{} still rate limited after {} retries and {}s of waiting",
              url,
              rejections,
              waited.as_secs()
            )));
          }

          debug!("Sleeping {}ms until quota reset at {}", wait.as_millis(), state.reset_at);
          tokio::time::sleep(wait).await;
          waited += wait;
          rejections += 1;
        }
        _ => return Ok(response),
      }
    }
  }

  /// Current quota state
  pub async fn quota_snapshot(&self) -> QuotaState {
    self.quota.snapshot().await
  }

  /// The session's quota bucket
  pub fn quota(&self) -> &QuotaTracker {
    &self.quota
  }

  /// The session's credentials
  pub fn credentials(&self) -> &Credentials {
    &self.credentials
  }

  /// The 429 retry budget
  pub fn rate_limit_budget(&self) -> RateLimitBudget {
    self.budget
  }
}

fn encode_body<B>(body: Option<&B>) -> Result<Vec<u8>>
where
  B: Serialize + ?Sized,
{
  match body {
    // serde_json leaves `<`, `>` and `&` unescaped, so embedded URLs and tokens survive intact
    Some(body) => serde_json::to_vec(body).map_err(|e| Error::Encoding(e.to_string())),
    None => Ok(Vec::new()),
  }
}

fn time_until_reset(state: &QuotaState) -> Duration {
  (state.reset_at - Utc::now()).to_std().unwrap_or(Duration::ZERO)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  #[test]
  fn test_credentials_headers() {
    let credentials = Credentials::new("X", Some("Y".to_string())).unwrap();
    let headers = credentials.headers();
    assert_eq!(headers.get("client-id").unwrap(), "X");
    assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer Y");
    assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
    assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
  }

  #[test]
  fn test_credentials_without_secret() {
    let credentials = Credentials::new("X", None).unwrap();
    assert!(!credentials.has_secret());
    assert!(credentials.headers().get(AUTHORIZATION).is_none());
  }

  #[test]
  fn test_credentials_reject_newlines() {
    assert!(matches!(Credentials::new("bad\nid", None), Err(Error::ClientId(_))));
  }

  #[test]
  fn test_credentials_debug_redacts() {
    let rendered = format!("{:?}", Credentials::new("X", Some("hunter2".to_string())).unwrap());
    assert!(!rendered.contains("hunter2"));
  }

  #[test]
  fn test_encode_body() {
    assert!(encode_body::<()>(None).unwrap().is_empty());

    let payload = encode_body(Some(&serde_json::json!({"link": "https://x.tv/?a=1&b=<2>"}))).unwrap();
    assert_eq!(String::from_utf8(payload).unwrap(), r#"{"link":"https://x.tv/?a=1&b=<2>"}"#);
  }

  #[test]
  fn test_encode_body_failure() {
    let mut bad = HashMap::new();
    bad.insert((1, 2), "tuple keys are not JSON object keys");
    assert!(matches!(encode_body(Some(&bad)), Err(Error::Encoding(_))));
  }

  #[test]
  fn test_dispatcher_from_config() {
    let config = Config::new("abc").with_secret("def");
    let dispatcher = Dispatcher::new(&config).unwrap();
    assert_eq!(dispatcher.credentials().client_id(), "abc");
    assert!(dispatcher.credentials().has_secret());
    assert_eq!(dispatcher.rate_limit_budget(), RateLimitBudget::default());
  }
}
