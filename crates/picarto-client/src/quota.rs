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

//! Shared per-minute request quota.
//!
//! Picarto refills its allowance at the top of every minute and reports what is left in the
//! `x-ratelimit-remaining` response header. It never says when the window resets, so the reset
//! instant is derived from the server's `Date` header instead of the local clock.
//!
//! [`QuotaTracker::acquire`] hands out a [`QuotaPermit`] that holds the single-slot admission
//! gate. The permit is meant to live across the network call and be consumed by
//! [`QuotaPermit::release`] with the response headers, so the server's answer is applied before
//! the next caller is admitted. Dropping a permit releases the gate without touching the state.

use chrono::{DateTime, TimeDelta, Timelike, Utc};
use picarto_core::{Error, Result, RATE_LIMIT_REMAINING_HEADER};
use reqwest::header::{HeaderMap, DATE};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, trace, warn};

/// Snapshot of the quota bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaState {
  /// Requests left in the current window. Goes negative only after the window was waited out.
  pub remaining: i64,
  /// Instant the window is believed to refresh
  pub reset_at: DateTime<Utc>,
}

impl QuotaState {
  /// How long a caller has to wait before it may send, if at all
  pub fn wait_time(&self, now: DateTime<Utc>) -> Option<Duration> {
    if self.remaining < 1 && self.reset_at > now {
      (self.reset_at - now).to_std().ok()
    } else {
      None
    }
  }
}

/// Tracks the remaining allowance of one client session
#[derive(Debug, Clone)]
pub struct QuotaTracker {
  state: Arc<Mutex<QuotaState>>,
}

impl Default for QuotaTracker {
  fn default() -> Self {
    Self::new()
  }
}

impl QuotaTracker {
  /// A bucket allowing one request before the next minute boundary
  pub fn new() -> Self {
    Self::with_state(1, next_minute(Utc::now()))
  }

  /// A bucket with an explicit starting state
  pub fn with_state(remaining: i64, reset_at: DateTime<Utc>) -> Self {
    Self { state: Arc::new(Mutex::new(QuotaState { remaining, reset_at })) }
  }

  /// Wait for admission and reserve one request.
  ///
  /// Sleeps until `reset_at` only when the bucket is empty and the reset is still ahead.
  /// Other callers queue on the gate until the returned permit is released or dropped.
  pub async fn acquire(&self) -> QuotaPermit {
    let mut guard = self.state.clone().lock_owned().await;

    if let Some(wait) = guard.wait_time(Utc::now()) {
      debug!(
        remaining = guard.remaining,
        reset_at = %guard.reset_at,
        "Quota exhausted, waiting {}ms",
        wait.as_millis()
      );
      tokio::time::sleep(wait).await;
    }

    guard.remaining -= 1;
    trace!(remaining = guard.remaining, "Quota acquired");

    QuotaPermit { guard }
  }

  /// Current state. Waits behind any in-flight request.
  pub async fn snapshot(&self) -> QuotaState {
    *self.state.lock().await
  }
}

/// Exclusive hold on the admission gate for one round trip
#[derive(Debug)]
pub struct QuotaPermit {
  guard: OwnedMutexGuard<QuotaState>,
}

impl QuotaPermit {
  /// State as seen by the holder
  pub fn state(&self) -> QuotaState {
    *self.guard
  }

  /// Apply the server's quota headers and open the gate.
  ///
  /// `None` means no response was received; the state is left alone. A malformed `Date` header
  /// is ignored, a malformed remaining count is a [`Error::Parse`]. The gate opens in every case.
  pub fn release(mut self, headers: Option<&HeaderMap>) -> Result<QuotaState> {
    let Some(headers) = headers else {
      return Ok(*self.guard);
    };

    if let Some(server_date) = headers.get(DATE) {
      match server_date.to_str().ok().and_then(parse_http_date) {
        Some(server_time) => {
          self.guard.reset_at = reset_from_server_time(server_time);
          trace!(server_time = %server_time, reset_at = %self.guard.reset_at, "Synced reset to server clock");
        }
        None => warn!("Ignoring unparseable Date header: {:?}", server_date),
      }
    }

    if let Some(remaining) = headers.get(RATE_LIMIT_REMAINING_HEADER) {
      self.guard.remaining = parse_remaining(remaining.to_str().unwrap_or_default())?;
    }

    Ok(*self.guard)
  }
}

fn parse_remaining(value: &str) -> Result<i64> {
  value
    .trim()
    .parse::<u32>()
    .map(i64::from)
    .map_err(|e| Error::Parse(format!("Invalid {} header {:?}: {}", RATE_LIMIT_REMAINING_HEADER, value, e)))
}

/// Parse an RFC 1123 `Date` header (`Sun, 06 Nov 1994 08:49:37 GMT`)
fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
  DateTime::parse_from_rfc2822(value).ok().map(|t| t.with_timezone(&Utc))
}

fn start_of_minute(t: DateTime<Utc>) -> DateTime<Utc> {
  t - TimeDelta::seconds(i64::from(t.second())) - TimeDelta::nanoseconds(i64::from(t.nanosecond()))
}

fn next_minute(t: DateTime<Utc>) -> DateTime<Utc> {
  start_of_minute(t) + TimeDelta::minutes(1)
}

/// Window reset derived from the server clock.
///
/// Past the half-minute mark the window is treated as already rolled over, which absorbs
/// latency and skew between us and the server.
pub fn reset_from_server_time(server_time: DateTime<Utc>) -> DateTime<Utc> {
  if server_time.second() >= 30 {
    start_of_minute(server_time)
  } else {
    next_minute(server_time)
  }
}
