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

//! The session object tying credentials, quota and endpoint groups together

use crate::dispatcher::Dispatcher;
use crate::endpoints::{
  categories::CategoryEndpoints, channels::ChannelEndpoints, notifications::NotificationEndpoints,
  search::SearchEndpoints, streams::StreamEndpoints, videos::VideoEndpoints, EndpointCore,
};
use crate::quota::{QuotaState, QuotaTracker};
use picarto_core::{Config, Result};
use std::sync::Arc;
use url::Url;

/// Main Picarto API client
///
/// One client is one session: a set of credentials plus one shared quota bucket. Every
/// endpoint group handed out by the client draws from that same bucket, and independent
/// clients can coexist in one process.
///
/// # Examples
///
/// ```ignore
/// use picarto_client::PicartoClient;
/// use picarto_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PicartoClient::new(Config::from_env()?)?;
///
///     let channel = client.channels().by_name("AgueMort").await?;
///     println!("{} is online: {}", channel.name, channel.online);
///
///     for category in client.categories().all().await? {
///         println!("{}: {} live", category.name, category.online_channels);
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PicartoClient {
  core: EndpointCore,
}

impl PicartoClient {
  /// Create a new Picarto API client
  ///
  /// # Errors
  ///
  /// Returns an error if the base URL is invalid, the credentials cannot be sent as headers,
  /// or the HTTP client cannot be created.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// use picarto_client::PicartoClient;
  /// use picarto_core::Config;
  ///
  /// let config = Config::new("my-client-id").with_secret("my-bearer-token");
  /// let client = PicartoClient::new(config).expect("Failed to create client");
  /// ```
  pub fn new(config: Config) -> Result<Self> {
    let dispatcher = Dispatcher::new(&config)?;
    Self::from_dispatcher(&config, dispatcher)
  }

  /// Create a client that draws from an existing quota bucket
  ///
  /// Useful when several sessions share one client id and therefore one server-side quota.
  pub fn with_quota(config: Config, quota: QuotaTracker) -> Result<Self> {
    let dispatcher = Dispatcher::new(&config)?.with_quota(quota);
    Self::from_dispatcher(&config, dispatcher)
  }

  fn from_dispatcher(config: &Config, dispatcher: Dispatcher) -> Result<Self> {
    let base_url = Url::parse(&config.base_url)?;
    Ok(Self { core: EndpointCore::new(Arc::new(dispatcher), base_url) })
  }

  /// Get access to category endpoints
  pub fn categories(&self) -> CategoryEndpoints {
    CategoryEndpoints::new(self.core.clone())
  }

  /// Get access to channel lookup endpoints
  pub fn channels(&self) -> ChannelEndpoints {
    ChannelEndpoints::new(self.core.clone())
  }

  /// Get access to recorded video endpoints
  pub fn videos(&self) -> VideoEndpoints {
    VideoEndpoints::new(self.core.clone())
  }

  /// Get access to live stream endpoints
  pub fn streams(&self) -> StreamEndpoints {
    StreamEndpoints::new(self.core.clone())
  }

  /// Get access to search endpoints
  pub fn search(&self) -> SearchEndpoints {
    SearchEndpoints::new(self.core.clone())
  }

  /// Get access to notification endpoints
  pub fn notifications(&self) -> NotificationEndpoints {
    NotificationEndpoints::new(self.core.clone())
  }

  /// The dispatcher behind every endpoint, for calls the typed accessors don't cover
  pub fn dispatcher(&self) -> &Arc<Dispatcher> {
    &self.core.dispatcher
  }

  /// Get the current rate limit status
  ///
  /// Waits for any in-flight request to finish, so the figures include its response headers.
  pub async fn quota_snapshot(&self) -> QuotaState {
    self.core.dispatcher.quota_snapshot().await
  }
}
