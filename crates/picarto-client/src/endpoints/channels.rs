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

//! Channel lookups

use super::EndpointCore;
use picarto_core::{Result, Route};
use picarto_models::Channel;
use tracing::instrument;

/// Channel lookup endpoints
///
/// With a bearer token carrying the `readpub` permission, the returned channel's
/// `following` field reflects the token owner.
#[derive(Debug, Clone)]
pub struct ChannelEndpoints {
  core: EndpointCore,
}

impl ChannelEndpoints {
  /// Create a new channel endpoints instance
  pub fn new(core: EndpointCore) -> Self {
    Self { core }
  }

  /// Get a channel by its user id
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let channel = client.channels().by_id(527732).await?;
  /// println!("{} has {} followers", channel.name, channel.followers);
  /// ```
  #[instrument(skip(self))]
  pub async fn by_id(&self, channel_id: u64) -> Result<Channel> {
    self.core.get(Route::ChannelById(channel_id), &[]).await
  }

  /// Get a channel by its name
  #[instrument(skip(self))]
  pub async fn by_name(&self, channel_name: &str) -> Result<Channel> {
    self.core.get(Route::ChannelByName(channel_name.to_string()), &[]).await
  }
}
