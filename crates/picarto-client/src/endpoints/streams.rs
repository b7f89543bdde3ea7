//! Live streams and the online channel listing

use super::EndpointCore;
use picarto_core::{Result, Route};
use picarto_models::{OnlineChannel, Stream};
use tracing::instrument;

/// Filters for the online channel listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnlineQuery {
  /// Include adult channels
  pub adult: bool,
  /// Include gaming channels
  pub gaming: bool,
  /// Restrict to these category names
  pub categories: Vec<String>,
}

impl OnlineQuery {
  fn params(&self) -> Vec<(&'static str, String)> {
    let mut params = vec![("adult", self.adult.to_string()), ("gaming", self.gaming.to_string())];
    if !self.categories.is_empty() {
      params.push(("category", self.categories.join(",")));
    }
    params
  }
}

/// Live stream endpoints
#[derive(Debug, Clone)]
pub struct StreamEndpoints {
  core: EndpointCore,
}

impl StreamEndpoints {
  /// Create a new stream endpoints instance
  pub fn new(core: EndpointCore) -> Self {
    Self { core }
  }

  /// Get all currently online channels
  #[instrument(skip(self))]
  pub async fn online(&self, query: &OnlineQuery) -> Result<Vec<OnlineChannel>> {
    self.core.get(Route::Online, &query.params()).await
  }

  /// Get the stream of a channel by id
  #[instrument(skip(self))]
  pub async fn by_channel_id(&self, channel_id: u64) -> Result<Stream> {
    self.core.get(Route::StreamsById(channel_id), &[]).await
  }

  /// Get the stream of a channel by name
  #[instrument(skip(self))]
  pub async fn by_channel_name(&self, channel_name: &str) -> Result<Stream> {
    self.core.get(Route::StreamsByName(channel_name.to_string()), &[]).await
  }
}
