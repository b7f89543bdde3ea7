//! Channel and video search

use super::EndpointCore;
use picarto_core::{Result, Route};
use picarto_models::{Channel, Video};
use tracing::{debug, instrument};

/// Options for a channel search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSearch {
  /// Search term, matched against names and tags
  pub query: String,
  /// Include adult channels
  pub adult: bool,
  /// 1-based result page
  pub page: u64,
  /// Only channels open for commissions
  pub commissions: bool,
}

impl ChannelSearch {
  /// Search for `query` with safe-for-work defaults on the first page
  pub fn new(query: impl Into<String>) -> Self {
    Self { query: query.into(), adult: false, page: 1, commissions: false }
  }

  fn params(&self) -> Vec<(&'static str, String)> {
    vec![
      ("q", self.query.clone()),
      ("adult", self.adult.to_string()),
      ("page", self.page.to_string()),
      ("commissions", self.commissions.to_string()),
    ]
  }
}

/// Options for a video search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSearch {
  /// Search term
  pub query: String,
  /// Include adult videos
  pub adult: bool,
  /// 1-based result page
  pub page: u64,
}

impl VideoSearch {
  /// Search for `query` with safe-for-work defaults on the first page
  pub fn new(query: impl Into<String>) -> Self {
    Self { query: query.into(), adult: false, page: 1 }
  }

  fn params(&self) -> Vec<(&'static str, String)> {
    vec![
      ("q", self.query.clone()),
      ("adult", self.adult.to_string()),
      ("page", self.page.to_string()),
    ]
  }
}

/// Search endpoints
#[derive(Debug, Clone)]
pub struct SearchEndpoints {
  core: EndpointCore,
}

impl SearchEndpoints {
  /// Create a new search endpoints instance
  pub fn new(core: EndpointCore) -> Self {
    Self { core }
  }

  /// Get all channels matching the search criteria
  ///
  /// An empty query returns no results without contacting the API.
  #[instrument(skip(self))]
  pub async fn channels(&self, search: &ChannelSearch) -> Result<Vec<Channel>> {
    if search.query.trim().is_empty() {
      debug!("Empty channel search, skipping request");
      return Ok(Vec::new());
    }
    self.core.get(Route::SearchChannels, &search.params()).await
  }

  /// Get all videos matching the search criteria
  ///
  /// An empty query returns no results without contacting the API.
  #[instrument(skip(self))]
  pub async fn videos(&self, search: &VideoSearch) -> Result<Vec<Video>> {
    if search.query.trim().is_empty() {
      debug!("Empty video search, skipping request");
      return Ok(Vec::new());
    }
    self.core.get(Route::SearchVideos, &search.params()).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_channel_search_defaults() {
    let search = ChannelSearch::new("pixel art");
    assert_eq!(
      search.params(),
      vec![
        ("q", "pixel art".to_string()),
        ("adult", "false".to_string()),
        ("page", "1".to_string()),
        ("commissions", "false".to_string()),
      ]
    );
  }

  #[test]
  fn test_video_search_page() {
    let search = VideoSearch { page: 3, ..VideoSearch::new("timelapse") };
    assert!(search.params().contains(&("page", "3".to_string())));
  }
}
