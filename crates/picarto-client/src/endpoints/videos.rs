//! Recorded videos (VODs)

use super::EndpointCore;
use picarto_core::{Result, Route};
use picarto_models::Video;
use tracing::instrument;

/// Recorded video endpoints
#[derive(Debug, Clone)]
pub struct VideoEndpoints {
  core: EndpointCore,
}

impl VideoEndpoints {
  /// Create a new video endpoints instance
  pub fn new(core: EndpointCore) -> Self {
    Self { core }
  }

  /// Get all videos for a channel by id
  #[instrument(skip(self))]
  pub async fn by_channel_id(&self, channel_id: u64) -> Result<Vec<Video>> {
    self.core.get(Route::VideosById(channel_id), &[]).await
  }

  /// Get all videos for a channel by name
  #[instrument(skip(self))]
  pub async fn by_channel_name(&self, channel_name: &str) -> Result<Vec<Video>> {
    self.core.get(Route::VideosByName(channel_name.to_string()), &[]).await
  }
}
