//! Site-wide notifications

use super::EndpointCore;
use picarto_core::{Result, Route};
use picarto_models::Notification;
use tracing::instrument;

/// Global notification endpoints
#[derive(Debug, Clone)]
pub struct NotificationEndpoints {
  core: EndpointCore,
}

impl NotificationEndpoints {
  /// Create a new notification endpoints instance
  pub fn new(core: EndpointCore) -> Self {
    Self { core }
  }

  /// Get the current global notification/announcement
  #[instrument(skip(self))]
  pub async fn global(&self) -> Result<Notification> {
    self.core.get(Route::Notifications, &[]).await
  }
}
