//! Category listing

use super::EndpointCore;
use picarto_core::{Result, Route};
use picarto_models::Category;
use tracing::instrument;

/// Category endpoints
#[derive(Debug, Clone)]
pub struct CategoryEndpoints {
  core: EndpointCore,
}

impl CategoryEndpoints {
  /// Create a new category endpoints instance
  pub fn new(core: EndpointCore) -> Self {
    Self { core }
  }

  /// Get information about all categories
  #[instrument(skip(self))]
  pub async fn all(&self) -> Result<Vec<Category>> {
    self.core.get(Route::Categories, &[]).await
  }
}
