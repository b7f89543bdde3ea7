//! Global notification model

use serde::{Deserialize, Serialize};

/// A site-wide announcement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
  pub body: String,
  #[serde(default)]
  pub uri: String,
  /// Upstream has returned both booleans and epoch seconds here
  #[serde(default)]
  pub timestamp: serde_json::Value,
}
