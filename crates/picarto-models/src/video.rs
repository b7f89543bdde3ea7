//! Recorded video model

use serde::{Deserialize, Serialize};

/// A recorded video (VOD)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
  pub title: String,
  pub file: String,
  #[serde(default)]
  pub filesize: i64,
  /// Length in seconds
  #[serde(default)]
  pub duration: i64,
  #[serde(default)]
  pub views: i64,
  #[serde(default)]
  pub timestamp: String,
  #[serde(default)]
  pub adult: bool,
}
