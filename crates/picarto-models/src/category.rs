//! Category listing model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A content category as returned by `GET /categories`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
  pub id: i64,
  pub name: String,
  #[serde(default)]
  pub adult: bool,
  #[serde(default)]
  pub is_active: bool,
  #[serde(default)]
  pub image: String,
  pub created_at: Option<DateTime<Utc>>,
  pub updated_at: Option<DateTime<Utc>>,
  pub deleted_at: Option<DateTime<Utc>>,
  #[serde(default)]
  pub total_viewers: i64,
  #[serde(default)]
  pub total_channels: i64,
  #[serde(default)]
  pub online_channels: i64,
  /// Picarto reports this one as a string
  #[serde(default)]
  pub total_views: String,
}
