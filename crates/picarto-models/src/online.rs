//! Online channel listing model

use crate::common::{Language, Thumbnails};
use serde::{Deserialize, Serialize};

/// Summary of a channel that is currently live, as returned by `GET /online`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnlineChannel {
  pub user_id: i64,
  pub name: String,
  #[serde(default)]
  pub avatar: String,
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub viewers: i64,
  #[serde(default)]
  pub thumbnails: Thumbnails,
  #[serde(default)]
  pub category: String,
  #[serde(default)]
  pub account_type: String,
  #[serde(default)]
  pub adult: bool,
  #[serde(default)]
  pub gaming: bool,
  #[serde(default)]
  pub commissions: bool,
  #[serde(default)]
  pub multistream: bool,
  #[serde(default)]
  pub languages: Vec<Language>,
  #[serde(default)]
  pub following: bool,
}
