//! # picarto-core
//!
//! Configuration, error types and API constants shared by the picarto-* crates.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};

/// Base URL for the Picarto REST API
pub const PICARTO_BASE_URL: &str = "https://api.picarto.tv/api/v1";

/// Response header carrying the server's remaining request count
pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Request header carrying the application identifier
pub const CLIENT_ID_HEADER: &str = "Client-ID";

/// Content type of every request body
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Per-attempt request timeout (ms)
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;
/// Transport-level retries for connection failures
pub const DEFAULT_MAX_RETRIES: u32 = 4;
/// Re-issues allowed after a 429 rejection
pub const DEFAULT_RATE_LIMIT_RETRIES: u32 = 3;
/// Accumulated 429 wait cap (s)
pub const DEFAULT_RATE_LIMIT_WAIT_SECS: u64 = 120;

/// The Picarto API routes wrapped by the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
  Categories,
  ChannelById(u64),
  ChannelByName(String),
  VideosById(u64),
  VideosByName(String),
  StreamsById(u64),
  StreamsByName(String),
  Online,
  SearchChannels,
  SearchVideos,
  Notifications,
}

impl Route {
  /// Unencoded path segments of the route; a channel name is always exactly one segment
  pub fn segments(&self) -> Vec<String> {
    let mut segments: Vec<String> = match self {
      Route::Categories => vec!["categories".into()],
      Route::ChannelById(id) | Route::VideosById(id) | Route::StreamsById(id) => {
        vec!["channel".into(), "id".into(), id.to_string()]
      }
      Route::ChannelByName(name) | Route::VideosByName(name) | Route::StreamsByName(name) => {
        vec!["channel".into(), "name".into(), name.clone()]
      }
      Route::Online => vec!["online".into()],
      Route::SearchChannels => vec!["search".into(), "channels".into()],
      Route::SearchVideos => vec!["search".into(), "videos".into()],
      Route::Notifications => vec!["notifications".into()],
    };
    match self {
      Route::VideosById(_) | Route::VideosByName(_) => segments.push("videos".into()),
      Route::StreamsById(_) | Route::StreamsByName(_) => segments.push("streams".into()),
      _ => {}
    }
    segments
  }
}

impl std::fmt::Display for Route {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Route::Categories => write!(f, "categories"),
      Route::ChannelById(id) => write!(f, "channel/id/{id}"),
      Route::ChannelByName(name) => write!(f, "channel/name/{name}"),
      Route::VideosById(id) => write!(f, "channel/id/{id}/videos"),
      Route::VideosByName(name) => write!(f, "channel/name/{name}/videos"),
      Route::StreamsById(id) => write!(f, "channel/id/{id}/streams"),
      Route::StreamsByName(name) => write!(f, "channel/name/{name}/streams"),
      Route::Online => write!(f, "online"),
      Route::SearchChannels => write!(f, "search/channels"),
      Route::SearchVideos => write!(f, "search/videos"),
      Route::Notifications => write!(f, "notifications"),
    }
  }
}
