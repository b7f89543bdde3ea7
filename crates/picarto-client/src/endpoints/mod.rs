//! Typed accessors for the Picarto REST API, grouped by resource

pub mod categories;
pub mod channels;
pub mod notifications;
pub mod search;
pub mod streams;
pub mod videos;

use crate::dispatcher::Dispatcher;
use picarto_core::{Error, Result, Route};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error};
use url::Url;

/// Common endpoint structure
///
/// All endpoint modules share the session's dispatcher (and with it the quota bucket)
/// and resolve their routes against the same base URL.
#[derive(Debug, Clone)]
pub struct EndpointCore {
  /// Shared request dispatcher
  pub dispatcher: Arc<Dispatcher>,
  /// API root every route is resolved against
  pub base_url: Url,
}

impl EndpointCore {
  /// Create a new endpoint core
  pub fn new(dispatcher: Arc<Dispatcher>, base_url: Url) -> Self {
    Self { dispatcher, base_url }
  }

  /// Resolve a route and query string against the base URL
  ///
  /// Each route segment is percent-encoded on its own, so a channel name containing `/`
  /// stays inside its segment. Empty, `.` and `..` segments are rejected.
  pub fn url(&self, route: &Route, query: &[(&str, String)]) -> Result<Url> {
    let segments = route.segments();
    if let Some(bad) = segments.iter().find(|s| matches!(s.as_str(), "" | "." | "..")) {
      return Err(Error::Config(format!("Invalid path segment {:?} in route {}", bad, route)));
    }

    let mut url = self.base_url.clone();
    url
      .path_segments_mut()
      .map_err(|_| Error::Config(format!("Base URL {} cannot carry a path", self.base_url)))?
      .pop_if_empty()
      .extend(&segments);

    if !query.is_empty() {
      url.query_pairs_mut().extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
    }

    Ok(url)
  }

  /// GET a route and decode the JSON body
  ///
  /// Any non-2xx status becomes [`Error::Status`].
  pub async fn get<T>(&self, route: Route, query: &[(&str, String)]) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let url = self.url(&route, query)?;
    let response = self.dispatcher.request::<()>(Method::GET, url.as_str(), None).await?;

    let status = response.status();
    if !status.is_success() {
      error!("Request to {} failed with status: {}", url, status);
      return Err(Error::Status { status: status.as_u16(), url: url.to_string() });
    }

    let text = response
      .text()
      .await
      .map_err(|e| Error::Transport(format!("Failed to read response body: {}", e)))?;
    debug!("Response body length: {} bytes", text.len());

    serde_json::from_str::<T>(&text).map_err(|e| {
      let excerpt: String = text.chars().take(200).collect();
      error!("Failed to parse JSON response from {}: {}", route, e);
      Error::Parse(format!("Failed to parse response: {}. Response: {}", e, excerpt))
    })
  }
}
