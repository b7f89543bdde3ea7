use thiserror::Error;

/// The main error type for picarto-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Client identifier missing or unusable
  #[error("Failed to retrieve client id: {0}")]
  ClientId(String),

  /// Request body could not be serialized
  #[error("Encoding error: {0}")]
  Encoding(String),

  /// Network failure that survived the transport retry budget
  #[error("Transport error: {0}")]
  Transport(String),

  /// Malformed quota header or undecodable response body
  #[error("Parse error: {0}")]
  Parse(String),

  /// Server kept rejecting requests with 429 after the retry budget was spent
  #[error("Rate limit exceeded: {0}")]
  RateLimit(String),

  /// Non-success status surfaced by an endpoint accessor
  #[error("Unexpected status {status} from {url}")]
  Status {
    /// HTTP status code returned by the server
    status: u16,
    /// Request URL
    url: String,
  },

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// URL construction error
  #[error("Invalid URL: {0}")]
  Url(#[from] url::ParseError),

  /// HTTP client construction or request building error
  #[error("HTTP error: {0}")]
  Http(String),
}

impl Error {
  /// True for failures the caller may reasonably retry later
  pub fn is_retryable(&self) -> bool {
    matches!(self, Error::Transport(_) | Error::RateLimit(_))
  }
}

/// Result type alias for picarto-* crates
pub type Result<T> = std::result::Result<T, Error>;
