//! # picarto-client
//!
//! An async client for the Picarto streaming platform's REST API.
//!
//! ## Features
//!
//! - **Typed accessors**: categories, channels, videos, live streams, search and notifications
//! - **Quota aware**: one shared per-minute bucket per session, kept in sync with the
//!   server's `x-ratelimit-remaining` and `Date` headers
//! - **Resilient**: connection failures are retried with jittered exponential backoff,
//!   429 responses are waited out within a bounded budget
//! - **Multi-session**: credentials live on the client, not in globals
//!
//! ## Usage
//!
//! ```rust,no_run
//! use picarto_client::PicartoClient;
//! use picarto_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = PicartoClient::new(config)?;
//!
//!     let online = client.streams().online(&Default::default()).await?;
//!     println!("{} channels live", online.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Rate Limiting
//!
//! Requests on one client are admitted one at a time. The admission gate stays closed for the
//! whole round trip so that the server's quota answer is applied before the next caller goes.
//! When the bucket is empty, callers wait for the top of the next minute as reported by the
//! server clock.
//!
//! ## Error Handling
//!
//! All methods return `Result<T, picarto_core::Error>`. A 502 from the gateway is passed
//! through [`Dispatcher::request`] untouched rather than retried.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod dispatcher;
pub mod endpoints;
pub mod quota;
pub mod transport;

pub use client::PicartoClient;
pub use dispatcher::{Credentials, Dispatcher, RateLimitBudget};
pub use picarto_core::{Config, Error, Result};
pub use picarto_models::*;
pub use quota::{QuotaPermit, QuotaState, QuotaTracker};
pub use transport::{RetryPolicy, Transport};

pub use endpoints::{
  categories::CategoryEndpoints,
  channels::ChannelEndpoints,
  notifications::NotificationEndpoints,
  search::{ChannelSearch, SearchEndpoints, VideoSearch},
  streams::{OnlineQuery, StreamEndpoints},
  videos::VideoEndpoints,
};
