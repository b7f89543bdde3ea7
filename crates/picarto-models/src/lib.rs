//! # picarto-models
//!
//! Data models for Picarto API responses.
//!
//! These are plain serde mappings of the JSON payloads. Fields Picarto sometimes omits are
//! defaulted so that a sparse response still decodes.
//!
//! ## Usage
//!
//! ```ignore
//! use picarto_models::Channel;
//!
//! let channel: Channel = serde_json::from_str(&response_json)?;
//! ```

#![warn(clippy::all)]

pub mod category;
pub mod channel;
pub mod common;
pub mod notification;
pub mod online;
pub mod stream;
pub mod video;

pub use category::*;
pub use channel::*;
pub use common::*;
pub use notification::*;
pub use online::*;
pub use stream::*;
pub use video::*;
