/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Channel models

use crate::common::{Language, Thumbnails};
use serde::{Deserialize, Serialize};

/// Full channel details, returned by the channel lookup and channel search endpoints
///
/// `following` is only meaningful when the request carried a bearer token with the
/// `readpub` permission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
  pub user_id: i64,
  pub name: String,
  #[serde(default)]
  pub avatar: String,
  #[serde(default)]
  pub online: bool,
  #[serde(default)]
  pub viewers: i64,
  #[serde(default)]
  pub viewers_total: i64,
  #[serde(default)]
  pub thumbnails: Thumbnails,
  #[serde(default)]
  pub followers: i64,
  #[serde(default)]
  pub subscribers: i64,
  #[serde(default)]
  pub adult: bool,
  #[serde(default)]
  pub category: Vec<String>,
  #[serde(default)]
  pub account_type: String,
  #[serde(default)]
  pub commissions: bool,
  #[serde(default)]
  pub recordings: bool,
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub description_panels: Vec<DescriptionPanel>,
  #[serde(default)]
  pub private: bool,
  pub private_message: Option<String>,
  #[serde(default)]
  pub gaming: bool,
  #[serde(default)]
  pub chat_settings: ChatSettings,
  pub last_live: Option<String>,
  #[serde(default)]
  pub tags: Vec<String>,
  #[serde(default)]
  pub multistream: Vec<MultistreamMember>,
  #[serde(default)]
  pub languages: Vec<Language>,
  #[serde(default)]
  pub following: bool,
  pub creation_date: Option<String>,
}

/// A panel from the channel's description area
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptionPanel {
  pub title: String,
  pub body: String,
  pub image: Option<String>,
  pub image_link: Option<String>,
  pub button_text: Option<String>,
  pub button_link: Option<String>,
  pub position: i64,
}

/// Chat configuration of a channel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
  pub guest_chat: bool,
  pub links: bool,
  /// Untyped upstream; seen as both a number and a string
  pub level: Option<serde_json::Value>,
}

/// Another channel participating in a multistream session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultistreamMember {
  pub user_id: i64,
  pub name: String,
  #[serde(default)]
  pub online: bool,
  #[serde(default)]
  pub adult: bool,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_deserialize_channel() {
    let json = r#"{
      "user_id": 527732,
      "name": "AgueMort",
      "avatar": "https://picarto.tv/avatar.png",
      "online": true,
      "viewers": 12,
      "viewers_total": 45000,
      "thumbnails": {"web": "w", "web_large": "wl", "mobile": "m", "tablet": "t"},
      "followers": 3000,
      "subscribers": 15,
      "adult": false,
      "category": ["Creative"],
      "account_type": "premium",
      "commissions": true,
      "recordings": false,
      "title": "Painting",
      "description_panels": [{"title": "About", "body": "hi", "position": 1}],
      "private": false,
      "private_message": "",
      "gaming": false,
      "chat_settings": {"guest_chat": true, "links": false, "level": 0},
      "last_live": null,
      "tags": ["art"],
      "multistream": [{"user_id": 1, "name": "Friend", "online": true, "adult": false}],
      "languages": [{"id": 1, "name": "English"}],
      "following": false,
      "creation_date": "2016-01-01"
    }"#;
    let channel: Channel = serde_json::from_str(json).unwrap();
    assert_eq!(channel.user_id, 527732);
    assert_eq!(channel.thumbnails.web_large, "wl");
    assert_eq!(channel.description_panels[0].position, 1);
    assert!(channel.chat_settings.guest_chat);
    assert_eq!(channel.multistream[0].name, "Friend");
    assert_eq!(channel.languages[0].name, "English");
    assert!(channel.last_live.is_none());
  }

  #[test]
  fn test_minimal_channel() {
    let channel: Channel = serde_json::from_str(r#"{"user_id": 1, "name": "x"}"#).unwrap();
    assert!(!channel.online);
    assert!(channel.tags.is_empty());
  }
}
