//! Live stream model

use serde::{Deserialize, Serialize};

/// Stream information for a channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stream {
  pub channel: StreamChannel,
  #[serde(default)]
  pub show_ads: i64,
  /// Playback URL; absent while the channel is offline
  pub url: Option<String>,
}

/// Channel block embedded in a [`Stream`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamChannel {
  #[serde(default)]
  pub avatar: String,
  #[serde(default)]
  pub stream_name: String,
  pub name: String,
  #[serde(default)]
  pub online: bool,
  pub user_id: i64,
  #[serde(default)]
  pub adult: bool,
  pub offline_image: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_offline_stream() {
    let json = r#"{
      "channel": {"avatar": "", "stream_name": "golive", "name": "x", "online": false,
                  "user_id": 9, "adult": false, "offline_image": null},
      "show_ads": 1,
      "url": null
    }"#;
    let stream: Stream = serde_json::from_str(json).unwrap();
    assert!(!stream.channel.online);
    assert!(stream.url.is_none());
    assert_eq!(stream.channel.stream_name, "golive");
  }
}
