//! Typed accessors decode Picarto payloads and map failures

use picarto_client::{ChannelSearch, Config, Error, OnlineQuery, PicartoClient, VideoSearch};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ok_json(body: serde_json::Value) -> ResponseTemplate {
  ResponseTemplate::new(200).set_body_json(body).insert_header("x-ratelimit-remaining", "100")
}

async fn setup() -> (MockServer, PicartoClient) {
  let server = MockServer::start().await;
  let client = PicartoClient::new(Config::new("test_client").with_base_url(server.uri())).unwrap();
  (server, client)
}

#[tokio::test]
async fn categories_are_decoded() {
  let (server, client) = setup().await;
  Mock::given(method("GET"))
    .and(path("/categories"))
    .respond_with(ok_json(json!([
      {"id": 1, "name": "Creative", "adult": false, "is_active": true, "image": "c.jpg",
       "created_at": "2019-06-28T14:52:21Z", "updated_at": null, "deleted_at": null,
       "total_viewers": 10, "total_channels": 20, "online_channels": 3, "total_views": "999"},
      {"id": 2, "name": "Gaming"}
    ])))
    .expect(1)
    .mount(&server)
    .await;

  let categories = client.categories().all().await.unwrap();
  assert_eq!(categories.len(), 2);
  assert_eq!(categories[0].online_channels, 3);
  assert_eq!(categories[1].name, "Gaming");
}

#[tokio::test]
async fn channel_lookups_use_id_and_name_routes() {
  let (server, client) = setup().await;
  Mock::given(method("GET"))
    .and(path("/channel/id/527732"))
    .respond_with(ok_json(json!({"user_id": 527732, "name": "AgueMort", "online": true})))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/channel/name/AgueMort"))
    .respond_with(ok_json(json!({"user_id": 527732, "name": "AgueMort", "followers": 12})))
    .expect(1)
    .mount(&server)
    .await;

  let by_id = client.channels().by_id(527732).await.unwrap();
  assert!(by_id.online);
  let by_name = client.channels().by_name("AgueMort").await.unwrap();
  assert_eq!(by_name.followers, 12);
}

#[tokio::test]
async fn channel_name_with_slash_stays_one_segment() {
  let (server, client) = setup().await;
  Mock::given(method("GET"))
    .and(path("/channel/name/a%2Fb"))
    .respond_with(ok_json(json!({"user_id": 1, "name": "a/b"})))
    .expect(1)
    .mount(&server)
    .await;

  let channel = client.channels().by_name("a/b").await.unwrap();
  assert_eq!(channel.name, "a/b");

  let requests = server.received_requests().await.unwrap();
  assert_eq!(requests.len(), 1);
  assert_eq!(requests[0].url.path(), "/channel/name/a%2Fb");
}

#[tokio::test]
async fn dot_segment_names_never_reach_the_network() {
  let (server, client) = setup().await;
  let result = client.channels().by_name("..").await;
  assert!(matches!(result, Err(Error::Config(_))));
  assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn videos_and_streams() {
  let (server, client) = setup().await;
  Mock::given(method("GET"))
    .and(path("/channel/name/AgueMort/videos"))
    .respond_with(ok_json(json!([{"title": "VOD", "file": "vod.mp4", "duration": 3600}])))
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/channel/id/7/streams"))
    .respond_with(ok_json(json!({
      "channel": {"name": "seven", "user_id": 7, "online": true, "stream_name": "golive", "offline_image": null},
      "show_ads": 0,
      "url": "https://picarto.tv/seven"
    })))
    .mount(&server)
    .await;

  let videos = client.videos().by_channel_name("AgueMort").await.unwrap();
  assert_eq!(videos[0].duration, 3600);

  let stream = client.streams().by_channel_id(7).await.unwrap();
  assert_eq!(stream.url.as_deref(), Some("https://picarto.tv/seven"));
}

#[tokio::test]
async fn online_listing_sends_filters() {
  let (server, client) = setup().await;
  Mock::given(method("GET"))
    .and(path("/online"))
    .and(query_param("adult", "false"))
    .and(query_param("gaming", "true"))
    .and(query_param("category", "Creative,Music"))
    .respond_with(ok_json(json!([{"user_id": 1, "name": "a", "gaming": true}])))
    .expect(1)
    .mount(&server)
    .await;

  let query = OnlineQuery { gaming: true, categories: vec!["Creative".into(), "Music".into()], ..Default::default() };
  let online = client.streams().online(&query).await.unwrap();
  assert_eq!(online.len(), 1);
}

#[tokio::test]
async fn search_sends_query_and_paging() {
  let (server, client) = setup().await;
  Mock::given(method("GET"))
    .and(path("/search/channels"))
    .and(query_param("q", "pixel art"))
    .and(query_param("page", "1"))
    .and(query_param("commissions", "true"))
    .respond_with(ok_json(json!([{"user_id": 3, "name": "pix"}])))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/search/videos"))
    .and(query_param("q", "timelapse"))
    .and(query_param("page", "2"))
    .respond_with(ok_json(json!([])))
    .expect(1)
    .mount(&server)
    .await;

  let search = ChannelSearch { commissions: true, ..ChannelSearch::new("pixel art") };
  assert_eq!(client.search().channels(&search).await.unwrap()[0].name, "pix");

  let videos = client.search().videos(&VideoSearch { page: 2, ..VideoSearch::new("timelapse") }).await.unwrap();
  assert!(videos.is_empty());
}

#[tokio::test]
async fn empty_search_skips_the_network() {
  let (server, client) = setup().await;

  assert!(client.search().channels(&ChannelSearch::new("  ")).await.unwrap().is_empty());
  assert!(client.search().videos(&VideoSearch::new("")).await.unwrap().is_empty());
  assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn notification_is_decoded() {
  let (server, client) = setup().await;
  Mock::given(method("GET"))
    .and(path("/notifications"))
    .respond_with(ok_json(json!({"body": "Maintenance tonight", "uri": "https://picarto.tv/news", "timestamp": false})))
    .mount(&server)
    .await;

  let notification = client.notifications().global().await.unwrap();
  assert_eq!(notification.body, "Maintenance tonight");
}

#[tokio::test]
async fn error_status_becomes_status_error() {
  let (server, client) = setup().await;
  Mock::given(method("GET"))
    .and(path("/channel/name/nobody"))
    .respond_with(ResponseTemplate::new(404).insert_header("x-ratelimit-remaining", "100"))
    .mount(&server)
    .await;

  match client.channels().by_name("nobody").await {
    Err(Error::Status { status, url }) => {
      assert_eq!(status, 404);
      assert!(url.ends_with("/channel/name/nobody"));
    }
    other => panic!("Expected Status error, got {:?}", other),
  }
}

#[tokio::test]
async fn undecodable_body_is_parse_error() {
  let (server, client) = setup().await;
  Mock::given(method("GET"))
    .and(path("/notifications"))
    .respond_with(
      ResponseTemplate::new(200).set_body_string("<html>maintenance</html>").insert_header("x-ratelimit-remaining", "100"),
    )
    .mount(&server)
    .await;

  match client.notifications().global().await {
    Err(Error::Parse(msg)) => assert!(msg.contains("maintenance")),
    other => panic!("Expected Parse error, got {:?}", other),
  }
}
