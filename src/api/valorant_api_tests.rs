//! Tests for the catalog service client.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::CatalogClient;
use crate::error::CompanionError;
use crate::language::Language;

// ── fetch_version ────────────────────────────────────────────────────

#[tokio::test]
async fn fetch_version_unwraps_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": 200,
            "data": { "branch": "release-09.00", "riotClientVersion": "release-09.00-shipping-1" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(&mock_server.uri());
    let version = client.fetch_version().await.unwrap();
    assert_eq!(version, "release-09.00-shipping-1");
}

#[tokio::test]
async fn fetch_version_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/version"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(&mock_server.uri());
    match client.fetch_version().await {
        Err(CompanionError::HttpStatus(status)) => assert_eq!(status.as_u16(), 503),
        other => panic!("Expected HttpStatus error, got: {other:?}"),
    }
}

// ── categories ───────────────────────────────────────────────────────

#[tokio::test]
async fn fetch_maps_sends_language() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/maps"))
        .and(query_param("language", "de-DE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": 200,
            "data": [
                { "uuid": "m1", "displayName": "Aufstieg", "mapUrl": "/Game/Maps/Ascent/Ascent" }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(&mock_server.uri());
    let maps = client.fetch_maps(Language::German).await.unwrap();
    assert_eq!(maps.len(), 1);
    assert_eq!(maps[0].display_name.as_deref(), Some("Aufstieg"));
}

#[tokio::test]
async fn fetch_agents_requests_playable_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/agents"))
        .and(query_param("isPlayableCharacter", "true"))
        .and(query_param("language", "en-US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": 200,
            "data": [
                { "uuid": "a1", "displayName": "Jett", "isPlayableCharacter": true },
                { "uuid": "a2", "displayName": "Sage", "isPlayableCharacter": true }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(&mock_server.uri());
    let agents = client.fetch_agents(Language::English).await.unwrap();
    assert_eq!(agents.len(), 2);
    assert!(agents.iter().all(|a| a.is_playable_character));
}

#[tokio::test]
async fn fetch_skins_malformed_body_is_network_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/weapons/skins"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(&mock_server.uri());
    let result = client.fetch_skins(Language::English).await;
    // reqwest reports body decode failures as its own error kind
    assert!(matches!(result, Err(CompanionError::Network(_))));
}

#[tokio::test]
async fn fetch_titles_404_returns_http_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/playertitles"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(&mock_server.uri());
    let result = client.fetch_player_titles(Language::English).await;
    assert!(matches!(result, Err(CompanionError::HttpStatus(s)) if s.as_u16() == 404));
}

#[test]
fn new_trims_trailing_slash() {
    let client = CatalogClient::new("https://example.com/");
    assert_eq!(client.base_url, "https://example.com");
}
