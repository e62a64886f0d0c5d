//! Tests for the player-data client.

use wiremock::matchers::{header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{shard_for_region, RiotClient};
use crate::error::CompanionError;
use crate::identity::Identity;

fn client_with_mock(mock_uri: &str) -> RiotClient {
    let mut client = RiotClient::new("eu", "release-09.00-shipping-1");
    client.base_url = mock_uri.to_string();
    client
}

fn test_identity() -> Identity {
    Identity::new("access-token", "ent-token", "eu", "puuid-1")
}

#[test]
fn shard_mapping() {
    assert_eq!(shard_for_region("latam"), "na");
    assert_eq!(shard_for_region("BR"), "na");
    assert_eq!(shard_for_region("eu"), "eu");
    assert_eq!(shard_for_region(" ap "), "ap");
    assert_eq!(shard_for_region("kr"), "kr");
}

#[test]
fn base_url_uses_shard() {
    let client = RiotClient::new("latam", "v");
    assert_eq!(client.base_url, "https://pd.na.a.pvp.net");
}

#[tokio::test]
async fn match_history_sends_auth_headers_and_range() {
    let mock_server = MockServer::start().await;
    let client = client_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/match-history/v1/history/puuid-1"))
        .and(query_param("startIndex", "0"))
        .and(query_param("endIndex", "10"))
        .and(header("Authorization", "Bearer access-token"))
        .and(header("X-Riot-Entitlements-JWT", "ent-token"))
        .and(header("X-Riot-ClientVersion", "release-09.00-shipping-1"))
        .and(header_exists("X-Riot-ClientPlatform"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Subject": "puuid-1",
            "BeginIndex": 0,
            "EndIndex": 10,
            "Total": 1,
            "History": [
                { "MatchID": "m1", "GameStartTime": 1700000000000i64, "QueueID": "competitive" }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let page = client
        .match_history(&test_identity(), 0, 10)
        .await
        .unwrap();
    assert_eq!(page.history.len(), 1);
    assert_eq!(page.history[0].queue_id, "competitive");
}

#[tokio::test]
async fn match_details_unauthorized_maps_to_http_status() {
    let mock_server = MockServer::start().await;
    let client = client_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/match-details/v1/matches/m1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let result = client.match_details(&test_identity(), "m1").await;
    assert!(matches!(result, Err(CompanionError::HttpStatus(s)) if s.as_u16() == 401));
}

#[tokio::test]
async fn incomplete_identity_issues_no_request() {
    let mock_server = MockServer::start().await;
    let client = client_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let identity = Identity::new("access-token", "", "eu", "puuid-1");
    let result = client.match_details(&identity, "m1").await;
    assert!(matches!(result, Err(CompanionError::MissingIdentity)));
}

#[tokio::test]
async fn player_loadout_deserializes() {
    let mock_server = MockServer::start().await;
    let client = client_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/personalization/v2/players/puuid-1/playerloadout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Subject": "puuid-1",
            "Version": 12,
            "Guns": [
                { "ID": "w-vandal", "SkinID": "skin-1", "SkinLevelID": "lvl-1", "ChromaID": "chr-1",
                  "CharmInstanceID": "ci", "CharmID": "buddy-1", "CharmLevelID": "blvl-1", "Attachments": [] }
            ],
            "Sprays": [
                { "EquipSlotID": "5863985E-43AC-B05D-CB2D-139E72970014", "SprayID": "spray-1", "SprayLevelID": null }
            ],
            "Identity": {
                "PlayerCardID": "card-1",
                "PlayerTitleID": "title-1",
                "AccountLevel": 87,
                "PreferredLevelBorderID": "border",
                "HideAccountLevel": false
            },
            "Incognito": false
        })))
        .mount(&mock_server)
        .await;

    let loadout = client.player_loadout(&test_identity()).await.unwrap();
    assert_eq!(loadout.guns.len(), 1);
    assert_eq!(loadout.guns[0].charm_id.as_deref(), Some("buddy-1"));
    assert_eq!(loadout.sprays[0].spray_id, "spray-1");
    assert_eq!(loadout.identity.as_ref().unwrap().account_level, 87);
}
