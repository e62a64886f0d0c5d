//! Client for the first-party player-data service (pd.<shard>.a.pvp.net)
//!
//! Every request is authenticated with the caller's session tokens.

use crate::error::{CompanionError, Result};
use crate::identity::Identity;
use crate::loadout::PlayerLoadout;
use crate::matches::models::{MatchDetails, MatchHistoryPage};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Platform descriptor the service requires on every call
const CLIENT_PLATFORM: &str = r#"{"platformType":"PC","platformOS":"Windows","platformOSVersion":"10.0.19042.1.256.64bit","platformChipset":"Unknown"}"#;

/// Map an auth-flow region onto the shard that hosts its player data
pub fn shard_for_region(region: &str) -> String {
    match region.trim().to_lowercase().as_str() {
        "latam" | "br" => "na".to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct RiotClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    client_version: String,
    client_platform: String,
}

impl RiotClient {
    /// Create a client for the shard serving `region`.
    ///
    /// `client_version` is the catalog's `riotClientVersion`; the service
    /// rejects some calls when it is stale.
    pub fn new(region: &str, client_version: &str) -> Self {
        let shard = shard_for_region(region);
        log::info!("Creating player-data client for shard {}", shard);
        Self::with_base_url(&format!("https://pd.{}.a.pvp.net", shard), client_version)
    }

    /// Create a client against an explicit base URL instead of a shard host
    pub fn with_base_url(base_url: &str, client_version: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client_version: client_version.to_string(),
            client_platform: STANDARD.encode(CLIENT_PLATFORM),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        identity: &Identity,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        if !identity.is_complete() {
            return Err(CompanionError::MissingIdentity);
        }

        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&identity.access_token)
            .header("X-Riot-Entitlements-JWT", &identity.entitlements_token)
            .header("X-Riot-ClientVersion", &self.client_version)
            .header("X-Riot-ClientPlatform", &self.client_platform)
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            log::warn!("{} returned {}", path, response.status());
            return Err(CompanionError::HttpStatus(response.status()));
        }

        Ok(response.json::<T>().await?)
    }

    /// Fetch match ids in `[start, end)`, newest first
    pub async fn match_history(
        &self,
        identity: &Identity,
        start: u32,
        end: u32,
    ) -> Result<MatchHistoryPage> {
        let path = format!("/match-history/v1/history/{}", identity.puuid);
        let page: MatchHistoryPage = self
            .get_json(
                identity,
                &path,
                &[
                    ("startIndex", start.to_string()),
                    ("endIndex", end.to_string()),
                ],
            )
            .await?;
        log::info!(
            "Fetched {} match ids ({} total)",
            page.history.len(),
            page.total
        );
        Ok(page)
    }

    pub async fn match_details(&self, identity: &Identity, match_id: &str) -> Result<MatchDetails> {
        let path = format!("/match-details/v1/matches/{}", match_id);
        self.get_json(identity, &path, &[]).await
    }

    pub async fn player_loadout(&self, identity: &Identity) -> Result<PlayerLoadout> {
        let path = format!("/personalization/v2/players/{}/playerloadout", identity.puuid);
        self.get_json(identity, &path, &[]).await
    }
}

#[cfg(test)]
#[path = "riot_tests.rs"]
mod tests;
