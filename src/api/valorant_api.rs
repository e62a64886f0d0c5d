//! Client for the public read-only catalog service (valorant-api.com)

use crate::catalog::types::{
    Agent, Buddy, CatalogResponse, MapInfo, PlayerCard, PlayerTitle, Skin, Spray, VersionInfo,
    WeaponMetadata,
};
use crate::config::DEFAULT_CATALOG_URL;
use crate::error::{CompanionError, Result};
use crate::language::Language;
use reqwest::Client;
use serde::de::DeserializeOwned;

const USER_AGENT: &str = "valo_companion/1.0";

/// Catalog service client. Cheap to clone, the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL)
    }
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the current client version stamp, used as the cache key
    pub async fn fetch_version(&self) -> Result<String> {
        let url = format!("{}/v1/version", self.base_url);
        log::debug!("Fetching catalog version: {}", url);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CompanionError::HttpStatus(response.status()));
        }

        let body: CatalogResponse<VersionInfo> = response.json().await?;
        log::info!("Current client version: {}", body.data.riot_client_version);
        Ok(body.data.riot_client_version)
    }

    /// Fetch one catalog category, unwrapping the `data` envelope
    async fn fetch_list<T: DeserializeOwned>(
        &self,
        path: &str,
        language: Language,
        extra_query: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("Fetching {} ({})", url, language.code());

        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .query(&[("language", language.code())])
            .query(extra_query)
            .send()
            .await?;

        if !response.status().is_success() {
            log::warn!("{} returned {}", path, response.status());
            return Err(CompanionError::HttpStatus(response.status()));
        }

        let body: CatalogResponse<Vec<T>> = response.json().await?;
        log::debug!("Fetched {} entries from {}", body.data.len(), path);
        Ok(body.data)
    }

    pub async fn fetch_skins(&self, language: Language) -> Result<Vec<Skin>> {
        self.fetch_list("/v1/weapons/skins", language, &[]).await
    }

    pub async fn fetch_buddies(&self, language: Language) -> Result<Vec<Buddy>> {
        self.fetch_list("/v1/buddies", language, &[]).await
    }

    pub async fn fetch_sprays(&self, language: Language) -> Result<Vec<Spray>> {
        self.fetch_list("/v1/sprays", language, &[]).await
    }

    pub async fn fetch_player_cards(&self, language: Language) -> Result<Vec<PlayerCard>> {
        self.fetch_list("/v1/playercards", language, &[]).await
    }

    pub async fn fetch_player_titles(&self, language: Language) -> Result<Vec<PlayerTitle>> {
        self.fetch_list("/v1/playertitles", language, &[]).await
    }

    pub async fn fetch_maps(&self, language: Language) -> Result<Vec<MapInfo>> {
        self.fetch_list("/v1/maps", language, &[]).await
    }

    /// Fetch playable agents only (the service also lists a non-playable duplicate Sova)
    pub async fn fetch_agents(&self, language: Language) -> Result<Vec<Agent>> {
        self.fetch_list("/v1/agents", language, &[("isPlayableCharacter", "true")])
            .await
    }

    /// Fetch weapon metadata (names and shop categories) for loadout resolution
    pub async fn fetch_weapons(&self, language: Language) -> Result<Vec<WeaponMetadata>> {
        self.fetch_list("/v1/weapons", language, &[]).await
    }
}

#[cfg(test)]
#[path = "valorant_api_tests.rs"]
mod tests;
