use super::snapshot::{AgentCatalog, CatalogSnapshot};
use super::store::SnapshotStore;
use super::types::{Agent, MapInfo};
use crate::api::CatalogClient;
use crate::config::Config;
use crate::error::Result;
use crate::language::Language;

/// Where a catalog came from during `load`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Disk,
    Remote,
}

/// Outcome of a catalog load, per persisted file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogLoad {
    pub snapshot: Source,
    pub agents: Source,
}

/// Version- and language-keyed catalog cache.
///
/// Holds the cosmetic/map snapshot and the agent catalog in memory, backed by
/// two JSON files. Accessors return empty catalogs until `load` succeeds.
pub struct CatalogCache {
    client: CatalogClient,
    store: SnapshotStore,
    language: Language,
    snapshot: CatalogSnapshot,
    agents: AgentCatalog,
}

impl CatalogCache {
    pub fn new(client: CatalogClient, store: SnapshotStore, language: Language) -> Self {
        Self {
            client,
            store,
            language,
            snapshot: CatalogSnapshot::default(),
            agents: AgentCatalog::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            CatalogClient::new(&config.catalog_base_url),
            SnapshotStore::new(&config.cache_dir),
            config.language,
        )
    }

    /// Preload catalogs obtained elsewhere; `load` still validates them against the store
    pub fn with_catalog(mut self, snapshot: CatalogSnapshot, agents: AgentCatalog) -> Self {
        self.snapshot = snapshot;
        self.agents = agents;
        self
    }

    /// Probe the current client version, then load both catalogs for it
    pub async fn load(&mut self) -> Result<CatalogLoad> {
        let version = self.client.fetch_version().await?;
        self.load_for_version(&version).await
    }

    /// Load both catalogs for a known version.
    ///
    /// Valid persisted files are used as-is with no request. Otherwise the
    /// catalog is refetched in full and replaces the in-memory copy only if
    /// every category succeeded.
    pub async fn load_for_version(&mut self, version: &str) -> Result<CatalogLoad> {
        let snapshot = self.load_snapshot(version).await?;
        let agents = self.load_agents(version).await?;
        Ok(CatalogLoad { snapshot, agents })
    }

    async fn load_snapshot(&mut self, version: &str) -> Result<Source> {
        let language = self.language.code();

        if let Some(stored) = self.store.read_snapshot() {
            if stored.is_valid_for(version, language) {
                log::info!(
                    "Using cached catalog ({} skins, {} maps) for {} / {}",
                    stored.skins.len(),
                    stored.maps.len(),
                    version,
                    language
                );
                self.snapshot = stored;
                return Ok(Source::Disk);
            }
            log::info!(
                "Cached catalog is stale (version {:?}, language {:?}), refetching",
                stored.riot_client_version,
                stored.language
            );
        }

        let snapshot = self.fetch_snapshot(version).await?;
        if let Err(e) = self.store.write_snapshot(&snapshot) {
            log::warn!("Failed to save catalog: {}", e);
        }
        self.snapshot = snapshot;
        Ok(Source::Remote)
    }

    async fn fetch_snapshot(&self, version: &str) -> Result<CatalogSnapshot> {
        let lang = self.language;
        log::info!("Fetching catalog for {} / {}", version, lang.code());

        let (skins, buddies, sprays, cards, titles, maps) = tokio::try_join!(
            self.client.fetch_skins(lang),
            self.client.fetch_buddies(lang),
            self.client.fetch_sprays(lang),
            self.client.fetch_player_cards(lang),
            self.client.fetch_player_titles(lang),
            self.client.fetch_maps(lang),
        )?;

        log::info!(
            "Fetched catalog: {} skins, {} buddies, {} sprays, {} cards, {} titles, {} maps",
            skins.len(),
            buddies.len(),
            sprays.len(),
            cards.len(),
            titles.len(),
            maps.len()
        );

        Ok(CatalogSnapshot {
            riot_client_version: Some(version.to_string()),
            language: Some(lang.code().to_string()),
            skins,
            buddies,
            sprays,
            cards,
            titles,
            maps,
        })
    }

    async fn load_agents(&mut self, version: &str) -> Result<Source> {
        let language = self.language.code();

        if let Some(stored) = self.store.read_agents() {
            if stored.is_valid_for(version, language) {
                log::info!("Using cached agents ({} entries)", stored.agents.len());
                self.agents = stored;
                return Ok(Source::Disk);
            }
        }

        let agents = self.client.fetch_agents(self.language).await?;
        log::info!("Fetched {} agents", agents.len());

        let catalog = AgentCatalog {
            riot_client_version: Some(version.to_string()),
            language: Some(language.to_string()),
            agents,
        };
        if let Err(e) = self.store.write_agents(&catalog) {
            log::warn!("Failed to save agent catalog: {}", e);
        }
        self.agents = catalog;
        Ok(Source::Remote)
    }

    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    pub fn agents(&self) -> &AgentCatalog {
        &self.agents
    }

    pub fn agent(&self, uuid: &str) -> Option<&Agent> {
        self.agents.agent(uuid)
    }

    pub fn map_by_url(&self, map_url: &str) -> Option<&MapInfo> {
        self.snapshot.map_by_url(map_url)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Client version the in-memory snapshot was fetched for
    pub fn version(&self) -> Option<&str> {
        self.snapshot.riot_client_version.as_deref()
    }

    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
