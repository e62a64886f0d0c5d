//! On-disk persistence for the catalog snapshot and the agent catalog
//!
//! Each is one JSON file in the cache directory. A missing, unreadable or
//! corrupt file is treated as "nothing cached".

use super::snapshot::{AgentCatalog, CatalogSnapshot};
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const SNAPSHOT_FILE: &str = "valorant_assets.json";
pub const AGENTS_FILE: &str = "valorant_agent.json";

#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.dir.join(SNAPSHOT_FILE)
    }

    pub fn agents_path(&self) -> PathBuf {
        self.dir.join(AGENTS_FILE)
    }

    pub fn read_snapshot(&self) -> Option<CatalogSnapshot> {
        read_json(&self.snapshot_path())
    }

    pub fn write_snapshot(&self, snapshot: &CatalogSnapshot) -> Result<()> {
        write_json(&self.snapshot_path(), snapshot)
    }

    pub fn read_agents(&self) -> Option<AgentCatalog> {
        read_json(&self.agents_path())
    }

    pub fn write_agents(&self, agents: &AgentCatalog) -> Result<()> {
        write_json(&self.agents_path(), agents)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    if !path.exists() {
        log::debug!("No cached file at {}", path.display());
        return None;
    }
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Failed to parse {}, ignoring it: {}", path.display(), e);
                None
            }
        },
        Err(e) => {
            log::warn!("Failed to read {}, ignoring it: {}", path.display(), e);
            None
        }
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string(value)?;
    std::fs::write(path, content)?;

    log::debug!("Saved {}", path.display());
    Ok(())
}
