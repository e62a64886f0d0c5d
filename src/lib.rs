//! Valo Companion - Valorant catalog cache and match history aggregation
//!
//! Keeps a version- and language-keyed copy of the public cosmetic catalog on
//! disk, and turns a player's recent match history into per-match summaries
//! joined against that catalog.

pub mod api;
pub mod catalog;
pub mod config;
pub mod equip;
pub mod error;
pub mod identity;
pub mod language;
pub mod loadout;
pub mod matches;

pub use api::{CatalogClient, RiotClient};
pub use catalog::{CatalogCache, CatalogLoad, Source};
pub use config::Config;
pub use error::{CompanionError, Result};
pub use identity::Identity;
pub use language::Language;
pub use matches::{FetchOutcome, MatchEntry, MatchStore, MatchSummary, Scoreboard};
