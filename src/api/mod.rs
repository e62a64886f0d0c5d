//! API clients for external services (catalog service, player-data service)

pub mod riot;
pub mod valorant_api;

pub use riot::{shard_for_region, RiotClient};
pub use valorant_api::CatalogClient;
