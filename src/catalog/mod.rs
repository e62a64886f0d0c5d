//! Catalog cache: cosmetics, maps and agents from the catalog service,
//! persisted per client version and display language

pub mod agents;
pub mod cache;
pub mod snapshot;
pub mod store;
pub mod types;

pub use cache::{CatalogCache, CatalogLoad, Source};
pub use snapshot::{AgentCatalog, CatalogSnapshot};
pub use store::SnapshotStore;
