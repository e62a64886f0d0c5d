//! Runtime configuration shared by the catalog cache, match store and CLI

use crate::language::Language;
use std::path::PathBuf;
use std::time::Duration;

/// Public catalog service
pub const DEFAULT_CATALOG_URL: &str = "https://valorant-api.com";

/// Number of matches requested from the history endpoint
pub const DEFAULT_HISTORY_PAGE_SIZE: u32 = 10;

/// How long a non-empty match list is served without refetching
pub const DEFAULT_MATCH_FRESHNESS: Duration = Duration::from_secs(5 * 60);

/// Maximum concurrent match-detail requests
pub const DEFAULT_DETAIL_CONCURRENCY: usize = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_base_url: String,
    pub language: Language,
    /// Directory holding the persisted catalog files
    pub cache_dir: PathBuf,
    pub history_page_size: u32,
    pub match_freshness: Duration,
    pub detail_concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_base_url: DEFAULT_CATALOG_URL.to_string(),
            language: Language::default(),
            cache_dir: default_cache_dir(),
            history_page_size: DEFAULT_HISTORY_PAGE_SIZE,
            match_freshness: DEFAULT_MATCH_FRESHNESS,
            detail_concurrency: DEFAULT_DETAIL_CONCURRENCY,
        }
    }
}

/// Returns the default cache directory: ~/.cache/valo_companion
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("valo_companion")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service_limits() {
        let config = Config::default();
        assert_eq!(config.catalog_base_url, "https://valorant-api.com");
        assert_eq!(config.language, Language::English);
        assert_eq!(config.history_page_size, 10);
        assert_eq!(config.match_freshness, Duration::from_secs(300));
        assert_eq!(config.detail_concurrency, 10);
        assert!(config.cache_dir.ends_with("valo_companion"));
    }
}
