//! Match history store: one page of recent matches, enriched with the
//! player's stats, refetched at most once per freshness window

use super::models::{MatchDetails, MatchHistoryEntry};
use super::summary::{derive_stats, MatchSummary};
use crate::api::RiotClient;
use crate::catalog::CatalogCache;
use crate::config::{
    Config, DEFAULT_DETAIL_CONCURRENCY, DEFAULT_HISTORY_PAGE_SIZE, DEFAULT_MATCH_FRESHNESS,
};
use crate::error::{CompanionError, Result};
use crate::identity::Identity;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Previous non-empty result is still inside the freshness window
    Fresh,
    /// Identity is incomplete, nothing was requested
    MissingIdentity,
    /// The list was replaced with this many summaries
    Refreshed(usize),
}

pub struct MatchStore {
    matches: Vec<MatchSummary>,
    loading: bool,
    pub(crate) last_updated: Option<Instant>,
    page_size: u32,
    freshness: Duration,
    concurrency: usize,
}

impl Default for MatchStore {
    fn default() -> Self {
        Self::new(
            DEFAULT_HISTORY_PAGE_SIZE,
            DEFAULT_MATCH_FRESHNESS,
            DEFAULT_DETAIL_CONCURRENCY,
        )
    }
}

impl MatchStore {
    pub fn new(page_size: u32, freshness: Duration, concurrency: usize) -> Self {
        Self {
            matches: Vec::new(),
            loading: false,
            last_updated: None,
            page_size,
            freshness,
            concurrency: concurrency.max(1),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.history_page_size,
            config.match_freshness,
            config.detail_concurrency,
        )
    }

    pub fn matches(&self) -> &[MatchSummary] {
        &self.matches
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_updated(&self) -> Option<Instant> {
        self.last_updated
    }

    /// True when a non-empty result was stored less than `freshness` before `now`
    pub fn is_fresh(&self, now: Instant) -> bool {
        !self.matches.is_empty()
            && self
                .last_updated
                .is_some_and(|at| now.saturating_duration_since(at) < self.freshness)
    }

    /// Refresh the match list for `identity`.
    ///
    /// Per-match failures become `Failed` entries; only a failed history
    /// request fails the call, leaving the previous list in place.
    pub async fn fetch_matches(
        &mut self,
        client: &RiotClient,
        catalog: &CatalogCache,
        identity: &Identity,
    ) -> Result<FetchOutcome> {
        if self.is_fresh(Instant::now()) {
            log::debug!("Match list is fresh, skipping fetch");
            return Ok(FetchOutcome::Fresh);
        }

        if !identity.is_complete() {
            log::debug!("Identity incomplete, skipping match fetch");
            return Ok(FetchOutcome::MissingIdentity);
        }

        let (page_size, concurrency) = (self.page_size, self.concurrency);
        let result = {
            let _loading = LoadingFlag::raise(&mut self.loading);
            collect_summaries(client, catalog, identity, page_size, concurrency).await
        };

        let summaries = result.inspect_err(|e| log::error!("Failed to fetch match history: {}", e))?;
        let count = summaries.len();
        self.matches = summaries;
        self.last_updated = Some(Instant::now());

        log::info!("Match list refreshed with {} matches", count);
        Ok(FetchOutcome::Refreshed(count))
    }
}

/// Clears the loading flag when dropped, so a cancelled fetch never leaves it set
struct LoadingFlag<'a>(&'a mut bool);

impl<'a> LoadingFlag<'a> {
    fn raise(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for LoadingFlag<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

async fn collect_summaries(
    client: &RiotClient,
    catalog: &CatalogCache,
    identity: &Identity,
    page_size: u32,
    concurrency: usize,
) -> Result<Vec<MatchSummary>> {
    let page = client.match_history(identity, 0, page_size).await?;
    let details = fetch_details(client, identity, &page.history, concurrency).await;

    let summaries = page
        .history
        .iter()
        .zip(details)
        .map(|(entry, details)| {
            match details.and_then(|d| derive_stats(&d, &identity.puuid, catalog)) {
                Ok(stats) => MatchSummary::loaded(entry, stats),
                Err(e) => {
                    log::warn!("Failed to load details for {}: {}", entry.match_id, e);
                    MatchSummary::failed(entry, e.to_string())
                }
            }
        })
        .collect();

    Ok(summaries)
}

/// Fetch details for every entry concurrently, at most `concurrency` in
/// flight. Results come back in entry order regardless of completion order.
async fn fetch_details(
    client: &RiotClient,
    identity: &Identity,
    entries: &[MatchHistoryEntry],
    concurrency: usize,
) -> Vec<Result<MatchDetails>> {
    let semaphore = Arc::new(Semaphore::new(concurrency));

    let handles: Vec<_> = entries
        .iter()
        .map(|entry| {
            let client = client.clone();
            let identity = identity.clone();
            let match_id = entry.match_id.clone();
            let semaphore = Arc::clone(&semaphore);

            tokio::spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| CompanionError::TaskFailed(e.to_string()))?;
                client.match_details(&identity, &match_id).await
            })
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(match handle.await {
            Ok(result) => result,
            Err(e) => Err(CompanionError::TaskFailed(e.to_string())),
        });
    }
    results
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
