//! Per-match display statistics joined against the catalog

use super::models::{MatchDetails, MatchHistoryEntry};
use crate::catalog::CatalogCache;
use crate::error::{CompanionError, Result};
use chrono::{DateTime, Utc};

/// The requesting player's line for one match
#[derive(Debug, Clone, PartialEq)]
pub struct MatchStats {
    /// "kills/deaths/assists"
    pub kda: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub score: u32,
    pub won: bool,
    pub rounds_won: u32,
    pub rounds_lost: u32,
    pub agent_icon: Option<String>,
    /// Catalog map name, or the raw map path if the map is unknown
    pub map_name: String,
    pub map_image: Option<String>,
    pub game_mode: String,
}

/// Stats for one history entry, or why they could not be produced
#[derive(Debug, Clone, PartialEq)]
pub enum MatchEntry {
    Loaded(MatchStats),
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchSummary {
    pub match_id: String,
    /// Milliseconds since the Unix epoch
    pub game_start_time: i64,
    pub queue_id: String,
    pub stats: MatchEntry,
}

impl MatchSummary {
    pub fn loaded(history: &MatchHistoryEntry, stats: MatchStats) -> Self {
        Self {
            match_id: history.match_id.clone(),
            game_start_time: history.game_start_time,
            queue_id: history.queue_id.clone(),
            stats: MatchEntry::Loaded(stats),
        }
    }

    pub fn failed(history: &MatchHistoryEntry, reason: impl Into<String>) -> Self {
        Self {
            match_id: history.match_id.clone(),
            game_start_time: history.game_start_time,
            queue_id: history.queue_id.clone(),
            stats: MatchEntry::Failed {
                reason: reason.into(),
            },
        }
    }

    /// `None` for rows that should render as a placeholder
    pub fn stats(&self) -> Option<&MatchStats> {
        match &self.stats {
            MatchEntry::Loaded(stats) => Some(stats),
            MatchEntry::Failed { .. } => None,
        }
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.game_start_time)
    }

    pub fn queue_label(&self) -> String {
        queue_label(&self.queue_id)
    }
}

/// Project one match's details onto the requesting player's stats.
///
/// Fails when `players`/`teams` are absent, the player is not in the match or
/// their stats block is missing. A missing own-team record is not an error:
/// the match reads as a loss with no rounds.
pub fn derive_stats(
    details: &MatchDetails,
    puuid: &str,
    catalog: &CatalogCache,
) -> Result<MatchStats> {
    if details.players.is_none() || details.teams.is_none() {
        return Err(CompanionError::MalformedMatch(
            "missing players or teams".to_string(),
        ));
    }

    let me = details
        .player(puuid)
        .ok_or_else(|| CompanionError::MalformedMatch("player not in match".to_string()))?;
    let stats = me
        .stats
        .as_ref()
        .ok_or_else(|| CompanionError::MalformedMatch("player has no stats".to_string()))?;

    let team = details.team(&me.team_id);
    let (map_id, game_mode) = details
        .match_info
        .as_ref()
        .map(|info| (info.map_id.as_str(), info.game_mode.as_str()))
        .unwrap_or_default();

    let map = catalog.map_by_url(map_id);
    let agent = catalog.agent(&me.character_id);

    Ok(MatchStats {
        kda: format!("{}/{}/{}", stats.kills, stats.deaths, stats.assists),
        kills: stats.kills,
        deaths: stats.deaths,
        assists: stats.assists,
        score: stats.score,
        won: team.is_some_and(|t| t.won),
        rounds_won: team.map_or(0, |t| t.rounds_won),
        rounds_lost: team.map_or(0, |t| t.rounds_played.saturating_sub(t.rounds_won)),
        agent_icon: agent.and_then(|a| a.display_icon.clone()),
        map_name: map
            .and_then(|m| m.display_name.clone())
            .unwrap_or_else(|| map_id.to_string()),
        map_image: map.and_then(|m| m.list_view_icon.clone().or_else(|| m.splash.clone())),
        game_mode: game_mode.to_string(),
    })
}

/// Display name for a queue id ("competitive" -> "Competitive", "" -> "Custom")
pub fn queue_label(queue_id: &str) -> String {
    let label = match queue_id.to_lowercase().as_str() {
        "" | "custom" => "Custom",
        "competitive" => "Competitive",
        "unrated" => "Unrated",
        "swiftplay" => "Swiftplay",
        "spikerush" => "Spike Rush",
        "deathmatch" => "Deathmatch",
        "hurm" => "Team Deathmatch",
        "ggteam" => "Escalation",
        "onefa" => "Replication",
        "snowball" => "Snowball Fight",
        "premier" => "Premier",
        "newmap" => "New Map",
        _ => {
            let mut chars = queue_id.chars();
            return match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            };
        }
    };
    label.to_string()
}

#[cfg(test)]
pub(crate) use tests::test_catalog;
