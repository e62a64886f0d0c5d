//! Match history and match detail payloads from the player-data service

use serde::{Deserialize, Serialize};

/// One page of `GET /match-history/v1/history/{puuid}`
#[derive(Debug, Clone, Deserialize)]
pub struct MatchHistoryPage {
    #[serde(rename = "Subject", default)]
    pub subject: String,
    #[serde(rename = "BeginIndex", default)]
    pub begin_index: u32,
    #[serde(rename = "EndIndex", default)]
    pub end_index: u32,
    #[serde(rename = "Total", default)]
    pub total: u32,
    #[serde(rename = "History", default)]
    pub history: Vec<MatchHistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchHistoryEntry {
    #[serde(rename = "MatchID")]
    pub match_id: String,
    /// Milliseconds since the Unix epoch
    #[serde(rename = "GameStartTime", default)]
    pub game_start_time: i64,
    #[serde(rename = "QueueID", default)]
    pub queue_id: String,
}

/// `GET /match-details/v1/matches/{matchId}`
///
/// `players` and `teams` are optional: the service omits them for some
/// custom and in-progress matches.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetails {
    #[serde(default)]
    pub match_info: Option<MatchInfo>,
    #[serde(default)]
    pub players: Option<Vec<MatchPlayer>>,
    #[serde(default)]
    pub teams: Option<Vec<MatchTeam>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    #[serde(default)]
    pub match_id: String,
    #[serde(default)]
    pub map_id: String,
    #[serde(default)]
    pub game_mode: String,
    #[serde(rename = "queueID", default)]
    pub queue_id: String,
    #[serde(default)]
    pub game_start_millis: Option<i64>,
    #[serde(default)]
    pub game_length_millis: Option<i64>,
    #[serde(default)]
    pub is_completed: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPlayer {
    pub subject: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub tag_line: String,
    #[serde(default)]
    pub team_id: String,
    /// Agent UUID
    #[serde(default)]
    pub character_id: String,
    #[serde(default)]
    pub stats: Option<PlayerStats>,
    #[serde(default)]
    pub competitive_tier: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub rounds_played: u32,
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub playtime_millis: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchTeam {
    /// "Blue" or "Red" for standard modes, the player's subject in deathmatch
    pub team_id: String,
    #[serde(default)]
    pub won: bool,
    #[serde(default)]
    pub rounds_played: u32,
    #[serde(default)]
    pub rounds_won: u32,
    #[serde(default)]
    pub num_points: Option<u32>,
}

impl MatchDetails {
    pub fn player(&self, puuid: &str) -> Option<&MatchPlayer> {
        self.players
            .as_ref()?
            .iter()
            .find(|p| p.subject.eq_ignore_ascii_case(puuid))
    }

    pub fn team(&self, team_id: &str) -> Option<&MatchTeam> {
        self.teams.as_ref()?.iter().find(|t| t.team_id == team_id)
    }
}
