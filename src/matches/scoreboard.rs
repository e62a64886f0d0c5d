//! Two-team scoreboard for a single match

use super::models::{MatchDetails, MatchPlayer, MatchTeam};
use crate::catalog::CatalogCache;

pub const BLUE: &str = "Blue";
pub const RED: &str = "Red";

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRow {
    pub subject: String,
    pub name: String,
    pub agent_icon: Option<String>,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub score: u32,
    pub is_self: bool,
}

impl PlayerRow {
    pub fn kda(&self) -> String {
        format!("{} / {} / {}", self.kills, self.deaths, self.assists)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamBoard {
    pub team_id: String,
    pub rounds_won: u32,
    pub victory: bool,
    pub players: Vec<PlayerRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scoreboard {
    pub map_name: String,
    pub map_splash: Option<String>,
    pub blue: TeamBoard,
    pub red: TeamBoard,
}

impl Scoreboard {
    /// Build the scoreboard from match details; players outside Blue/Red are left out
    pub fn build(details: &MatchDetails, catalog: &CatalogCache, puuid: &str) -> Self {
        let map_id = details
            .match_info
            .as_ref()
            .map(|info| info.map_id.as_str())
            .unwrap_or_default();
        let map = catalog.map_by_url(map_id);

        let blue_team = details.team(BLUE);
        let red_team = details.team(RED);
        let players = details.players.as_deref().unwrap_or_default();

        Self {
            map_name: map
                .and_then(|m| m.display_name.clone())
                .unwrap_or_else(|| "Unknown Map".to_string()),
            map_splash: map.and_then(|m| m.splash.clone()),
            blue: team_board(BLUE, blue_team, red_team, players, catalog, puuid),
            red: team_board(RED, red_team, blue_team, players, catalog, puuid),
        }
    }
}

fn team_board(
    team_id: &str,
    team: Option<&MatchTeam>,
    opponent: Option<&MatchTeam>,
    players: &[MatchPlayer],
    catalog: &CatalogCache,
    puuid: &str,
) -> TeamBoard {
    let rounds_won = team.map_or(0, |t| t.rounds_won);
    let opponent_rounds = opponent.map_or(0, |t| t.rounds_won);

    TeamBoard {
        team_id: team_id.to_string(),
        rounds_won,
        victory: team.is_some_and(|t| t.won) || rounds_won > opponent_rounds,
        players: players
            .iter()
            .filter(|p| p.team_id == team_id)
            .map(|p| player_row(p, catalog, puuid))
            .collect(),
    }
}

fn player_row(player: &MatchPlayer, catalog: &CatalogCache, puuid: &str) -> PlayerRow {
    let stats = player.stats.clone().unwrap_or_default();
    PlayerRow {
        subject: player.subject.clone(),
        name: player.game_name.clone(),
        agent_icon: catalog
            .agent(&player.character_id)
            .and_then(|a| a.display_icon.clone()),
        kills: stats.kills,
        deaths: stats.deaths,
        assists: stats.assists,
        score: stats.score,
        is_self: player.subject.eq_ignore_ascii_case(puuid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matches::summary::test_catalog;

    fn details(json: serde_json::Value) -> MatchDetails {
        serde_json::from_value(json).unwrap()
    }

    fn sample() -> MatchDetails {
        details(serde_json::json!({
            "matchInfo": { "mapId": "/Game/Maps/Ascent/Ascent" },
            "players": [
                { "subject": "me", "gameName": "Me", "teamId": "Blue", "characterId": "agent-jett",
                  "stats": { "score": 4000, "kills": 20, "deaths": 10, "assists": 5 } },
                { "subject": "b2", "gameName": "Ally", "teamId": "Blue", "characterId": "agent-x",
                  "stats": { "score": 2000, "kills": 8, "deaths": 12, "assists": 7 } },
                { "subject": "r1", "gameName": "Enemy", "teamId": "Red", "characterId": "agent-jett" }
            ],
            "teams": [
                { "teamId": "Blue", "won": false, "roundsPlayed": 24, "roundsWon": 13 },
                { "teamId": "Red", "won": false, "roundsPlayed": 24, "roundsWon": 11 }
            ]
        }))
    }

    #[test]
    fn splits_players_by_team() {
        let board = Scoreboard::build(&sample(), &test_catalog(), "me");

        assert_eq!(board.map_name, "Ascent");
        assert_eq!(
            board.map_splash.as_deref(),
            Some("https://x/ascent-splash.png")
        );
        assert_eq!(board.blue.players.len(), 2);
        assert_eq!(board.red.players.len(), 1);

        let me = &board.blue.players[0];
        assert!(me.is_self);
        assert_eq!(me.kda(), "20 / 10 / 5");
        assert_eq!(me.agent_icon.as_deref(), Some("https://x/jett.png"));
        assert!(!board.blue.players[1].is_self);
        assert!(board.blue.players[1].agent_icon.is_none());
    }

    #[test]
    fn result_falls_back_to_rounds_when_flag_unset() {
        let board = Scoreboard::build(&sample(), &test_catalog(), "me");

        assert_eq!(board.blue.rounds_won, 13);
        assert_eq!(board.red.rounds_won, 11);
        assert!(board.blue.victory);
        assert!(!board.red.victory);
    }

    #[test]
    fn won_flag_wins_over_round_count() {
        let mut match_details = sample();
        if let Some(teams) = match_details.teams.as_mut() {
            teams[1].won = true;
        }
        let board = Scoreboard::build(&match_details, &test_catalog(), "me");
        assert!(board.red.victory);
    }

    #[test]
    fn missing_stats_and_teams_render_as_zero() {
        let match_details = details(serde_json::json!({
            "players": [ { "subject": "r1", "gameName": "Enemy", "teamId": "Red" } ]
        }));
        let board = Scoreboard::build(&match_details, &test_catalog(), "me");

        assert_eq!(board.map_name, "Unknown Map");
        assert_eq!(board.blue.rounds_won, 0);
        assert!(!board.blue.victory);
        assert!(!board.red.victory);
        assert_eq!(board.red.players[0].kda(), "0 / 0 / 0");
    }
}
