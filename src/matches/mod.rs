//! Match history: recent matches with the player's stats, plus scoreboards

pub mod models;
pub mod scoreboard;
pub mod store;
pub mod summary;

pub use scoreboard::{PlayerRow, Scoreboard, TeamBoard};
pub use store::{FetchOutcome, MatchStore};
pub use summary::{derive_stats, queue_label, MatchEntry, MatchStats, MatchSummary};
