//! Leaderboard ranking.
//!
//! Every query reads the whole store, averages all valid scores, sorts them
//! descending and assigns standard competition ranks (`1, 1, 3`). Nothing is
//! cached between queries.

mod engine;
mod standings;

pub use engine::{LEADERBOARD_SIZE, RankingEngine, build_standings, find_rank, rank_scores};
pub use standings::{LeaderboardSnapshot, RankedEntry, Standings};
