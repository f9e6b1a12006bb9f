//! # leaderboard-core
//!
//! Core library for the paddle-and-ball leaderboard.
//!
//! This crate provides:
//! - Append-only CSV score storage with lazy creation
//! - Leaderboard ranking (average, top 10, competition ranks with ties)
//! - Per-episode score and step-budget tracking
//! - Text and JSON board rendering

pub mod config;
pub mod episode;
pub mod error;
pub mod export;
pub mod ranking;
pub mod storage;

pub use config::Config;
pub use episode::{Action, EndReason, EpisodeSummary, EpisodeTracker, StepOutcome};
pub use error::{Error, Result};
pub use export::{
    ExportFormat, JsonExporter, TextExporter, format_json_entry, render_summary,
    standings_to_json, standings_to_value,
};
pub use ranking::{
    LEADERBOARD_SIZE, LeaderboardSnapshot, RankedEntry, RankingEngine, Standings, rank_scores,
};
pub use storage::{ScoreEntry, ScoreRead, ScoreRecord, ScoreStore};
