use tracing::debug;

use crate::storage::{ScoreEntry, ScoreRead, ScoreStore};

use super::standings::{LeaderboardSnapshot, RankedEntry, Standings};

/// Number of entries shown on the board
pub const LEADERBOARD_SIZE: usize = 10;

/// Sort descending by score and assign competition ranks.
///
/// Equal scores share a rank and the next lower score takes its 1-based
/// position, so `[10, 10, 8]` ranks as `[1, 1, 3]`. The sort is stable:
/// tied entries keep their read order.
pub fn rank_scores(mut entries: Vec<ScoreEntry>) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut ranked: Vec<RankedEntry> = Vec::with_capacity(entries.len());
    for (position, entry) in entries.into_iter().enumerate() {
        let rank = match ranked.last() {
            Some(previous) if entry.score >= previous.score => previous.rank,
            _ => position as u32 + 1,
        };
        ranked.push(RankedEntry::new(rank, entry.name, entry.score));
    }
    ranked
}

/// Rank of the first entry in sort order whose score equals `score` exactly.
///
/// Tied entries share a rank, so the result names the score's position, not
/// any particular player holding it.
pub fn find_rank(ranked: &[RankedEntry], score: f64) -> Option<u32> {
    ranked.iter().find(|e| e.score == score).map(|e| e.rank)
}

/// Build the full board from raw entries. No entries means no data.
pub fn build_standings(entries: Vec<ScoreEntry>, target_score: Option<f64>) -> Standings {
    if entries.is_empty() {
        return Standings::NoData;
    }

    let total: f64 = entries.iter().map(|e| e.score).sum();
    let average_score = total / entries.len() as f64;

    let mut ranked_entries = rank_scores(entries);
    let queried_rank = target_score.and_then(|score| find_rank(&ranked_entries, score));
    ranked_entries.truncate(LEADERBOARD_SIZE);

    Standings::Ranked(LeaderboardSnapshot {
        average_score,
        ranked_entries,
        queried_rank,
    })
}

/// Read-side view over a [`ScoreStore`]. Every query re-reads the store.
pub struct RankingEngine<'a> {
    store: &'a ScoreStore,
}

impl<'a> RankingEngine<'a> {
    pub fn new(store: &'a ScoreStore) -> Self {
        Self { store }
    }

    fn entries(&self) -> Option<Vec<ScoreEntry>> {
        match self.store.load_scores() {
            ScoreRead::Rows(rows) => Some(rows),
            ScoreRead::Missing | ScoreRead::Unreadable => None,
        }
    }

    /// Average, top entries and the rank of `target_score`.
    ///
    /// Never fails: read problems come back as [`Standings::NoData`].
    pub fn query(&self, target_score: Option<f64>) -> Standings {
        let Some(entries) = self.entries() else {
            return Standings::NoData;
        };
        debug!("Ranking {} leaderboard entries", entries.len());
        build_standings(entries, target_score)
    }

    /// Every valid entry ranked, not just the visible board. Empty without data.
    pub fn ranked_all(&self) -> Vec<RankedEntry> {
        self.entries().map(rank_scores).unwrap_or_default()
    }

    /// Best-ranked entry for a player, searched across the whole board.
    pub fn standing_of(&self, player_name: &str) -> Option<RankedEntry> {
        self.ranked_all()
            .into_iter()
            .find(|e| e.name == player_name)
    }
}
