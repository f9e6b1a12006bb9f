use serde::Serialize;

/// One row of the ranked board
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub rank: u32,
    pub name: String,
    pub score: f64,
}

impl RankedEntry {
    pub fn new(rank: u32, name: impl Into<String>, score: f64) -> Self {
        Self {
            rank,
            name: name.into(),
            score,
        }
    }
}

/// Statistics derived from every stored run. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardSnapshot {
    /// Mean of all valid scores
    pub average_score: f64,
    /// Best entries, descending by score
    pub ranked_entries: Vec<RankedEntry>,
    /// Rank of the queried score, if it was asked for and found
    pub queried_rank: Option<u32>,
}

/// Result of a leaderboard query.
///
/// `NoData` covers a missing store, an unreadable one and a store without a
/// single valid row. None of those are errors; the board just shows nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Standings {
    NoData,
    Ranked(LeaderboardSnapshot),
}

impl Standings {
    pub fn is_empty(&self) -> bool {
        matches!(self, Standings::NoData)
    }

    pub fn snapshot(&self) -> Option<&LeaderboardSnapshot> {
        match self {
            Standings::Ranked(snapshot) => Some(snapshot),
            Standings::NoData => None,
        }
    }

    /// Mean score, `0.0` without data
    pub fn average(&self) -> f64 {
        self.snapshot().map_or(0.0, |s| s.average_score)
    }

    pub fn top(&self) -> &[RankedEntry] {
        self.snapshot()
            .map(|s| s.ranked_entries.as_slice())
            .unwrap_or_default()
    }

    pub fn player_rank(&self) -> Option<u32> {
        self.snapshot().and_then(|s| s.queried_rank)
    }

    /// Flatten into `(average, top entries, player rank)`
    pub fn into_parts(self) -> (f64, Vec<RankedEntry>, Option<u32>) {
        match self {
            Standings::Ranked(s) => (s.average_score, s.ranked_entries, s.queried_rank),
            Standings::NoData => (0.0, Vec::new(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_is_neutral() {
        let standings = Standings::NoData;
        assert!(standings.is_empty());
        assert_eq!(standings.average(), 0.0);
        assert!(standings.top().is_empty());
        assert_eq!(standings.player_rank(), None);
        assert_eq!(standings.into_parts(), (0.0, Vec::new(), None));
    }

    #[test]
    fn test_ranked_accessors() {
        let standings = Standings::Ranked(LeaderboardSnapshot {
            average_score: 12.5,
            ranked_entries: vec![RankedEntry::new(1, "Alice", 20.0)],
            queried_rank: Some(1),
        });
        assert!(!standings.is_empty());
        assert_eq!(standings.average(), 12.5);
        assert_eq!(standings.top()[0].name, "Alice");
        assert_eq!(standings.player_rank(), Some(1));
    }
}
