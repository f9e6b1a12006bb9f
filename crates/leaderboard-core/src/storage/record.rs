use chrono::{NaiveDateTime, Timelike};

/// One finished play session as persisted in the leaderboard file.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    /// Local time, second resolution
    pub timestamp: NaiveDateTime,
    pub player_name: String,
    pub score: f64,
    pub steps: u64,
}

impl ScoreRecord {
    pub fn new(
        timestamp: NaiveDateTime,
        player_name: impl Into<String>,
        score: f64,
        steps: u64,
    ) -> Self {
        Self {
            timestamp: timestamp.with_nanosecond(0).unwrap_or(timestamp),
            player_name: player_name.into(),
            score,
            steps,
        }
    }
}

/// The (name, score) pair the ranking works on.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    pub name: String,
    pub score: f64,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

impl From<&ScoreRecord> for ScoreEntry {
    fn from(record: &ScoreRecord) -> Self {
        Self::new(record.player_name.clone(), record.score)
    }
}
