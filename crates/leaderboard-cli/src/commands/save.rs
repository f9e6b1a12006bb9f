//! Save command for recording a finished run.

use anyhow::{Context, Result, bail};
use leaderboard_core::{RankingEngine, ScoreStore, render_summary};

/// Append the run, then show the board with the new score's rank.
pub fn run(store: &ScoreStore, name: &str, score: f64, steps: u64) -> Result<String> {
    if name.trim().is_empty() {
        bail!("Player name must not be empty");
    }
    if !score.is_finite() {
        bail!("Score must be a finite number, got {}", score);
    }

    let record = store
        .save(name, score, steps)
        .with_context(|| format!("Failed to save score for {}", name))?;

    let standings = RankingEngine::new(store).query(Some(record.score));
    Ok(render_summary(&standings))
}
