//! Replay command for scoring a recorded play session.
//!
//! The input holds one environment step per line as `action,reward,done`,
//! where `action` is the ALE action id (0-3) and `done` is `0`/`1` or
//! `true`/`false`. Blank lines and lines starting with `#` are ignored.

use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use leaderboard_core::storage::format_score;
use leaderboard_core::{
    Action, EndReason, EpisodeSummary, EpisodeTracker, RankingEngine, ScoreStore, StepOutcome,
    render_summary,
};
use tracing::info;

pub fn run(store: &ScoreStore, name: &str, input: &Path, steps: i64) -> Result<String> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    replay(store, name, &content, steps)
}

/// Play `content` through a tracker and save the run unless the player quit.
pub fn replay(store: &ScoreStore, name: &str, content: &str, steps: i64) -> Result<String> {
    if name.trim().is_empty() {
        bail!("Player name must not be empty");
    }

    let summary = track(content, EpisodeTracker::from_step_arg(steps))?;
    if !summary.score.is_finite() {
        bail!("Episode score is not a finite number: {}", summary.score);
    }

    if summary.reason == EndReason::Quit {
        info!("Episode quit after {} steps, not saved", summary.steps);
        return Ok(format!(
            "Episode quit after {} steps with {}, not saved\n",
            summary.steps,
            format_score(summary.score)
        ));
    }

    let record = store
        .save_episode(name, &summary)
        .with_context(|| format!("Failed to save score for {}", name))?;

    let mut output = format!(
        "Episode over ({}): {} in {} steps\n",
        summary.reason,
        format_score(record.score),
        record.steps
    );
    let standings = RankingEngine::new(store).query(Some(record.score));
    output.push_str(&render_summary(&standings));
    Ok(output)
}

/// Feed every step line into `tracker`; running out of input counts as quitting.
fn track(content: &str, mut tracker: EpisodeTracker) -> Result<EpisodeSummary> {
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (action, reward, game_over) =
            parse_step(line).with_context(|| format!("Bad step on line {}", index + 1))?;
        if let StepOutcome::Ended(_) = tracker.observe(action, reward, game_over) {
            break;
        }
    }

    tracker.quit();
    tracker
        .finish()
        .ok_or_else(|| anyhow!("Episode did not finish"))
}

fn parse_step(line: &str) -> Result<(Action, f64, bool)> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [action, reward, done] = fields[..] else {
        bail!("Expected action,reward,done but got {:?}", line);
    };

    let action = action
        .parse::<u8>()
        .ok()
        .and_then(Action::from_u8)
        .ok_or_else(|| anyhow!("Unknown action {:?}", action))?;
    let reward: f64 = reward
        .parse()
        .with_context(|| format!("Reward {:?} is not a number", reward))?;
    let game_over = match done {
        "1" | "true" => true,
        "0" | "false" => false,
        other => bail!("Done flag {:?} is not 0/1/true/false", other),
    };

    Ok((action, reward, game_over))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn empty_store(dir: &TempDir) -> ScoreStore {
        ScoreStore::new(dir.path().join("leaderboard.csv"))
    }

    #[test]
    fn test_replay_step_budget_saves_and_ranks() {
        let dir = TempDir::new().unwrap();
        let store = empty_store(&dir);
        store.save("Alice", 30.0, 500).unwrap();

        // Idle frames before FIRE do not count
        let session = "0,5,0\n1,0,0\n2,20,0\n3,25,0\n0,100,0\n";
        let output = replay(&store, "Bob", session, 3).unwrap();

        assert!(output.starts_with("Episode over (steps): 45.0 in 3 steps\n"));
        assert!(output.contains("Your rank: #1"));
        let records = store.load_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].player_name, "Bob");
        assert_eq!(records[1].score, 45.0);
        assert_eq!(records[1].steps, 3);
    }

    #[test]
    fn test_replay_game_over_in_free_play() {
        let dir = TempDir::new().unwrap();
        let store = empty_store(&dir);

        let session = "# serve\n1,0,0\n\n2,4,false\n3,1,true\n";
        let output = replay(&store, "Cara", session, -1).unwrap();

        assert!(output.starts_with("Episode over (game_over): 5.0 in 3 steps\n"));
        assert_eq!(store.load_records().unwrap()[0].steps, 3);
    }

    #[test]
    fn test_replay_truncated_input_is_not_saved() {
        let dir = TempDir::new().unwrap();
        let store = empty_store(&dir);

        let output = replay(&store, "Bob", "1,2,0\n2,3,0\n", 100).unwrap();

        assert_eq!(output, "Episode quit after 2 steps with 5.0, not saved\n");
        assert!(!store.path().exists());
    }

    #[test]
    fn test_replay_reports_bad_line() {
        let dir = TempDir::new().unwrap();
        let store = empty_store(&dir);

        let err = replay(&store, "Bob", "1,0,0\n7,1,0\n", 10).unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
        assert!(format!("{:#}", err).contains("Unknown action"));

        assert!(replay(&store, "Bob", "1,lots,0\n", 10).is_err());
        assert!(replay(&store, "Bob", "1,0\n", 10).is_err());
        assert!(replay(&store, "Bob", "1,0,maybe\n", 10).is_err());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_replay_rejects_non_finite_total() {
        let dir = TempDir::new().unwrap();
        let store = empty_store(&dir);

        assert!(replay(&store, "Bob", "1,inf,1\n", 10).is_err());
        assert!(replay(&store, "  ", "1,1,1\n", 10).is_err());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_run_reads_session_file() {
        let dir = TempDir::new().unwrap();
        let store = empty_store(&dir);
        let input = dir.path().join("session.txt");
        std::fs::write(&input, "1,3,1\n").unwrap();

        let output = run(&store, "Alice", &input, 0).unwrap();
        assert!(output.contains("Average score: 3.00"));

        assert!(run(&store, "Alice", &dir.path().join("missing.txt"), 0).is_err());
    }
}
