//! History command for listing stored runs.

use anyhow::{Context, Result};
use leaderboard_core::ScoreStore;
use leaderboard_core::storage::{TIMESTAMP_FORMAT, format_score};

pub fn run(store: &ScoreStore, name: Option<&str>) -> Result<String> {
    let records = store
        .load_records()
        .with_context(|| format!("Failed to read {}", store.path().display()))?;

    let mut output = String::new();
    for record in records
        .iter()
        .filter(|r| name.is_none_or(|n| r.player_name == n))
    {
        output.push_str(&format!(
            "{}  {:<20}{:>10}{:>8} steps\n",
            record.timestamp.format(TIMESTAMP_FORMAT),
            record.player_name,
            format_score(record.score),
            record.steps
        ));
    }

    if output.is_empty() {
        output.push_str("No runs recorded\n");
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_history_filters_by_name() {
        let dir = TempDir::new().unwrap();
        let store = ScoreStore::new(dir.path().join("leaderboard.csv"));
        store.save("Alice", 30.0, 500).unwrap();
        store.save("Bob", 45.0, 600).unwrap();
        store.save("Alice", 12.0, 100).unwrap();

        let output = run(&store, Some("Alice")).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("30.0"));
        assert!(lines[1].contains("12.0"));

        assert_eq!(run(&store, None).unwrap().lines().count(), 3);
    }

    #[test]
    fn test_history_empty() {
        let dir = TempDir::new().unwrap();
        let store = ScoreStore::new(dir.path().join("leaderboard.csv"));
        assert_eq!(run(&store, None).unwrap(), "No runs recorded\n");
    }
}
