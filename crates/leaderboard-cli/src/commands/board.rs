//! Board command for showing leaderboard statistics.

use anyhow::Result;
use leaderboard_core::storage::format_score;
use leaderboard_core::{
    RankingEngine, ScoreStore, format_json_entry, render_summary, standings_to_value,
};
use serde_json::Value as JsonValue;

use crate::cli::OutputFormat;

pub fn run(
    store: &ScoreStore,
    score: Option<f64>,
    player: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let engine = RankingEngine::new(store);
    let standings = engine.query(score);
    let standing = player.and_then(|name| engine.standing_of(name));

    match format {
        OutputFormat::Text => {
            let mut output = render_summary(&standings);
            if let Some(score) = score
                && !standings.is_empty()
                && standings.player_rank().is_none()
            {
                output.push_str(&format!(
                    "Score {} is not on the board\n",
                    format_score(score)
                ));
            }
            if let Some(name) = player {
                match &standing {
                    Some(entry) => output.push_str(&format!(
                        "Best run for {}: #{} with {}\n",
                        name,
                        entry.rank,
                        format_score(entry.score)
                    )),
                    None => output.push_str(&format!("No runs for {}\n", name)),
                }
            }
            Ok(output)
        }
        OutputFormat::Json => {
            let mut value = standings_to_value(&standings)?;
            if player.is_some()
                && let JsonValue::Object(map) = &mut value
            {
                let entry = standing.as_ref().map_or(JsonValue::Null, format_json_entry);
                map.insert("player_standing".to_string(), entry);
            }
            Ok(format!("{}\n", serde_json::to_string_pretty(&value)?))
        }
    }
}
