//! Plain-text board rendering

use crate::ranking::{RankedEntry, Standings};
use crate::storage::format_score;

use super::format::ExportFormat;

const RANK_WIDTH: usize = 6;
const NAME_WIDTH: usize = 20;
const SCORE_WIDTH: usize = 10;

/// Fixed-width table exporter
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExporter;

impl ExportFormat for TextExporter {
    fn header(&self) -> Option<String> {
        Some(format!(
            "{:<RANK_WIDTH$}{:<NAME_WIDTH$}{:>SCORE_WIDTH$}",
            "Rank", "Name", "Score"
        ))
    }

    fn format_entry(&self, entry: &RankedEntry) -> String {
        format!(
            "{:<RANK_WIDTH$}{:<NAME_WIDTH$}{:>SCORE_WIDTH$}",
            format!("#{}", entry.rank),
            display_name(&entry.name),
            format_score(entry.score)
        )
    }

    fn footer(&self, entries: &[RankedEntry]) -> Option<String> {
        Some(match entries.len() {
            1 => "1 entry".to_string(),
            n => format!("{} entries", n),
        })
    }
}

/// Names are shown on one line; control characters become spaces.
fn display_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Game-over summary: average, top entries and the player's rank.
pub fn render_summary(standings: &Standings) -> String {
    if standings.is_empty() {
        return "No scores yet\n".to_string();
    }

    let mut output = format!("Average score: {:.2}\n", standings.average());
    output.push_str(&TextExporter.format_entries(standings.top()));
    if let Some(rank) = standings.player_rank() {
        output.push_str(&format!("Your rank: #{}\n", rank));
    }
    output
}
