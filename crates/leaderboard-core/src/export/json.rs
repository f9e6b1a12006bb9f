//! JSON export format implementation

use serde_json::{Value as JsonValue, json};

use crate::error::Result;
use crate::ranking::{RankedEntry, Standings};

use super::format::ExportFormat;

/// JSON exporter (one object per line, NDJSON format)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl ExportFormat for JsonExporter {
    fn header(&self) -> Option<String> {
        None // NDJSON doesn't need a header
    }

    fn format_entry(&self, entry: &RankedEntry) -> String {
        format_json_entry(entry).to_string()
    }
}

pub fn format_json_entry(entry: &RankedEntry) -> JsonValue {
    json!({
        "rank": entry.rank,
        "name": entry.name,
        "score": entry.score,
    })
}

/// Whole query result as a JSON object.
///
/// `NoData` renders as the neutral board: average 0, no entries, no rank.
pub fn standings_to_value(standings: &Standings) -> Result<JsonValue> {
    match standings.snapshot() {
        Some(snapshot) => Ok(serde_json::to_value(snapshot)?),
        None => Ok(json!({
            "average_score": 0.0,
            "ranked_entries": [],
            "queried_rank": null,
        })),
    }
}

pub fn standings_to_json(standings: &Standings) -> Result<String> {
    Ok(serde_json::to_string_pretty(&standings_to_value(standings)?)?)
}
