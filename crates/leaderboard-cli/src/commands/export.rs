//! Export command for dumping the full ranked board.

use std::path::Path;

use anyhow::{Context, Result};
use leaderboard_core::{ExportFormat, JsonExporter, RankingEngine, ScoreStore, TextExporter};
use tracing::info;

use crate::cli::OutputFormat;

pub fn render(store: &ScoreStore, format: OutputFormat) -> String {
    let ranked = RankingEngine::new(store).ranked_all();
    match format {
        OutputFormat::Text => TextExporter.format_entries(&ranked),
        OutputFormat::Json => JsonExporter.format_entries(&ranked),
    }
}

/// Write the export to `output`, or return it for stdout.
pub fn run(store: &ScoreStore, output: Option<&Path>, format: OutputFormat) -> Result<String> {
    let content = render(store, format);

    let Some(path) = output else {
        return Ok(content);
    };
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write export to {}", path.display()))?;
    info!("Exported to: {}", path.display());
    Ok(String::new())
}
