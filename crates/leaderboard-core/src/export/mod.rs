//! Board export formats.
//!
//! - **Text**: fixed-width table and the game-over summary
//! - **JSON**: NDJSON rows or one document per query

mod format;
mod json;
mod text;

pub use format::ExportFormat;
pub use json::{JsonExporter, format_json_entry, standings_to_json, standings_to_value};
pub use text::{TextExporter, render_summary};
