//! Score storage.
//!
//! Finished runs are appended to a single CSV file:
//!
//! - **Records**: one row per run (`Timestamp,Name,Score,Steps`)
//! - **Store**: lazy creation, append-only writes, tolerant reads
//! - **Format**: RFC 4180 quoting and header-driven parsing
//!
//! Rows are kept in write order. Nothing is ever rewritten or removed.

mod format;
mod record;
mod store;

pub use format::{
    LINE_TERMINATOR, TIMESTAMP_FORMAT, escape_field, format_csv_header, format_csv_row,
    format_score, parse_rows, parse_score, parse_score_entries, parse_score_records,
    parse_timestamp,
};
pub use record::{ScoreEntry, ScoreRecord};
pub use store::{ScoreRead, ScoreStore};
