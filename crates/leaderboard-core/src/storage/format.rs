//! CSV layout of the leaderboard file.
//!
//! Quoting follows RFC 4180: fields containing a comma, quote or line break
//! are wrapped in double quotes and embedded quotes are doubled.

use std::borrow::Cow;

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use super::record::{ScoreEntry, ScoreRecord};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const LINE_TERMINATOR: &str = "\r\n";

const COL_TIMESTAMP: &str = "Timestamp";
const COL_NAME: &str = "Name";
const COL_SCORE: &str = "Score";
const COL_STEPS: &str = "Steps";

pub fn format_csv_header() -> String {
    [COL_TIMESTAMP, COL_NAME, COL_SCORE, COL_STEPS].join(",")
}

pub fn format_csv_row(record: &ScoreRecord) -> String {
    let timestamp = record.timestamp.format(TIMESTAMP_FORMAT).to_string();
    let score = format_score(record.score);
    let steps = record.steps.to_string();

    [
        escape_field(&timestamp),
        escape_field(&record.player_name),
        escape_field(&score),
        escape_field(&steps),
    ]
    .join(",")
}

/// Shortest round-trip form, keeping the decimal point on integral values
/// (`30.0`, not `30`).
pub fn format_score(score: f64) -> String {
    format!("{:?}", score)
}

pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Parse a score cell. Surrounding whitespace is tolerated, NaN is not.
pub fn parse_score(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|s| !s.is_nan())
}

pub fn parse_timestamp(field: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(field.trim(), TIMESTAMP_FORMAT).ok()
}

/// Split CSV text into rows of unescaped fields. Blank lines are dropped.
pub fn parse_rows(content: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => row.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => finish_row(&mut rows, &mut row, &mut field),
            _ => field.push(c),
        }
    }
    finish_row(&mut rows, &mut row, &mut field);

    rows
}

fn finish_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>, field: &mut String) {
    if row.is_empty() && field.is_empty() {
        return;
    }
    row.push(std::mem::take(field));
    rows.push(std::mem::take(row));
}

/// Column positions resolved from the header row
struct HeaderIndex {
    timestamp: Option<usize>,
    name: usize,
    score: usize,
    steps: Option<usize>,
}

impl HeaderIndex {
    fn from_header(header: &[String]) -> Option<Self> {
        let position = |column: &str| header.iter().position(|h| h == column);
        Some(Self {
            timestamp: position(COL_TIMESTAMP),
            name: position(COL_NAME)?,
            score: position(COL_SCORE)?,
            steps: position(COL_STEPS),
        })
    }
}

fn split_header(content: &str) -> Option<(HeaderIndex, Vec<Vec<String>>)> {
    let mut rows = parse_rows(content);
    if rows.is_empty() {
        return None;
    }
    let header = rows.remove(0);
    match HeaderIndex::from_header(&header) {
        Some(index) => Some((index, rows)),
        None => {
            warn!(
                "Leaderboard header lacks {} or {} column: {:?}",
                COL_NAME, COL_SCORE, header
            );
            None
        }
    }
}

/// Extract every (name, score) pair, skipping rows whose score is not a number.
pub fn parse_score_entries(content: &str) -> Vec<ScoreEntry> {
    let Some((index, rows)) = split_header(content) else {
        return Vec::new();
    };

    let mut entries = Vec::with_capacity(rows.len());
    for (line, row) in rows.iter().enumerate() {
        let name = row.get(index.name);
        let score = row.get(index.score).and_then(|s| parse_score(s));
        match (name, score) {
            (Some(name), Some(score)) => entries.push(ScoreEntry::new(name.as_str(), score)),
            _ => debug!("Skipping malformed leaderboard row {}: {:?}", line + 1, row),
        }
    }
    entries
}

/// Extract fully typed records. Rows missing any typed field are skipped.
pub fn parse_score_records(content: &str) -> Vec<ScoreRecord> {
    let Some((index, rows)) = split_header(content) else {
        return Vec::new();
    };
    let (Some(ts_col), Some(steps_col)) = (index.timestamp, index.steps) else {
        warn!(
            "Leaderboard header lacks {} or {} column",
            COL_TIMESTAMP, COL_STEPS
        );
        return Vec::new();
    };

    rows.iter()
        .enumerate()
        .filter_map(|(line, row)| {
            let record = parse_record(row, &index, ts_col, steps_col);
            if record.is_none() {
                debug!("Skipping malformed leaderboard row {}: {:?}", line + 1, row);
            }
            record
        })
        .collect()
}

fn parse_record(
    row: &[String],
    index: &HeaderIndex,
    ts_col: usize,
    steps_col: usize,
) -> Option<ScoreRecord> {
    let timestamp = parse_timestamp(row.get(ts_col)?)?;
    let name = row.get(index.name)?;
    let score = parse_score(row.get(index.score)?)?;
    let steps = row.get(steps_col)?.trim().parse::<u64>().ok()?;
    Some(ScoreRecord::new(timestamp, name.as_str(), score, steps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 30)
            .unwrap()
            .and_hms_opt(12, 0, 5)
            .unwrap()
    }

    #[test]
    fn test_format_csv_header() {
        assert_eq!(format_csv_header(), "Timestamp,Name,Score,Steps");
    }

    #[test]
    fn test_format_csv_row() {
        let record = ScoreRecord::new(timestamp(), "Alice", 30.0, 500);
        assert_eq!(format_csv_row(&record), "2025-01-30 12:00:05,Alice,30.0,500");
    }

    #[test]
    fn test_format_csv_row_quotes_special_names() {
        let record = ScoreRecord::new(timestamp(), "Smith, \"Ace\"", 12.5, 10);
        assert_eq!(
            format_csv_row(&record),
            "2025-01-30 12:00:05,\"Smith, \"\"Ace\"\"\",12.5,10"
        );
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(30.0), "30.0");
        assert_eq!(format_score(45.5), "45.5");
        assert_eq!(format_score(-3.0), "-3.0");
    }

    #[test]
    fn test_escape_field_plain_is_borrowed() {
        assert!(matches!(escape_field("Alice"), Cow::Borrowed("Alice")));
        assert_eq!(escape_field("a\nb"), "\"a\nb\"");
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("30.0"), Some(30.0));
        assert_eq!(parse_score(" 45 "), Some(45.0));
        assert_eq!(parse_score("1e3"), Some(1000.0));
        assert_eq!(parse_score("abc"), None);
        assert_eq!(parse_score(""), None);
        assert_eq!(parse_score("NaN"), None);
    }

    #[test]
    fn test_parse_rows_handles_quotes_and_line_endings() {
        let content = "a,b\r\n\"x, y\",\"multi\nline\"\n\n\"say \"\"hi\"\"\",z";
        let rows = parse_rows(content);
        assert_eq!(
            rows,
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["x, y".to_string(), "multi\nline".to_string()],
                vec!["say \"hi\"".to_string(), "z".to_string()],
            ]
        );
    }

    #[test]
    fn test_parse_rows_keeps_empty_fields() {
        let rows = parse_rows("a,,c\n");
        assert_eq!(rows, vec![vec!["a".to_string(), String::new(), "c".to_string()]]);
    }

    #[test]
    fn test_parse_score_entries_skips_malformed_rows() {
        let content = "Timestamp,Name,Score,Steps\n\
                       2025-01-30 12:00:00,Alice,30.0,500\n\
                       2025-01-30 12:01:00,Bob,oops,600\n\
                       2025-01-30 12:02:00,Cara\n\
                       2025-01-30 12:03:00,Dan,12,100\n";
        let entries = parse_score_entries(content);
        assert_eq!(
            entries,
            vec![ScoreEntry::new("Alice", 30.0), ScoreEntry::new("Dan", 12.0)]
        );
    }

    #[test]
    fn test_parse_score_entries_follows_header_order() {
        let content = "Score,Name\n7.5,Eve\n";
        assert_eq!(parse_score_entries(content), vec![ScoreEntry::new("Eve", 7.5)]);
    }

    #[test]
    fn test_parse_score_entries_without_score_column() {
        assert!(parse_score_entries("Timestamp,Name\nx,Alice\n").is_empty());
        assert!(parse_score_entries("").is_empty());
        assert!(parse_score_entries("Timestamp,Name,Score,Steps\r\n").is_empty());
    }

    #[test]
    fn test_parse_score_records() {
        let first = ScoreRecord::new(timestamp(), "Smith, Jo", 30.0, 500);
        let content = format!(
            "{}\r\n{}\r\nbad-date,Bob,1.0,2\r\n",
            format_csv_header(),
            format_csv_row(&first)
        );
        assert_eq!(parse_score_records(&content), vec![first]);
    }
}
