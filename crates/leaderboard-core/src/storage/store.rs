use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::episode::EpisodeSummary;
use crate::error::{Error, Result};

use super::format::{
    LINE_TERMINATOR, format_csv_header, format_csv_row, format_score, parse_score_entries,
    parse_score_records,
};
use super::record::{ScoreEntry, ScoreRecord};

/// Outcome of reading the leaderboard for ranking.
///
/// Read problems are never errors here: the board degrades to "no data".
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreRead {
    /// The leaderboard file does not exist yet
    Missing,
    /// The file exists but could not be read
    Unreadable,
    /// Every row with a parseable score, in write order
    Rows(Vec<ScoreEntry>),
}

/// Append-only CSV log of finished runs.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.leaderboard_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a run stamped with the current local time.
    pub fn save(&self, player_name: &str, score: f64, steps: u64) -> Result<ScoreRecord> {
        self.save_at(player_name, score, steps, Local::now().naive_local())
    }

    pub fn save_at(
        &self,
        player_name: &str,
        score: f64,
        steps: u64,
        timestamp: NaiveDateTime,
    ) -> Result<ScoreRecord> {
        let record = ScoreRecord::new(timestamp, player_name, score, steps);
        self.append(&record)?;
        info!(
            "Score saved for {}: {}",
            record.player_name,
            format_score(record.score)
        );
        Ok(record)
    }

    /// Record a finished episode under `player_name`.
    pub fn save_episode(
        &self,
        player_name: &str,
        summary: &EpisodeSummary,
    ) -> Result<ScoreRecord> {
        debug!("Episode ended ({}) after {} steps", summary.reason, summary.steps);
        self.save(player_name, summary.score, summary.steps)
    }

    fn append(&self, record: &ScoreRecord) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| Error::storage(parent, e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::storage(&self.path, e))?;

        let len = file
            .metadata()
            .map_err(|e| Error::storage(&self.path, e))?
            .len();

        let mut buffer = String::new();
        if len == 0 {
            // Zero-length files get the header too
            debug!("Creating leaderboard at {}", self.path.display());
            buffer.push_str(&format_csv_header());
            buffer.push_str(LINE_TERMINATOR);
        } else if !ends_with_line_break(&mut file)
            .map_err(|e| Error::storage(&self.path, e))?
        {
            warn!(
                "Leaderboard {} lacks a trailing line break, closing the last row",
                self.path.display()
            );
            buffer.push_str(LINE_TERMINATOR);
        }
        buffer.push_str(&format_csv_row(record));
        buffer.push_str(LINE_TERMINATOR);

        file.write_all(buffer.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| Error::storage(&self.path, e))
    }

    fn read_content(&self) -> std::io::Result<String> {
        let bytes = fs::read(&self.path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Read every (name, score) pair for ranking.
    pub fn load_scores(&self) -> ScoreRead {
        match self.read_content() {
            Ok(content) => ScoreRead::Rows(parse_score_entries(&content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No leaderboard at {}", self.path.display());
                ScoreRead::Missing
            }
            Err(e) => {
                warn!("Error reading leaderboard {}: {}", self.path.display(), e);
                ScoreRead::Unreadable
            }
        }
    }

    /// Full typed history in write order. A missing file is an empty history.
    pub fn load_records(&self) -> Result<Vec<ScoreRecord>> {
        match self.read_content() {
            Ok(content) => Ok(parse_score_records(&content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(Error::Io(e)),
        }
    }
}

fn ends_with_line_break(file: &mut fs::File) -> std::io::Result<bool> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(matches!(last[0], b'\n' | b'\r'))
}
