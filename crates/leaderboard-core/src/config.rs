//! Leaderboard configuration.
//!
//! The storage location is an explicit value handed to the score store and
//! ranking engine, so every caller (and every test) can point at its own file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default directory holding the leaderboard file
pub const DEFAULT_SCORES_DIR: &str = "scores";
/// Default leaderboard file name
pub const DEFAULT_FILE_NAME: &str = "leaderboard.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scores_dir: PathBuf,
    pub file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scores_dir: PathBuf::from(DEFAULT_SCORES_DIR),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file. Missing keys fall back to defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.file_name.trim().is_empty() {
            return Err(Error::Config("file_name must not be empty".to_string()));
        }
        if Path::new(&self.file_name).components().count() != 1 {
            return Err(Error::Config(format!(
                "file_name must be a bare file name, got {:?}",
                self.file_name
            )));
        }
        Ok(())
    }

    /// Full path of the leaderboard file
    pub fn leaderboard_path(&self) -> PathBuf {
        self.scores_dir.join(&self.file_name)
    }
}
