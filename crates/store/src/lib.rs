//! Durable high-score store
//!
//! Persists the all-time high score as a single JSON object:
//!
//! ```text
//! {"high_score": 1200}
//! ```
//!
//! A missing file means "no prior score". A file that cannot be read, is not
//! valid JSON, lacks the `high_score` key or holds a non-integer value is
//! reported as a [`StoreError`]; sessions log it and start from 0.
//!
//! # Environment Variables
//!
//! - `GRIDBLOCK_HIGH_SCORE_PATH`: location of the file (default: `high_score.json`
//!   in the working directory)

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use gridblock_core::persist::{HighScoreStore, StoreError};

/// Default file name, relative to the working directory
pub const DEFAULT_HIGH_SCORE_FILE: &str = "high_score.json";

/// Environment variable overriding the file location
pub const HIGH_SCORE_PATH_ENV: &str = "GRIDBLOCK_HIGH_SCORE_PATH";

/// On-disk record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
}

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_HIGH_SCORE_FILE),
        }
    }
}

impl StoreConfig {
    /// Create from environment variables, falling back to the defaults
    pub fn from_env() -> Self {
        Self::from_path_var(std::env::var(HIGH_SCORE_PATH_ENV).ok())
    }

    fn from_path_var(value: Option<String>) -> Self {
        value
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(|path| Self {
                path: PathBuf::from(path),
            })
            .unwrap_or_default()
    }
}

/// High score kept in a JSON file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::from_config(&StoreConfig::default())
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> Result<Option<u32>, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no high score file yet");
                return Ok(None);
            }
            Err(e) => {
                return Err(StoreError::Unreadable {
                    path: self.display_path(),
                    message: e.to_string(),
                })
            }
        };

        let record: HighScoreRecord =
            serde_json::from_str(&data).map_err(|e| StoreError::Corrupt {
                path: self.display_path(),
                message: e.to_string(),
            })?;
        debug!(path = %self.path.display(), high_score = record.high_score, "loaded high score");
        Ok(Some(record.high_score))
    }

    fn save(&mut self, high_score: u32) -> Result<(), StoreError> {
        let write_failed = |message: String| StoreError::WriteFailed {
            path: self.display_path(),
            message,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| write_failed(e.to_string()))?;
        }
        let data = serde_json::to_string(&HighScoreRecord { high_score })
            .map_err(|e| write_failed(e.to_string()))?;
        fs::write(&self.path, data).map_err(|e| write_failed(e.to_string()))?;

        debug!(path = %self.path.display(), high_score, "saved high score");
        Ok(())
    }
}
