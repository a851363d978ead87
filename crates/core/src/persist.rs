//! Persistence seam for the high score
//!
//! The engine only needs to read one integer at session start and rewrite it
//! when a new high score is reached. Stores distinguish "no prior score"
//! (`Ok(None)`) from a store that exists but cannot be used (`Err`); neither
//! case is fatal to a session.

use derive_more::{Display, Error};
use tracing::warn;

/// Failure reported by a [`HighScoreStore`]
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum StoreError {
    #[display("high score store {path} is unreadable: {message}")]
    Unreadable { path: String, message: String },
    #[display("high score store {path} is corrupt: {message}")]
    Corrupt { path: String, message: String },
    #[display("failed to write high score to {path}: {message}")]
    WriteFailed { path: String, message: String },
}

/// Durable home of the all-time high score
pub trait HighScoreStore {
    /// Read the stored high score; `Ok(None)` when nothing has been stored yet
    fn load(&self) -> Result<Option<u32>, StoreError>;

    /// Replace the stored high score
    fn save(&mut self, high_score: u32) -> Result<(), StoreError>;
}

/// Load a high score, treating any failure as "no prior score"
pub fn load_or_default<S: HighScoreStore + ?Sized>(store: &S) -> u32 {
    match store.load() {
        Ok(Some(score)) => score,
        Ok(None) => 0,
        Err(err) => {
            warn!(error = %err, "ignoring unusable high score store");
            0
        }
    }
}

/// Process-local store, for headless play and tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    high_score: Option<u32>,
    writes: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_high_score(high_score: u32) -> Self {
        Self {
            high_score: Some(high_score),
            writes: 0,
        }
    }

    pub fn high_score(&self) -> Option<u32> {
        self.high_score
    }

    /// Number of successful saves
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<Option<u32>, StoreError> {
        Ok(self.high_score)
    }

    fn save(&mut self, high_score: u32) -> Result<(), StoreError> {
        self.high_score = Some(high_score);
        self.writes += 1;
        Ok(())
    }
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn load(&self) -> Result<Option<u32>, StoreError> {
        (**self).load()
    }

    fn save(&mut self, high_score: u32) -> Result<(), StoreError> {
        (**self).save(high_score)
    }
}
