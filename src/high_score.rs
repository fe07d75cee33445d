//! Durable storage for the single best score.
//!
//! The file holds nothing but the ASCII decimal value.  Reading never fails
//! the caller: a missing, unreadable or corrupt file counts as 0.  Writing
//! failures are logged and swallowed; the in-memory high score stays correct
//! for the rest of the run.

use crate::error::{GameError, GameResult};
use bevy::log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persisted value, or 0 when there is none or it cannot be used.
    pub fn load(&self) -> u32 {
        match self.try_load() {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!("No high score at {}; starting from 0", self.path.display());
                0
            }
            Err(e) => {
                warn!("{e}; treating high score as 0");
                0
            }
        }
    }

    /// Overwrite the persisted value.  Failures are logged, never returned.
    pub fn save(&self, value: u32) {
        if let Err(e) = self.try_save(value) {
            warn!("{e}; high score kept in memory only");
        }
    }

    /// `Ok(None)` when the file does not exist.
    pub fn try_load(&self) -> GameResult<Option<u32>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(GameError::HighScoreRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let trimmed = contents.trim();
        trimmed
            .parse::<u32>()
            .map(Some)
            .map_err(|_| GameError::HighScoreParse {
                path: self.path.clone(),
                contents: trimmed.to_string(),
            })
    }

    pub fn try_save(&self, value: u32) -> GameResult<()> {
        fs::write(&self.path, value.to_string()).map_err(|source| GameError::HighScoreWrite {
            path: self.path.clone(),
            source,
        })
    }
}
