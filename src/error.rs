//! Game-specific error types.
//!
//! None of these are fatal.  Storage and config failures are recovered where
//! they happen (default high score, default config) and only logged, so the
//! player never sees them.  They exist so the inner helpers can use `?` and the
//! recovery point can log one precise message.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error enum for CubeBlast.
#[derive(Debug)]
pub enum GameError {
    /// The high-score file exists but could not be read.
    HighScoreRead { path: PathBuf, source: io::Error },

    /// The high-score file was read but does not hold a non-negative integer.
    HighScoreParse {
        path: PathBuf,
        /// The trimmed file contents that failed to parse.
        contents: String,
    },

    /// Writing the high-score file failed.
    HighScoreWrite { path: PathBuf, source: io::Error },

    /// `assets/game.toml` could not be decoded.
    Config { message: String },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::HighScoreRead { path, source } => {
                write!(f, "failed to read high score from {}: {}", path.display(), source)
            }
            GameError::HighScoreParse { path, contents } => write!(
                f,
                "high score file {} holds {:?}, not a non-negative integer",
                path.display(),
                contents
            ),
            GameError::HighScoreWrite { path, source } => {
                write!(f, "failed to write high score to {}: {}", path.display(), source)
            }
            GameError::Config { message } => write!(f, "invalid game config: {}", message),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::HighScoreRead { source, .. } | GameError::HighScoreWrite { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;
