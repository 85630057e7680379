//! Error types for round initialization, configuration, and snapshots.
//!
//! Rejections of player submissions are not errors in this sense; see
//! [`crate::rules::Rejection`].

use derive_more::{Display, Error};
use tracing::{error, instrument};

/// A round could not be initialized.
///
/// Without a usable root word there is no round to play, so these are
/// surfaced to the caller instead of being recovered from internally.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InitError {
    /// The word list resource could not be read.
    #[display("word list unavailable at {path}: {reason}")]
    WordListUnavailable { path: String, reason: String },

    /// The word list contained no candidate words.
    #[display("word list contains no candidate words")]
    EmptyWordList,

    /// A non-blank line of the word list is not a valid root word.
    #[display("invalid candidate {word:?} on line {line} of word list")]
    InvalidCandidate { line: usize, word: String },

    /// A root word was not lowercase alphabetic, or was empty.
    #[display("invalid root word {word:?}")]
    InvalidRoot {
        #[error(not(source))]
        word: String,
    },

    /// Configuration could not be loaded.
    #[display("{_0}")]
    Config(ConfigError),
}

impl From<ConfigError> for InitError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        let message = message.into();
        error!(error_message = %message, "Config error created");
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// A round snapshot could not be encoded or decoded.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Snapshot error: {}", message)]
pub struct SnapshotError {
    /// Error message.
    #[error(not(source))]
    pub message: String,
}

impl SnapshotError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<bincode::Error> for SnapshotError {
    fn from(err: bincode::Error) -> Self {
        Self::new(format!("bincode: {}", err))
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("json: {}", err))
    }
}
