//! Core engine types: words, round state, RNG, configuration, errors.
//!
//! These building blocks carry no dictionary or validation logic; the
//! `rules` module layers the submission checks on top of them.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;
pub mod word;

pub use config::{RoundConfig, DEFAULT_LANGUAGE};
pub use error::{ConfigError, InitError, SnapshotError};
pub use rng::{WordRng, WordRngState};
pub use state::RoundState;
pub use word::{LetterPool, RootWord, Submission};
