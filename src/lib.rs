//! # word-finder
//!
//! Rules engine for a single-screen word game: the player is shown a random
//! root word and submits words spelled from its letters.
//!
//! ## Rules
//!
//! A submission is normalized (trimmed, lowercased) and must be, in order:
//!
//! 1. **Original**: not already accepted this round.
//! 2. **Possible**: spelled from the root's letters, each letter used at
//!    most as often as it appears in the root.
//! 3. **Real**: recognized by the injected dictionary.
//!
//! Accepted words score their length. Blank input is ignored.
//!
//! ## Modules
//!
//! - `core`: Root words, submissions, round state, RNG, configuration, errors
//! - `source`: Candidate root words and random root selection
//! - `dictionary`: The `Dictionary` capability and in-memory implementations
//! - `rules`: Submission checks, `RoundValidator`, rejection alerts
//! - `round`: `Round` sessions and snapshots
//!
//! ## Example
//!
//! ```
//! use word_finder::{Outcome, Round, RoundConfig, WordSetDictionary, WordSource};
//!
//! let source = WordSource::parse("silkworm").unwrap();
//! let dict = WordSetDictionary::from_words("en", ["worm", "silk", "milk"]);
//! let mut round = Round::with_source(&RoundConfig::new(), source, dict).unwrap();
//!
//! assert!(round.submit("worm").is_accepted());
//!
//! if let Outcome::Rejected(rejection) = round.submit("zzz") {
//!     assert_eq!(rejection.alert().title, "Word not possible");
//! }
//! assert_eq!(round.score(), 4);
//! ```

pub mod core;
pub mod dictionary;
pub mod round;
pub mod rules;
pub mod source;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, InitError, LetterPool, RootWord, RoundConfig, RoundState, SnapshotError,
    Submission, WordRng, WordRngState,
};

pub use crate::dictionary::{AcceptAll, Dictionary, FnDictionary, WordSetDictionary};

pub use crate::rules::{Accepted, Alert, Evaluation, Rejection, RoundValidator};

pub use crate::round::{Outcome, Round, RoundSnapshot};

pub use crate::source::WordSource;
