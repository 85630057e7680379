//! Serializable capture of a round.
//!
//! Snapshots let an embedding host suspend a round in memory (or hand it
//! across an FFI boundary) and resume it later with the same root, words,
//! score, and root-selection sequence.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::error::SnapshotError;
use crate::core::rng::WordRngState;
use crate::core::state::RoundState;
use crate::core::word::Submission;
use crate::rules::is_possible;

/// Everything needed to resume a round except the word source and the
/// dictionary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub state: RoundState,
    pub rng: WordRngState,
    pub language: String,
}

impl RoundSnapshot {
    /// Check that the snapshot describes a state a round could have reached.
    ///
    /// - the language is not blank
    /// - every used word is non-empty and already normalized
    /// - no word appears twice
    /// - every word can be spelled from the root
    /// - the score is the sum of the word lengths
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.language.trim().is_empty() {
            return Err(SnapshotError::new("language is empty"));
        }

        let root = self.state.root();
        let mut seen = FxHashSet::default();
        let mut expected_score: u32 = 0;

        for word in self.state.used_words() {
            let normalized = Submission::normalize(word);
            if normalized.is_empty() || normalized.as_str() != word.as_str() {
                return Err(SnapshotError::new(format!(
                    "used word {word:?} is not normalized"
                )));
            }
            if !seen.insert(word.as_str()) {
                return Err(SnapshotError::new(format!("used word {word:?} appears twice")));
            }
            if !is_possible(&normalized, root) {
                return Err(SnapshotError::new(format!(
                    "used word {word:?} cannot be spelled from {root:?}",
                    root = root.as_str()
                )));
            }
            let len = u32::try_from(normalized.char_len()).unwrap_or(u32::MAX);
            expected_score = expected_score.saturating_add(len);
        }

        if self.state.score() != expected_score {
            return Err(SnapshotError::new(format!(
                "score {} does not match used words (expected {})",
                self.state.score(),
                expected_score
            )));
        }

        Ok(())
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from [`RoundSnapshot::to_bytes`] output. The decoded snapshot
    /// is validated.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)?;
        snapshot.checked()
    }

    /// JSON encoding, for hosts that store text.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.checked()
    }

    fn checked(self) -> Result<Self, SnapshotError> {
        if let Err(err) = self.validate() {
            warn!(error = %err, "Rejected round snapshot");
            return Err(err);
        }
        Ok(self)
    }
}
