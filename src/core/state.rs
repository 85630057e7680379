//! Round state: root word, used words, and score.
//!
//! ## Invariants
//!
//! - Used words are stored most-recent-first.
//! - No two used words are equal after trimming and lowercasing.
//! - Score only grows, by the length of each accepted word.
//!
//! Mutation goes through [`RoundState::record_word`], which only the round
//! session calls after a submission has passed validation.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::word::{RootWord, Submission};

/// State of one round.
///
/// Uses an `im` persistent vector so snapshots clone in O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    root: RootWord,
    used_words: Vector<String>,
    score: u32,
}

impl RoundState {
    /// Fresh state for a root word: no used words, score 0.
    #[must_use]
    pub fn new(root: RootWord) -> Self {
        Self {
            root,
            used_words: Vector::new(),
            score: 0,
        }
    }

    /// The round's root word.
    #[must_use]
    pub fn root(&self) -> &RootWord {
        &self.root
    }

    /// Accepted words, most recent first.
    #[must_use]
    pub fn used_words(&self) -> &Vector<String> {
        &self.used_words
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of accepted words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.used_words.len()
    }

    /// Whether a submission was already accepted this round.
    #[must_use]
    pub fn is_used(&self, submission: &Submission) -> bool {
        self.used_words.iter().any(|w| submission.matches(w))
    }

    /// Used words paired with their letter counts, most recent first.
    pub fn entries(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.used_words
            .iter()
            .map(|w| (w.as_str(), w.chars().count()))
    }

    /// Prepend an accepted word and add its score.
    pub(crate) fn record_word(&mut self, word: String, score_delta: u32) {
        debug_assert!(
            !self.used_words.iter().any(|w| *w == word),
            "word recorded twice in one round"
        );
        self.used_words.push_front(word);
        self.score = self.score.saturating_add(score_delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn silkworm() -> RoundState {
        RoundState::new(RootWord::new("silkworm").unwrap())
    }

    #[test]
    fn test_new_state() {
        let state = silkworm();
        assert_eq!(state.root().as_str(), "silkworm");
        assert!(state.used_words().is_empty());
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_record_is_most_recent_first() {
        let mut state = silkworm();
        state.record_word("worm".to_string(), 4);
        state.record_word("silk".to_string(), 4);
        state.record_word("milk".to_string(), 4);

        let words: Vec<_> = state.used_words().iter().cloned().collect();
        assert_eq!(words, vec!["milk", "silk", "worm"]);
        assert_eq!(state.score(), 12);
        assert_eq!(state.word_count(), 3);
    }

    #[test]
    fn test_is_used_normalizes() {
        let mut state = silkworm();
        state.record_word("worm".to_string(), 4);

        assert!(state.is_used(&Submission::normalize("Worm ")));
        assert!(!state.is_used(&Submission::normalize("worms")));
    }

    #[test]
    fn test_entries() {
        let mut state = silkworm();
        state.record_word("or".to_string(), 2);
        state.record_word("silk".to_string(), 4);

        let entries: Vec<_> = state.entries().collect();
        assert_eq!(entries, vec![("silk", 4), ("or", 2)]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = silkworm();
        state.record_word("worm".to_string(), 4);

        let snapshot = state.clone();
        state.record_word("silk".to_string(), 4);

        assert_eq!(snapshot.word_count(), 1);
        assert_eq!(snapshot.score(), 4);
        assert_eq!(state.word_count(), 2);
    }
}
