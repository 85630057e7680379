//! Word types: the round's root word, normalized submissions, and the
//! letter pool used for constructibility checks.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::InitError;

/// The word every submission must be spelled from.
///
/// Invariant: non-empty, lowercase alphabetic characters only.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RootWord(String);

impl RootWord {
    /// Create a root word, validating the invariant.
    ///
    /// Input is trimmed and lowercased first, so `" Silkworm\r"` is accepted
    /// as `silkworm`.
    pub fn new(word: impl AsRef<str>) -> Result<Self, InitError> {
        let word = word.as_ref().trim().to_lowercase();
        if word.is_empty() || !word.chars().all(char::is_alphabetic) {
            return Err(InitError::InvalidRoot { word });
        }
        Ok(Self(word))
    }

    /// Get the word as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters in the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Always false for a constructed root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A fresh, consumable copy of the root's letters.
    #[must_use]
    pub fn letter_pool(&self) -> LetterPool {
        LetterPool::new(&self.0)
    }
}

impl std::fmt::Display for RootWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RootWord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RootWord {
    type Error = InitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RootWord> for String {
    fn from(root: RootWord) -> Self {
        root.0
    }
}

/// A player submission after normalization (lowercased, trimmed).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Submission(String);

impl Submission {
    /// Normalize raw player input.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Get the normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when nothing is left after trimming.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Character count, which is also the score for an accepted word.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Whether this submission matches a stored word under the
    /// case-insensitive, whitespace-trimmed comparison.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.0 == other.trim().to_lowercase()
    }

    /// Consume the submission, returning the normalized text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Mutable multiset of root letters.
///
/// Most root words fit inline, so no heap allocation happens per check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterPool {
    letters: SmallVec<[char; 16]>,
}

impl LetterPool {
    /// Build a pool holding every character of `word`.
    #[must_use]
    pub fn new(word: &str) -> Self {
        Self {
            letters: word.chars().collect(),
        }
    }

    /// Remove one occurrence of `letter`. Returns false if none remains.
    pub fn take(&mut self, letter: char) -> bool {
        match self.letters.iter().position(|&c| c == letter) {
            Some(pos) => {
                self.letters.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Consume every character of `word` in order, stopping at the first
    /// letter the pool cannot supply.
    ///
    /// Returns the offending character on failure.
    pub fn consume(&mut self, word: &str) -> Result<(), char> {
        for letter in word.chars() {
            if !self.take(letter) {
                return Err(letter);
            }
        }
        Ok(())
    }

    /// Letters remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
