//! Submission validation and scoring.
//!
//! ## Check order
//!
//! 1. Originality (`AlreadyUsed`)
//! 2. Constructibility (`NotPossible`)
//! 3. Realness (`NotRecognized`)
//!
//! The first failing check decides the rejection; later checks are never
//! run, so the dictionary is only consulted for words that could be played.
//!
//! Two behaviors are deliberate and covered by tests: the root word itself
//! is an acceptable submission, and there is no minimum length.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::checks::{is_original, is_possible, is_real};
use super::rejection::Rejection;
use crate::core::config::DEFAULT_LANGUAGE;
use crate::core::state::RoundState;
use crate::core::word::{RootWord, Submission};
use crate::dictionary::Dictionary;

/// An accepted submission and the score it earns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accepted {
    /// The normalized word.
    pub word: String,
    /// Points to add: the word's character count.
    pub score_delta: u32,
}

/// Result of evaluating raw input.
///
/// - `Ok(None)`: nothing left after normalization; ignore silently.
/// - `Ok(Some(accepted))`: the word may be recorded.
/// - `Err(rejection)`: show the rejection's alert.
pub type Evaluation = Result<Option<Accepted>, Rejection>;

/// Decides whether submissions are acceptable.
///
/// Holds the injected dictionary and the language it is queried in. The
/// validator is stateless across calls; round state is passed in.
///
/// ## Example
///
/// ```
/// use word_finder::core::RootWord;
/// use word_finder::dictionary::WordSetDictionary;
/// use word_finder::rules::{Rejection, RoundValidator};
///
/// let validator = RoundValidator::new(WordSetDictionary::from_words("en", ["worm"]));
/// let root = RootWord::new("silkworm").unwrap();
/// let used: Vec<String> = vec![];
///
/// let accepted = validator.evaluate("Worm", &root, &used).unwrap().unwrap();
/// assert_eq!(accepted.score_delta, 4);
///
/// assert!(matches!(
///     validator.evaluate("zzz", &root, &used),
///     Err(Rejection::NotPossible { .. })
/// ));
/// ```
#[derive(Clone, Debug)]
pub struct RoundValidator<D> {
    dictionary: D,
    language: String,
}

impl<D: Dictionary> RoundValidator<D> {
    /// Create a validator querying `dictionary` in the default language.
    pub fn new(dictionary: D) -> Self {
        Self::with_language(dictionary, DEFAULT_LANGUAGE)
    }

    /// Create a validator querying `dictionary` in `language`.
    pub fn with_language(dictionary: D, language: impl Into<String>) -> Self {
        Self {
            dictionary,
            language: language.into(),
        }
    }

    /// The dictionary language.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The injected dictionary.
    #[must_use]
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Evaluate raw input against a root and the words used so far.
    #[instrument(skip(self, root, used), fields(root = %root))]
    pub fn evaluate<I, S>(&self, raw: &str, root: &RootWord, used: I) -> Evaluation
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let submission = Submission::normalize(raw);
        if submission.is_empty() {
            debug!("Empty submission ignored");
            return Ok(None);
        }

        if !is_original(&submission, used) {
            debug!(word = %submission, "Rejected: already used");
            return Err(Rejection::AlreadyUsed);
        }

        if !is_possible(&submission, root) {
            debug!(word = %submission, "Rejected: not possible");
            return Err(Rejection::NotPossible {
                root: root.to_string(),
            });
        }

        if !is_real(&submission, &self.dictionary, &self.language) {
            debug!(word = %submission, "Rejected: not recognized");
            return Err(Rejection::NotRecognized);
        }

        let score_delta = u32::try_from(submission.char_len()).unwrap_or(u32::MAX);
        debug!(word = %submission, score_delta, "Accepted");
        Ok(Some(Accepted {
            word: submission.into_string(),
            score_delta,
        }))
    }

    /// Evaluate raw input against a round's current state.
    pub fn evaluate_in(&self, raw: &str, state: &RoundState) -> Evaluation {
        self.evaluate(raw, state.root(), state.used_words())
    }
}
