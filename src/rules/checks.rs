//! The three submission predicates.
//!
//! Each check is independent; ordering and short-circuiting live in
//! [`super::RoundValidator`].

use crate::core::word::{RootWord, Submission};
use crate::dictionary::Dictionary;

/// Originality: the submission matches none of the used words.
pub fn is_original<I, S>(submission: &Submission, used: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    !used.into_iter().any(|w| submission.matches(w.as_ref()))
}

/// Constructibility: every letter of the submission can be taken from the
/// root's letters, each root letter used at most once.
pub fn is_possible(submission: &Submission, root: &RootWord) -> bool {
    root.letter_pool().consume(submission.as_str()).is_ok()
}

/// Realness: the dictionary recognizes the submission in `language`.
pub fn is_real<D>(submission: &Submission, dictionary: &D, language: &str) -> bool
where
    D: Dictionary + ?Sized,
{
    dictionary.is_dictionary_word(submission.as_str(), language)
}
