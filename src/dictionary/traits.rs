//! The dictionary capability consulted by the realness check.
//!
//! Spell checkers, word lists, tries, or remote services can all sit behind
//! this trait; the validator only ever asks one question.

use std::sync::Arc;

/// Answers whether a word exists in a language.
pub trait Dictionary: Send + Sync {
    /// Whether `word` is a real word in `language`.
    ///
    /// `word` is already normalized (lowercased, trimmed) by the caller.
    fn is_dictionary_word(&self, word: &str, language: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_dictionary_word(&self, word: &str, language: &str) -> bool {
        (**self).is_dictionary_word(word, language)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_dictionary_word(&self, word: &str, language: &str) -> bool {
        (**self).is_dictionary_word(word, language)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Arc<D> {
    fn is_dictionary_word(&self, word: &str, language: &str) -> bool {
        (**self).is_dictionary_word(word, language)
    }
}

/// Accepts every word (baseline for testing).
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl Dictionary for AcceptAll {
    fn is_dictionary_word(&self, _word: &str, _language: &str) -> bool {
        true
    }
}

/// Adapter turning a closure into a dictionary.
///
/// ```
/// use word_finder::dictionary::{Dictionary, FnDictionary};
///
/// let dict = FnDictionary::new(|word: &str, _lang: &str| word.len() > 1);
/// assert!(dict.is_dictionary_word("ok", "en"));
/// assert!(!dict.is_dictionary_word("k", "en"));
/// ```
#[derive(Clone)]
pub struct FnDictionary<F> {
    check: F,
}

impl<F> FnDictionary<F>
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    /// Wrap a `(word, language) -> bool` closure.
    pub fn new(check: F) -> Self {
        Self { check }
    }
}

impl<F> Dictionary for FnDictionary<F>
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn is_dictionary_word(&self, word: &str, language: &str) -> bool {
        (self.check)(word, language)
    }
}

impl<F> std::fmt::Debug for FnDictionary<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnDictionary").finish_non_exhaustive()
    }
}
