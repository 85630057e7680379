//! In-memory word set dictionary.

use std::path::Path;

use rustc_hash::FxHashSet;
use tracing::{debug, info, instrument};

use super::traits::Dictionary;
use crate::core::config::DEFAULT_LANGUAGE;
use crate::core::error::InitError;

/// Dictionary backed by a hash set of known words in one language.
///
/// Lookups for any other language return false.
///
/// ## Example
///
/// ```
/// use word_finder::dictionary::{Dictionary, WordSetDictionary};
///
/// let dict = WordSetDictionary::from_words("en", ["worm", "silk"]);
/// assert!(dict.is_dictionary_word("worm", "en"));
/// assert!(!dict.is_dictionary_word("worm", "fr"));
/// assert!(!dict.is_dictionary_word("wrom", "en"));
/// ```
#[derive(Clone, Debug)]
pub struct WordSetDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordSetDictionary {
    /// Create an empty dictionary for a language.
    #[must_use]
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            words: FxHashSet::default(),
        }
    }

    /// Create a dictionary from words. Entries are trimmed and lowercased;
    /// blank entries are dropped.
    pub fn from_words<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::new(language);
        dict.extend(words);
        dict
    }

    /// Parse a newline-delimited word list.
    pub fn parse(language: impl Into<String>, content: &str) -> Self {
        Self::from_words(language, content.lines())
    }

    /// Load a newline-delimited word list from disk.
    #[instrument(skip(language, path), fields(path = %path.as_ref().display()))]
    pub fn from_file(language: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, InitError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| InitError::WordListUnavailable {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let dict = Self::parse(language, &content);
        info!(words = dict.len(), language = %dict.language, "Dictionary loaded");
        Ok(dict)
    }

    /// Add one word.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word)
    }

    /// Add many words.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    /// The language this dictionary answers for.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of known words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordSetDictionary {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

impl Dictionary for WordSetDictionary {
    fn is_dictionary_word(&self, word: &str, language: &str) -> bool {
        if language != self.language {
            debug!(language, expected = %self.language, "Dictionary language mismatch");
            return false;
        }
        self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes() {
        let dict = WordSetDictionary::parse("en", "Worm\n  silk \r\n\n");
        assert_eq!(dict.len(), 2);
        assert!(dict.is_dictionary_word("worm", "en"));
        assert!(dict.is_dictionary_word("silk", "en"));
    }

    #[test]
    fn test_language_mismatch() {
        let dict = WordSetDictionary::from_words("en", ["worm"]);
        assert!(!dict.is_dictionary_word("worm", "de"));
    }

    #[test]
    fn test_insert_dedupes_and_skips_blank() {
        let mut dict = WordSetDictionary::default();
        assert!(dict.insert("worm"));
        assert!(!dict.insert("WORM "));
        assert!(!dict.insert("   "));
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.language(), "en");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "worm\nsilk\nmilk\n").unwrap();

        let dict = WordSetDictionary::from_file("en", &path).unwrap();
        assert_eq!(dict.len(), 3);

        let missing = WordSetDictionary::from_file("en", dir.path().join("nope.txt"));
        assert!(matches!(missing, Err(InitError::WordListUnavailable { .. })));
    }
}
