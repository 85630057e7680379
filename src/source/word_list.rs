//! Candidate root words loaded from a newline-delimited word list.

use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info, instrument, warn};

use crate::core::error::InitError;
use crate::core::rng::WordRng;
use crate::core::word::RootWord;

/// Start words shipped with the crate.
const BUNDLED_WORDS: &str = include_str!("../../data/start.txt");

/// Candidate root words for starting rounds.
///
/// Invariant: never empty. Every constructor fails with
/// [`InitError::EmptyWordList`] rather than produce an empty source.
///
/// ## Example
///
/// ```
/// use word_finder::core::WordRng;
/// use word_finder::source::WordSource;
///
/// let source = WordSource::parse("silkworm\nbaseball\n").unwrap();
/// assert_eq!(source.len(), 2);
///
/// let mut rng = WordRng::new(42);
/// let root = source.select_root(&mut rng).unwrap();
/// assert!(source.contains(root.as_str()));
/// ```
#[derive(Clone, Debug)]
pub struct WordSource {
    candidates: Vec<RootWord>,
}

impl WordSource {
    /// Parse a newline-delimited list.
    ///
    /// Each line is one candidate. Surrounding whitespace (including a `\r`
    /// from CRLF files) is trimmed and blank lines are skipped. Any other
    /// line must be a single alphabetic word.
    #[instrument(skip(content), fields(bytes = content.len()))]
    pub fn parse(content: &str) -> Result<Self, InitError> {
        let mut candidates = Vec::new();

        for (idx, line) in content.split('\n').enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let root = RootWord::new(trimmed).map_err(|_| {
                warn!(line = idx + 1, "Invalid candidate in word list");
                InitError::InvalidCandidate {
                    line: idx + 1,
                    word: trimmed.to_string(),
                }
            })?;
            candidates.push(root);
        }

        Self::from_candidates(candidates)
    }

    /// Load a word list from disk.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InitError> {
        let path = path.as_ref();
        debug!("Loading word list");
        let content =
            std::fs::read_to_string(path).map_err(|e| InitError::WordListUnavailable {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let source = Self::parse(&content)?;
        info!(candidates = source.len(), "Word list loaded");
        Ok(source)
    }

    /// The word list shipped with the crate.
    pub fn bundled() -> Result<Self, InitError> {
        Self::parse(BUNDLED_WORDS)
    }

    /// Build a source from already-validated root words.
    pub fn from_candidates(candidates: Vec<RootWord>) -> Result<Self, InitError> {
        if candidates.is_empty() {
            return Err(InitError::EmptyWordList);
        }
        Ok(Self { candidates })
    }

    /// Build a source from raw words, validating each.
    pub fn from_words<I, S>(words: I) -> Result<Self, InitError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let candidates = words
            .into_iter()
            .map(RootWord::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_candidates(candidates)
    }

    /// Pick a root word uniformly at random.
    #[instrument(skip(self, rng), fields(candidates = self.candidates.len()))]
    pub fn select_root(&self, rng: &mut WordRng) -> Result<RootWord, InitError> {
        let root = rng
            .choose(&self.candidates)
            .cloned()
            .ok_or(InitError::EmptyWordList)?;
        debug!(root = %root, "Root word selected");
        Ok(root)
    }

    /// Number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Always false; see the type invariant.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Whether `word` is one of the candidates.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.candidates.iter().any(|c| c.as_str() == word)
    }

    /// Iterate over all candidates.
    pub fn iter(&self) -> impl Iterator<Item = &RootWord> {
        self.candidates.iter()
    }
}

impl FromStr for WordSource {
    type Err = InitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_blank_lines() {
        let source = WordSource::parse("silkworm\n\n  baseball \r\n\n").unwrap();
        assert_eq!(source.len(), 2);
        assert!(source.contains("silkworm"));
        assert!(source.contains("baseball"));
    }

    #[test]
    fn test_parse_lowercases() {
        let source = WordSource::parse("SilkWorm").unwrap();
        assert!(source.contains("silkworm"));
    }

    #[test]
    fn test_parse_empty_is_error() {
        assert_eq!(WordSource::parse("").unwrap_err(), InitError::EmptyWordList);
        assert_eq!(
            WordSource::parse("\n \n\r\n").unwrap_err(),
            InitError::EmptyWordList
        );
    }

    #[test]
    fn test_parse_invalid_line() {
        let err = WordSource::parse("silkworm\nbase ball\n").unwrap_err();
        assert_eq!(
            err,
            InitError::InvalidCandidate {
                line: 2,
                word: "base ball".to_string()
            }
        );
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = WordSource::from_file(dir.path().join("start.txt")).unwrap_err();
        assert!(matches!(err, InitError::WordListUnavailable { .. }));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("start.txt");
        std::fs::write(&path, "silkworm\nbaseball\n").unwrap();

        let source = WordSource::from_file(&path).unwrap();
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn test_bundled_list() {
        let source = WordSource::bundled().unwrap();
        assert!(source.len() > 50);
        assert!(source.contains("silkworm"));
    }

    #[test]
    fn test_from_words() {
        let source = WordSource::from_words(["alpha", "bravo"]).unwrap();
        assert_eq!(source.len(), 2);

        let empty: [&str; 0] = [];
        assert_eq!(
            WordSource::from_words(empty).unwrap_err(),
            InitError::EmptyWordList
        );
    }

    #[test]
    fn test_select_root_is_deterministic() {
        let source = WordSource::bundled().unwrap();

        let mut rng1 = WordRng::new(99);
        let mut rng2 = WordRng::new(99);

        for _ in 0..20 {
            assert_eq!(
                source.select_root(&mut rng1).unwrap(),
                source.select_root(&mut rng2).unwrap()
            );
        }
    }

    #[test]
    fn test_select_root_single_candidate() {
        let source = WordSource::from_words(["silkworm"]).unwrap();
        let mut rng = WordRng::new(1);
        assert_eq!(source.select_root(&mut rng).unwrap().as_str(), "silkworm");
    }
}
