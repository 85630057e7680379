//! Round configuration.
//!
//! Hosts configure a round at startup by providing:
//! - the dictionary language (a single locale, `"en"` by default)
//! - an optional word list path (the bundled list otherwise)
//! - an optional RNG seed (entropy otherwise)
//!
//! Configuration can be built in code or loaded from TOML:
//!
//! ```toml
//! language = "en"
//! word_list = "/usr/share/word-finder/start.txt"
//! seed = 42
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::error::{ConfigError, InitError};
use super::rng::WordRng;
use crate::source::WordSource;

/// Default dictionary language.
pub const DEFAULT_LANGUAGE: &str = "en";

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// Configuration for a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Locale passed to the dictionary on every realness check.
    #[serde(default = "default_language")]
    pub language: String,

    /// Newline-delimited list of candidate root words. `None` uses the
    /// bundled list.
    #[serde(default)]
    pub word_list: Option<PathBuf>,

    /// Seed for root selection. `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            word_list: None,
            seed: None,
        }
    }
}

impl RoundConfig {
    /// Create a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dictionary language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Load candidate root words from a file instead of the bundled list.
    #[must_use]
    pub fn with_word_list(mut self, path: impl Into<PathBuf>) -> Self {
        self.word_list = Some(path.into());
        self
    }

    /// Fix the RNG seed for reproducible root selection.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(language = %config.language, "Config loaded successfully");
        Ok(config)
    }

    /// Check values that serde alone cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.language.trim().is_empty() {
            return Err(ConfigError::new("language must not be empty"));
        }
        Ok(())
    }

    /// Resolve the configured word list, or the bundled one.
    #[instrument(skip(self))]
    pub fn load_source(&self) -> Result<WordSource, InitError> {
        match &self.word_list {
            Some(path) => WordSource::from_file(path),
            None => WordSource::bundled(),
        }
    }

    /// Build the RNG for root selection.
    #[must_use]
    pub fn rng(&self) -> WordRng {
        match self.seed {
            Some(seed) => WordRng::new(seed),
            None => WordRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RoundConfig::new();
        assert_eq!(config.language, "en");
        assert_eq!(config.word_list, None);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder() {
        let config = RoundConfig::new()
            .with_language("fr")
            .with_word_list("/tmp/words.txt")
            .with_seed(7);

        assert_eq!(config.language, "fr");
        assert_eq!(config.word_list, Some(PathBuf::from("/tmp/words.txt")));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_from_toml_partial() {
        let config = RoundConfig::from_toml_str("seed = 42\n").unwrap();
        assert_eq!(config.language, "en");
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_from_toml_rejects_empty_language() {
        assert!(RoundConfig::from_toml_str("language = \"  \"\n").is_err());
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        assert!(RoundConfig::from_toml_str("seed = \"not a number\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("round.toml");
        std::fs::write(&path, "language = \"en\"\nseed = 9\n").unwrap();

        let config = RoundConfig::from_file(&path).unwrap();
        assert_eq!(config.seed, Some(9));

        assert!(RoundConfig::from_file(dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = RoundConfig::new().with_seed(5);
        assert_eq!(config.rng().seed(), 5);
    }
}
