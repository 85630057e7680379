//! A playable round: root selection, submissions, and reinitialization.

use tracing::{info, instrument};

use super::snapshot::RoundSnapshot;
use crate::core::config::RoundConfig;
use crate::core::error::{InitError, SnapshotError};
use crate::core::rng::WordRng;
use crate::core::state::RoundState;
use crate::core::word::RootWord;
use crate::dictionary::Dictionary;
use crate::rules::{Accepted, Alert, Rejection, RoundValidator};
use crate::source::WordSource;

/// What happened to a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Recorded: prepended to the used words and scored.
    Accepted(Accepted),
    /// Turned down; the round state is unchanged.
    Rejected(Rejection),
    /// Blank input; nothing happened.
    Ignored,
}

impl Outcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }

    /// The alert to show, if the submission was rejected.
    #[must_use]
    pub fn alert(&self) -> Option<Alert> {
        match self {
            Outcome::Rejected(rejection) => Some(rejection.alert()),
            _ => None,
        }
    }
}

/// One open-ended round.
///
/// There is no win condition or terminal state: the round accepts
/// submissions until the host calls [`Round::restart`] or drops it.
/// `submit` takes `&mut self`, so evaluations never overlap.
///
/// ## Example
///
/// ```
/// use word_finder::core::RoundConfig;
/// use word_finder::dictionary::WordSetDictionary;
/// use word_finder::round::{Outcome, Round};
/// use word_finder::source::WordSource;
///
/// let source = WordSource::parse("silkworm").unwrap();
/// let dict = WordSetDictionary::from_words("en", ["worm", "silk"]);
/// let mut round = Round::with_source(&RoundConfig::new().with_seed(1), source, dict).unwrap();
///
/// assert!(round.submit("worm").is_accepted());
/// assert!(matches!(round.submit("Worm "), Outcome::Rejected(_)));
/// assert_eq!(round.score(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct Round<D> {
    validator: RoundValidator<D>,
    source: WordSource,
    rng: WordRng,
    state: RoundState,
}

impl<D: Dictionary> Round<D> {
    /// Start a round from configuration, loading the configured (or bundled)
    /// word list.
    pub fn start(config: &RoundConfig, dictionary: D) -> Result<Self, InitError> {
        let source = config.load_source()?;
        Self::with_source(config, source, dictionary)
    }

    /// Start a round from an already-loaded word source.
    #[instrument(skip(config, source, dictionary), fields(language = %config.language))]
    pub fn with_source(
        config: &RoundConfig,
        source: WordSource,
        dictionary: D,
    ) -> Result<Self, InitError> {
        config.validate()?;
        let mut rng = config.rng();
        let root = source.select_root(&mut rng)?;
        info!(root = %root, seed = rng.seed(), "Round started");

        Ok(Self {
            validator: RoundValidator::with_language(dictionary, config.language.clone()),
            source,
            rng,
            state: RoundState::new(root),
        })
    }

    /// Rebuild a round from a snapshot.
    ///
    /// The word source and dictionary are not part of the snapshot and must
    /// be supplied again. Snapshots that fail [`RoundSnapshot::validate`] are
    /// refused.
    #[instrument(skip_all)]
    pub fn restore(
        snapshot: RoundSnapshot,
        source: WordSource,
        dictionary: D,
    ) -> Result<Self, SnapshotError> {
        snapshot.validate()?;
        let RoundSnapshot {
            state,
            rng,
            language,
        } = snapshot;
        info!(root = %state.root(), words = state.word_count(), "Round restored");

        Ok(Self {
            validator: RoundValidator::with_language(dictionary, language),
            source,
            rng: WordRng::from_state(&rng),
            state,
        })
    }

    /// Evaluate raw input and, if accepted, record it.
    #[instrument(skip(self), fields(root = %self.state.root()))]
    pub fn submit(&mut self, raw: &str) -> Outcome {
        match self.validator.evaluate_in(raw, &self.state) {
            Ok(Some(accepted)) => {
                self.state
                    .record_word(accepted.word.clone(), accepted.score_delta);
                info!(
                    word = %accepted.word,
                    score_delta = accepted.score_delta,
                    score = self.state.score(),
                    "Word accepted"
                );
                Outcome::Accepted(accepted)
            }
            Ok(None) => Outcome::Ignored,
            Err(rejection) => Outcome::Rejected(rejection),
        }
    }

    /// Reinitialize: pick a new root from the same source and reset the used
    /// words and score.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<&RootWord, InitError> {
        let root = self.source.select_root(&mut self.rng)?;
        info!(root = %root, "Round restarted");
        self.state = RoundState::new(root);
        Ok(self.state.root())
    }

    /// Capture the round for later [`Round::restore`].
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            state: self.state.clone(),
            rng: self.rng.state(),
            language: self.validator.language().to_string(),
        }
    }

    /// The root word.
    #[must_use]
    pub fn root(&self) -> &RootWord {
        self.state.root()
    }

    /// Accepted words, most recent first.
    #[must_use]
    pub fn used_words(&self) -> &im::Vector<String> {
        self.state.used_words()
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score()
    }

    /// Full round state.
    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// The validator, for hosts that want to pre-check input.
    #[must_use]
    pub fn validator(&self) -> &RoundValidator<D> {
        &self.validator
    }

    /// The word source rounds are started from.
    #[must_use]
    pub fn source(&self) -> &WordSource {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{AcceptAll, WordSetDictionary};

    fn silkworm_round() -> Round<WordSetDictionary> {
        let source = WordSource::parse("silkworm").unwrap();
        let dict = WordSetDictionary::from_words("en", ["worm", "silk", "milk", "i"]);
        Round::with_source(&RoundConfig::new().with_seed(3), source, dict).unwrap()
    }

    #[test]
    fn test_start_state() {
        let round = silkworm_round();
        assert_eq!(round.root().as_str(), "silkworm");
        assert!(round.used_words().is_empty());
        assert_eq!(round.score(), 0);
    }

    #[test]
    fn test_submit_accepts_and_scores() {
        let mut round = silkworm_round();

        let outcome = round.submit("worm");
        assert_eq!(
            outcome,
            Outcome::Accepted(Accepted {
                word: "worm".to_string(),
                score_delta: 4
            })
        );
        assert_eq!(outcome.alert(), None);

        round.submit("Silk");
        let words: Vec<_> = round.used_words().iter().cloned().collect();
        assert_eq!(words, vec!["silk", "worm"]);
        assert_eq!(round.score(), 8);
    }

    #[test]
    fn test_rejections_do_not_mutate() {
        let mut round = silkworm_round();
        round.submit("worm");
        let before = round.state().clone();

        let used = round.submit("WORM");
        assert_eq!(used, Outcome::Rejected(Rejection::AlreadyUsed));
        assert_eq!(used.alert().unwrap().title, "Word used already");

        assert!(matches!(
            round.submit("wormm"),
            Outcome::Rejected(Rejection::NotPossible { .. })
        ));
        assert_eq!(
            round.submit("slow"),
            Outcome::Rejected(Rejection::NotRecognized)
        );
        assert_eq!(round.submit("   "), Outcome::Ignored);

        assert_eq!(round.state(), &before);
    }

    #[test]
    fn test_restart_resets() {
        let mut round = silkworm_round();
        round.submit("worm");
        assert_eq!(round.score(), 4);

        let root = round.restart().unwrap().clone();
        assert_eq!(root.as_str(), "silkworm");
        assert!(round.used_words().is_empty());
        assert_eq!(round.score(), 0);

        assert!(round.submit("worm").is_accepted());
    }

    #[test]
    fn test_start_with_bundled_source() {
        let round = Round::start(&RoundConfig::new().with_seed(11), AcceptAll).unwrap();
        assert!(round.source().contains(round.root().as_str()));
    }

    #[test]
    fn test_start_with_missing_word_list() {
        let config = RoundConfig::new().with_word_list("/definitely/not/here/start.txt");
        let err = Round::start(&config, AcceptAll).unwrap_err();
        assert!(matches!(err, InitError::WordListUnavailable { .. }));
    }

    #[test]
    fn test_start_rejects_invalid_config() {
        let config = RoundConfig::new().with_language("");
        let err = Round::start(&config, AcceptAll).unwrap_err();
        assert!(matches!(err, InitError::Config(_)));
    }

    #[test]
    fn test_seeded_rounds_match() {
        let config = RoundConfig::new().with_seed(2024);
        let a = Round::start(&config, AcceptAll).unwrap();
        let b = Round::start(&config, AcceptAll).unwrap();
        assert_eq!(a.root(), b.root());
    }

    #[test]
    fn test_snapshot_restore() {
        let mut round = silkworm_round();
        round.submit("worm");
        round.submit("silk");

        let snapshot = round.snapshot();
        let source = round.source().clone();
        let dict = round.validator().dictionary().clone();
        let mut restored = Round::restore(snapshot, source, dict).unwrap();

        assert_eq!(restored.state(), round.state());
        assert_eq!(restored.submit("worm"), Outcome::Rejected(Rejection::AlreadyUsed));
        assert!(restored.submit("milk").is_accepted());
        assert_eq!(restored.score(), 12);

        // Both rounds continue the same root sequence.
        assert_eq!(round.restart().unwrap(), restored.restart().unwrap());
    }

    #[test]
    fn test_restore_refuses_invalid_snapshot() {
        let mut round = silkworm_round();
        round.submit("worm");

        let mut snapshot = round.snapshot();
        snapshot.language = String::new();
        let source = round.source().clone();
        let dict = round.validator().dictionary().clone();
        assert!(Round::restore(snapshot, source.clone(), dict.clone()).is_err());

        let mut snapshot = round.snapshot();
        snapshot.state.record_word("zzzzzz".to_string(), 6);
        assert!(Round::restore(snapshot, source, dict).is_err());
    }
}
