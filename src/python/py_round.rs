//! Round bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::core::RoundConfig;
use crate::dictionary::{Dictionary, WordSetDictionary};
use crate::round::{Outcome, Round, RoundSnapshot};

use super::py_dictionary::{CallbackError, PyCallableDictionary};

/// Result of a submission, as seen from Python.
#[pyclass(name = "Outcome", get_all)]
#[derive(Clone, Debug)]
pub struct PyOutcome {
    /// "accepted", "rejected" or "ignored".
    pub status: String,
    pub word: Option<String>,
    pub score_delta: u32,
    pub title: Option<String>,
    pub message: Option<String>,
}

#[pymethods]
impl PyOutcome {
    fn is_accepted(&self) -> bool {
        self.status == "accepted"
    }

    fn __repr__(&self) -> String {
        match (&self.word, &self.title) {
            (Some(word), _) => format!("Outcome(accepted, word={:?}, +{})", word, self.score_delta),
            (None, Some(title)) => format!("Outcome(rejected, {:?})", title),
            _ => "Outcome(ignored)".to_string(),
        }
    }
}

impl From<Outcome> for PyOutcome {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Accepted(accepted) => Self {
                status: "accepted".to_string(),
                word: Some(accepted.word),
                score_delta: accepted.score_delta,
                title: None,
                message: None,
            },
            Outcome::Rejected(rejection) => {
                let alert = rejection.alert();
                Self {
                    status: "rejected".to_string(),
                    word: None,
                    score_delta: 0,
                    title: Some(alert.title),
                    message: Some(alert.message),
                }
            }
            Outcome::Ignored => Self {
                status: "ignored".to_string(),
                word: None,
                score_delta: 0,
                title: None,
                message: None,
            },
        }
    }
}

fn value_error(err: impl ToString) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Build the dictionary from either a word list or a callable.
fn build_dictionary(
    words: Option<Vec<String>>,
    dictionary: Option<Py<PyAny>>,
    language: &str,
    errors: &CallbackError,
) -> PyResult<Box<dyn Dictionary>> {
    match (words, dictionary) {
        (Some(_), Some(_)) => Err(PyValueError::new_err(
            "pass either words or dictionary, not both",
        )),
        (_, Some(callback)) => Ok(Box::new(PyCallableDictionary::new(
            callback,
            errors.clone(),
        ))),
        (words, None) => Ok(Box::new(WordSetDictionary::from_words(
            language,
            words.unwrap_or_default(),
        ))),
    }
}

/// Python wrapper for Round.
///
/// Pass either `words` (an in-memory dictionary) or `dictionary` (a callable
/// taking `(word, language)` and returning a bool).
///
/// If the `dictionary` callable raises, `submit` re-raises that exception
/// and the round is left unchanged.
#[pyclass(name = "Round")]
pub struct PyRound {
    round: Round<Box<dyn Dictionary>>,
    errors: CallbackError,
}

#[pymethods]
impl PyRound {
    #[new]
    #[pyo3(signature = (
        words = None,
        dictionary = None,
        word_list = None,
        language = "en".to_string(),
        seed = None
    ))]
    fn new(
        words: Option<Vec<String>>,
        dictionary: Option<Py<PyAny>>,
        word_list: Option<String>,
        language: String,
        seed: Option<u64>,
    ) -> PyResult<Self> {
        let errors = CallbackError::default();
        let dict = build_dictionary(words, dictionary, &language, &errors)?;

        let mut config = RoundConfig::new().with_language(language);
        if let Some(path) = word_list {
            config = config.with_word_list(path);
        }
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }

        let round = Round::start(&config, dict).map_err(value_error)?;
        Ok(Self { round, errors })
    }

    /// Resume a round from `snapshot()` bytes.
    ///
    /// The dictionary and word list are not stored in the snapshot and are
    /// passed again; the language comes from the snapshot.
    #[staticmethod]
    #[pyo3(signature = (snapshot, words = None, dictionary = None, word_list = None))]
    fn restore(
        snapshot: &[u8],
        words: Option<Vec<String>>,
        dictionary: Option<Py<PyAny>>,
        word_list: Option<String>,
    ) -> PyResult<Self> {
        let snapshot = RoundSnapshot::from_bytes(snapshot).map_err(value_error)?;

        let errors = CallbackError::default();
        let dict = build_dictionary(words, dictionary, &snapshot.language, &errors)?;

        let mut config = RoundConfig::new().with_language(snapshot.language.clone());
        if let Some(path) = word_list {
            config = config.with_word_list(path);
        }
        let source = config.load_source().map_err(value_error)?;

        let round = Round::restore(snapshot, source, dict).map_err(value_error)?;
        Ok(Self { round, errors })
    }

    /// Submit a word.
    fn submit(&mut self, word: &str) -> PyResult<PyOutcome> {
        let outcome = self.round.submit(word);
        if let Some(err) = self.errors.take() {
            return Err(err);
        }
        Ok(outcome.into())
    }

    /// Pick a new root and reset words and score. Returns the new root.
    fn restart(&mut self) -> PyResult<String> {
        self.round
            .restart()
            .map(|root| root.to_string())
            .map_err(value_error)
    }

    #[getter]
    fn root(&self) -> String {
        self.round.root().to_string()
    }

    #[getter]
    fn score(&self) -> u32 {
        self.round.score()
    }

    /// Accepted words, most recent first.
    #[getter]
    fn used_words(&self) -> Vec<String> {
        self.round.used_words().iter().cloned().collect()
    }

    /// Encode the round state as bytes for `Round.restore`.
    fn snapshot<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self.round.snapshot().to_bytes().map_err(value_error)?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    fn __repr__(&self) -> String {
        format!(
            "Round(root={:?}, words={}, score={})",
            self.round.root().as_str(),
            self.round.used_words().len(),
            self.round.score()
        )
    }
}
