//! Dictionary bindings for Python.

use std::sync::{Arc, Mutex};

use pyo3::prelude::*;
use tracing::warn;

use crate::dictionary::Dictionary;

/// Holds the first exception raised by a Python dictionary callback until
/// the owning round re-raises it.
#[derive(Clone, Debug, Default)]
pub struct CallbackError(Arc<Mutex<Option<PyErr>>>);

impl CallbackError {
    fn store(&self, err: PyErr) {
        let mut slot = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        slot.get_or_insert(err);
    }

    /// Remove and return the pending exception, if any.
    pub fn take(&self) -> Option<PyErr> {
        self.0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
    }
}

/// Dictionary backed by a Python callable `(word, language) -> bool`.
///
/// Lets Python hosts plug in any spell checker. A falsy return means "not a
/// word". If the callback raises, the check fails and the exception is kept
/// in `errors` so the round can raise it instead of reporting a rejection.
pub struct PyCallableDictionary {
    callback: Py<PyAny>,
    errors: CallbackError,
}

impl PyCallableDictionary {
    pub fn new(callback: Py<PyAny>, errors: CallbackError) -> Self {
        Self { callback, errors }
    }
}

impl Dictionary for PyCallableDictionary {
    fn is_dictionary_word(&self, word: &str, language: &str) -> bool {
        Python::with_gil(|py| {
            let result = self
                .callback
                .call1(py, (word, language))
                .and_then(|value| value.is_truthy(py));
            match result {
                Ok(is_word) => is_word,
                Err(err) => {
                    warn!(word, language, "Dictionary callback raised");
                    self.errors.store(err);
                    false
                }
            }
        })
    }
}
