//! Python bindings for the word-finder rules engine.
//!
//! # Quick Start
//!
//! ```python
//! import word_finder as wf
//!
//! # In-memory dictionary
//! game = wf.Round(words=["worm", "silk", "milk"], seed=42)
//!
//! # Or any spell checker
//! game = wf.Round(dictionary=lambda word, lang: checker.check(word, lang))
//!
//! outcome = game.submit("worm")
//! if not outcome.is_accepted():
//!     show_alert(outcome.title, outcome.message)
//!
//! # Suspend and resume
//! saved = game.snapshot()
//! game = wf.Round.restore(saved, words=["worm", "silk", "milk"])
//! ```

use pyo3::prelude::*;

mod py_dictionary;
mod py_round;

use py_round::{PyOutcome, PyRound};

/// word_finder: rules engine for a root-word anagram game.
#[pymodule]
fn word_finder(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRound>()?;
    m.add_class::<PyOutcome>()?;

    Ok(())
}
