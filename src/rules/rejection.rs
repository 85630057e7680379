//! Rejection reasons and the alerts shown for them.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Why a submission was turned down.
///
/// Rejections are recoverable: the round continues and its state is left
/// untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Display, Error, Serialize, Deserialize)]
pub enum Rejection {
    /// The word was already accepted this round.
    #[display("Word used already")]
    AlreadyUsed,

    /// The word cannot be spelled from the root's letters.
    #[display("Word not possible")]
    NotPossible {
        #[error(not(source))]
        root: String,
    },

    /// The dictionary does not know the word.
    #[display("Word not recognized")]
    NotRecognized,
}

impl Rejection {
    /// Short heading for an alert.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Rejection::AlreadyUsed => "Word used already",
            Rejection::NotPossible { .. } => "Word not possible",
            Rejection::NotRecognized => "Word not recognized",
        }
    }

    /// Body text for an alert.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Rejection::AlreadyUsed => "Be more original!".to_string(),
            Rejection::NotPossible { root } => {
                format!("You can't spell that word from '{}'!", root)
            }
            Rejection::NotRecognized => "You can't just make them up, you know!".to_string(),
        }
    }

    /// Title and message together, ready for display.
    #[must_use]
    pub fn alert(&self) -> Alert {
        Alert {
            title: self.title().to_string(),
            message: self.message(),
        }
    }
}

/// A (title, message) pair for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
}
