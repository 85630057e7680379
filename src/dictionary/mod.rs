//! Dictionary capability for the realness check.
//!
//! The validator depends only on the `Dictionary` trait, so any lookup
//! (in-memory set, platform spell checker, external API) can be injected.

mod traits;
mod word_set;

pub use traits::{AcceptAll, Dictionary, FnDictionary};
pub use word_set::WordSetDictionary;
