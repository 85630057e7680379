//! Round sessions.
//!
//! `Round` ties a word source, a validator, and the round state together:
//! it picks the root, records accepted submissions, and resets on
//! reinitialization.

mod session;
mod snapshot;

pub use session::{Outcome, Round};
pub use snapshot::RoundSnapshot;
