//! Submission rules.
//!
//! `RoundValidator` applies the originality, constructibility, and realness
//! checks in order and scores accepted words. The individual predicates are
//! exported for frontends that want to pre-check input.

mod checks;
mod rejection;
mod validator;

pub use checks::{is_original, is_possible, is_real};
pub use rejection::{Alert, Rejection};
pub use validator::{Accepted, Evaluation, RoundValidator};
