//! Root word sources.
//!
//! A `WordSource` is loaded once at startup from a newline-delimited list
//! and hands out a uniformly random root word for each new round.

mod word_list;

pub use word_list::WordSource;
