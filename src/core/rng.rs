//! Deterministic random number generation for root word selection.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed picks the same sequence of root words
//! - **Serializable**: O(1) state capture and restore for round snapshots
//!
//! ```
//! use word_finder::core::WordRng;
//!
//! let candidates = ["silkworm", "baseball", "thinking"];
//!
//! let mut a = WordRng::new(42);
//! let mut b = WordRng::new(42);
//! assert_eq!(a.choose(&candidates), b.choose(&candidates));
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG used to pick root words.
///
/// Uses ChaCha8 so a seeded round is reproducible across platforms.
#[derive(Clone, Debug)]
pub struct WordRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl WordRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Choose a random element from a slice, uniformly.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> WordRngState {
        WordRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &WordRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture cost does not grow with the
/// number of draws.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
