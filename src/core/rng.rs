//! Deterministic random number generation for dealing hands.
//!
//! Round resolution never draws randomness. The RNG exists so controllers
//! can deal reproducible starting hands from a seed:
//!
//! ```
//! use duel_engine::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.gen_index(100), b.gen_index(100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 RNG.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate an index in `0..upper`. `upper` must be non-zero.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
