//! Deterministic random number generation for secret selection.
//!
//! Every engine draws from a seeded ChaCha8 stream. The seed is kept so
//! that a round seen in the logs can be reproduced exactly.
//!
//! ```
//! use strictly_baseball::{GameRng, generate_secret};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(generate_secret(&mut a), generate_secret(&mut b));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::RangeInclusive;
use tracing::{debug, instrument};

/// Seeded RNG used to draw secrets.
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

    /// Create an RNG from an operating-system seed.
    ///
    /// The seed is recorded and logged at debug level.
    #[must_use]
    #[instrument]
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::random();
        debug!(seed, "Seeded game RNG from entropy");
        Self::new(seed)
    }

    /// Returns the seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a digit uniformly from `range`.
    pub fn digit(&mut self, range: RangeInclusive<u8>) -> u8 {
        self.inner.gen_range(range)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
