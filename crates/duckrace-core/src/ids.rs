//! Candidate id sources for newly added ducks.
//!
//! The store only needs a stream of 32-bit candidates; uniqueness is
//! enforced by the store itself, which redraws on collision.

use core::fmt::Debug;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces candidate duck ids.
pub trait IdSource: Debug + Send + Sync {
    /// Draw the next candidate. May repeat earlier values.
    fn next_candidate(&mut self) -> u32;
}

/// Random 32-bit ids from a [`StdRng`].
#[derive(Debug)]
pub struct RandomIdSource {
    rng: StdRng,
}

impl RandomIdSource {
    /// Seed from the thread-local OS-backed generator.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Deterministic source for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for RandomIdSource {
    fn next_candidate(&mut self) -> u32 {
        self.rng.random()
    }
}
