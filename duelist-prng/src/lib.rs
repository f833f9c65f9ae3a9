pub mod rand_util;

use std::any::Any;

#[cfg(feature = "std")]
use rand::Rng;

/// A pseudo-random number generator that can be injected into a battle.
///
/// Every roll the engine makes (accuracy, damage variance, critical hits) is drawn from a single
/// generator owned by the battle, so a battle can be deterministically replayed from its seed.
pub trait PseudoRandomNumberGenerator: Send + Sync {
    /// Returns the initial seed the generator was created with.
    fn initial_seed(&self) -> u64;

    /// Returns the next integer in the sequence.
    fn next(&mut self) -> u64;

    /// Mutable cast to [`Any`] for testing.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A seedable implementation of [`PseudoRandomNumberGenerator`].
pub struct RealPseudoRandomNumberGenerator {
    initial_seed: u64,
    seed: u64,
}

impl RealPseudoRandomNumberGenerator {
    /// Creates a new random number generator.
    ///
    /// Generators created with the same seed produce the same sequence. A missing seed is drawn
    /// from the thread-local entropy source.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(Self::generate_seed);
        Self {
            initial_seed: seed,
            seed,
        }
    }

    #[cfg(feature = "std")]
    fn generate_seed() -> u64 {
        rand::rng().random()
    }

    #[cfg(not(feature = "std"))]
    fn generate_seed() -> u64 {
        0
    }

    /// Linear congruential step.
    fn next_seed(seed: u64) -> u64 {
        const A: u64 = 0x5D588B656C078965;
        const C: u64 = 0x0000000000269EC3;
        seed.wrapping_mul(A).wrapping_add(C)
    }
}

impl PseudoRandomNumberGenerator for RealPseudoRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.initial_seed
    }

    fn next(&mut self) -> u64 {
        self.seed = Self::next_seed(self.seed);
        // Upper half only.
        self.seed >> 32
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
