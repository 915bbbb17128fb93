//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct wraps the `rand` crate's `StdRng` and
//! exposes the handful of draws the selection catalogue needs: single
//! indices, probabilities, and distinct index samples. Operators never
//! construct their own generator; the owning algorithm seeds one instance
//! and passes it into every `select` call, which is what makes runs
//! reproducible.
//!
//! ## Example
//!
//! ```rust
//! use moselect::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let p = rng.gen_probability();
//! assert!((0.0..1.0).contains(&p));
//!
//! let idx = rng.gen_index(10);
//! assert!(idx < 10);
//! ```

use rand::{rngs::StdRng, seq::index, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` that provides the random
/// draws used by the selection operators.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system
    /// entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates a uniformly distributed index in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero; callers guard against empty ranges before
    /// drawing.
    pub fn gen_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }

    /// Generates a uniformly distributed probability in `[0, 1)`.
    pub fn gen_probability(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    /// Samples `amount` distinct indices from `[0, length)`, each subset of
    /// the given size being equally likely.
    ///
    /// # Panics
    ///
    /// Panics if `amount > length`; callers guard with an
    /// `InsufficientPopulation` check before drawing.
    pub fn sample_distinct(&mut self, length: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, length, amount).into_vec()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
