//! Random source for mock extraction.
//!
//! The generator never touches process-wide randomness: every draw goes through a
//! `RandomSource` handed in by the caller, so tests can seed it or script it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform draws needed by the generator.
///
/// Implementors only supply `below` and `unit`; ranges, picks and shuffles are
/// derived from them so every backend shuffles the same (unbiased) way.
pub trait RandomSource {
    /// Uniform integer in `[0, n)`. `n` must be non-zero.
    fn below(&mut self, n: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform integer in `[low, high]`.
    fn range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        debug_assert!(low <= high);
        low + self.below((high - low) as usize + 1) as u32
    }

    /// Uniform element of a non-empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }

    /// In-place Fisher–Yates shuffle: every permutation is equally likely.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }
}

/// Adapts any `rand` generator into a `RandomSource`.
pub struct RngSource<R: Rng>(R);

impl RngSource<StdRng> {
    /// Reproducible stream for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn below(&mut self, n: usize) -> usize {
        self.0.gen_range(0..n)
    }

    fn unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}
