//! Deterministic simulation RNG wrapper.
//!
//! # Determinism strategy
//!
//! One `SimRng`, seeded once per run, drives every stochastic decision —
//! pedestrian placement, the per-tick processing shuffle, each pedestrian's
//! speed gate and movement draw.  The tick engine is strictly sequential, so
//! a fixed seed makes two runs bit-identical (same paths, same statistics).
//!
//! The wrapper exposes only the contract the simulation consumes: seeding,
//! uniform draws, Bernoulli trials, slice shuffling, and weighted discrete
//! sampling.  The generator behind it (`SmallRng`) is an implementation
//! detail.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded deterministic RNG for a simulation run.
///
/// The type is `Send` but intentionally not `Sync` — RNG state must never be
/// shared between threads.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Seed deterministically.  The same seed always reproduces the same
    /// stream of draws.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Bernoulli trial: `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn bernoulli(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Shuffle a mutable slice in-place (Fisher–Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Sample one item from `items` with probability proportional to
    /// `weight(item)`, by cumulative weight and a uniform draw in
    /// `[0, total)`.  Returns the item's index.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty or the total weight is not positive and
    /// finite.  A degenerate distribution here is a precondition violation
    /// in the caller, not a condition to round away.
    pub fn discrete_by<T>(&mut self, items: &[T], weight: impl Fn(&T) -> f64) -> usize {
        assert!(!items.is_empty(), "discrete_by: empty distribution");
        let total: f64 = items.iter().map(&weight).sum();
        assert!(
            total > 0.0 && total.is_finite(),
            "discrete_by: total weight must be positive and finite, got {total}"
        );

        let mut remaining = self.0.gen_range(0.0..total);
        for (i, item) in items.iter().enumerate() {
            let w = weight(item);
            if remaining < w {
                return i;
            }
            remaining -= w;
        }
        // Floating-point slack can leave a sliver past the last cumulative
        // boundary; it belongs to the last item.
        items.len() - 1
    }
}
