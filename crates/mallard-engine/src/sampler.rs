//! The uniform production sampler.
//!
//! Roster generation draws one catalog index per instance through the
//! [`Sampler`] seam declared in `mallard-core`. Production runs use
//! [`UniformSampler`]: independent uniform draws with replacement over
//! a ChaCha8 stream, seeded from process entropy by default or from a
//! fixed seed for reproducible runs. Scripted samplers for tests live
//! in `mallard-test-utils`.

use std::fmt;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

pub use mallard_core::Sampler;

/// Uniform independent sampling with replacement.
#[derive(Clone)]
pub struct UniformSampler {
    rng: ChaCha8Rng,
}

impl UniformSampler {
    /// Sampler seeded from process entropy; every run draws a fresh
    /// sequence.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    /// Sampler with a fixed seed; identical seeds draw identical
    /// sequences.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Sampler for UniformSampler {
    fn pick(&mut self, kind_count: usize) -> usize {
        if kind_count == 0 {
            // Degenerate call: there is nothing to pick. Roster
            // generation rejects an empty catalog before sampling, so
            // this value is never drawn in a run.
            return 0;
        }
        self.rng.random_range(0..kind_count)
    }
}

impl fmt::Debug for UniformSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniformSampler").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_stay_in_range() {
        let mut sampler = UniformSampler::seeded(42);

        for _ in 0..1000 {
            let pick = sampler.pick(5);
            assert!(pick < 5, "pick {pick} out of range");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = UniformSampler::seeded(7);
        let mut b = UniformSampler::seeded(7);

        let picks_a: Vec<usize> = (0..64).map(|_| a.pick(5)).collect();
        let picks_b: Vec<usize> = (0..64).map(|_| b.pick(5)).collect();

        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn different_seeds_different_sequences() {
        let mut a = UniformSampler::seeded(1);
        let mut b = UniformSampler::seeded(2);

        let picks_a: Vec<usize> = (0..64).map(|_| a.pick(5)).collect();
        let picks_b: Vec<usize> = (0..64).map(|_| b.pick(5)).collect();

        assert_ne!(picks_a, picks_b);
    }

    #[test]
    fn seeded_draws_cover_all_indices() {
        let mut sampler = UniformSampler::seeded(3);
        let mut seen = [false; 5];

        for _ in 0..500 {
            seen[sampler.pick(5)] = true;
        }

        assert!(seen.iter().all(|&s| s), "not all indices drawn: {seen:?}");
    }

    #[test]
    fn empty_range_pick_is_zero() {
        let mut sampler = UniformSampler::seeded(0);
        assert_eq!(sampler.pick(0), 0);
    }

    #[test]
    fn single_kind_always_picked() {
        let mut sampler = UniformSampler::seeded(11);

        for _ in 0..32 {
            assert_eq!(sampler.pick(1), 0);
        }
    }
}
