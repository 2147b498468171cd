//! Benchmark profiles for the Mallard classification framework.
//!
//! Provides pre-built seeded [`RunConfig`] profiles so benchmarks and
//! examples measure identical workloads:
//!
//! - [`reference_profile`]: 1K instances over the standard catalog
//! - [`stress_profile`]: 100K instances for throughput measurement

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use mallard_core::Catalog;
use mallard_engine::{RunConfig, UniformSampler};

/// Build a reference benchmark profile: 1K instances, seeded draws.
pub fn reference_profile(seed: u64) -> (Catalog, RunConfig) {
    let config = RunConfig {
        count: 1_000,
        sampler: Box::new(UniformSampler::seeded(seed)),
    };
    (mallard_animals::standard_catalog(), config)
}

/// Build a stress benchmark profile: 100K instances, seeded draws.
///
/// Same catalog as [`reference_profile`] at 100x the roster size.
pub fn stress_profile(seed: u64) -> (Catalog, RunConfig) {
    let config = RunConfig {
        count: 100_000,
        sampler: Box::new(UniformSampler::seeded(seed)),
    };
    (mallard_animals::standard_catalog(), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn reference_profile_runs() {
        let (catalog, config) = reference_profile(42);
        let mut sink = io::sink();

        let results = mallard_engine::run(&catalog, config, &mut sink).unwrap();
        assert_eq!(results.len(), 1_000);
    }

    #[test]
    fn profiles_share_the_catalog() {
        let (reference, _) = reference_profile(42);
        let (stress, _) = stress_profile(42);

        assert_eq!(reference.kind_names(), stress.kind_names());
    }
}
