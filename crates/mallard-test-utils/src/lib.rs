//! Test utilities and scripted samplers for Mallard development.
//!
//! Provides deterministic [`Sampler`] doubles so tests can force the
//! exact kind sequence a run generates, instead of fishing for seeds
//! that happen to produce it.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use mallard_core::{Catalog, Sampler};

/// A sampler that replays a fixed pick sequence, cycling when it runs
/// out.
///
/// `ScriptedSampler::new(vec![0])` forces every draw to kind 0;
/// [`by_name`](ScriptedSampler::by_name) scripts draws from kind names
/// instead of raw indices. Picks are returned verbatim, including
/// deliberately out-of-range ones for error-path tests.
pub struct ScriptedSampler {
    picks: Vec<usize>,
    cursor: usize,
}

impl ScriptedSampler {
    /// Sampler that replays `picks` in order, cycling at the end.
    ///
    /// # Panics
    ///
    /// Panics if `picks` is empty. A script has to force something.
    pub fn new(picks: Vec<usize>) -> Self {
        assert!(!picks.is_empty(), "scripted sampler needs at least one pick");
        Self { picks, cursor: 0 }
    }

    /// Sampler that replays the catalog indices of the named kinds.
    ///
    /// # Panics
    ///
    /// Panics if a name is not in the catalog, or if `names` is empty.
    pub fn by_name(catalog: &Catalog, names: &[&str]) -> Self {
        let picks = names
            .iter()
            .map(|name| {
                catalog
                    .index_of(name)
                    .unwrap_or_else(|| panic!("kind '{name}' is not in the catalog"))
            })
            .collect();
        Self::new(picks)
    }
}

impl Sampler for ScriptedSampler {
    fn pick(&mut self, _kind_count: usize) -> usize {
        let pick = self.picks[self.cursor % self.picks.len()];
        self.cursor += 1;
        pick
    }
}
