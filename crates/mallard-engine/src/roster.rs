//! Roster generation: the random population step of a run.

use std::fmt;

use mallard_core::{Animal, Catalog};

use crate::error::RunError;
use crate::sampler::Sampler;

/// A generated population of animal instances, in draw order.
///
/// Instances are created once per run, probed once each, and dropped
/// with the roster. Nothing mutates an instance after creation, and
/// generation order is the order every later stage observes.
pub struct Roster {
    animals: Vec<Box<dyn Animal>>,
}

impl Roster {
    /// Generate `count` instances by independent sampler draws with
    /// replacement.
    ///
    /// A count of zero succeeds with an empty roster regardless of the
    /// catalog, including an empty one.
    ///
    /// # Errors
    ///
    /// - [`RunError::EmptyCatalog`] if `count > 0` and the catalog has
    ///   no kinds.
    /// - [`RunError::PickOutOfRange`] if the sampler returns an index
    ///   outside the catalog.
    pub fn generate(
        catalog: &Catalog,
        count: usize,
        sampler: &mut dyn Sampler,
    ) -> Result<Self, RunError> {
        if count > 0 && catalog.is_empty() {
            return Err(RunError::EmptyCatalog { requested: count });
        }

        let mut animals = Vec::with_capacity(count);
        for _ in 0..count {
            let index = sampler.pick(catalog.len());
            let def = catalog.get(index).ok_or(RunError::PickOutOfRange {
                index,
                kind_count: catalog.len(),
            })?;
            animals.push(def.spawn());
        }
        Ok(Self { animals })
    }

    /// Number of instances in the roster.
    pub fn len(&self) -> usize {
        self.animals.len()
    }

    /// Returns `true` if the roster holds no instances.
    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    /// Iterate instances in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Animal> {
        self.animals.iter().map(|animal| animal.as_ref())
    }

    /// Kind names of the instances, in generation order.
    pub fn kind_names(&self) -> Vec<&'static str> {
        self.animals.iter().map(|animal| animal.kind_name()).collect()
    }
}

impl fmt::Debug for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.kind_names()).finish()
    }
}
