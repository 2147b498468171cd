//! Kind definitions and the ordered species [`Catalog`].

use std::error::Error;
use std::fmt;

use indexmap::IndexMap;

use crate::animal::Animal;
use crate::call::CallSet;

/// Definition of one animal kind registered in a catalog.
///
/// A kind carries its display name, the set of calls it declares, and a
/// constructor for live instances. Extending a system means registering
/// one more `KindDef`; classification code never changes.
///
/// A coherent definition declares exactly the calls its spawned
/// instances answer through [`Animal::voice`]. The catalog does not
/// enforce this at construction; kind authors assert it in tests.
#[derive(Clone, Copy)]
pub struct KindDef {
    name: &'static str,
    calls: CallSet,
    build: fn() -> Box<dyn Animal>,
}

impl KindDef {
    /// Create a kind definition.
    pub const fn new(name: &'static str, calls: CallSet, build: fn() -> Box<dyn Animal>) -> Self {
        Self { name, calls, build }
    }

    /// Display name of the kind.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The calls this kind declares.
    pub const fn calls(&self) -> CallSet {
        self.calls
    }

    /// Spawn a live instance of this kind.
    pub fn spawn(&self) -> Box<dyn Animal> {
        (self.build)()
    }
}

impl fmt::Debug for KindDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindDef")
            .field("name", &self.name)
            .field("calls", &self.calls)
            .finish_non_exhaustive()
    }
}

/// Errors from catalog construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// Two definitions share a display name.
    DuplicateKind {
        /// The colliding display name.
        name: &'static str,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKind { name } => {
                write!(f, "duplicate kind name '{name}' in catalog")
            }
        }
    }
}

impl Error for CatalogError {}

/// An ordered, name-keyed collection of kind definitions.
///
/// The catalog is the fixed registry a classification run draws from.
/// Iteration and positional lookup follow declaration order, names are
/// unique, and the collection is immutable once built, so a sampler
/// index identifies the same kind for the whole run.
#[derive(Clone, Debug)]
pub struct Catalog {
    kinds: IndexMap<&'static str, KindDef>,
}

impl Catalog {
    /// Build a catalog from kind definitions, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateKind`] if two definitions share
    /// a display name.
    pub fn new(defs: Vec<KindDef>) -> Result<Self, CatalogError> {
        let mut kinds = IndexMap::with_capacity(defs.len());
        for def in defs {
            let name = def.name();
            if kinds.insert(name, def).is_some() {
                return Err(CatalogError::DuplicateKind { name });
            }
        }
        Ok(Self { kinds })
    }

    /// Number of kinds in the catalog.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns `true` if the catalog has no kinds.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Kind definition at `index` in declaration order.
    pub fn get(&self, index: usize) -> Option<&KindDef> {
        self.kinds.get_index(index).map(|(_, def)| def)
    }

    /// Kind definition with the given display name.
    pub fn by_name(&self, name: &str) -> Option<&KindDef> {
        self.kinds.get(name)
    }

    /// Position of the named kind in declaration order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.kinds.get_index_of(name)
    }

    /// Iterate kind definitions in declaration order.
    pub fn kinds(&self) -> impl Iterator<Item = &KindDef> {
        self.kinds.values()
    }

    /// Kind display names in declaration order.
    pub fn kind_names(&self) -> Vec<&'static str> {
        self.kinds.keys().copied().collect()
    }
}
