//! Mallard: a duck-typing demo built on capability probing.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Mallard sub-crates. A run generates a random roster of
//! animals from a catalog, asks each one the only question that
//! matters, "can you quack?", and reports the verdicts in order. The
//! probe is a capability query, never a type check: any kind that
//! voices the quack call is a duck for classification purposes.
//!
//! # Quick start
//!
//! ```rust
//! use mallard::prelude::*;
//!
//! let catalog = standard_catalog();
//! let config = RunConfig {
//!     count: 3,
//!     sampler: Box::new(UniformSampler::seeded(7)),
//! };
//!
//! let mut report = Vec::new();
//! let results = run(&catalog, config, &mut report).unwrap();
//!
//! assert_eq!(results.len(), 3);
//! for result in &results {
//!     assert!(catalog.by_name(result.kind_name()).is_some());
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `mallard-core` | Calls, call sets, animal traits, the catalog, the sampler seam |
//! | [`animals`] | `mallard-animals` | The five standard kinds and their catalog |
//! | [`engine`] | `mallard-engine` | Sampling, rosters, the probe, the run |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`mallard-core`).
///
/// Contains the call vocabulary ([`types::Call`], [`types::CallSet`]),
/// the instance traits ([`types::Animal`], [`types::Voice`]), the
/// species catalog ([`types::Catalog`], [`types::KindDef`]), and the
/// kind-selection seam ([`types::Sampler`]).
pub use mallard_core as types;

/// The standard animal kinds (`mallard-animals`).
///
/// [`animals::standard_catalog`] builds the five-kind catalog the demo
/// binary draws from; the kinds themselves ([`animals::Duck`],
/// [`animals::Dog`], ...) are exported for direct use in tests.
pub use mallard_animals as animals;

/// Classification engine (`mallard-engine`).
///
/// [`engine::run`] is the whole demo in one call: generate a roster
/// through the [`engine::Sampler`] seam, probe each instance, write
/// the report.
pub use mallard_engine as engine;

/// Common imports for typical Mallard usage.
///
/// ```rust
/// use mallard::prelude::*;
/// ```
pub mod prelude {
    // Catalog and kinds
    pub use mallard_animals::standard_catalog;
    pub use mallard_core::{Animal, Call, CallSet, Catalog, CatalogError, KindDef, Voice};

    // Engine
    pub use mallard_engine::{
        classify, probe, run, Classification, Roster, RunConfig, Sampler, UniformSampler,
        DEFAULT_COUNT,
    };

    // Errors and count parsing
    pub use mallard_engine::{parse_count, CountError, RunError};
}
