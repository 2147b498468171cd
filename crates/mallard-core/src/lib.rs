//! Core types and traits for the Mallard classification framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Mallard workspace:
//! the call vocabulary, the animal and voice traits, the species
//! catalog, and the kind-selection seam.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod animal;
pub mod call;
pub mod catalog;
pub mod sampler;

pub use animal::{Animal, Voice};
pub use call::{Call, CallSet, CallSetIter};
pub use catalog::{Catalog, CatalogError, KindDef};
pub use sampler::Sampler;
