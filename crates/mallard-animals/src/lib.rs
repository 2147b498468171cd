//! Reference animal kinds for the Mallard classification framework.
//!
//! Provides the five standard kinds and the catalog the demo binary
//! draws from:
//!
//! | Kind | Declared calls | Sound |
//! |------|----------------|-------|
//! | [`Duck`] | quack | `Quack!` |
//! | [`Dog`] | bark | `Woof!` |
//! | [`Cat`] | meow | `Meow!` |
//! | [`Cow`] | moo | `Mooo!` |
//! | [`Donkey`] | honk | `HeeHoo!` |
//!
//! Exactly one standard kind declares the quack call. That is a fact
//! about this particular species list, not a rule: any number of kinds
//! may share a call, and the classifier never depends on uniqueness.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod cat;
pub mod cow;
pub mod dog;
pub mod donkey;
pub mod duck;

pub use cat::Cat;
pub use cow::Cow;
pub use dog::Dog;
pub use donkey::Donkey;
pub use duck::Duck;

use mallard_core::Catalog;

/// Build the standard five-kind catalog.
///
/// Declaration order is Duck, Dog, Cat, Cow, Donkey. Sampling draws
/// uniformly with replacement, so the order affects only positional
/// lookups, never classification outcomes.
pub fn standard_catalog() -> Catalog {
    let defs = vec![duck::def(), dog::def(), cat::def(), cow::def(), donkey::def()];
    Catalog::new(defs).expect("standard kind names are distinct")
}
