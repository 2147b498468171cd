//! Classification engine for the Mallard framework.
//!
//! Orchestrates one classification run over a species catalog:
//!
//! 1. [`Roster::generate`] draws random kinds and spawns instances.
//! 2. [`probe`] asks each instance for the quack call by capability.
//! 3. [`classify`] and [`run`] report one verdict per instance, in
//!    generation order, to a caller-supplied sink.
//!
//! Randomness enters only through the [`Sampler`] seam, so tests force
//! exact rosters and production runs draw from entropy with the same
//! code path.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod classify;
pub mod config;
pub mod error;
pub mod roster;
pub mod sampler;

pub use classify::{classify, probe, run, Classification};
pub use config::{parse_count, CountError, RunConfig, DEFAULT_COUNT};
pub use error::RunError;
pub use roster::Roster;
pub use sampler::{Sampler, UniformSampler};
