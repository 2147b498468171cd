//! Error types for the classification engine.
//!
//! Capability absence is deliberately not represented here: an instance
//! that cannot quack is the ordinary "not a duck" outcome, reported as
//! a [`Classification`](crate::classify::Classification), never as an
//! error.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors from roster generation and report emission.
#[derive(Debug)]
pub enum RunError {
    /// A non-empty roster was requested from a catalog with no kinds.
    EmptyCatalog {
        /// Number of instances that were requested.
        requested: usize,
    },
    /// The sampler picked an index outside the catalog.
    PickOutOfRange {
        /// The out-of-range pick.
        index: usize,
        /// Number of kinds in the catalog.
        kind_count: usize,
    },
    /// Writing to the report sink failed.
    Io(io::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCatalog { requested } => {
                write!(f, "cannot generate {requested} instances from an empty catalog")
            }
            Self::PickOutOfRange { index, kind_count } => {
                write!(
                    f,
                    "sampler picked kind index {index}, but the catalog has {kind_count} kinds"
                )
            }
            Self::Io(err) => write!(f, "report output failed: {err}"),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for RunError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
