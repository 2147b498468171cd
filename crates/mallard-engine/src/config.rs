//! Run configuration and count parsing.
//!
//! [`RunConfig`] is the input to [`run()`](crate::classify::run): how
//! many instances to generate and which sampling strategy draws them.
//! [`parse_count`] is the command-line boundary where count validity
//! is decided; the engine itself takes `usize`, so a negative count
//! can only ever exist as text.

use std::error::Error;
use std::fmt;

use crate::sampler::{Sampler, UniformSampler};

/// Number of instances generated when no count is given.
pub const DEFAULT_COUNT: usize = 10;

// ── RunConfig ──────────────────────────────────────────────────────

/// Complete configuration for one classification run.
pub struct RunConfig {
    /// Number of animal instances to generate. Zero is a valid,
    /// trivially successful run.
    pub count: usize,
    /// Kind-selection strategy. Production runs keep the default
    /// entropy-seeded uniform sampler; tests inject scripted samplers
    /// here to force exact rosters.
    pub sampler: Box<dyn Sampler>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            sampler: Box::new(UniformSampler::from_entropy()),
        }
    }
}

impl fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunConfig")
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

// ── Count parsing ──────────────────────────────────────────────────

/// Errors from parsing a count argument.
///
/// Each variant is a usage error: the run is rejected before any
/// instance is generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CountError {
    /// The argument is not an integer at all.
    NotAnInteger {
        /// The offending argument text.
        given: String,
    },
    /// The argument is an integer, but below zero.
    Negative {
        /// The parsed negative value.
        given: i64,
    },
    /// The argument is an integer, but exceeds `usize::MAX`.
    Overflow {
        /// The parsed value.
        given: i64,
    },
}

impl fmt::Display for CountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnInteger { given } => {
                write!(f, "count must be an integer, got '{given}'")
            }
            Self::Negative { given } => {
                write!(f, "count must be non-negative, got {given}")
            }
            Self::Overflow { given } => {
                write!(f, "count {given} exceeds usize::MAX")
            }
        }
    }
}

impl Error for CountError {}

/// Parse an instance count from command-line text.
///
/// Surrounding whitespace is accepted. Negative integers are reported
/// as [`CountError::Negative`] and non-negative integers too large
/// for `usize` as [`CountError::Overflow`]; everything else that
/// fails to parse, including integers beyond the `i64` range, is
/// [`CountError::NotAnInteger`].
pub fn parse_count(raw: &str) -> Result<usize, CountError> {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(n) if n < 0 => Err(CountError::Negative { given: n }),
        Ok(n) => usize::try_from(n).map_err(|_| CountError::Overflow { given: n }),
        Err(_) => Err(CountError::NotAnInteger {
            given: trimmed.to_string(),
        }),
    }
}
