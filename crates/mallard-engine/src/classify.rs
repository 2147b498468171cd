//! The capability probe and the classification report.
//!
//! The probe asks each instance for the quack call by capability
//! ([`Animal::voice`]), never by type. A present voice is invoked, its
//! sound becoming part of the report, and the instance classifies as a
//! duck; an absent voice is the ordinary "not a duck" outcome, not an
//! error.
//!
//! Report lines are format-stable:
//!
//! ```text
//! Quack!
//! A  Duck !
//! Not a Duck... 	a Cow
//! ```
//!
//! The double space after `A`, the space before `!`, and the literal
//! tab after the ellipsis are all part of the format.

use std::io::Write;

use mallard_core::{Animal, Call, Catalog};

use crate::config::RunConfig;
use crate::error::RunError;
use crate::roster::Roster;

// ── Classification ─────────────────────────────────────────────────

/// Outcome of probing one instance for the quack call.
///
/// Carries the kind's display name either way, so reports and tests
/// can name the animal without re-probing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    /// The instance voices the quack call.
    Duck {
        /// Display name of the instance's kind.
        kind_name: &'static str,
    },
    /// The instance does not voice the quack call.
    NotADuck {
        /// Display name of the instance's kind.
        kind_name: &'static str,
    },
}

impl Classification {
    /// Display name of the classified instance's kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Duck { kind_name } | Self::NotADuck { kind_name } => kind_name,
        }
    }

    /// Returns `true` for [`Classification::Duck`].
    pub fn is_duck(&self) -> bool {
        matches!(self, Self::Duck { .. })
    }
}

// ── Probe ──────────────────────────────────────────────────────────

/// Probe one instance for the quack call and write its report lines.
///
/// A quacking instance emits its sound first, then the verdict line
/// `A  <KindName> !`. A non-quacking instance emits the single line
/// `Not a Duck... <TAB>a <KindName>`.
///
/// # Errors
///
/// Only sink failures ([`RunError::Io`]). A missing capability is a
/// [`Classification::NotADuck`], never an error.
pub fn probe(animal: &dyn Animal, out: &mut dyn Write) -> Result<Classification, RunError> {
    let kind_name = animal.kind_name();
    match animal.voice(Call::Quack) {
        Some(voice) => {
            voice.utter(out)?;
            writeln!(out, "A  {kind_name} !")?;
            Ok(Classification::Duck { kind_name })
        }
        None => {
            writeln!(out, "Not a Duck... \ta {kind_name}")?;
            Ok(Classification::NotADuck { kind_name })
        }
    }
}

/// Probe every roster instance in generation order.
///
/// Writes one report block per instance to `out` and returns the
/// classifications in the same order.
pub fn classify(roster: &Roster, out: &mut dyn Write) -> Result<Vec<Classification>, RunError> {
    let mut results = Vec::with_capacity(roster.len());
    for animal in roster.iter() {
        results.push(probe(animal, out)?);
    }
    Ok(results)
}

// ── Run ────────────────────────────────────────────────────────────

/// One complete classification run: generate, probe, report.
///
/// Equivalent to [`Roster::generate`] followed by [`classify`]. The
/// configuration is consumed; its sampler advances as it draws.
///
/// # Errors
///
/// Any [`RunError`] from generation or report emission.
pub fn run(
    catalog: &Catalog,
    mut config: RunConfig,
    out: &mut dyn Write,
) -> Result<Vec<Classification>, RunError> {
    let roster = Roster::generate(catalog, config.count, config.sampler.as_mut())?;
    classify(&roster, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mallard_animals::{Cat, Duck};

    #[test]
    fn probing_a_duck_emits_sound_then_verdict() {
        let mut out = Vec::new();

        let result = probe(&Duck, &mut out).unwrap();

        assert_eq!(result, Classification::Duck { kind_name: "Duck" });
        assert_eq!(out, b"Quack!\nA  Duck !\n");
    }

    #[test]
    fn probing_a_cat_emits_the_refusal_line() {
        let mut out = Vec::new();

        let result = probe(&Cat, &mut out).unwrap();

        assert_eq!(result, Classification::NotADuck { kind_name: "Cat" });
        assert_eq!(out, b"Not a Duck... \ta Cat\n");
    }

    #[test]
    fn classification_accessors() {
        let duck = Classification::Duck { kind_name: "Duck" };
        let cow = Classification::NotADuck { kind_name: "Cow" };

        assert!(duck.is_duck());
        assert!(!cow.is_duck());
        assert_eq!(duck.kind_name(), "Duck");
        assert_eq!(cow.kind_name(), "Cow");
    }
}
