//! The [`Animal`] and [`Voice`] traits.
//!
//! Animals are live instances spawned from a catalog. They answer one
//! kind of question: "can you make this call?" The answer is a behavior
//! object, never a type name, so callers act on what an instance can do
//! rather than on what it is.

use std::io::{self, Write};

use crate::call::Call;

/// A single vocal behavior bound to one call.
///
/// The behavior's only operation is producing its sound. Output goes to
/// a caller-supplied sink: stdout in the demo binary, a byte buffer in
/// tests.
pub trait Voice {
    /// Write this voice's sound as one newline-terminated line.
    fn utter(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// A live animal instance spawned from a kind definition.
///
/// # Contract
///
/// - `kind_name()` returns the display name of the kind that spawned
///   this instance, stable for the instance's lifetime.
/// - `voice(call)` is the capability query: it returns `Some` exactly
///   for the calls the kind declares. Absence is an ordinary `None`,
///   never a panic or an error.
/// - Instances are immutable after creation; probing one has no effect
///   on any other.
///
/// # Object safety
///
/// This trait is object-safe; rosters store instances as
/// `Box<dyn Animal>`.
///
/// # Examples
///
/// A minimal kind with a single call:
///
/// ```
/// use std::io::{self, Write};
/// use mallard_core::{Animal, Call, Voice};
///
/// struct Goose;
///
/// impl Voice for Goose {
///     fn utter(&self, out: &mut dyn Write) -> io::Result<()> {
///         writeln!(out, "Honk!")
///     }
/// }
///
/// impl Animal for Goose {
///     fn kind_name(&self) -> &'static str { "Goose" }
///
///     fn voice(&self, call: Call) -> Option<&dyn Voice> {
///         match call {
///             Call::Honk => Some(self),
///             _ => None,
///         }
///     }
/// }
///
/// let goose = Goose;
/// assert!(goose.voice(Call::Honk).is_some());
/// assert!(goose.voice(Call::Quack).is_none());
/// ```
pub trait Animal {
    /// Display name of this instance's kind.
    fn kind_name(&self) -> &'static str;

    /// Look up the behavior for `call`, if this kind voices it.
    fn voice(&self, call: Call) -> Option<&dyn Voice>;
}
