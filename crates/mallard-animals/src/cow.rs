//! The cow: moos, does not quack.

use std::io::{self, Write};

use mallard_core::{Animal, Call, CallSet, KindDef, Voice};

/// A cow. Moos.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cow;

/// Kind definition for [`Cow`]: declares `{moo}`.
pub fn def() -> KindDef {
    KindDef::new("Cow", CallSet::empty().with(Call::Moo), || Box::new(Cow))
}

impl Voice for Cow {
    fn utter(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Mooo!")
    }
}

impl Animal for Cow {
    fn kind_name(&self) -> &'static str {
        "Cow"
    }

    fn voice(&self, call: Call) -> Option<&dyn Voice> {
        match call {
            Call::Moo => Some(self),
            _ => None,
        }
    }
}
