//! The donkey: honks, does not quack.

use std::io::{self, Write};

use mallard_core::{Animal, Call, CallSet, KindDef, Voice};

/// A donkey. Honks, in its own way.
#[derive(Clone, Copy, Debug, Default)]
pub struct Donkey;

/// Kind definition for [`Donkey`]: declares `{honk}`.
pub fn def() -> KindDef {
    KindDef::new("Donkey", CallSet::empty().with(Call::Honk), || {
        Box::new(Donkey)
    })
}

impl Voice for Donkey {
    fn utter(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "HeeHoo!")
    }
}

impl Animal for Donkey {
    fn kind_name(&self) -> &'static str {
        "Donkey"
    }

    fn voice(&self, call: Call) -> Option<&dyn Voice> {
        match call {
            Call::Honk => Some(self),
            _ => None,
        }
    }
}
