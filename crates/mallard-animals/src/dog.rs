//! The dog: barks, does not quack.

use std::io::{self, Write};

use mallard_core::{Animal, Call, CallSet, KindDef, Voice};

/// A dog. Barks.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dog;

/// Kind definition for [`Dog`]: declares `{bark}`.
pub fn def() -> KindDef {
    KindDef::new("Dog", CallSet::empty().with(Call::Bark), || Box::new(Dog))
}

impl Voice for Dog {
    fn utter(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Woof!")
    }
}

impl Animal for Dog {
    fn kind_name(&self) -> &'static str {
        "Dog"
    }

    fn voice(&self, call: Call) -> Option<&dyn Voice> {
        match call {
            Call::Bark => Some(self),
            _ => None,
        }
    }
}
