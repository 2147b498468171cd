//! The cat: meows, does not quack.

use std::io::{self, Write};

use mallard_core::{Animal, Call, CallSet, KindDef, Voice};

/// A cat. Meows.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cat;

/// Kind definition for [`Cat`]: declares `{meow}`.
pub fn def() -> KindDef {
    KindDef::new("Cat", CallSet::empty().with(Call::Meow), || Box::new(Cat))
}

impl Voice for Cat {
    fn utter(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Meow!")
    }
}

impl Animal for Cat {
    fn kind_name(&self) -> &'static str {
        "Cat"
    }

    fn voice(&self, call: Call) -> Option<&dyn Voice> {
        match call {
            Call::Meow => Some(self),
            _ => None,
        }
    }
}
