//! The duck: the one standard kind that voices the quack call.
//!
//! The duck is the reference point of the whole demo. Its declared
//! call set is `{quack}`, so the classifier's probe finds a voice here
//! and nowhere else in the standard catalog.
//!
//! # Construction
//!
//! ```
//! use mallard_animals::duck;
//!
//! let def = duck::def();
//! assert_eq!(def.name(), "Duck");
//! ```

use std::io::{self, Write};

use mallard_core::{Animal, Call, CallSet, KindDef, Voice};

/// A duck. Quacks.
#[derive(Clone, Copy, Debug, Default)]
pub struct Duck;

/// Kind definition for [`Duck`]: declares `{quack}`.
pub fn def() -> KindDef {
    KindDef::new("Duck", CallSet::empty().with(Call::Quack), || Box::new(Duck))
}

impl Voice for Duck {
    fn utter(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Quack!")
    }
}

impl Animal for Duck {
    fn kind_name(&self) -> &'static str {
        "Duck"
    }

    fn voice(&self, call: Call) -> Option<&dyn Voice> {
        match call {
            Call::Quack => Some(self),
            _ => None,
        }
    }
}
