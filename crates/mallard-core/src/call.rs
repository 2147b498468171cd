//! The call vocabulary and the [`CallSet`] bitset.

use std::fmt;

/// A named vocal capability an animal kind may declare.
///
/// The vocabulary is fixed at five calls. Kinds declare any subset of
/// them, including none; classification probes for exactly one of them
/// ([`Call::Quack`]) and never asks who is doing the calling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Call {
    /// The duck call.
    Quack,
    /// The dog call.
    Bark,
    /// The cat call.
    Meow,
    /// The cow call.
    Moo,
    /// The donkey call.
    Honk,
}

impl Call {
    /// Every call in the vocabulary, in canonical order.
    pub const ALL: [Call; 5] = [Call::Quack, Call::Bark, Call::Meow, Call::Moo, Call::Honk];

    /// Lowercase label for display and diagnostics.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quack => "quack",
            Self::Bark => "bark",
            Self::Meow => "meow",
            Self::Moo => "moo",
            Self::Honk => "honk",
        }
    }

    /// Position in [`Call::ALL`]; doubles as the bit index in a [`CallSet`].
    const fn bit(self) -> u8 {
        match self {
            Self::Quack => 0,
            Self::Bark => 1,
            Self::Meow => 2,
            Self::Moo => 3,
            Self::Honk => 4,
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A set of calls implemented as a single-byte bitset.
///
/// Used by kind definitions to declare which calls their instances
/// voice, enabling catalogs to be checked for coherence between
/// declaration and behavior. The vocabulary is small and fixed, so the
/// whole set fits in one `u8` and copies freely.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct CallSet {
    bits: u8,
}

impl CallSet {
    /// Create an empty call set.
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Return a copy of the set with `call` added.
    ///
    /// Chainable, so fixed declarations read as a literal:
    /// `CallSet::empty().with(Call::Quack)`.
    pub const fn with(self, call: Call) -> Self {
        Self {
            bits: self.bits | 1u8 << call.bit(),
        }
    }

    /// Insert a call into the set.
    pub fn insert(&mut self, call: Call) {
        self.bits |= 1u8 << call.bit();
    }

    /// Check whether the set contains a call.
    pub const fn contains(self, call: Call) -> bool {
        (self.bits & (1u8 << call.bit())) != 0
    }

    /// Return the union of two sets (`self | other`).
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Return the intersection of two sets (`self & other`).
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Return the set difference (`self - other`): calls in `self` but not `other`.
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Check whether `self` is a subset of `other`.
    pub const fn is_subset(self, other: Self) -> bool {
        (self.bits & !other.bits) == 0
    }

    /// Returns `true` if the set contains no calls.
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the number of calls in the set.
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterate over the calls in the set, in canonical order.
    pub fn iter(self) -> CallSetIter {
        CallSetIter {
            bits: self.bits,
            index: 0,
        }
    }
}

impl fmt::Debug for CallSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Call> for CallSet {
    fn from_iter<I: IntoIterator<Item = Call>>(iter: I) -> Self {
        let mut set = Self::empty();
        for call in iter {
            set.insert(call);
        }
        set
    }
}

impl IntoIterator for CallSet {
    type Item = Call;
    type IntoIter = CallSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the calls in a [`CallSet`], yielding calls in canonical order.
pub struct CallSetIter {
    bits: u8,
    index: usize,
}

impl Iterator for CallSetIter {
    type Item = Call;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < Call::ALL.len() {
            let call = Call::ALL[self.index];
            self.index += 1;
            if (self.bits & (1u8 << call.bit())) != 0 {
                return Some(call);
            }
        }
        None
    }
}
