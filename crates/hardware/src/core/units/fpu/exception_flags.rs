//! Floating-point exception flags.
//!
//! Every arithmetic result travels with the set of exceptions it raised.
//! Flags are sticky: they are only ever OR-ed together, never cleared by an
//! operation.
//!
//! | Bit  | Flag | Description         |
//! |------|------|---------------------|
//! | 0x01 | NV   | Invalid Operation   |
//! | 0x02 | OF   | Overflow            |
//! | 0x04 | UF   | Underflow           |
//! | 0x08 | DZ   | Divide by Zero      |
//! | 0x10 | NX   | Inexact             |

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::Serialize;

/// Floating-point exception flag set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FpFlags(u8);

impl FpFlags {
    /// No exceptions raised.
    pub const NONE: Self = Self(0);
    /// Invalid Operation.
    pub const NV: Self = Self(0x01);
    /// Overflow.
    pub const OF: Self = Self(0x02);
    /// Underflow.
    pub const UF: Self = Self(0x04);
    /// Divide by Zero.
    pub const DZ: Self = Self(0x08);
    /// Inexact.
    pub const NX: Self = Self(0x10);

    /// Every individual flag paired with its mnemonic, lowest bit first.
    pub const ALL: [(Self, &'static str); 5] = [
        (Self::NV, "NV"),
        (Self::OF, "OF"),
        (Self::UF, "UF"),
        (Self::DZ, "DZ"),
        (Self::NX, "NX"),
    ];

    /// Builds a flag set from its raw 5-bit encoding. Unknown bits are discarded.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0x1F)
    }

    /// Returns the raw 5-bit flag value.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if no flags are set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every flag in `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Iterates the individual flags present in this set.
    pub fn iter(self) -> impl Iterator<Item = (Self, &'static str)> {
        Self::ALL.into_iter().filter(move |(f, _)| self.contains(*f))
    }
}

impl BitOr for FpFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for FpFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for FpFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        let mut first = true;
        for (_, name) in self.iter() {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}
