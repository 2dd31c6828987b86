//! The three-valued scalar type.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::logic::Logic;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("cannot convert Unknown to bool")]
    Unknown,

    #[error("invalid trit literal: {0}")]
    Parse(String),

    #[error("unknown operator: {0}")]
    UnknownOperator(String),
}

/// A single trinary digit.
///
/// The state is carried by the sign of the raw `i8`:
///
/// | raw   | state     |
/// |-------|-----------|
/// | `< 0` | `False`   |
/// | `0`   | `Unknown` |
/// | `> 0` | `True`    |
///
/// A value built with [`Trit::new`] keeps its raw encoding until it is
/// normalized with [`Trit::norm`]. Equality, ordering and hashing only look
/// at the state, so `Trit::new(7) == Trit::TRUE`.
#[derive(Debug, Default, Clone, Copy)]
#[repr(transparent)]
pub struct Trit(i8);

impl Trit {
    pub const FALSE: Trit = Trit(-1);
    pub const UNKNOWN: Trit = Trit(0);
    pub const TRUE: Trit = Trit(1);

    #[must_use]
    pub const fn new(raw: i8) -> Trit {
        Trit(raw)
    }

    /// Returns the raw encoding, which may lie outside `-1..=1`.
    #[must_use]
    pub const fn raw(self) -> i8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_false(self) -> bool {
        self.0 < 0
    }

    #[inline]
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_true(self) -> bool {
        self.0 > 0
    }

    /// Returns `true` if the value is either `True` or `False`.
    #[inline]
    #[must_use]
    pub const fn is_known(self) -> bool {
        !self.is_unknown()
    }

    /// Returns the canonical value for this state.
    #[must_use]
    pub const fn val(self) -> Trit {
        Trit(self.0.signum())
    }

    /// Rewrites the raw encoding to its canonical form.
    pub fn norm(&mut self) -> Trit {
        *self = self.val();
        *self
    }

    #[must_use]
    pub const fn to_int(self) -> i8 {
        self.0.signum()
    }

    #[must_use]
    pub const fn to_bool(self) -> Option<bool> {
        match self.to_int() {
            1 => Some(true),
            -1 => Some(false),
            _ => None,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self.to_int() {
            1 => 'T',
            -1 => 'F',
            _ => 'U',
        }
    }

    pub fn set(&mut self, v: impl Logic) -> Trit {
        *self = v.to_trit();
        *self
    }

    // Conditional mutators: each one only writes when the current state is
    // Unknown and returns the value held afterwards.

    pub fn set_if_unknown(&mut self, v: impl Logic) -> Trit {
        if self.is_unknown() {
            *self = v.to_trit();
        }
        *self
    }

    pub fn true_if_unknown(&mut self) -> Trit {
        self.set_if_unknown(Trit::TRUE)
    }

    pub fn false_if_unknown(&mut self) -> Trit {
        self.set_if_unknown(Trit::FALSE)
    }

    pub fn clean(&mut self) -> Trit {
        self.set_if_unknown(Trit::UNKNOWN)
    }
}

impl PartialEq for Trit {
    fn eq(&self, other: &Self) -> bool {
        self.to_int() == other.to_int()
    }
}

impl Eq for Trit {}

impl Hash for Trit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_int().hash(state);
    }
}

impl PartialOrd for Trit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Trit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_int().cmp(&other.to_int())
    }
}

impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_int() {
            1 => f.write_str("True"),
            -1 => f.write_str("False"),
            _ => f.write_str("Unknown"),
        }
    }
}

impl FromStr for Trit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Trit, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "1" | "+" => Ok(Trit::TRUE),
            "false" | "f" | "-1" | "-" => Ok(Trit::FALSE),
            "unknown" | "u" | "nil" | "null" | "0" => Ok(Trit::UNKNOWN),
            _ => Err(Error::Parse(s.to_string())),
        }
    }
}

impl From<Option<bool>> for Trit {
    fn from(value: Option<bool>) -> Trit {
        match value {
            Some(true) => Trit::TRUE,
            Some(false) => Trit::FALSE,
            None => Trit::UNKNOWN,
        }
    }
}

impl From<Trit> for Option<bool> {
    fn from(value: Trit) -> Option<bool> {
        value.to_bool()
    }
}

impl TryFrom<Trit> for bool {
    type Error = Error;

    fn try_from(value: Trit) -> Result<bool, Error> {
        value.to_bool().ok_or(Error::Unknown)
    }
}

impl Serialize for Trit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_bool().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Trit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Trit, D::Error> {
        Option::<bool>::deserialize(deserializer).map(Trit::from)
    }
}
