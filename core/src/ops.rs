//! The operator algebra.
//!
//! Every operand is read through its sign, so out-of-range encodings behave
//! exactly like the canonical value of the same state. The negated operators
//! (`nand`, `nor`, `nxor`, `nimp`, `nequiv`) are defined as `!` applied to
//! their positive counterpart, and `min`/`max` are `and`/`or`.

use crate::Trit;

impl Trit {
    /// False only when the input is False.
    #[must_use]
    pub const fn ma(self) -> Trit {
        if self.is_false() { Trit::FALSE } else { Trit::TRUE }
    }

    /// True only when the input is True.
    #[must_use]
    pub const fn la(self) -> Trit {
        if self.is_true() { Trit::TRUE } else { Trit::FALSE }
    }

    /// True only when the input is Unknown.
    #[must_use]
    pub const fn ia(self) -> Trit {
        if self.is_unknown() { Trit::TRUE } else { Trit::FALSE }
    }

    #[must_use]
    pub const fn and(self, rhs: Trit) -> Trit {
        if self.is_false() || rhs.is_false() {
            Trit::FALSE
        } else if self.is_unknown() || rhs.is_unknown() {
            Trit::UNKNOWN
        } else {
            Trit::TRUE
        }
    }

    #[must_use]
    pub const fn or(self, rhs: Trit) -> Trit {
        if self.is_true() || rhs.is_true() {
            Trit::TRUE
        } else if self.is_unknown() || rhs.is_unknown() {
            Trit::UNKNOWN
        } else {
            Trit::FALSE
        }
    }

    /// Unknown on either side yields Unknown, including `Unknown ^ Unknown`.
    #[must_use]
    pub const fn xor(self, rhs: Trit) -> Trit {
        if self.is_unknown() || rhs.is_unknown() {
            Trit::UNKNOWN
        } else if self.to_int() == rhs.to_int() {
            Trit::FALSE
        } else {
            Trit::TRUE
        }
    }

    #[must_use]
    pub fn nand(self, rhs: Trit) -> Trit {
        !self.and(rhs)
    }

    #[must_use]
    pub fn nor(self, rhs: Trit) -> Trit {
        !self.or(rhs)
    }

    #[must_use]
    pub fn nxor(self, rhs: Trit) -> Trit {
        !self.xor(rhs)
    }

    /// Lukasiewicz implication: `Unknown -> Unknown` is True.
    #[must_use]
    pub const fn imp(self, rhs: Trit) -> Trit {
        match (self.to_int(), rhs.to_int()) {
            (0, 0) | (-1, _) | (_, 1) => Trit::TRUE,
            (0, _) | (_, 0) => Trit::UNKNOWN,
            _ => Trit::FALSE,
        }
    }

    #[must_use]
    pub fn nimp(self, rhs: Trit) -> Trit {
        !self.imp(rhs)
    }

    /// Equivalence. Unknown is never equivalent to anything, itself included,
    /// so `Unknown.equiv(Unknown)` is Unknown even though
    /// `Trit::UNKNOWN == Trit::UNKNOWN`.
    #[must_use]
    pub const fn equiv(self, rhs: Trit) -> Trit {
        if self.is_unknown() || rhs.is_unknown() {
            Trit::UNKNOWN
        } else if self.to_int() == rhs.to_int() {
            Trit::TRUE
        } else {
            Trit::FALSE
        }
    }

    #[must_use]
    pub fn nequiv(self, rhs: Trit) -> Trit {
        !self.equiv(rhs)
    }

    #[must_use]
    pub const fn min(self, rhs: Trit) -> Trit {
        self.and(rhs)
    }

    #[must_use]
    pub const fn max(self, rhs: Trit) -> Trit {
        self.or(rhs)
    }
}

impl std::ops::Not for Trit {
    type Output = Trit;

    fn not(self) -> Trit {
        Trit::new(-self.to_int())
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $inherent:ident) => {
        impl std::ops::$trait for Trit {
            type Output = Trit;

            fn $method(self, rhs: Trit) -> Trit {
                Trit::$inherent(self, rhs)
            }
        }

        impl std::ops::$assign_trait for Trit {
            fn $assign_method(&mut self, rhs: Trit) {
                *self = Trit::$inherent(*self, rhs);
            }
        }
    };
}

impl_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, and);
impl_binop!(BitOr, bitor, BitOrAssign, bitor_assign, or);
impl_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, xor);
