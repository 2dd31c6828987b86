//! Conversion of plain Rust values into [`Trit`] and free-function forms of
//! the operators.
//!
//! `bool` maps directly onto True/False. Numbers map by sign: zero is
//! Unknown, positive is True, negative is False. Unsigned numbers therefore
//! never produce False, and a floating-point NaN is Unknown.

use crate::Trit;

/// A value with a total mapping onto [`Trit`].
pub trait Logic: Copy {
    fn to_trit(self) -> Trit;
}

impl Logic for Trit {
    #[inline]
    fn to_trit(self) -> Trit {
        self
    }
}

impl Logic for bool {
    #[inline]
    fn to_trit(self) -> Trit {
        if self { Trit::TRUE } else { Trit::FALSE }
    }
}

impl From<bool> for Trit {
    fn from(value: bool) -> Trit {
        value.to_trit()
    }
}

macro_rules! impl_logic_signed {
    ($($ty:ty),*) => {
        $(
            impl Logic for $ty {
                #[inline]
                fn to_trit(self) -> Trit {
                    match self.cmp(&0) {
                        std::cmp::Ordering::Less => Trit::FALSE,
                        std::cmp::Ordering::Equal => Trit::UNKNOWN,
                        std::cmp::Ordering::Greater => Trit::TRUE,
                    }
                }
            }

            impl From<$ty> for Trit {
                fn from(value: $ty) -> Trit {
                    value.to_trit()
                }
            }
        )*
    };
}

macro_rules! impl_logic_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Logic for $ty {
                #[inline]
                fn to_trit(self) -> Trit {
                    if self == 0 { Trit::UNKNOWN } else { Trit::TRUE }
                }
            }

            impl From<$ty> for Trit {
                fn from(value: $ty) -> Trit {
                    value.to_trit()
                }
            }
        )*
    };
}

macro_rules! impl_logic_float {
    ($($ty:ty),*) => {
        $(
            impl Logic for $ty {
                #[inline]
                fn to_trit(self) -> Trit {
                    if self > 0.0 {
                        Trit::TRUE
                    } else if self < 0.0 {
                        Trit::FALSE
                    } else {
                        Trit::UNKNOWN
                    }
                }
            }

            impl From<$ty> for Trit {
                fn from(value: $ty) -> Trit {
                    value.to_trit()
                }
            }
        )*
    };
}

impl_logic_signed!(i8, i16, i32, i64, i128, isize);
impl_logic_unsigned!(u8, u16, u32, u64, u128, usize);
impl_logic_float!(f32, f64);

/// Writes `v` into `t` if `t` is Unknown and returns the resulting value.
pub fn set_if_unknown(t: &mut Trit, v: impl Logic) -> Trit {
    t.set_if_unknown(v)
}

#[must_use]
pub fn not(a: impl Logic) -> Trit {
    !a.to_trit()
}

macro_rules! unary {
    ($($name:ident),*) => {
        $(
            #[must_use]
            pub fn $name(a: impl Logic) -> Trit {
                a.to_trit().$name()
            }
        )*
    };
}

macro_rules! binary {
    ($($name:ident),*) => {
        $(
            #[must_use]
            pub fn $name(a: impl Logic, b: impl Logic) -> Trit {
                a.to_trit().$name(b.to_trit())
            }
        )*
    };
}

unary!(ma, la, ia);
binary!(and, or, xor, nand, nor, nxor, imp, nimp, equiv, nequiv, min, max);

#[cfg(test)]
mod tests;
