//! Named operators and truth-table rendering.

use std::{fmt, str::FromStr};

#[cfg(feature = "clap")]
use clap::{ValueEnum, builder::PossibleValue};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::{Error, Trit};

/// The three states in table order.
pub const STATES: [Trit; 3] = [Trit::FALSE, Trit::UNKNOWN, Trit::TRUE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum UnaryOp {
    Not,
    Ma,
    La,
    Ia,
}

impl UnaryOp {
    #[must_use]
    pub fn apply(self, a: Trit) -> Trit {
        match self {
            UnaryOp::Not => !a,
            UnaryOp::Ma => a.ma(),
            UnaryOp::La => a.la(),
            UnaryOp::Ia => a.ia(),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum BinaryOp {
    And,
    Or,
    Xor,
    Nand,
    Nor,
    Nxor,
    Imp,
    Nimp,
    Eq,
    Neq,
    Min,
    Max,
}

impl BinaryOp {
    #[must_use]
    pub fn apply(self, a: Trit, b: Trit) -> Trit {
        match self {
            BinaryOp::And => a.and(b),
            BinaryOp::Or => a.or(b),
            BinaryOp::Xor => a.xor(b),
            BinaryOp::Nand => a.nand(b),
            BinaryOp::Nor => a.nor(b),
            BinaryOp::Nxor => a.nxor(b),
            BinaryOp::Imp => a.imp(b),
            BinaryOp::Nimp => a.nimp(b),
            BinaryOp::Eq => a.equiv(b),
            BinaryOp::Neq => a.nequiv(b),
            BinaryOp::Min => a.min(b),
            BinaryOp::Max => a.max(b),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Any operator of the algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Unary(UnaryOp),
    Binary(BinaryOp),
}

impl Op {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Op::Unary(op) => op.name(),
            Op::Binary(op) => op.name(),
        }
    }

    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Op::Unary(_) => 1,
            Op::Binary(_) => 2,
        }
    }

    /// Iterates unary operators first, then binary ones.
    pub fn iter() -> impl Iterator<Item = Op> {
        UnaryOp::iter()
            .map(Op::Unary)
            .chain(BinaryOp::iter().map(Op::Binary))
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnaryOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<UnaryOp, Error> {
        UnaryOp::iter()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownOperator(s.to_string()))
    }
}

impl FromStr for BinaryOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<BinaryOp, Error> {
        BinaryOp::iter()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownOperator(s.to_string()))
    }
}

impl FromStr for Op {
    type Err = Error;

    fn from_str(s: &str) -> Result<Op, Error> {
        Op::iter()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownOperator(s.to_string()))
    }
}

pub const ALL_OPS: &[Op] = &[
    Op::Unary(UnaryOp::Not),
    Op::Unary(UnaryOp::Ma),
    Op::Unary(UnaryOp::La),
    Op::Unary(UnaryOp::Ia),
    Op::Binary(BinaryOp::And),
    Op::Binary(BinaryOp::Or),
    Op::Binary(BinaryOp::Xor),
    Op::Binary(BinaryOp::Nand),
    Op::Binary(BinaryOp::Nor),
    Op::Binary(BinaryOp::Nxor),
    Op::Binary(BinaryOp::Imp),
    Op::Binary(BinaryOp::Nimp),
    Op::Binary(BinaryOp::Eq),
    Op::Binary(BinaryOp::Neq),
    Op::Binary(BinaryOp::Min),
    Op::Binary(BinaryOp::Max),
];

#[cfg(feature = "clap")]
impl ValueEnum for Op {
    fn value_variants<'a>() -> &'a [Self] {
        ALL_OPS
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.name()))
    }
}

/// Renders an operator's truth table, one row per operand combination:
///
/// ```text
/// A | B | AND
/// --+---+----
/// F | F | F
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruthTable(Op);

impl TruthTable {
    #[must_use]
    pub const fn new(op: Op) -> TruthTable {
        TruthTable(op)
    }

    /// Returns every `(inputs, output)` row in table order.
    #[must_use]
    pub fn rows(&self) -> Vec<(Vec<Trit>, Trit)> {
        match self.0 {
            Op::Unary(op) => STATES.iter().map(|&a| (vec![a], op.apply(a))).collect(),
            Op::Binary(op) => STATES
                .iter()
                .flat_map(|&a| STATES.iter().map(move |&b| (vec![a, b], op.apply(a, b))))
                .collect(),
        }
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.0.name().to_ascii_uppercase();
        let dashes = "-".repeat(name.len() + 1);
        match self.0 {
            Op::Unary(_) => {
                writeln!(f, "A | {name}")?;
                write!(f, "--+{dashes}")?;
            }
            Op::Binary(_) => {
                writeln!(f, "A | B | {name}")?;
                write!(f, "--+---+{dashes}")?;
            }
        }
        for (inputs, output) in self.rows() {
            f.write_str("\n")?;
            for input in inputs {
                write!(f, "{} | ", input.symbol())?;
            }
            write!(f, "{}", output.symbol())?;
        }
        Ok(())
    }
}
