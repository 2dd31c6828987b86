//! Three-valued logic with the states False, Unknown and True.
//!
//! [`Trit`] carries the value, its methods and the `!`, `&`, `|`, `^`
//! operators implement the algebra, [`logic`] offers the same operators over
//! any [`Logic`] source, and [`reduce`] folds whole slices.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_in_result)]

pub mod logic;
mod ops;
mod random;
pub mod reduce;
pub mod table;
mod trit;

pub use logic::Logic;
pub use reduce::{Config, all, any, known, none, parallel_tasks};
pub use table::{BinaryOp, Op, TruthTable, UnaryOp};
pub use trit::{Error, Trit};
