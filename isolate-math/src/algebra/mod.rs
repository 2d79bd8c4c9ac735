//! Algebraic manipulation of arithmetic expressions.
//!
//! - [`expr`] defines the expression tree and its structural equality.
//! - [`pattern`] provides small extractors used to dispatch on expression shapes.
//! - [`simplify`] normalizes expressions with constant folding and identity rules.
//! - [`solve`] isolates a variable by breadth-first search over rewritten equations.

pub mod expr;
pub mod pattern;
pub mod simplify;
pub mod solve;
