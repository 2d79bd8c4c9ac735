//! Tokenizer and parser for single-line arithmetic input: expressions, equations, and solve
//! commands of the form `x: lhs = rhs`.

pub mod parser;
pub mod tokenizer;
