//! Symbolic core for isolating a variable in an arithmetic equation.
//!
//! Expressions are parsed with [`isolate_parser`], converted into the algebraic
//! [`Expr`](algebra::expr::Expr) type, normalized with [`simplify`](algebra::simplify::simplify),
//! and solved with [`solve_for`](algebra::solve::solve_for).

pub mod algebra;
pub mod step;

pub use algebra::{
    expr::{find_vars_in_expr, Expr},
    simplify::{simplify, simplify_with, simplify_with_steps, RuleSet},
    solve::{solve_for, solve_for_with, Job, Solution, SolveError, SolveOptions, SolveOptionsBuilder},
};
