//! Extractors for dispatching on the shape of an [`Expr`].
//!
//! Each `do_*` function checks whether an expression is of a certain variant and, if so, calls
//! the given handler with the unwrapped payload. The handler returns an [`Option`], so it can
//! refine the match further (for example, by checking that a constant is zero). If the variant
//! does not match, the handler is not called and [`None`] is returned.
//!
//! Matchers compose with `?` and [`Option::or_else`], or with [`first_of`], which tries a list of
//! matchers in order.

use isolate_parser::parser::token::op::BinOpKind;
use super::expr::Expr;

/// Calls `f` with the value of a [`Expr::Constant`].
pub fn do_constant<T>(expr: &Expr, f: impl FnOnce(f64) -> Option<T>) -> Option<T> {
    match expr {
        Expr::Constant(value) => f(*value),
        _ => None,
    }
}

/// Calls `f` with the name of a [`Expr::Variable`].
pub fn do_variable<'a, T>(expr: &'a Expr, f: impl FnOnce(&'a str) -> Option<T>) -> Option<T> {
    match expr {
        Expr::Variable(name) => f(name),
        _ => None,
    }
}

/// Calls `f` if the expression is the [`Expr::Variable`] named `name`.
pub fn do_named_variable<T>(expr: &Expr, name: &str, f: impl FnOnce() -> Option<T>) -> Option<T> {
    do_variable(expr, |var| if var == name { f() } else { None })
}

/// Calls `f` with the operand of a [`Expr::Negation`].
pub fn do_negation<'a, T>(expr: &'a Expr, f: impl FnOnce(&'a Expr) -> Option<T>) -> Option<T> {
    match expr {
        Expr::Negation(operand) => f(operand),
        _ => None,
    }
}

/// Calls `f` with the operator and both operands of a [`Expr::Binary`].
pub fn do_binary<'a, T>(
    expr: &'a Expr,
    f: impl FnOnce(BinOpKind, &'a Expr, &'a Expr) -> Option<T>,
) -> Option<T> {
    match expr {
        Expr::Binary(op, lhs, rhs) => f(*op, lhs, rhs),
        _ => None,
    }
}

/// Calls `f` with both operands of a [`Expr::Binary`] whose operator is `op`.
pub fn do_binary_op<'a, T>(
    expr: &'a Expr,
    op: BinOpKind,
    f: impl FnOnce(&'a Expr, &'a Expr) -> Option<T>,
) -> Option<T> {
    do_binary(expr, |found, lhs, rhs| if found == op { f(lhs, rhs) } else { None })
}

/// Tries each matcher in order and returns the first non-empty result. Later matchers are not
/// called once one succeeds.
pub fn first_of<T>(expr: &Expr, matchers: &[&dyn Fn(&Expr) -> Option<T>]) -> Option<T> {
    matchers.iter().find_map(|matcher| matcher(expr))
}
