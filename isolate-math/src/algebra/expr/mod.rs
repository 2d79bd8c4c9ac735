//! The expression tree manipulated by the simplifier and the solver.
//!
//! The [`Expr`](isolate_parser::parser::expr::Expr) produced by `isolate_parser` carries spans and
//! parentheses, which is what error reporting needs but not what rewriting needs. This module
//! defines a separate, span-free [`Expr`] with exactly four variants. Every node exclusively owns
//! its children, so cloning is a deep copy and there is no sharing between trees.
//!
//! # Structural equality
//!
//! Two expressions are equal if they have the same variant, the same operator, and pairwise equal
//! children in the same order. No algebraic reasoning is involved: `x + y` and `y + x` are
//! different expressions.
//!
//! Constants compare with a total equality, so that [`Expr`] can implement [`Eq`] and [`Hash`]
//! and be used as a set key: `NaN` equals `NaN`, and `0.0` equals `-0.0`. Constant folding can
//! produce either of these, and the solver must still recognize jobs containing them as
//! duplicates.

mod iter;

use isolate_parser::parser::{
    expr::Expr as AstExpr,
    literal::Literal,
    token::op::{BinOpKind, UnaryOpKind},
};
use iter::ExprIter;
use std::{
    collections::HashSet,
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Add, Div, Mul, Neg, Sub},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An arithmetic expression.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A numeric literal, such as `2` or `3.5`.
    Constant(f64),

    /// A named variable, such as `x` or `zz`.
    Variable(String),

    /// The negation of the operand, `-x`.
    Negation(Box<Expr>),

    /// A binary operation, `lhs op rhs`.
    Binary(BinOpKind, Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Creates a [`Expr::Constant`].
    pub fn constant(value: f64) -> Self {
        Self::Constant(value)
    }

    /// Creates a [`Expr::Variable`].
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates a [`Expr::Binary`] from the operator and both operands.
    pub fn binary(op: BinOpKind, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// If the expression is a [`Expr::Constant`], returns the contained value.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// If the expression is a [`Expr::Variable`], returns the variable name.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if the expression is exactly the variable with the given name.
    pub fn is_variable(&self, name: &str) -> bool {
        self.as_variable() == Some(name)
    }

    /// Returns true if the variable with the given name appears anywhere in the expression.
    pub fn contains_variable(&self, name: &str) -> bool {
        self.post_order_iter().any(|expr| expr.is_variable(name))
    }

    /// Returns true if every constant in the expression is finite.
    pub fn is_finite(&self) -> bool {
        self.post_order_iter()
            .all(|expr| expr.as_constant().map_or(true, f64::is_finite))
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }
}

/// Returns the names of all variables appearing anywhere in the expression.
pub fn find_vars_in_expr(expr: &Expr) -> HashSet<String> {
    expr.post_order_iter()
        .filter_map(Expr::as_variable)
        .map(str::to_owned)
        .collect()
}

/// Bit pattern used to hash a constant, consistent with the total equality on constants.
fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Constant(a), Self::Constant(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Variable(a), Self::Variable(b)) => a == b,
            (Self::Negation(a), Self::Negation(b)) => a == b,
            (Self::Binary(op_a, lhs_a, rhs_a), Self::Binary(op_b, lhs_b, rhs_b)) => {
                op_a == op_b && lhs_a == lhs_b && rhs_a == rhs_b
            },
            _ => false,
        }
    }
}

impl Eq for Expr {}

impl Hash for Expr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Self::Constant(value) => canonical_bits(*value).hash(state),
            Self::Variable(name) => name.hash(state),
            Self::Negation(operand) => operand.hash(state),
            Self::Binary(op, lhs, rhs) => {
                op.hash(state);
                lhs.hash(state);
                rhs.hash(state);
            },
        }
    }
}

/// Renders the canonical, fully parenthesized form: `(lhs op rhs)` for binary operations and
/// `-(operand)` for negations.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{}", value),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Negation(operand) => write!(f, "-({})", operand),
            Self::Binary(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}

impl From<AstExpr> for Expr {
    fn from(expr: AstExpr) -> Self {
        match expr {
            AstExpr::Literal(Literal::Number(num)) => Self::Constant(num.value),
            AstExpr::Literal(Literal::Symbol(sym)) => Self::Variable(sym.name),
            AstExpr::Paren(paren) => Self::from(*paren.expr),
            AstExpr::Unary(unary) => match unary.op.kind {
                UnaryOpKind::Neg => Self::Negation(Box::new(Self::from(*unary.operand))),
            },
            AstExpr::Binary(binary) => Self::binary(
                binary.op.kind,
                Self::from(*binary.lhs),
                Self::from(*binary.rhs),
            ),
        }
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Self) -> Self::Output {
        Self::binary(BinOpKind::Add, self, rhs)
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::binary(BinOpKind::Sub, self, rhs)
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::binary(BinOpKind::Mul, self, rhs)
    }
}

impl Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Self) -> Self::Output {
        Self::binary(BinOpKind::Div, self, rhs)
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        Self::Negation(Box::new(self))
    }
}

#[cfg(test)]
mod tests {
    use isolate_parser::parser::Parser;
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(input: &str) -> Expr {
        Parser::new(input).try_parse_full::<AstExpr>().unwrap().into()
    }

    fn x() -> Expr {
        Expr::variable("x")
    }

    fn y() -> Expr {
        Expr::variable("y")
    }

    #[test]
    fn from_ast() {
        assert_eq!(
            parse("x * 4 + (10)"),
            x() * Expr::constant(4.0) + Expr::constant(10.0),
        );
        assert_eq!(parse("--3"), -(-Expr::constant(3.0)));
        assert_eq!(parse("60 / zz"), Expr::constant(60.0) / Expr::variable("zz"));
    }

    #[test]
    fn render() {
        let expr = (y() - Expr::constant(10.0)) / Expr::constant(4.0);
        assert_eq!(expr.to_string(), "((y - 10) / 4)");

        let expr = -(x() * Expr::constant(2.5));
        assert_eq!(expr.to_string(), "-((x * 2.5))");
    }

    #[test]
    fn structural_equality() {
        assert_eq!(x() + y(), x() + y());
        assert_ne!(x() + y(), y() + x());
        assert_ne!(x() + y(), x() - y());
        assert_ne!(-x(), x());
    }

    #[test]
    fn total_constant_equality() {
        assert_eq!(Expr::constant(f64::NAN), Expr::constant(f64::NAN));
        assert_eq!(Expr::constant(0.0), Expr::constant(-0.0));
        assert_ne!(Expr::constant(f64::INFINITY), Expr::constant(f64::NEG_INFINITY));

        let set = [
            Expr::constant(f64::NAN) + x(),
            Expr::constant(-f64::NAN) + x(),
            Expr::constant(0.0),
            Expr::constant(-0.0),
        ].into_iter().collect::<HashSet<_>>();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn find_vars() {
        assert_eq!(
            find_vars_in_expr(&(x() + y())),
            HashSet::from(["x".to_string(), "y".to_string()]),
        );
        assert_eq!(find_vars_in_expr(&parse("2 * 3")), HashSet::new());
        assert_eq!(find_vars_in_expr(&parse("-(a / a) - b")).len(), 2);
    }

    #[test]
    fn contains_variable() {
        let expr = parse("3 + 60 / zz");
        assert!(expr.contains_variable("zz"));
        assert!(!expr.contains_variable("z"));
        assert!(!expr.is_variable("zz"));
        assert!(Expr::variable("zz").is_variable("zz"));
    }

    #[test]
    fn finiteness() {
        assert!(parse("x / 2").is_finite());
        assert!(!(x() + Expr::constant(f64::INFINITY)).is_finite());
        assert!(!(-Expr::constant(f64::NAN)).is_finite());
    }

    #[test]
    fn post_order() {
        let expr = parse("-a + b * c");
        let order = expr.post_order_iter()
            .map(|expr| expr.to_string())
            .collect::<Vec<_>>();

        assert_eq!(order, vec![
            "a",
            "-(a)",
            "b",
            "c",
            "(b * c)",
            "(-(a) + (b * c))",
        ]);
    }
}
