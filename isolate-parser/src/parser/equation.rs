use std::ops::Range;
use super::{
    error::{kind, Error},
    expr::Expr,
    token::Assign,
    Parse,
    Parser,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An equation of the form `lhs = rhs`.
///
/// `=` is not an operator of the expression grammar: an equation is exactly two expressions
/// separated by a single `=`. Chained equalities such as `a = b = c` are a fatal error.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Equation {
    /// The left-hand side of the equation.
    pub lhs: Expr,

    /// The right-hand side of the equation.
    pub rhs: Expr,

    /// The region of the source code that this equation was parsed from.
    pub span: Range<usize>,
}

impl Equation {
    /// Parses the `= rhs` part of an equation whose left-hand side has already been parsed.
    pub fn parse_with_lhs(input: &mut Parser, lhs: Expr) -> Result<Self, Error> {
        let eq = input.try_parse::<Assign>()?;
        let rhs = input.try_parse::<Expr>()?;

        if let Ok(second_eq) = input.clone().try_parse::<Assign>() {
            return Err(Error::new_fatal(
                vec![eq.span, second_eq.span],
                kind::ChainedEquality,
            ));
        }

        let span = lhs.span().start..rhs.span().end;
        Ok(Self { lhs, rhs, span })
    }
}

impl Parse for Equation {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = input.try_parse::<Expr>()?;
        Self::parse_with_lhs(input, lhs)
    }
}
