use std::ops::Range;
use super::{
    equation::Equation,
    error::Error,
    expr::Expr,
    literal::LitSym,
    token::{Assign, Colon},
    Parse,
    Parser,
};
use crate::try_parse_catch_fatal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A request to isolate a variable, written `x: lhs = rhs`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solve {
    /// The variable to isolate.
    pub target: LitSym,

    /// The equation to isolate the variable in.
    pub equation: Equation,

    /// The region of the source code that this statement was parsed from.
    pub span: Range<usize>,
}

impl Parse for Solve {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let target = input.try_parse::<LitSym>()?;
        input.try_parse::<Colon>()?;

        // past the colon, this can only be a solve command
        let equation = input.try_parse::<Equation>()
            .map_err(|mut err| {
                err.fatal = true;
                err
            })?;
        let span = target.span.start..equation.span.end;

        Ok(Self { target, equation, span })
    }
}

/// A single line of input.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Stmt {
    /// Isolate the named variable in an equation, as in `x: 2 * x = 8`.
    Solve(Solve),

    /// An equation with no explicit target, as in `2 * x = 8`.
    Equation(Equation),

    /// A bare expression, as in `x * 1 + 0`.
    Expr(Expr),
}

impl Stmt {
    /// Returns the span of the statement.
    pub fn span(&self) -> Range<usize> {
        match self {
            Stmt::Solve(solve) => solve.span.clone(),
            Stmt::Equation(equation) => equation.span.clone(),
            Stmt::Expr(expr) => expr.span(),
        }
    }
}

impl Parse for Stmt {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let _ = try_parse_catch_fatal!(input.try_parse::<Solve>().map(Self::Solve));

        let lhs = input.try_parse::<Expr>()?;
        if input.clone().try_parse::<Assign>().is_ok() {
            Equation::parse_with_lhs(input, lhs).map(Self::Equation)
        } else {
            Ok(Self::Expr(lhs))
        }
    }
}
