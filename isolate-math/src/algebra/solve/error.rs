use ariadne::Fmt;
use isolate_attrs::ErrorKind;
use isolate_error::{Error, EXPR};
use std::{fmt, ops::Range};
use super::super::expr::Expr;

/// The search ran out of jobs, or out of its iteration budget, without isolating the target.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("could not isolate `{}`", target),
    labels = [format!("explored {} rearrangements of this equation", explored)],
    help = format!(
        "the solver only undoes {}; it cannot factor or collect terms that appear on both sides",
        "`+`, `-`, `*`, `/`, and negation".fg(EXPR),
    ),
)]
pub struct Unsolvable {
    /// The variable that was being isolated.
    pub target: String,

    /// The number of jobs dequeued before giving up.
    pub explored: usize,
}

/// The target was isolated, but its value contains an infinite or NaN constant, usually because
/// of a division by zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the solution for `{}` is not a finite number", target),
    labels = [format!("this equation gives `{} = {}`", target, value)],
    help = "check the equation for a division by zero",
)]
pub struct NonFiniteSolution {
    /// The variable that was isolated.
    pub target: String,

    /// The rejected solution.
    pub value: Expr,
}

/// An error produced by the solver.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// See [`Unsolvable`].
    Unsolvable(Unsolvable),

    /// See [`NonFiniteSolution`].
    NonFiniteSolution(NonFiniteSolution),
}

impl SolveError {
    /// Converts the error into a reportable [`Error`] pointing at the given span of the input,
    /// usually the span of the equation.
    pub fn into_error(self, span: Range<usize>) -> Error {
        match self {
            Self::Unsolvable(kind) => Error::new(vec![span], kind),
            Self::NonFiniteSolution(kind) => Error::new(vec![span], kind),
        }
    }
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Unsolvable(Unsolvable { target, explored }) => {
                write!(f, "could not isolate `{}` after exploring {} jobs", target, explored)
            },
            Self::NonFiniteSolution(NonFiniteSolution { target, value }) => {
                write!(f, "the solution `{} = {}` is not finite", target, value)
            },
        }
    }
}

impl std::error::Error for SolveError {}

impl From<Unsolvable> for SolveError {
    fn from(err: Unsolvable) -> Self {
        Self::Unsolvable(err)
    }
}

impl From<NonFiniteSolution> for SolveError {
    fn from(err: NonFiniteSolution) -> Self {
        Self::NonFiniteSolution(err)
    }
}

#[cfg(test)]
mod tests {
    use ariadne::Source;
    use super::*;

    #[test]
    fn unsolvable_report() {
        let input = "x: x * x = 2";
        let err = SolveError::from(Unsolvable { target: "x".to_string(), explored: 100 })
            .into_error(3..12);

        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", Source::from(input)), &mut buf)
            .unwrap();
        let rendered = String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap();

        assert!(rendered.contains("could not isolate `x`"));
        assert!(rendered.contains("explored 100 rearrangements"));
    }

    #[test]
    fn display() {
        let err = SolveError::from(NonFiniteSolution {
            target: "x".to_string(),
            value: Expr::constant(f64::INFINITY),
        });
        assert_eq!(err.to_string(), "the solution `x = inf` is not finite");
    }
}
