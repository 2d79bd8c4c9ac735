use ariadne::Fmt;
use isolate_attrs::ErrorKind;
use isolate_error::EXPR;
use crate::tokenizer::TokenKind;

/// An intentionally useless error, used to reject a speculative parse without reporting anything
/// meaningful. It should never reach the user.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "an internal non-fatal error occurred while parsing",
    labels = ["here"],
    help = "you should never see this error; please report this as a bug"
)]
pub struct NonFatal;

/// The end of the input was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the input was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "input".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A numeric literal could not be represented as a floating-point number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid number literal",
    labels = ["this number"],
)]
pub struct InvalidNumber;

/// A parenthesis was not closed, or a closing parenthesis appeared without a matching opening one.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis"],
    help = if *opening {
        format!("add a closing parenthesis `{}` somewhere after this", ")".fg(EXPR))
    } else {
        format!("add an opening parenthesis `{}` somewhere before this", "(".fg(EXPR))
    }
)]
pub struct UnclosedParenthesis {
    /// Whether the unclosed parenthesis is the opening one.
    pub opening: bool,
}

/// More than one `=` was found in a single equation, as in `a = b = c`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "equations can only contain a single `=`",
    labels = ["first `=` here", "then another `=` here"],
    help = format!("split this into {} equations", "separate".fg(EXPR)),
)]
pub struct ChainedEquality;
