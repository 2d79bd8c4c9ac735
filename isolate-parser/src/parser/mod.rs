pub mod binary;
pub mod equation;
pub mod error;
pub mod expr;
pub mod literal;
pub mod paren;
pub mod stmt;
pub mod token;
pub mod unary;

use error::{Error, kind};
use isolate_error::ErrorKind;
use super::tokenizer::{tokenize_complete, Token};
use std::ops::Range;

/// Returns the parsed value from the enclosing function if the given parse result is successful
/// or a fatal error. A non-fatal error is handed back so the caller can try the next alternative.
#[macro_export]
macro_rules! try_parse_catch_fatal {
    ($expr:expr) => {{
        match $expr {
            Ok(value) => return Ok(value),
            Err(err) if err.fatal => return Err(err),
            err => err,
        }
    }};
}

/// A high-level parser for arithmetic input. This is the type to use to parse a line of input
/// into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Creates a fatal error that points at the current token, or the end of the source code if
    /// the cursor is at the end of the stream.
    pub fn error_fatal(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new_fatal(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Moves this parser's cursor to the cursor of another parser over the same source, such as a
    /// clone used to peek ahead.
    pub fn set_cursor(&mut self, other: &Parser) {
        self.cursor = other.cursor;
    }

    /// Returns the previous token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the beginning of the stream.
    pub fn prev_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor.checked_sub(1)?)
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if !token.is_whitespace() {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(kind::UnexpectedEof))
    }

    /// Speculatively parses a value from the stream of tokens. If parsing fails, the cursor is
    /// restored to where it was before the attempt.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses a value using a custom parsing function. If parsing fails, the cursor
    /// is restored to where it was before the attempt.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Speculatively parses a value, with a validation predicate. The value must parse
    /// successfully, **and** the predicate must return [`Ok`] for this function to succeed.
    ///
    /// If either step fails, the cursor is restored and the error is returned.
    pub fn try_parse_then<T: Parse, F>(&mut self, predicate: F) -> Result<T, Error>
    where
        F: FnOnce(&T, &Parser) -> Result<(), Error>,
    {
        let start = self.cursor;

        // closure workaround allows us to use `?` in the closure
        let compute = || {
            let value = T::parse(self)?;
            predicate(&value, self)?;
            Ok(value)
        };

        match compute() {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Parses a value from the stream of tokens. Every token except trailing whitespace must be
    /// consumed by the parser; if not, an [`ExpectedEof`](kind::ExpectedEof) error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        while self.current_token().is_some_and(Token::is_whitespace) {
            self.cursor += 1;
        }

        if self.cursor == self.tokens.len() {
            Ok(value)
        } else {
            Err(self.error(kind::ExpectedEof))
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary or unary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// The operation is left-associative: `a op b op c` is grouped as `(a op b) op c`.
    Left,

    /// The operation is right-associative: `a op b op c` is grouped as `a op (b op c)`, and
    /// prefix operators nest as `op (op a)`.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of unary subtraction (`-`).
    Neg,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use binary::Binary;
    use equation::Equation;
    use expr::Expr;
    use literal::{Literal, LitNum, LitSym};
    use paren::Paren;
    use stmt::Stmt;
    use token::op::{BinOp, BinOpKind, UnaryOp, UnaryOpKind};
    use unary::Unary;

    /// Returns the name of the error kind, for comparing errors in tests.
    fn kind_name(err: &Error) -> String {
        format!("{:?}", err.kind)
    }

    #[test]
    fn literal_int() {
        let mut parser = Parser::new("16");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(Literal::Number(LitNum {
            value: 16.0,
            span: 0..2,
        })));
    }

    #[test]
    fn literal_float() {
        let mut parser = Parser::new("2.5e1");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(Literal::Number(LitNum {
            value: 25.0,
            span: 0..5,
        })));
    }

    #[test]
    fn literal_symbol() {
        let mut parser = Parser::new("zz");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(Literal::Symbol(LitSym {
            name: "zz".to_string(),
            span: 0..2,
        })));
    }

    #[test]
    fn trailing_whitespace() {
        let mut parser = Parser::new("  x  \n");
        let expr = parser.try_parse_full::<Expr>().unwrap();
        assert_eq!(expr.span(), 2..3);
    }

    #[test]
    fn binary_precedence() {
        let mut parser = Parser::new("3 + 4 * 5");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                value: 3.0,
                span: 0..1,
            }))),
            op: BinOp {
                kind: BinOpKind::Add,
                span: 2..3,
            },
            rhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 4.0,
                    span: 4..5,
                }))),
                op: BinOp {
                    kind: BinOpKind::Mul,
                    span: 6..7,
                },
                rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 5.0,
                    span: 8..9,
                }))),
                span: 4..9,
            })),
            span: 0..9,
        }));
    }

    #[test]
    fn binary_left_associativity() {
        let mut parser = Parser::new("a - b - c");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                    name: "a".to_string(),
                    span: 0..1,
                }))),
                op: BinOp {
                    kind: BinOpKind::Sub,
                    span: 2..3,
                },
                rhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                    name: "b".to_string(),
                    span: 4..5,
                }))),
                span: 0..5,
            })),
            op: BinOp {
                kind: BinOpKind::Sub,
                span: 6..7,
            },
            rhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                name: "c".to_string(),
                span: 8..9,
            }))),
            span: 0..9,
        }));
    }

    #[test]
    fn factor_then_term() {
        let mut parser = Parser::new("x*4+10");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        let Expr::Binary(sum) = expr else {
            panic!("expected a binary expression");
        };
        assert_eq!(sum.op.kind, BinOpKind::Add);
        assert_eq!(sum.lhs.span(), 0..3);
        assert_eq!(sum.rhs.span(), 4..6);
    }

    #[test]
    fn double_negation() {
        let mut parser = Parser::new("--3");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Unary(Unary {
            operand: Box::new(Expr::Unary(Unary {
                operand: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 3.0,
                    span: 2..3,
                }))),
                op: UnaryOp {
                    kind: UnaryOpKind::Neg,
                    span: 1..2,
                },
                span: 1..3,
            })),
            op: UnaryOp {
                kind: UnaryOpKind::Neg,
                span: 0..1,
            },
            span: 0..3,
        }));
    }

    #[test]
    fn negation_binds_tighter_than_product() {
        let mut parser = Parser::new("-a * b");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        let Expr::Binary(product) = expr else {
            panic!("expected a binary expression");
        };
        assert_eq!(product.op.kind, BinOpKind::Mul);
        assert!(matches!(*product.lhs, Expr::Unary(_)));
    }

    #[test]
    fn parenthesized() {
        let mut parser = Parser::new("(1 + x) * 2");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Paren(Paren {
                expr: Box::new(Expr::Binary(Binary {
                    lhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                        value: 1.0,
                        span: 1..2,
                    }))),
                    op: BinOp {
                        kind: BinOpKind::Add,
                        span: 3..4,
                    },
                    rhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                        name: "x".to_string(),
                        span: 5..6,
                    }))),
                    span: 1..6,
                })),
                span: 0..7,
            })),
            op: BinOp {
                kind: BinOpKind::Mul,
                span: 8..9,
            },
            rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                value: 2.0,
                span: 10..11,
            }))),
            span: 0..11,
        }));
    }

    #[test]
    fn equation() {
        let mut parser = Parser::new("2 * x = 8");
        let equation = parser.try_parse_full::<Equation>().unwrap();

        assert_eq!(equation.lhs.span(), 0..5);
        assert_eq!(equation.rhs, Expr::Literal(Literal::Number(LitNum {
            value: 8.0,
            span: 8..9,
        })));
        assert_eq!(equation.span, 0..9);
    }

    #[test]
    fn stmt_solve() {
        let mut parser = Parser::new("zz: 3 + 60 / zz = 6");
        let stmt = parser.try_parse_full::<Stmt>().unwrap();

        let Stmt::Solve(solve) = stmt else {
            panic!("expected a solve statement");
        };
        assert_eq!(solve.target, LitSym {
            name: "zz".to_string(),
            span: 0..2,
        });
        assert_eq!(solve.equation.span, 4..19);
        assert_eq!(solve.span, 0..19);
    }

    #[test]
    fn stmt_equation_and_expr() {
        let stmt = Parser::new("x = y").try_parse_full::<Stmt>().unwrap();
        assert!(matches!(stmt, Stmt::Equation(_)));

        let stmt = Parser::new("x + 0").try_parse_full::<Stmt>().unwrap();
        assert!(matches!(stmt, Stmt::Expr(_)));
    }

    #[test]
    fn chained_equality() {
        let err = Parser::new("a = b = c").try_parse_full::<Stmt>().unwrap_err();

        assert!(err.fatal);
        assert_eq!(kind_name(&err), "ChainedEquality");
        assert_eq!(err.spans, vec![2..3, 6..7]);
    }

    #[test]
    fn unclosed_paren() {
        let err = Parser::new("(x + 1").try_parse_full::<Expr>().unwrap_err();

        assert!(err.fatal);
        assert_eq!(kind_name(&err), "UnclosedParenthesis { opening: true }");
        assert_eq!(err.spans, vec![0..1]);
    }

    #[test]
    fn stray_close_paren() {
        let err = Parser::new(") + 1").try_parse_full::<Expr>().unwrap_err();

        assert!(err.fatal);
        assert_eq!(kind_name(&err), "UnclosedParenthesis { opening: false }");
    }

    #[test]
    fn unexpected_eof() {
        let err = Parser::new("1 +").try_parse_full::<Expr>().unwrap_err();
        assert_eq!(kind_name(&err), "UnexpectedEof");
        assert_eq!(err.spans, vec![3..3]);

        let err = Parser::new("").try_parse_full::<Expr>().unwrap_err();
        assert_eq!(kind_name(&err), "UnexpectedEof");
    }

    #[test]
    fn missing_rhs_after_colon() {
        let err = Parser::new("x: x + 1 =").try_parse_full::<Stmt>().unwrap_err();

        assert!(err.fatal);
        assert_eq!(kind_name(&err), "UnexpectedEof");
    }

    #[test]
    fn trailing_garbage() {
        let err = Parser::new("x $").try_parse_full::<Expr>().unwrap_err();

        assert!(!err.fatal);
        assert_eq!(kind_name(&err), "ExpectedEof");
        assert_eq!(err.spans, vec![2..3]);
    }
}
