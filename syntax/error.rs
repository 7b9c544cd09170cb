use std::error;
use std::fmt;
use std::fmt::Display;
use std::result;

use crate::span::Span;

/// (Spanned)[`Span`] syntax error
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    span: Span,
    pub(crate) kind: ErrorKind,
}

impl Error {
    pub fn new(span: Span, kind: ErrorKind) -> Error {
        Error { span, kind }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind().message())
    }
}

/// Syntax error without (span)[`Span`] information
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    Eof(ExpectedContent),
    UnexpectedChar(char),
}

impl ErrorKind {
    /// Returns a string describing the error
    pub fn message(&self) -> String {
        match self {
            ErrorKind::Eof(ref ec) => {
                format!("unexpected end of input while parsing {}", ec.description())
            }
            ErrorKind::UnexpectedChar(c) => format!("unexpected `{}`", c),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Content the parser was inside of when it ran out of input
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ExpectedContent {
    SExpr(Span),
    QExpr(Span),
    Expr,
}

impl ExpectedContent {
    pub fn description(&self) -> &'static str {
        match self {
            ExpectedContent::SExpr(_) => "s-expression",
            ExpectedContent::QExpr(_) => "q-expression",
            ExpectedContent::Expr => "expression",
        }
    }

    /// Span of the bracket that opened the unterminated content
    pub fn open_char_span(&self) -> Option<Span> {
        match self {
            ExpectedContent::SExpr(span) | ExpectedContent::QExpr(span) => Some(*span),
            ExpectedContent::Expr => None,
        }
    }

    /// Character that would terminate the content
    pub fn close_char(&self) -> Option<char> {
        match self {
            ExpectedContent::SExpr(_) => Some(')'),
            ExpectedContent::QExpr(_) => Some('}'),
            ExpectedContent::Expr => None,
        }
    }
}
