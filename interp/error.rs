use std::fmt;

use lispy_syntax::node::DataStr;

use crate::builtin::Builtin;

/// Reason carried by an error value
///
/// Errors are ordinary values; the message is what the user sees after `Error: `.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// Numeric literal outside of the representable range
    InvalidNumber,
    UnknownFunction,
    WrongArgCount(Builtin),
    WrongType(Builtin),
    /// `head` or `tail` applied to `{}`
    EmptyList(Builtin),
    NotASymbolHead,
    DivisionByZero,
    CoercionFailure,
    /// Syntax tree node with a tag the reader doesn't recognise
    UnexpectedNode(DataStr),
}

impl ErrorKind {
    /// Returns a string describing the error
    pub fn message(&self) -> String {
        match self {
            ErrorKind::InvalidNumber => "invalid number".to_owned(),
            ErrorKind::UnknownFunction => "Unknown Function!".to_owned(),
            ErrorKind::WrongArgCount(Builtin::Cons) => {
                "Function 'cons' passed incorrect arguments!".to_owned()
            }
            ErrorKind::WrongArgCount(Builtin::Arith(op)) => {
                format!("Function '{}' passed no arguments!", op.name())
            }
            ErrorKind::WrongArgCount(builtin) => {
                format!("Function '{}' passed too many arguments!", builtin.name())
            }
            ErrorKind::WrongType(Builtin::Join) => {
                "Function 'join' passed incorrect type.".to_owned()
            }
            ErrorKind::WrongType(Builtin::Arith(_)) => "Cannot operate on non-number!".to_owned(),
            ErrorKind::WrongType(builtin) => {
                format!("Function '{}' passed incorrect type!", builtin.name())
            }
            ErrorKind::EmptyList(builtin) => format!("Function '{}' passed {{}}!", builtin.name()),
            ErrorKind::NotASymbolHead => "S-expression Does not start with symbol!".to_owned(),
            ErrorKind::DivisionByZero => "Division By Zero!".to_owned(),
            ErrorKind::CoercionFailure => "Unable to coerce!".to_owned(),
            ErrorKind::UnexpectedNode(tag) => format!("unexpected syntax node '{}'", tag),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::builtin::arith::ArithOp;

    #[test]
    fn per_function_messages() {
        let cases = [
            (
                ErrorKind::WrongArgCount(Builtin::Head),
                "Function 'head' passed too many arguments!",
            ),
            (
                ErrorKind::WrongArgCount(Builtin::Eval),
                "Function 'eval' passed too many arguments!",
            ),
            (
                ErrorKind::WrongArgCount(Builtin::Cons),
                "Function 'cons' passed incorrect arguments!",
            ),
            (
                ErrorKind::WrongArgCount(Builtin::Arith(ArithOp::Max)),
                "Function 'max' passed no arguments!",
            ),
            (
                ErrorKind::WrongType(Builtin::Tail),
                "Function 'tail' passed incorrect type!",
            ),
            (
                ErrorKind::WrongType(Builtin::Join),
                "Function 'join' passed incorrect type.",
            ),
            (
                ErrorKind::WrongType(Builtin::Arith(ArithOp::Add)),
                "Cannot operate on non-number!",
            ),
            (ErrorKind::EmptyList(Builtin::Head), "Function 'head' passed {}!"),
            (ErrorKind::EmptyList(Builtin::Tail), "Function 'tail' passed {}!"),
        ];

        for (kind, expected) in cases.iter() {
            assert_eq!(*expected, kind.message());
        }
    }

    #[test]
    fn display_is_message() {
        assert_eq!("Division By Zero!", ErrorKind::DivisionByZero.to_string());
        assert_eq!(
            "unexpected syntax node 'expr|string'",
            ErrorKind::UnexpectedNode("expr|string".into()).to_string()
        );
    }
}
