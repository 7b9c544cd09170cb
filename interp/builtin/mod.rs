pub mod arith;

use tracing::debug;

use crate::error::ErrorKind;
use crate::eval::eval;
use crate::value::{Cells, Value};

use self::arith::ArithOp;

/// Operation invoked when a symbol leads an s-expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    List,
    Head,
    Tail,
    Join,
    Eval,
    Cons,
    Arith(ArithOp),
}

/// Dispatch table from symbol name to builtin
const BUILTINS: &[(&str, Builtin)] = &[
    ("list", Builtin::List),
    ("head", Builtin::Head),
    ("tail", Builtin::Tail),
    ("join", Builtin::Join),
    ("eval", Builtin::Eval),
    ("cons", Builtin::Cons),
    ("+", Builtin::Arith(ArithOp::Add)),
    ("-", Builtin::Arith(ArithOp::Sub)),
    ("*", Builtin::Arith(ArithOp::Mul)),
    ("/", Builtin::Arith(ArithOp::Div)),
    ("%", Builtin::Arith(ArithOp::Rem)),
    ("^", Builtin::Arith(ArithOp::Pow)),
    ("min", Builtin::Arith(ArithOp::Min)),
    ("max", Builtin::Arith(ArithOp::Max)),
];

impl Builtin {
    pub fn from_name(name: &str) -> Option<Builtin> {
        BUILTINS
            .iter()
            .find(|(builtin_name, _)| *builtin_name == name)
            .map(|(_, builtin)| *builtin)
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::List => "list",
            Builtin::Head => "head",
            Builtin::Tail => "tail",
            Builtin::Join => "join",
            Builtin::Eval => "eval",
            Builtin::Cons => "cons",
            Builtin::Arith(op) => op.name(),
        }
    }

    /// Applies the builtin to already evaluated arguments
    ///
    /// The arguments are consumed on every path; a violated precondition returns an error value.
    pub fn apply(self, args: Cells) -> Value {
        debug!(builtin = self.name(), argc = args.len(), "applying builtin");

        let result = match self {
            Builtin::List => Ok(Value::QExpr(args)),
            Builtin::Head => head(args),
            Builtin::Tail => tail(args),
            Builtin::Join => join(args),
            Builtin::Eval => builtin_eval(args),
            Builtin::Cons => cons(args),
            Builtin::Arith(op) => arith::fold(op, args),
        };

        result.unwrap_or_else(Value::Error)
    }
}

/// Returns the names of every builtin in dispatch order
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|(name, _)| *name)
}

/// Applies the builtin bound to `name`
pub fn apply_named(name: &str, args: Cells) -> Value {
    match Builtin::from_name(name) {
        Some(builtin) => builtin.apply(args),
        None => {
            debug!(function = name, "unknown function");
            Value::Error(ErrorKind::UnknownFunction)
        }
    }
}

/// Logs the offending argument and returns a type error
pub(crate) fn wrong_type(builtin: Builtin, found: &Value) -> ErrorKind {
    debug!(
        builtin = builtin.name(),
        found = found.description(),
        "argument of wrong type"
    );
    ErrorKind::WrongType(builtin)
}

/// Unwraps the single q-expression argument
fn single_qexpr(builtin: Builtin, args: Cells) -> Result<Cells, ErrorKind> {
    if args.len() != 1 {
        return Err(ErrorKind::WrongArgCount(builtin));
    }

    match args.take(0) {
        Value::QExpr(cells) => Ok(cells),
        other => Err(wrong_type(builtin, &other)),
    }
}

fn head(args: Cells) -> Result<Value, ErrorKind> {
    let mut cells = single_qexpr(Builtin::Head, args)?;
    if cells.is_empty() {
        return Err(ErrorKind::EmptyList(Builtin::Head));
    }

    cells.truncate(1);
    Ok(Value::QExpr(cells))
}

fn tail(args: Cells) -> Result<Value, ErrorKind> {
    let mut cells = single_qexpr(Builtin::Tail, args)?;
    if cells.is_empty() {
        return Err(ErrorKind::EmptyList(Builtin::Tail));
    }

    cells.pop(0);
    Ok(Value::QExpr(cells))
}

fn join(args: Cells) -> Result<Value, ErrorKind> {
    let lists = args
        .into_iter()
        .map(|arg| match arg {
            Value::QExpr(cells) => Ok(cells),
            other => Err(wrong_type(Builtin::Join, &other)),
        })
        .collect::<Result<Vec<Cells>, ErrorKind>>()?;

    let mut lists = lists.into_iter();
    let mut joined = lists.next().unwrap_or_default();
    for donor in lists {
        joined.join(donor);
    }

    Ok(Value::QExpr(joined))
}

fn builtin_eval(args: Cells) -> Result<Value, ErrorKind> {
    let cells = single_qexpr(Builtin::Eval, args)?;
    Ok(eval(Value::SExpr(cells)))
}

fn cons(mut args: Cells) -> Result<Value, ErrorKind> {
    if args.len() != 2 {
        return Err(ErrorKind::WrongArgCount(Builtin::Cons));
    }

    let head = args.pop(0);
    match args.take(0) {
        Value::QExpr(mut tail) => {
            tail.prepend(head);
            Ok(Value::QExpr(tail))
        }
        other => Err(wrong_type(Builtin::Cons, &other)),
    }
}
