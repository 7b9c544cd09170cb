use tracing::trace;

use crate::builtin;
use crate::error::ErrorKind;
use crate::value::{Cells, Value};

/// Reduces a value to its final form
///
/// Only s-expressions are reduced; every other variant evaluates to itself.
pub fn eval(value: Value) -> Value {
    match value {
        Value::SExpr(cells) => eval_sexpr(cells),
        other => other,
    }
}

fn eval_sexpr(mut cells: Cells) -> Value {
    trace!(count = cells.len(), "reducing s-expression");

    cells.map_in_place(eval);

    // The leftmost error replaces the whole expression
    if let Some(error_index) = cells.iter().position(Value::is_error) {
        return cells.take(error_index);
    }

    match cells.len() {
        0 => Value::SExpr(cells),
        1 => cells.take(0),
        _ => match cells.pop(0) {
            Value::Symbol(name) => builtin::apply_named(&name, cells),
            _ => Value::Error(ErrorKind::NotASymbolHead),
        },
    }
}
