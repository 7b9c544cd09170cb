use std::fmt;
use std::fmt::Write;

use crate::value::{Cells, Value};

/// Writes a double so that reading it back produces the same value
///
/// Whole numbers keep a trailing `.0` so they aren't re-read as integers.
fn write_double(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        f.write_str("##NaN")
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            f.write_str("##Inf")
        } else {
            f.write_str("##-Inf")
        }
    } else if value.fract() == 0.0 {
        write!(f, "{:.1}", value)
    } else {
        write!(f, "{}", value)
    }
}

fn write_cells(f: &mut fmt::Formatter<'_>, open: char, close: char, cells: &Cells) -> fmt::Result {
    f.write_char(open)?;

    let mut has_prev = false;
    for cell in cells {
        if has_prev {
            f.write_char(' ')?;
        } else {
            has_prev = true;
        }

        write!(f, "{}", cell)?;
    }

    f.write_char(close)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Double(d) => write_double(f, *d),
            Value::Error(kind) => write!(f, "Error: {}", kind),
            Value::Symbol(name) => f.write_str(name),
            Value::SExpr(cells) => write_cells(f, '(', ')', cells),
            Value::QExpr(cells) => write_cells(f, '{', '}', cells),
        }
    }
}
