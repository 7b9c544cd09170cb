use crate::builtin::{wrong_type, Builtin};
use crate::error::ErrorKind;
use crate::value::{Cells, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
    Min,
    Max,
}

impl ArithOp {
    pub fn name(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Rem => "%",
            ArithOp::Pow => "^",
            ArithOp::Min => "min",
            ArithOp::Max => "max",
        }
    }
}

/// Two-level numeric tower; integers are only ever promoted to doubles
#[derive(Debug, Clone, Copy, PartialEq)]
enum Num {
    Int(i64),
    Double(f64),
}

impl Num {
    fn from_value(value: Value) -> Option<Num> {
        match value {
            Value::Integer(i) => Some(Num::Int(i)),
            Value::Double(f) => Some(Num::Double(f)),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        match self {
            Num::Int(i) => Value::Integer(i),
            Num::Double(f) => Value::Double(f),
        }
    }

    fn negate(self) -> Num {
        match self {
            Num::Int(i) => Num::Int(i.wrapping_neg()),
            Num::Double(f) => Num::Double(-f),
        }
    }
}

/// Folds `op` over the arguments from left to right
///
/// A single argument to `-` is negated; a single argument to any other operator is returned
/// unchanged.
pub fn fold(op: ArithOp, args: Cells) -> Result<Value, ErrorKind> {
    let builtin = Builtin::Arith(op);

    if let Some(non_numeric) = args.iter().find(|arg| !arg.is_numeric()) {
        return Err(wrong_type(builtin, non_numeric));
    }

    let operands = args
        .into_iter()
        .filter_map(Num::from_value)
        .collect::<Vec<Num>>();

    let mut operands = operands.into_iter();
    let first = operands
        .next()
        .ok_or(ErrorKind::WrongArgCount(builtin))?;

    if op == ArithOp::Sub && operands.len() == 0 {
        return Ok(first.negate().into_value());
    }

    operands
        .try_fold(first, |acc, operand| combine(op, acc, operand))
        .map(Num::into_value)
}

fn combine(op: ArithOp, lhs: Num, rhs: Num) -> Result<Num, ErrorKind> {
    match (lhs, rhs) {
        (Num::Int(l), Num::Int(r)) => int_op(op, l, r).map(Num::Int),
        (Num::Int(l), Num::Double(r)) => double_op(op, l as f64, r).map(Num::Double),
        (Num::Double(l), Num::Int(r)) => double_op(op, l, r as f64).map(Num::Double),
        (Num::Double(l), Num::Double(r)) => double_op(op, l, r).map(Num::Double),
    }
}

fn int_op(op: ArithOp, l: i64, r: i64) -> Result<i64, ErrorKind> {
    Ok(match op {
        ArithOp::Add => l.wrapping_add(r),
        ArithOp::Sub => l.wrapping_sub(r),
        ArithOp::Mul => l.wrapping_mul(r),
        ArithOp::Div if r == 0 => return Err(ErrorKind::DivisionByZero),
        ArithOp::Div => l.wrapping_div(r),
        ArithOp::Rem if r == 0 => return Err(ErrorKind::DivisionByZero),
        ArithOp::Rem => l.wrapping_rem(r),
        // Computed over the reals and truncated back, saturating at the integer bounds
        ArithOp::Pow => (l as f64).powf(r as f64) as i64,
        ArithOp::Min => l.min(r),
        ArithOp::Max => l.max(r),
    })
}

#[allow(clippy::float_cmp)]
fn double_op(op: ArithOp, l: f64, r: f64) -> Result<f64, ErrorKind> {
    Ok(match op {
        ArithOp::Add => l + r,
        ArithOp::Sub => l - r,
        ArithOp::Mul => l * r,
        ArithOp::Div if r == 0.0 => return Err(ErrorKind::DivisionByZero),
        ArithOp::Div => l / r,
        ArithOp::Rem if r == 0.0 => return Err(ErrorKind::DivisionByZero),
        ArithOp::Rem => l % r,
        ArithOp::Pow => l.powf(r),
        ArithOp::Min => l.min(r),
        ArithOp::Max => l.max(r),
    })
}
