use std::iter::FromIterator;
use std::{mem, slice, vec};

use lispy_syntax::node::DataStr;

use crate::error::ErrorKind;

/// Ordered children of an s-expression or q-expression
///
/// Every operation that removes a child hands ownership of it to the caller. Operations that
/// consume the whole sequence (`take`, `join`) drop whatever remains.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Cells(Vec<Value>);

impl Cells {
    pub fn new() -> Cells {
        Cells(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.0.iter()
    }

    /// Adds a child to the end
    pub fn append(&mut self, value: Value) {
        self.0.push(value);
    }

    /// Adds a child to the start, shifting all existing children up
    pub fn prepend(&mut self, value: Value) {
        self.0.insert(0, value);
    }

    /// Removes the child at `index`, shifting all following children down
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds
    pub fn pop(&mut self, index: usize) -> Value {
        self.0.remove(index)
    }

    /// Removes the child at `index` and drops the remaining children
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds
    pub fn take(mut self, index: usize) -> Value {
        self.0.swap_remove(index)
    }

    /// Moves every child of `donor` to our end in their original order
    pub fn join(&mut self, donor: Cells) {
        self.0.extend(donor.0);
    }

    /// Drops every child from `len` onwards
    pub fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    /// Replaces every child with the result of `f`, from left to right
    pub fn map_in_place<F>(&mut self, f: F)
    where
        F: FnMut(Value) -> Value,
    {
        let children = mem::take(&mut self.0);
        self.0 = children.into_iter().map(f).collect();
    }
}

impl From<Vec<Value>> for Cells {
    fn from(children: Vec<Value>) -> Self {
        Cells(children)
    }
}

impl FromIterator<Value> for Cells {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Cells(iter.into_iter().collect())
    }
}

impl IntoIterator for Cells {
    type Item = Value;
    type IntoIter = vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Cells {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    Double(f64),
    Error(ErrorKind),
    Symbol(DataStr),
    /// Expression to be evaluated
    SExpr(Cells),
    /// Literal list; never evaluated implicitly
    QExpr(Cells),
}

impl Value {
    pub fn symbol(name: impl Into<DataStr>) -> Value {
        Value::Symbol(name.into())
    }

    pub fn empty_sexpr() -> Value {
        Value::SExpr(Cells::new())
    }

    pub fn empty_qexpr() -> Value {
        Value::QExpr(Cells::new())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Double(_))
    }

    pub fn description(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Double(_) => "double",
            Value::Error(_) => "error",
            Value::Symbol(_) => "symbol",
            Value::SExpr(cells) if cells.is_empty() => "empty s-expression",
            Value::SExpr(_) => "s-expression",
            Value::QExpr(cells) if cells.is_empty() => "empty q-expression",
            Value::QExpr(_) => "q-expression",
        }
    }
}
