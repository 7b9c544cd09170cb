use tracing::debug;

use lispy_syntax::node::{tag, Node};

use crate::error::ErrorKind;
use crate::value::{Cells, Value};

/// Converts a syntax tree in to a value tree
///
/// This is a purely structural translation; nothing is evaluated.
pub fn read(node: &Node) -> Value {
    let node_tag = node.tag();

    if node_tag.contains("number") {
        return read_integer(node.contents());
    }
    if node_tag.contains("double") {
        return read_double(node.contents());
    }
    if node_tag.contains("symbol") {
        return Value::symbol(node.contents());
    }

    if node_tag == tag::ROOT || node_tag.contains("sexpr") {
        Value::SExpr(read_children(node))
    } else if node_tag.contains("qexpr") {
        Value::QExpr(read_children(node))
    } else {
        debug!(tag = node_tag, "unexpected syntax node");
        Value::Error(ErrorKind::UnexpectedNode(node_tag.into()))
    }
}

/// Returns true for brackets and anchors which carry no value
fn is_punctuation(child: &Node) -> bool {
    matches!(child.contents(), "(" | ")" | "{" | "}") || child.tag() == tag::REGEX
}

fn read_children(node: &Node) -> Cells {
    node.children()
        .iter()
        .filter(|child| !is_punctuation(child))
        .map(read)
        .collect()
}

fn read_integer(contents: &str) -> Value {
    match contents.parse::<i64>() {
        Ok(i) => Value::Integer(i),
        Err(_) => {
            debug!(contents, "integer literal out of range");
            Value::Error(ErrorKind::InvalidNumber)
        }
    }
}

#[allow(clippy::float_cmp)]
fn read_double(contents: &str) -> Value {
    let has_significant_digit = contents.chars().any(|c| ('1'..='9').contains(&c));

    match contents.parse::<f64>() {
        // Overflowed to infinity or underflowed to zero
        Ok(f) if f.is_infinite() || (f == 0.0 && has_significant_digit) => {
            debug!(contents, "double literal out of range");
            Value::Error(ErrorKind::InvalidNumber)
        }
        Ok(f) => Value::Double(f),
        Err(_) => Value::Error(ErrorKind::InvalidNumber),
    }
}
