use std::sync::Arc;

use crate::span::Span;

pub type DataStr = Arc<str>;

/// Tags attached to nodes by the grammar
///
/// Rule names are joined with `|` from the outermost rule inwards and end with the kind of matcher
/// that produced the node.
pub mod tag {
    pub const ROOT: &str = ">";
    pub const REGEX: &str = "regex";
    pub const CHAR: &str = "char";

    pub const NUMBER: &str = "expr|number|regex";
    pub const DOUBLE: &str = "expr|double|regex";
    pub const SYMBOL_CHAR: &str = "expr|symbol|char";
    pub const SYMBOL_STRING: &str = "expr|symbol|string";
    pub const SEXPR: &str = "expr|sexpr|>";
    pub const QEXPR: &str = "expr|qexpr|>";
}

/// Labelled syntax tree node
///
/// Leaves carry the literal source text in `contents`; branches carry their children in source
/// order, including the bracket and anchor leaves.
#[derive(PartialEq, Debug, Clone)]
pub struct Node {
    tag: DataStr,
    contents: DataStr,
    span: Span,
    children: Box<[Node]>,
}

impl Node {
    pub fn leaf(tag: impl Into<DataStr>, contents: impl Into<DataStr>, span: Span) -> Node {
        Node {
            tag: tag.into(),
            contents: contents.into(),
            span,
            children: Box::new([]),
        }
    }

    pub fn branch(tag: impl Into<DataStr>, span: Span, children: Vec<Node>) -> Node {
        Node {
            tag: tag.into(),
            contents: "".into(),
            span,
            children: children.into_boxed_slice(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}
