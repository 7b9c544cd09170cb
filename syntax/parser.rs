use crate::error::{Error, ErrorKind, ExpectedContent, Result};
use crate::node::{tag, Node};
use crate::span::{FileId, Span};

/// Names accepted by the `symbol` rule in the order they're tried
pub const SYMBOLS: &[&str] = &[
    "list", "head", "tail", "join", "eval", "cons", "+", "-", "*", "/", "%", "^", "min", "max",
];

pub fn program_from_str_with_span_offset(
    file_id: Option<FileId>,
    s: &str,
    span_offset: u32,
) -> Result<Node> {
    let mut parser = Parser::from_str(file_id, s, span_offset as usize);
    parser.parse_program()
}

pub struct Parser<'de> {
    file_id: Option<FileId>,
    input: &'de str,
    consumed_bytes: usize,
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Returns true if the character can appear inside a symbol
pub fn is_symbol_char(c: char) -> bool {
    match c {
        'a'..='z' | '+' | '-' | '*' | '/' | '%' | '^' => true,
        _ => false,
    }
}

/// Measures a leading `double` or `number` match
///
/// Returns the match length and whether it's a `double`. `double` is tried first so `1.5` is
/// never split in to a `number` followed by garbage.
fn numeric_prefix_len(s: &str) -> Option<(usize, bool)> {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let sign_len = if bytes.first() == Some(&b'-') { 1 } else { 0 };
    let int_len = digits_from(sign_len);
    if int_len == 0 {
        return None;
    }

    let int_end = sign_len + int_len;
    if bytes.get(int_end) == Some(&b'.') {
        let frac_len = digits_from(int_end + 1);
        if frac_len > 0 {
            return Some((int_end + 1 + frac_len, true));
        }
    }

    Some((int_end, false))
}

impl<'de> Parser<'de> {
    fn from_str(file_id: Option<FileId>, input: &'de str, consumed_bytes: usize) -> Self {
        Parser {
            file_id,
            input,
            consumed_bytes,
        }
    }

    fn span(&self, start: usize, end: usize) -> Span {
        Span::new(self.file_id, start as u32, end as u32)
    }

    fn eof_err(&self, ec: ExpectedContent) -> Error {
        let eof_pos = self.consumed_bytes + self.input.len();
        Error::new(self.span(eof_pos, eof_pos), ErrorKind::Eof(ec))
    }

    fn peek_char(&self, ec: ExpectedContent) -> Result<char> {
        self.input.chars().next().ok_or_else(|| self.eof_err(ec))
    }

    fn consume_bytes(&mut self, count: usize) -> (Span, &'de str) {
        let start = self.consumed_bytes;
        let (consumed, remaining_input) = self.input.split_at(count);

        self.input = remaining_input;
        self.consumed_bytes += count;

        (self.span(start, self.consumed_bytes), consumed)
    }

    fn consume_until<T>(&mut self, predicate: T) -> (Span, &'de str)
    where
        T: FnMut(char) -> bool,
    {
        let last_index = self
            .input
            .find(predicate)
            .unwrap_or_else(|| self.input.len());

        self.consume_bytes(last_index)
    }

    fn skip_whitespace(&mut self, ec: ExpectedContent) -> Result<char> {
        self.consume_until(|c| !is_whitespace(c));
        self.peek_char(ec)
    }

    fn unexpected_char_err(&mut self, c: char) -> Error {
        let (span, _) = self.consume_bytes(c.len_utf8());
        Error::new(span, ErrorKind::UnexpectedChar(c))
    }

    fn parse_symbol(&mut self, c: char) -> Result<Node> {
        let input = self.input;

        match SYMBOLS.iter().find(|symbol| input.starts_with(*symbol)) {
            Some(symbol) => {
                let node_tag = if symbol.len() == 1 {
                    tag::SYMBOL_CHAR
                } else {
                    tag::SYMBOL_STRING
                };

                let (span, contents) = self.consume_bytes(symbol.len());
                Ok(Node::leaf(node_tag, contents, span))
            }
            None => Err(self.unexpected_char_err(c)),
        }
    }

    fn parse_numeric_or_symbol(&mut self, c: char) -> Result<Node> {
        match numeric_prefix_len(self.input) {
            Some((len, is_double)) => {
                let node_tag = if is_double { tag::DOUBLE } else { tag::NUMBER };

                let (span, contents) = self.consume_bytes(len);
                Ok(Node::leaf(node_tag, contents, span))
            }
            // A lone `-` is subtraction
            None => self.parse_symbol(c),
        }
    }

    fn parse_seq<F>(&mut self, node_tag: &'static str, terminator: char, make_ec: F) -> Result<Node>
    where
        F: FnOnce(Span) -> ExpectedContent,
    {
        let start = self.consumed_bytes;

        // Consume the opening bracket
        let (open_span, open_contents) = self.consume_bytes(1);
        let ec = make_ec(open_span);

        let mut children = vec![Node::leaf(tag::CHAR, open_contents, open_span)];

        // Keep eating expressions until we hit the terminator
        loop {
            let next_char = self.skip_whitespace(ec)?;
            if next_char == terminator {
                let (close_span, close_contents) = self.consume_bytes(1);
                children.push(Node::leaf(tag::CHAR, close_contents, close_span));

                break Ok(Node::branch(
                    node_tag,
                    self.span(start, self.consumed_bytes),
                    children,
                ));
            } else {
                children.push(self.parse_expr_starting_with(next_char)?);
            }
        }
    }

    fn parse_expr_starting_with(&mut self, c: char) -> Result<Node> {
        match c {
            '(' => self.parse_seq(tag::SEXPR, ')', ExpectedContent::SExpr),
            '{' => self.parse_seq(tag::QEXPR, '}', ExpectedContent::QExpr),
            '-' | '0'..='9' => self.parse_numeric_or_symbol(c),
            _ => self.parse_symbol(c),
        }
    }

    fn parse_expr(&mut self) -> Result<Node> {
        let start_char = self.skip_whitespace(ExpectedContent::Expr)?;
        self.parse_expr_starting_with(start_char)
    }

    fn parse_program(&mut self) -> Result<Node> {
        let start = self.consumed_bytes;
        let mut children = vec![Node::leaf(tag::REGEX, "", self.span(start, start))];

        // Keep eating expressions until we hit EOF
        loop {
            match self.parse_expr() {
                Ok(node) => {
                    children.push(node);
                }
                Err(Error {
                    kind: ErrorKind::Eof(ExpectedContent::Expr),
                    ..
                }) => {
                    break;
                }
                Err(other) => {
                    return Err(other);
                }
            }
        }

        let end = self.consumed_bytes;
        children.push(Node::leaf(tag::REGEX, "", self.span(end, end)));

        Ok(Node::branch(tag::ROOT, self.span(start, end), children))
    }
}

/////////

pub fn expr_from_str(file_id: Option<FileId>, s: &str) -> Result<Node> {
    let mut parser = Parser::from_str(file_id, s, 0);
    parser.parse_expr()
}

pub fn program_from_str(file_id: Option<FileId>, s: &str) -> Result<Node> {
    program_from_str_with_span_offset(file_id, s, 0)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::span::t2s;

    fn whole_str_span(v: &str) -> Span {
        Span::new(None, 0, v.len() as u32)
    }

    fn leaf(node_tag: &str, contents: &str, t: &str) -> Node {
        Node::leaf(node_tag, contents, t2s(t))
    }

    fn bracket(contents: &str, t: &str) -> Node {
        leaf(tag::CHAR, contents, t)
    }

    #[test]
    fn number_node() {
        for &j in &["0", "000", "1000", "-1000", "99999999999999999999999"] {
            let expected = Node::leaf(tag::NUMBER, j, whole_str_span(j));
            assert_eq!(expected, expr_from_str(None, j).unwrap());
        }

        let j = "   42";
        let t = "   ^^";
        assert_eq!(leaf(tag::NUMBER, "42", t), expr_from_str(None, j).unwrap());
    }

    #[test]
    fn double_node() {
        for &j in &["0.0", "1.5", "-2.25", "10.000"] {
            let expected = Node::leaf(tag::DOUBLE, j, whole_str_span(j));
            assert_eq!(expected, expr_from_str(None, j).unwrap());
        }
    }

    #[test]
    fn trailing_dot_is_not_a_double() {
        let j = "1.";
        let t = " ^";
        let err = Error::new(t2s(t), ErrorKind::UnexpectedChar('.'));
        assert_eq!(err, program_from_str(None, j).unwrap_err());
    }

    #[test]
    fn symbol_node() {
        for &j in SYMBOLS {
            let expected_tag = if j.len() == 1 {
                tag::SYMBOL_CHAR
            } else {
                tag::SYMBOL_STRING
            };

            let expected = Node::leaf(expected_tag, j, whole_str_span(j));
            assert_eq!(expected, expr_from_str(None, j).unwrap());
        }
    }

    #[test]
    fn unknown_symbol() {
        let j = "  foo";
        let t = "  ^  ";
        let err = Error::new(t2s(t), ErrorKind::UnexpectedChar('f'));
        assert_eq!(err, expr_from_str(None, j).unwrap_err());
    }

    #[test]
    fn minus_before_digit_is_negative() {
        let j = "- -1";
        let t = "^   ";
        let u = "  ^^";

        let expected = Node::branch(
            tag::ROOT,
            whole_str_span(j),
            vec![
                Node::leaf(tag::REGEX, "", Span::new(None, 0, 0)),
                leaf(tag::SYMBOL_CHAR, "-", t),
                leaf(tag::NUMBER, "-1", u),
                leaf(tag::REGEX, "", "   >"),
            ],
        );
        assert_eq!(expected, program_from_str(None, j).unwrap());
    }

    #[test]
    fn adjacent_symbols() {
        let j = "listhead+1";
        let t = "^^^^      ";
        let u = "    ^^^^  ";
        let v = "        ^ ";
        let w = "         ^";

        let expected = Node::branch(
            tag::ROOT,
            whole_str_span(j),
            vec![
                Node::leaf(tag::REGEX, "", Span::new(None, 0, 0)),
                leaf(tag::SYMBOL_STRING, "list", t),
                leaf(tag::SYMBOL_STRING, "head", u),
                leaf(tag::SYMBOL_CHAR, "+", v),
                leaf(tag::NUMBER, "1", w),
                leaf(tag::REGEX, "", "         >"),
            ],
        );
        assert_eq!(expected, program_from_str(None, j).unwrap());
    }

    #[test]
    fn sexpr_node() {
        let j = "()";
        let t = "^^";
        let expected = Node::branch(
            tag::SEXPR,
            t2s(t),
            vec![bracket("(", "^ "), bracket(")", " ^")],
        );
        assert_eq!(expected, expr_from_str(None, j).unwrap());

        let j = "(+ 1 (max 2.5))";
        let t = "^^^^^^^^^^^^^^^";
        let u = " ^             ";
        let v = "   ^           ";
        let w = "     ^^^^^^^^^ ";
        let x = "      ^^^      ";
        let y = "          ^^^  ";

        let expected = Node::branch(
            tag::SEXPR,
            t2s(t),
            vec![
                bracket("(", "^              "),
                leaf(tag::SYMBOL_CHAR, "+", u),
                leaf(tag::NUMBER, "1", v),
                Node::branch(
                    tag::SEXPR,
                    t2s(w),
                    vec![
                        bracket("(", "     ^         "),
                        leaf(tag::SYMBOL_STRING, "max", x),
                        leaf(tag::DOUBLE, "2.5", y),
                        bracket(")", "             ^ "),
                    ],
                ),
                bracket(")", "              ^"),
            ],
        );
        assert_eq!(expected, expr_from_str(None, j).unwrap());
    }

    #[test]
    fn qexpr_node() {
        let j = "{ head\t{} }";
        let t = "^^^^^^^^^^^";
        let u = "  ^^^^     ";
        let v = "       ^^  ";

        let expected = Node::branch(
            tag::QEXPR,
            t2s(t),
            vec![
                bracket("{", "^          "),
                leaf(tag::SYMBOL_STRING, "head", u),
                Node::branch(
                    tag::QEXPR,
                    t2s(v),
                    vec![bracket("{", "       ^   "), bracket("}", "        ^  ")],
                ),
                bracket("}", "          ^"),
            ],
        );
        assert_eq!(expected, expr_from_str(None, j).unwrap());
    }

    #[test]
    fn unterminated_seq() {
        let j = "(list {1 2";
        let t = "         >";
        let u = "      ^   ";
        let err = Error::new(t2s(t), ErrorKind::Eof(ExpectedContent::QExpr(t2s(u))));
        assert_eq!(err, program_from_str(None, j).unwrap_err());

        let j = "(tail";
        let t = "    >";
        let u = "^    ";
        let err = Error::new(t2s(t), ErrorKind::Eof(ExpectedContent::SExpr(t2s(u))));
        assert_eq!(err, program_from_str(None, j).unwrap_err());
    }

    #[test]
    fn mismatched_brackets() {
        let j = "(list 1}";
        let t = "       ^";
        let err = Error::new(t2s(t), ErrorKind::UnexpectedChar('}'));
        assert_eq!(err, program_from_str(None, j).unwrap_err());

        let j = "(eval {}))";
        let t = "         ^";
        let err = Error::new(t2s(t), ErrorKind::UnexpectedChar(')'));
        assert_eq!(err, program_from_str(None, j).unwrap_err());
    }

    #[test]
    fn empty_program() {
        for &j in &["", "  \t\n"] {
            let end = j.len() as u32;
            let expected = Node::branch(
                tag::ROOT,
                whole_str_span(j),
                vec![
                    Node::leaf(tag::REGEX, "", Span::new(None, 0, 0)),
                    Node::leaf(tag::REGEX, "", Span::new(None, end, end)),
                ],
            );

            assert_eq!(expected, program_from_str(None, j).unwrap());
        }

        let err = Error::new(Span::new(None, 2, 2), ErrorKind::Eof(ExpectedContent::Expr));
        assert_eq!(err, expr_from_str(None, "  ").unwrap_err());
    }

    #[test]
    fn span_offset_and_file_id() {
        let file_id = FileId::new(3);
        let node = program_from_str_with_span_offset(file_id, "+ 1 2", 10).unwrap();

        assert_eq!(Span::new(file_id, 10, 15), node.span());
        assert_eq!(Span::new(file_id, 12, 13), node.children()[2].span());
    }

    #[test]
    fn multibyte_unexpected_char() {
        let j = "(λ)";
        let err = program_from_str(None, j).unwrap_err();

        assert_eq!(&ErrorKind::UnexpectedChar('λ'), err.kind());
        assert_eq!(Span::new(None, 1, 3), err.span());
    }
}
