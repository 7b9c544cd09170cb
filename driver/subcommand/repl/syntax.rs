use lispy_syntax::error::{Error, ErrorKind, ExpectedContent};

use super::command::{HELP_COMMAND, QUIT_COMMAND};

/// Maximum line length we'll provide parser hints and error highlighting for
///
/// This requires parsing the whole line and we don't support incremental reparsing. Pasting a
/// large line character-by-character would otherwise reparse it once per character.
pub const MAXIMUM_PARSED_LINE_LEN: usize = 512;

pub fn error_for_line(line: &str) -> Option<Error> {
    use lispy_syntax::parser::program_from_str;

    // Is this a command?
    if line.trim() == HELP_COMMAND || line.trim() == QUIT_COMMAND ||
    // Or empty?
    line.chars().all(char::is_whitespace) ||
    // Or is too large to parse interactively?
    line.len() > MAXIMUM_PARSED_LINE_LEN
    {
        return None;
    }

    program_from_str(None, line).err()
}

/// Returns the content that was left open at the end of the line
pub fn expected_content_for_line(line: &str) -> Option<ExpectedContent> {
    error_for_line(line).and_then(|error| {
        if let ErrorKind::Eof(expected_content) = error.kind() {
            Some(*expected_content)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn complete_lines() {
        for &line in &["", "  ", "+ 1 2", "(list 1 {2})", "/help", "/quit"] {
            assert_eq!(None, error_for_line(line), "`{}`", line);
        }
    }

    #[test]
    fn unterminated_lines() {
        assert_eq!(
            Some('}'),
            expected_content_for_line("list {1 2").and_then(|ec| ec.close_char())
        );
        assert_eq!(
            Some(')'),
            expected_content_for_line("{(+ 1").and_then(|ec| ec.close_char())
        );
    }

    #[test]
    fn invalid_lines() {
        let error = error_for_line("+ 1 &").unwrap();
        assert_eq!(&ErrorKind::UnexpectedChar('&'), error.kind());
        assert_eq!(None, expected_content_for_line("+ 1 &"));
    }

    #[test]
    fn long_lines_are_not_parsed() {
        let line = "(".repeat(MAXIMUM_PARSED_LINE_LEN + 1);
        assert_eq!(None, error_for_line(&line));
    }
}
