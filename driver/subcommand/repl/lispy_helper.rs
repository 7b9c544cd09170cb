use std::borrow::Cow;

use ansi_term::{Colour, Style};

use rustyline::validate::{ValidationContext, ValidationResult};

use lispy_syntax::parser::is_symbol_char;

use super::command::{HELP_COMMAND, QUIT_COMMAND};
use super::syntax::{error_for_line, expected_content_for_line, MAXIMUM_PARSED_LINE_LEN};

/// Completions that aren't builtin names
const COMMAND_COMPLETIONS: &[&str] = &[QUIT_COMMAND, HELP_COMMAND];

/// Implementation of Rustyline's `Helper` trait
pub struct LispyHelper {
    all_names: Vec<&'static str>,
    colour: bool,
}

fn sorted_strings_prefixed_by<'a, T: AsRef<str>>(
    haystack: &'a [T],
    prefix: &'a str,
) -> impl Iterator<Item = &'a T> + 'a {
    // Use a binary search to find the start of the strings
    let start_pos = match haystack.binary_search_by(|needle| needle.as_ref().cmp(prefix)) {
        Ok(found) => found,
        Err(insert_idx) => insert_idx,
    };

    haystack[start_pos..]
        .iter()
        // Once we stop matching prefixes we're done
        .take_while(move |needle| needle.as_ref().starts_with(prefix))
}

/// Returns true if the character can continue a name or command
fn is_name_char(c: char) -> bool {
    is_symbol_char(c)
}

impl LispyHelper {
    pub fn new(mut bound_names: Vec<&'static str>, colour: bool) -> LispyHelper {
        bound_names.extend(COMMAND_COMPLETIONS);
        bound_names.sort_unstable();
        bound_names.dedup();

        LispyHelper {
            all_names: bound_names,
            colour,
        }
    }
}

impl rustyline::completion::Completer for LispyHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        let prefix_start = line[0..pos]
            .rfind(|c| !is_name_char(c))
            .map(|i| i + 1)
            .unwrap_or(0);

        let prefix = &line[prefix_start..pos];

        let suffix = if line.len() > pos {
            let suffix_end = line[pos..]
                .find(|c| !is_name_char(c))
                .map(|i| i + pos)
                .unwrap_or_else(|| line.len());
            &line[pos..suffix_end]
        } else {
            ""
        };

        let is_first_name = pos == prefix.len();

        let options = sorted_strings_prefixed_by(&self.all_names, prefix)
            .filter(|name| {
                // Don't complete commands in illegal positions
                is_first_name || !COMMAND_COMPLETIONS.contains(name)
            })
            .filter_map(|name| {
                if name.ends_with(suffix) {
                    Some((&name[0..name.len() - suffix.len()]).to_owned())
                } else {
                    None
                }
            })
            .collect();

        Ok((prefix_start, options))
    }
}

impl rustyline::hint::Hinter for LispyHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }

        let last_name_start = line
            .rfind(|c| !is_name_char(c))
            .map(|i| i + 1)
            .unwrap_or(0);

        let last_name = &line[last_name_start..];
        let is_first_name = pos == last_name.len();

        if !last_name.is_empty() {
            let completion = sorted_strings_prefixed_by(&self.all_names, last_name).find(|name| {
                // Don't suggest ourselves or commands mid-line
                name.len() != last_name.len()
                    && (is_first_name || !COMMAND_COMPLETIONS.contains(name))
            });

            if let Some(name) = completion {
                return Some(name[last_name.len()..].to_owned());
            }
        }

        expected_content_for_line(line)
            .and_then(|ec| ec.close_char())
            .map(|close_char| close_char.to_string())
    }
}

impl rustyline::highlight::Highlighter for LispyHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !self.colour {
            return line.into();
        }

        // See if we have an error
        let error_span = error_for_line(line).and_then(|error| {
            if let lispy_syntax::error::ErrorKind::Eof(ec) = error.kind() {
                // We'll already be hinting at the end of the line so point to the opening char
                ec.open_char_span()
            } else {
                Some(error.span())
            }
        });

        let error_span = if let Some(error_span) = error_span {
            error_span
        } else {
            return line.into();
        };

        let error_start = error_span.start() as usize;
        let error_end = error_span.end() as usize;

        let prefix = &line[0..error_start];
        let error = &line[error_start..error_end];
        let suffix = &line[error_end..];

        let error_style = Colour::Red.bold();
        format!("{}{}{}", prefix, error_style.paint(error), suffix).into()
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        if !self.colour {
            return prompt.into();
        }

        let prompt_style = Colour::Fixed(25); // DeepSkyBlue4 (#005faf)
        prompt_style.paint(prompt).to_string().into()
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        if !self.colour {
            return hint.into();
        }

        if hint.chars().next().map(is_name_char) == Some(true) {
            // This is a name completion
            let name_style = Style::new().dimmed();
            name_style.paint(hint).to_string().into()
        } else {
            // This is an unexpected EOF hint
            let unexpected_eof_style = Colour::Red.bold();
            unexpected_eof_style.paint(hint).to_string().into()
        }
    }

    fn highlight_char(&self, line: &str, _pos: usize) -> bool {
        // Any bracket or name character can change the structure of input
        self.colour && line.len() <= MAXIMUM_PARSED_LINE_LEN
    }
}

impl rustyline::validate::Validator for LispyHelper {
    fn validate(
        &self,
        ctx: &mut ValidationContext<'_>,
    ) -> Result<ValidationResult, rustyline::error::ReadlineError> {
        match expected_content_for_line(ctx.input()) {
            Some(ec) if ec.close_char().is_some() => Ok(ValidationResult::Incomplete),
            _ => Ok(ValidationResult::Valid(None)),
        }
    }
}

impl rustyline::Helper for LispyHelper {}
