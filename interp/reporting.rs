use std::io;
use std::path::Path;

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::term;
use termcolor::{ColorChoice, StandardStream};

use lispy_syntax::error::{Error as SyntaxError, ErrorKind as SyntaxErrorKind};
use lispy_syntax::span::{FileId, Span};

use crate::source::SourceLoader;

/// Returns a primary label for the passed span
///
/// Spans without a file can't be rendered and produce no label.
pub fn new_primary_label(span: Span, message: impl Into<String>) -> Option<Label<FileId>> {
    span.file_id()
        .map(|file_id| Label::primary(file_id, span.byte_range()).with_message(message))
}

pub fn new_secondary_label(span: Span, message: impl Into<String>) -> Option<Label<FileId>> {
    span.file_id()
        .map(|file_id| Label::secondary(file_id, span.byte_range()).with_message(message))
}

pub fn diagnostic_for_syntax_error(error: &SyntaxError) -> Diagnostic<FileId> {
    let origin = error.span();

    let primary_label_message = match error.kind() {
        SyntaxErrorKind::Eof(ec) => match ec.close_char() {
            Some(close_char) => format!("expected `{}`", close_char),
            None => "expected expression".to_owned(),
        },
        SyntaxErrorKind::UnexpectedChar(_) => "unexpected character".to_owned(),
    };

    let mut labels: Vec<Label<FileId>> = new_primary_label(origin, primary_label_message)
        .into_iter()
        .collect();

    if let SyntaxErrorKind::Eof(ec) = error.kind() {
        if let Some(open_char_span) = ec.open_char_span() {
            labels.extend(new_secondary_label(
                open_char_span,
                format!("{} starts here", ec.description()),
            ));
        }
    }

    Diagnostic::error()
        .with_message(error.kind().message())
        .with_labels(labels)
}

pub fn diagnostic_for_io_error(path: &Path, error: &io::Error) -> Diagnostic<FileId> {
    Diagnostic::error().with_message(format!(
        "error reading `{}`: {}",
        path.to_string_lossy(),
        error
    ))
}

/// Emits a series of diagnostics to standard error
///
/// Standard error stays locked until the whole series is written.
pub fn emit_diagnostics_to_stderr(
    source_loader: &SourceLoader,
    diagnostics: impl IntoIterator<Item = Diagnostic<FileId>>,
    color_choice: ColorChoice,
) {
    let config = term::Config::default();
    let files = source_loader.files();

    let stderr = StandardStream::stderr(color_choice);
    let mut stderr_lock = stderr.lock();

    for diagnostic in diagnostics {
        let _ = term::emit(&mut stderr_lock, &config, &files, &diagnostic);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use codespan_reporting::diagnostic::{LabelStyle, Severity};
    use termcolor::NoColor;

    fn render(source_loader: &SourceLoader, diagnostic: &Diagnostic<FileId>) -> String {
        let mut output = NoColor::new(Vec::<u8>::new());
        let files = source_loader.files();

        term::emit(&mut output, &term::Config::default(), &files, diagnostic).unwrap();
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn unclosed_list() {
        let source_loader = SourceLoader::new();
        let source_file = source_loader.load_string("unclosed".into(), "{1 2");
        let err = source_file.parsed().unwrap_err();

        let diagnostic = diagnostic_for_syntax_error(&err);
        assert_eq!(Severity::Error, diagnostic.severity);
        assert_eq!(
            "unexpected end of input while parsing q-expression",
            diagnostic.message
        );

        assert_eq!(2, diagnostic.labels.len());
        assert_eq!(LabelStyle::Primary, diagnostic.labels[0].style);
        assert_eq!(4..4, diagnostic.labels[0].range);
        assert_eq!(LabelStyle::Secondary, diagnostic.labels[1].style);
        assert_eq!(0..1, diagnostic.labels[1].range);

        let rendered = render(&source_loader, &diagnostic);
        assert!(rendered.contains("unclosed"));
        assert!(rendered.contains("q-expression starts here"));
    }

    #[test]
    fn unexpected_char() {
        let source_loader = SourceLoader::new();
        let source_file = source_loader.load_string("bad".into(), "+ 1 &");
        let err = source_file.parsed().unwrap_err();

        let diagnostic = diagnostic_for_syntax_error(&err);
        assert_eq!("unexpected `&`", diagnostic.message);
        assert_eq!(1, diagnostic.labels.len());
        assert_eq!(4..5, diagnostic.labels[0].range);
    }

    #[test]
    fn fileless_error_has_no_labels() {
        let err = lispy_syntax::parser::program_from_str(None, "(").unwrap_err();
        let diagnostic = diagnostic_for_syntax_error(&err);

        assert!(diagnostic.labels.is_empty());
    }

    #[test]
    fn io_error() {
        let err = io::Error::new(io::ErrorKind::NotFound, "not found");
        let diagnostic = diagnostic_for_io_error(Path::new("missing.lspy"), &err);

        assert_eq!("error reading `missing.lspy`: not found", diagnostic.message);
    }
}
