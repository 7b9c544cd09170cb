use std::path;

use ansi_term::Colour;
use tracing::debug;

use lispy_interp::reporting::{diagnostic_for_io_error, diagnostic_for_syntax_error};
use lispy_interp::{emit_diagnostics_to_stderr, eval, read, SourceFile, SourceLoader, Value};
use lispy_syntax::error::Error as SyntaxError;

use crate::DriverConfig;

/// Prints a value on its own line, colouring errors if enabled
pub fn print_value(cfg: &DriverConfig, value: &Value) {
    if cfg.colour() && value.is_error() {
        println!("{}", Colour::Red.paint(value.to_string()));
    } else {
        println!("{}", value);
    }
}

/// Evaluates every non-blank line of a file as a separate input
///
/// A line that fails to parse doesn't stop the lines after it.
fn eval_lines(source_file: &SourceFile) -> Vec<Result<Value, SyntaxError>> {
    source_file
        .parsed_lines()
        .map(|parsed_line| parsed_line.map(|program| eval(read(&program))))
        .collect()
}

/// Prints the result of each line of a loaded file and reports its syntax errors
///
/// Returns false if any line failed to parse.
pub fn eval_source_file(
    cfg: &DriverConfig,
    source_loader: &SourceLoader,
    source_file: &SourceFile,
) -> bool {
    let mut all_parsed = true;

    for result in eval_lines(source_file) {
        match result {
            Ok(value) => print_value(cfg, &value),
            Err(err) => {
                all_parsed = false;
                emit_diagnostics_to_stderr(
                    source_loader,
                    vec![diagnostic_for_syntax_error(&err)],
                    cfg.color_choice(),
                );
            }
        }
    }

    all_parsed
}

/// Loads and evaluates a file
///
/// Returns false if the file couldn't be read or any line failed to parse.
pub fn eval_input_file(cfg: &DriverConfig, input_path: &path::Path) -> bool {
    let source_loader = SourceLoader::new();

    let source_file = match source_loader.load_path(input_path) {
        Ok(source_file) => source_file,
        Err(err) => {
            emit_diagnostics_to_stderr(
                &source_loader,
                vec![diagnostic_for_io_error(input_path, &err)],
                cfg.color_choice(),
            );
            return false;
        }
    };

    debug!(path = %input_path.display(), "evaluating file");
    eval_source_file(cfg, &source_loader, &source_file)
}
