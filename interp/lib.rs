#![warn(clippy::all)]
#![warn(rust_2018_idioms)]

pub mod builtin;
pub mod error;
pub mod eval;
pub mod printer;
pub mod reader;
pub mod repl;
pub mod reporting;
pub mod source;
pub mod value;

pub use crate::eval::eval;
pub use crate::reader::read;
pub use crate::reporting::emit_diagnostics_to_stderr;
pub use crate::source::{SourceFile, SourceLoader};
pub use crate::value::{Cells, Value};

/// Parses, reads and evaluates a single input
///
/// This is the whole pipeline minus source tracking; syntax errors are returned without a file.
pub fn eval_str(input: &str) -> Result<Value, lispy_syntax::error::Error> {
    let program = lispy_syntax::parser::program_from_str(None, input)?;
    Ok(eval(read(&program)))
}
