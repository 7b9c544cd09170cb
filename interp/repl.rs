use std::sync::Arc;

use codespan_reporting::diagnostic::Diagnostic;

use lispy_syntax::span::FileId;

use crate::builtin;
use crate::eval::eval;
use crate::reader::read;
use crate::reporting::diagnostic_for_syntax_error;
use crate::source::SourceLoader;
use crate::value::Value;

/// Interactive evaluation context
///
/// Each line is loaded as its own source file so diagnostics can point back at it.
pub struct ReplCtx {
    source_loader: Arc<SourceLoader>,
}

impl ReplCtx {
    pub fn new(source_loader: Arc<SourceLoader>) -> Self {
        Self { source_loader }
    }

    pub fn source_loader(&self) -> &SourceLoader {
        &self.source_loader
    }

    /// Returns every name that can lead an s-expression
    pub fn bound_names(&self) -> Vec<&'static str> {
        builtin::names().collect()
    }

    /// Evaluates a line of input
    ///
    /// Syntax errors are returned as diagnostics; evaluation errors are ordinary error values.
    pub fn eval_line(&self, input: String) -> Result<Value, Vec<Diagnostic<FileId>>> {
        let source_file = self.source_loader.load_string("repl".into(), input);

        let program = source_file
            .parsed()
            .map_err(|err| vec![diagnostic_for_syntax_error(&err)])?;

        Ok(eval(read(program)))
    }
}
