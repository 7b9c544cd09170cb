use std::ffi::OsString;
use std::ops::Range;
use std::sync::{Arc, RwLock, RwLockReadGuard};
use std::{fmt, fs, io, path};

use codespan_reporting::files::Error as CodespanError;

use lispy_syntax::error::Error;
use lispy_syntax::node::Node;
use lispy_syntax::parser::program_from_str_with_span_offset;
use lispy_syntax::span::FileId;

/// Loaded source text along with its parsed program
pub struct SourceFile {
    file_id: FileId,
    source: Arc<str>,
    parsed: Result<Node, Error>,
}

impl SourceFile {
    pub fn file_id(&self) -> FileId {
        self.file_id
    }

    pub fn source(&self) -> &'_ str {
        self.source.as_ref()
    }

    /// Returns the whole file parsed as a single program
    pub fn parsed(&self) -> Result<&Node, Error> {
        match &self.parsed {
            Ok(node) => Ok(node),
            Err(err) => Err(err.clone()),
        }
    }

    /// Parses every non-blank line as an independent program
    ///
    /// Spans are relative to the start of the file so diagnostics point at the correct line.
    pub fn parsed_lines(&self) -> impl Iterator<Item = Result<Node, Error>> + '_ {
        let file_id = self.file_id;

        self.source
            .split('\n')
            .scan(0, |line_start, line| {
                let span_offset = *line_start;
                *line_start += line.len() + 1;

                Some((span_offset, line))
            })
            .filter(|(_, line)| !line.trim().is_empty())
            .map(move |(span_offset, line)| {
                program_from_str_with_span_offset(Some(file_id), line, span_offset as u32)
            })
    }
}

impl fmt::Debug for SourceFile {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.file_id.fmt(formatter)
    }
}

struct ReportableFile {
    filename: OsString,
    source: Arc<str>,
    line_offsets: Vec<usize>,
}

impl ReportableFile {
    fn name(&self) -> String {
        self.filename.to_string_lossy().into()
    }

    fn source(&self) -> &str {
        self.source.as_ref()
    }

    fn line_index(&self, offset: usize) -> usize {
        match self
            .line_offsets
            .binary_search_by(|line_start| line_start.cmp(&offset))
        {
            Ok(line) => line,
            Err(line) => line - 1,
        }
    }

    fn line_range(&self, line_index: usize) -> Option<Range<usize>> {
        let start = self.line_offsets.get(line_index)?;

        let end = self
            .line_offsets
            .get(line_index + 1)
            .cloned()
            .unwrap_or_else(|| self.source.len());

        Some(*start..end)
    }
}

/// Registry of every source file seen by the interpreter
///
/// Files are never unloaded; a `FileId` is the one-based index of its file.
#[derive(Default)]
pub struct SourceLoader {
    files: RwLock<Vec<ReportableFile>>,
}

impl SourceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Synchronously read path into a `SourceFile`
    pub fn load_path(&self, path: &path::Path) -> Result<SourceFile, io::Error> {
        let source = fs::read_to_string(path)?;
        Ok(self.load_string(path.as_os_str().to_owned(), source))
    }

    /// Loads a caller-provided string into a `SourceFile`
    pub fn load_string(&self, filename: OsString, source: impl Into<Arc<str>>) -> SourceFile {
        let source: Arc<str> = source.into();
        let reportable_file = ReportableFile {
            filename,
            line_offsets: codespan_reporting::files::line_starts(&source).collect(),
            source: source.clone(),
        };

        let file_index = {
            let mut files_write = self.files.write().unwrap();

            files_write.push(reportable_file);
            files_write.len()
        };

        let file_id = FileId::new(file_index as u32).unwrap();
        SourceFile {
            file_id,
            parsed: program_from_str_with_span_offset(Some(file_id), &source, 0),
            source,
        }
    }

    /// Returns a `ReportableFiles` instance usable with `codespan-reporting`
    ///
    /// This will take our instance's read lock.
    pub fn files(&self) -> ReportableFiles<'_> {
        ReportableFiles {
            files: self.files.read().unwrap(),
        }
    }
}

pub struct ReportableFiles<'a> {
    files: RwLockReadGuard<'a, Vec<ReportableFile>>,
}

impl<'a> ReportableFiles<'a> {
    fn get_file(&self, file_id: FileId) -> Result<&ReportableFile, CodespanError> {
        self.files
            .get((file_id.get() - 1) as usize)
            .ok_or(CodespanError::FileMissing)
    }
}

type CodespanResult<T> = Result<T, CodespanError>;

impl<'a> codespan_reporting::files::Files<'a> for ReportableFiles<'a> {
    type FileId = FileId;
    type Source = &'a str;
    type Name = String;

    fn name(&self, file_id: FileId) -> CodespanResult<String> {
        self.get_file(file_id).map(ReportableFile::name)
    }

    fn source(&'a self, file_id: FileId) -> CodespanResult<&'a str> {
        self.get_file(file_id).map(ReportableFile::source)
    }

    fn line_index(&self, file_id: FileId, offset: usize) -> CodespanResult<usize> {
        self.get_file(file_id).map(|f| f.line_index(offset))
    }

    fn line_range(&self, file_id: FileId, line_index: usize) -> CodespanResult<Range<usize>> {
        self.get_file(file_id).and_then(|f| {
            f.line_range(line_index).ok_or(CodespanError::LineTooLarge {
                given: line_index,
                max: f.line_offsets.len(),
            })
        })
    }
}
