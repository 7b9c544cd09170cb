use std::fmt;
use std::num::NonZeroU32;
use std::ops::Range;

/// Identifies a source file loaded by the host
#[derive(PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord, Debug)]
pub struct FileId(NonZeroU32);

impl FileId {
    pub fn new(id: u32) -> Option<FileId> {
        NonZeroU32::new(id).map(FileId)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct Span {
    file_id: Option<FileId>,
    start: u32,
    end: u32,
}

impl Span {
    pub const fn new(file_id: Option<FileId>, start: u32, end: u32) -> Span {
        Span {
            file_id,
            start,
            end,
        }
    }

    pub fn file_id(self) -> Option<FileId> {
        self.file_id
    }

    pub fn start(self) -> u32 {
        self.start
    }

    pub fn end(self) -> u32 {
        self.end
    }

    pub fn byte_range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(file_id) = self.file_id {
            write!(f, "{}:", file_id.get())?;
        }

        if self.start == self.end {
            write!(f, "Span[{}]", self.start)
        } else {
            write!(f, "Span[{}:{}]", self.start, self.end)
        }
    }
}

pub const EMPTY_SPAN: Span = Span::new(None, 0, 0);

/// Builds a span from a caret marker string
///
/// `^` characters mark the covered bytes while a single `>` marks a zero-width span after it.
#[cfg(test)]
pub(crate) fn t2s(v: &str) -> Span {
    if let Some(zero_size_off) = v.find('>') {
        let byte_pos = (zero_size_off + 1) as u32;

        return Span::new(None, byte_pos, byte_pos);
    }

    let start = v.find('^').expect("Positioning character not found") as u32;
    let end = v.rfind('^').map(|i| i + 1).unwrap() as u32;

    Span::new(None, start, end)
}
