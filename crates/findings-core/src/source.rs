//! Source locations for diagnostics.
//!
//! A [`SourceRange`] names a file and a half-open byte range within it,
//! together with the line and column of both ends for display purposes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single position within a source file.
///
/// Lines and columns are 1-based and intended for humans; `byte` is the
/// 0-based byte offset and is the value used when ordering positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourcePos {
    line: usize,
    column: usize,
    byte: usize,
}

impl SourcePos {
    /// Create a new position.
    pub fn new(line: usize, column: usize, byte: usize) -> Self {
        Self { line, column, byte }
    }

    /// Get the 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the 1-based column number.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Get the 0-based byte offset.
    pub fn byte(&self) -> usize {
        self.byte
    }
}

/// A range of bytes within a named source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRange {
    filename: String,
    start: SourcePos,
    end: SourcePos,
}

impl SourceRange {
    /// Create a new range covering `start..end` in `filename`.
    pub fn new(filename: impl Into<String>, start: SourcePos, end: SourcePos) -> Self {
        Self {
            filename: filename.into(),
            start,
            end,
        }
    }

    /// Get the name of the file this range points into.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Get the start position (inclusive).
    pub fn start(&self) -> SourcePos {
        self.start
    }

    /// Get the end position (exclusive).
    pub fn end(&self) -> SourcePos {
        self.end
    }

    /// Get the length of the range in bytes.
    pub fn len(&self) -> usize {
        self.end.byte.saturating_sub(self.start.byte)
    }

    /// Check if the range is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether `other` lies entirely within this range.
    ///
    /// Ranges in different files never contain one another.
    pub fn contains(&self, other: &SourceRange) -> bool {
        self.filename == other.filename
            && self.start.byte <= other.start.byte
            && other.end.byte <= self.end.byte
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{},{}-{},{}",
            self.filename, self.start.line, self.start.column, self.end.line, self.end.column
        )
    }
}
