//! The cursors that the duration parser reads its input through.

use alloc::{borrow::Cow, string::String};

/// Read access to the input of a duration string.
///
/// The grammar is entirely made of ASCII digits, signs, `.` and unit
/// spellings, so the parser works on bytes regardless of how the input was
/// handed to it.
pub(crate) trait DurationCursor {
    /// Returns the byte under the cursor.
    fn peek(&self) -> Option<u8>;

    /// Moves the cursor forward by one byte.
    fn advance(&mut self);

    /// Returns the current position of the cursor.
    fn pos(&self) -> usize;

    /// Returns the byte at an absolute position.
    fn byte_at(&self, index: usize) -> Option<u8>;

    /// Returns the bytes between two positions.
    fn slice(&self, start: usize, end: usize) -> &[u8];

    /// Returns the full input, for error reporting.
    fn source(&self) -> Cow<'_, str>;

    /// Advances while `pred` holds for the byte under the cursor, returning
    /// the position the run started at.
    fn advance_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.pos();
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
        start
    }

    /// Returns whether the remaining input is exactly `expected`.
    fn rest_is(&self, expected: &[u8]) -> bool {
        let pos = self.pos();
        expected
            .iter()
            .enumerate()
            .all(|(i, b)| self.byte_at(pos + i) == Some(*b))
            && self.byte_at(pos + expected.len()).is_none()
    }
}

/// A cursor over a `&str`.
#[derive(Debug)]
pub(crate) struct StrCursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> StrCursor<'a> {
    pub(crate) const fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }
}

impl DurationCursor for StrCursor<'_> {
    #[inline]
    fn peek(&self) -> Option<u8> {
        self.byte_at(self.pos)
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    fn byte_at(&self, index: usize) -> Option<u8> {
        self.source.as_bytes().get(index).copied()
    }

    fn slice(&self, start: usize, end: usize) -> &[u8] {
        self.source.as_bytes().get(start..end).unwrap_or_default()
    }

    fn source(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.source)
    }
}

/// A cursor over raw UTF-8 bytes.
#[derive(Debug)]
pub(crate) struct ByteCursor<'a> {
    source: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub(crate) const fn new(source: &'a [u8]) -> Self {
        Self { source, pos: 0 }
    }
}

impl DurationCursor for ByteCursor<'_> {
    #[inline]
    fn peek(&self) -> Option<u8> {
        self.byte_at(self.pos)
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    fn byte_at(&self, index: usize) -> Option<u8> {
        self.source.get(index).copied()
    }

    fn slice(&self, start: usize, end: usize) -> &[u8] {
        self.source.get(start..end).unwrap_or_default()
    }

    fn source(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.source)
    }
}
