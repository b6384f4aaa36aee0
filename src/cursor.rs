//! Byte cursor for scanning a single line.
//!
//! The inline scanner, the row splitter and the block predicates all walk a
//! line left to right once, so the cursor only moves forward. Searches for
//! the next interesting byte go through `memchr`.

use memchr::{memchr, memchr3};

use crate::Range;

/// A forward-only position within one line.
///
/// # Example
/// ```
/// use mdcat::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"**Hello**, World!");
/// assert_eq!(cursor.run_len(b'*', 3), 2);
/// cursor.advance(2);
/// assert_eq!(cursor.peek(), Some(b'H'));
/// assert_eq!(cursor.find(b'*'), Some(5));
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    line: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub fn new(line: &'a [u8]) -> Self {
        Self { line, pos: 0 }
    }

    /// Start `offset` bytes into the line.
    #[inline]
    pub fn new_at(line: &'a [u8], offset: usize) -> Self {
        debug_assert!(offset <= line.len());
        Self { line, pos: offset }
    }

    /// Bytes consumed so far.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Bytes left before the end of the line.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.line.len() - self.pos
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.line.len()
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.line.get(self.pos).copied()
    }

    /// Move forward `n` bytes, stopping at the end of the line.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.line.len());
    }

    /// Move forward one byte. Must not be at the end.
    #[inline]
    pub fn bump(&mut self) {
        debug_assert!(!self.is_eof());
        self.pos += 1;
    }

    #[inline]
    pub fn at(&self, b: u8) -> bool {
        self.peek() == Some(b)
    }

    /// Step over `b` if it is next. Returns whether it was.
    #[inline]
    pub fn eat(&mut self, b: u8) -> bool {
        let found = self.at(b);
        if found {
            self.bump();
        }
        found
    }

    /// Step over bytes matching `predicate`; returns how many.
    #[inline]
    pub fn skip_while(&mut self, mut predicate: impl FnMut(u8) -> bool) -> usize {
        let len = self
            .remaining_slice()
            .iter()
            .take_while(|&&b| predicate(b))
            .count();
        self.pos += len;
        len
    }

    /// Length of the run of `b` starting here, counting at most `cap` bytes.
    #[inline]
    pub fn run_len(&self, b: u8, cap: usize) -> usize {
        self.remaining_slice()
            .iter()
            .take(cap)
            .take_while(|&&c| c == b)
            .count()
    }

    /// Distance to the next `needle`, if any.
    #[inline]
    pub fn find(&self, needle: u8) -> Option<usize> {
        memchr(needle, self.remaining_slice())
    }

    /// Distance to the next of three bytes, if any.
    #[inline]
    pub fn find3(&self, a: u8, b: u8, c: u8) -> Option<usize> {
        memchr3(a, b, c, self.remaining_slice())
    }

    #[inline]
    pub fn remaining_slice(&self) -> &'a [u8] {
        &self.line[self.pos..]
    }

    /// Range from `start` up to the current position.
    #[inline]
    pub fn range_from(&self, start: usize) -> Range {
        Range::from_usize(start, self.pos)
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("len", &self.line.len())
            .finish()
    }
}
