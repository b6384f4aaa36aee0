//! Code span matching.
//!
//! A code span runs from a backtick to the next backtick on the same line.
//! Runs of several backticks are not special: each backtick pairs with the
//! nearest following one.

use crate::cursor::Cursor;

/// Find the closing backtick for a span whose opener was just consumed.
///
/// Returns the length of the span content, or `None` when the line has no
/// closing backtick and the opener must be printed literally.
#[inline]
pub fn find_closing(cursor: &Cursor<'_>) -> Option<usize> {
    cursor.find(b'`')
}
