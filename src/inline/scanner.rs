//! Single-pass inline scanner.
//!
//! Walks a line once, left to right, and yields [`InlineEvent`]s. There is
//! no backtracking and no delimiter matching across the line: a marker run
//! longer than three bytes is consumed as a capped window, and whatever is
//! left of the run is scanned again as a fresh run on the next call.

use super::code_span;
use super::event::InlineEvent;
use crate::cursor::Cursor;
use crate::limits::MAX_MARKER_RUN;
use crate::Range;

/// Iterator over the inline events of one line.
///
/// # Example
/// ```
/// use mdcat::{InlineEvent, InlineScanner};
///
/// let line = b"a *b*";
/// let events: Vec<_> = InlineScanner::new(line).collect();
/// assert_eq!(events.len(), 4);
/// assert!(matches!(events[1], InlineEvent::Marker { ch: b'*', len: 1 }));
/// ```
#[derive(Debug, Clone)]
pub struct InlineScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> InlineScanner<'a> {
    /// Create a scanner over one line.
    pub fn new(line: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(line),
        }
    }
}

impl Iterator for InlineScanner<'_> {
    type Item = InlineEvent;

    fn next(&mut self) -> Option<InlineEvent> {
        let b = self.cursor.peek()?;
        let start = self.cursor.offset();

        match b {
            b'`' => {
                self.cursor.bump();
                match code_span::find_closing(&self.cursor) {
                    Some(len) => {
                        let content = self.cursor.offset();
                        self.cursor.advance(len + 1);
                        Some(InlineEvent::Code(Range::from_usize(content, content + len)))
                    }
                    None => Some(InlineEvent::Text(self.cursor.range_from(start))),
                }
            }
            b'*' | b'_' => {
                let len = self.cursor.run_len(b, MAX_MARKER_RUN);
                self.cursor.advance(len);
                Some(InlineEvent::Marker {
                    ch: b,
                    len: len as u8,
                })
            }
            _ => {
                let len = self
                    .cursor
                    .find3(b'`', b'*', b'_')
                    .unwrap_or(self.cursor.remaining());
                self.cursor.advance(len);
                Some(InlineEvent::Text(self.cursor.range_from(start)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(line: &[u8]) -> Vec<InlineEvent> {
        InlineScanner::new(line).collect()
    }

    fn windows(line: &[u8]) -> Vec<u8> {
        scan(line)
            .into_iter()
            .filter_map(|event| match event {
                InlineEvent::Marker { len, .. } => Some(len),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_plain_text_is_one_event() {
        assert_eq!(scan(b"hello world"), vec![InlineEvent::Text(Range::new(0, 11))]);
    }

    #[test]
    fn test_empty_line() {
        assert!(scan(b"").is_empty());
    }

    #[test]
    fn test_marker_windows() {
        assert_eq!(windows(b"*a*"), vec![1, 1]);
        assert_eq!(windows(b"**a**"), vec![2, 2]);
        assert_eq!(windows(b"***a***"), vec![3, 3]);
    }

    #[test]
    fn test_long_runs_cascade() {
        assert_eq!(windows(b"****"), vec![3, 1]);
        assert_eq!(windows(b"*****"), vec![3, 2]);
        assert_eq!(windows(b"*******"), vec![3, 3, 1]);
    }

    #[test]
    fn test_mixed_markers_are_separate_runs() {
        assert_eq!(
            scan(b"*_"),
            vec![
                InlineEvent::Marker { ch: b'*', len: 1 },
                InlineEvent::Marker { ch: b'_', len: 1 },
            ]
        );
    }

    #[test]
    fn test_code_span() {
        assert_eq!(
            scan(b"a `*b*` c"),
            vec![
                InlineEvent::Text(Range::new(0, 2)),
                InlineEvent::Code(Range::new(3, 6)),
                InlineEvent::Text(Range::new(7, 9)),
            ]
        );
    }

    #[test]
    fn test_unmatched_backtick_is_text() {
        assert_eq!(
            scan(b"a ` b"),
            vec![
                InlineEvent::Text(Range::new(0, 2)),
                InlineEvent::Text(Range::new(2, 3)),
                InlineEvent::Text(Range::new(3, 5)),
            ]
        );
    }

    #[test]
    fn test_unmatched_backtick_still_scans_markers() {
        assert_eq!(windows(b"` **x**"), vec![2, 2]);
    }
}
