//! Line source with a single pushback slot.

use std::io::{self, BufRead};

/// Reads input one line at a time.
///
/// A line handed back with [`push_back`](LineSource::push_back) is returned
/// by the next [`next_line`](LineSource::next_line) call before anything
/// else is read, which is how an unused lookahead line is re-queued.
#[derive(Debug)]
pub struct LineSource<R> {
    reader: R,
    pending: Option<Vec<u8>>,
}

impl<R: BufRead> LineSource<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
        }
    }

    /// Next line without its terminator (`\n` or `\r\n`), or `None` at
    /// end of input.
    pub fn next_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        if let Some(line) = self.pending.take() {
            return Ok(Some(line));
        }

        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Re-queue a line so the next read returns it.
    ///
    /// The slot holds one line; the caller never pushes back twice in a row.
    pub fn push_back(&mut self, line: Vec<u8>) {
        debug_assert!(self.pending.is_none(), "lookahead slot already full");
        self.pending = Some(line);
    }

    /// Whether a pushed-back line is waiting.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &[u8]) -> Vec<Vec<u8>> {
        let mut source = LineSource::new(input);
        let mut out = Vec::new();
        while let Some(line) = source.next_line().unwrap() {
            out.push(line);
        }
        out
    }

    #[test]
    fn test_splits_lines() {
        assert_eq!(lines(b"a\nb\nc"), vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        assert_eq!(lines(b"a\n"), vec![b"a".to_vec()]);
        assert!(lines(b"").is_empty());
    }

    #[test]
    fn test_blank_lines_kept() {
        assert_eq!(lines(b"\n\nx"), vec![Vec::new(), Vec::new(), b"x".to_vec()]);
    }

    #[test]
    fn test_crlf_stripped() {
        assert_eq!(lines(b"a\r\nb\r\n"), vec![b"a".to_vec(), b"b".to_vec()]);
    }

    #[test]
    fn test_push_back_is_returned_first() {
        let mut source = LineSource::new(&b"one\ntwo\n"[..]);
        let first = source.next_line().unwrap().unwrap();
        let second = source.next_line().unwrap().unwrap();
        source.push_back(second);
        assert!(source.has_pending());
        assert_eq!(first, b"one");
        assert_eq!(source.next_line().unwrap().unwrap(), b"two");
        assert!(!source.has_pending());
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_passes_through() {
        assert_eq!(lines(b"\xff\xfe\n"), vec![vec![0xff, 0xfe]]);
    }
}
