//! Inline span rendering.
//!
//! One line at a time, in a single left-to-right pass:
//! 1. [`InlineScanner`] splits the line into text, code spans and marker
//!    windows.
//! 2. [`render_inline`] turns those events into styled output, tracking a
//!    single [`SpanState`].
//! 3. [`visible_width`] measures the same events without output.
//!
//! Spans never cross lines: the state starts at `None` on every line and
//! an open span is reset when the line ends.

mod code_span;
pub mod event;
mod scanner;
mod span;
mod width;

pub use event::InlineEvent;
pub use scanner::InlineScanner;
pub use span::{SpanState, Toggle};
pub use width::{codepoint_count, utf8_len, visible_width};

use crate::render::TermWriter;

/// Render one line of inline markdown into `out`.
///
/// # Example
/// ```
/// use mdcat::{render_inline, TermWriter};
///
/// let mut out = TermWriter::new(true);
/// render_inline(b"*hi*", &mut out);
/// assert_eq!(out.as_bytes(), b"\x1b[3mhi\x1b[0m");
/// ```
pub fn render_inline(line: &[u8], out: &mut TermWriter) {
    let mut state = SpanState::None;

    for event in InlineScanner::new(line) {
        match event {
            InlineEvent::Text(range) => out.write_bytes(range.slice(line)),
            InlineEvent::Code(range) => {
                out.code_span(range.slice(line));
                // The code span reset everything; restore the emphasis.
                if state.is_active() {
                    out.style(state.style());
                }
            }
            InlineEvent::Marker { len, .. } => match state.apply(len as usize) {
                Toggle::Open(span) => out.style(span.style()),
                Toggle::Close => out.reset(),
            },
        }
    }

    if state.is_active() {
        out.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESET: &str = "\x1b[0m";
    const BOLD: &str = "\x1b[1m";
    const ITALIC: &str = "\x1b[3m";

    fn styled(line: &str) -> String {
        let mut out = TermWriter::new(true);
        render_inline(line.as_bytes(), &mut out);
        String::from_utf8(out.into_vec()).unwrap()
    }

    fn plain(line: &str) -> String {
        let mut out = TermWriter::new(false);
        render_inline(line.as_bytes(), &mut out);
        String::from_utf8(out.into_vec()).unwrap()
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(styled("just some text"), "just some text");
    }

    #[test]
    fn test_italic() {
        assert_eq!(styled("*a*"), format!("{ITALIC}a{RESET}"));
        assert_eq!(styled("_a_"), format!("{ITALIC}a{RESET}"));
    }

    #[test]
    fn test_bold() {
        assert_eq!(styled("**a**"), format!("{BOLD}a{RESET}"));
    }

    #[test]
    fn test_bold_italic_closes_cleanly() {
        assert_eq!(styled("***a***"), format!("{BOLD}{ITALIC}a{RESET}"));
    }

    #[test]
    fn test_unclosed_span_reset_at_end_of_line() {
        assert_eq!(styled("**open"), format!("{BOLD}open{RESET}"));
    }

    #[test]
    fn test_five_markers_cascade() {
        // BoldItalic opens, then Bold replaces it; the line ends with bold open.
        assert_eq!(styled("*****x"), format!("{BOLD}{ITALIC}{BOLD}x{RESET}"));
    }

    #[test]
    fn test_four_markers_cascade() {
        assert_eq!(styled("****x"), format!("{BOLD}{ITALIC}{ITALIC}x{RESET}"));
    }

    #[test]
    fn test_code_span_restores_emphasis() {
        let code = crate::style::CODE_SPAN.render();
        let out = styled("**a `b` c**");
        assert_eq!(out, format!("{BOLD}a {code} b {RESET}{BOLD} c{RESET}"));
    }

    #[test]
    fn test_code_span_plain() {
        assert_eq!(plain("run `cargo *test*` now"), "run  cargo *test*  now");
    }

    #[test]
    fn test_unmatched_backtick_literal() {
        assert_eq!(plain("a `b"), "a `b");
    }

    #[test]
    fn test_markers_removed_in_plain_mode() {
        assert_eq!(plain("**bold** and *it* and ***both***"), "bold and it and both");
    }
}
