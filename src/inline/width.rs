//! Visible width of inline content.
//!
//! Counts the terminal columns [`render_inline`](super::render_inline)
//! occupies, without producing output. Table layout depends on this number
//! being exactly the count of codepoints the renderer prints.
//!
//! Every codepoint counts as one column. Wide (CJK) glyphs are undercounted,
//! and continuation bytes are not validated, so malformed UTF-8 can drift.

use super::event::InlineEvent;
use super::scanner::InlineScanner;

/// Padding spaces printed around code span content.
const CODE_SPAN_PADDING: usize = 2;

/// Byte length of a UTF-8 sequence, judged by its leading byte alone.
#[inline]
pub fn utf8_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0x80..=0xDF => 2,
        0xE0..=0xEF => 3,
        _ => 4,
    }
}

/// Number of codepoints in `bytes`, stepping by leading-byte class.
///
/// A truncated sequence at the end of `bytes` still counts once.
pub fn codepoint_count(bytes: &[u8]) -> usize {
    let mut pos = 0;
    let mut count = 0;
    while pos < bytes.len() {
        pos += utf8_len(bytes[pos]);
        count += 1;
    }
    count
}

/// Visible width of one line of inline markdown.
///
/// # Example
/// ```
/// use mdcat::visible_width;
///
/// assert_eq!(visible_width(b"**bold** text"), 9);
/// assert_eq!(visible_width(b"`x`"), 3);
/// assert_eq!(visible_width("naïve".as_bytes()), 5);
/// ```
pub fn visible_width(line: &[u8]) -> usize {
    InlineScanner::new(line)
        .map(|event| match event {
            InlineEvent::Text(range) => codepoint_count(range.slice(line)),
            InlineEvent::Code(range) => CODE_SPAN_PADDING + codepoint_count(range.slice(line)),
            InlineEvent::Marker { .. } => 0,
        })
        .sum()
}
