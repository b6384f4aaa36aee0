//! Inline event types.

use crate::Range;

/// Events produced by scanning one line of inline content.
///
/// The renderer and the width counter both consume this stream, so they
/// always agree on which bytes are markup and which are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineEvent {
    /// Bytes printed verbatim. Also covers a backtick with no partner.
    Text(Range),

    /// Interior of a matched code span (delimiters excluded).
    Code(Range),

    /// One marker window: up to three `*` or `_` bytes.
    Marker {
        /// The marker byte.
        ch: u8,
        /// Window length (1-3).
        len: u8,
    },
}
