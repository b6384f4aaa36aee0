//! Block-level event types.

use super::table::Table;

/// Column alignment for table cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Left-aligned (`---` or `:---`).
    #[default]
    Left,
    /// Center-aligned (`:---:`).
    Center,
    /// Right-aligned (`---:`).
    Right,
}

/// Events emitted by the block parser, one per rendered block.
///
/// Text payloads are the raw bytes left after stripping the block's
/// marker; they still carry inline markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// An empty input line.
    Blank,

    /// A horizontal rule (`---`, `***`, `===`).
    ThematicBreak,

    /// Opening fence of a code block.
    CodeBlockStart {
        /// Info string (language tag), if any.
        info: Option<Vec<u8>>,
    },
    /// One raw line inside a code block.
    Code(Vec<u8>),
    /// Closing fence of a code block.
    CodeBlockEnd,
    /// Input ended while a code block was still open.
    CodeBlockUnterminated,

    /// An ATX heading.
    Heading {
        /// Heading level (1-6).
        level: u8,
        /// Heading text.
        text: Vec<u8>,
    },

    /// A block quote line (`> text`).
    BlockQuote(Vec<u8>),

    /// A bullet list item (`- `, `* `, `+ `).
    BulletItem(Vec<u8>),

    /// An ordered list item (`12. text`).
    OrderedItem {
        /// The digits of the item number, as written.
        number: Vec<u8>,
        /// Item text.
        text: Vec<u8>,
    },

    /// A complete, buffered pipe table.
    Table(Table),

    /// Any other line.
    Paragraph(Vec<u8>),
}
