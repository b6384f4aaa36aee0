//! Terminal output writer.
//!
//! Collects the rendering of one block into a reusable buffer. Styles go
//! through [`TermWriter::style`] and [`TermWriter::reset`], which write
//! nothing when color is disabled, so the plain-text rendering is exactly
//! the styled one with every escape sequence removed.

use std::io::Write;

use anstyle::{Reset, Style};

use crate::block::{Alignment, Block, Table};
use crate::inline::{render_inline, visible_width};
use crate::limits::RULE_WIDTH;
use crate::style::{self, glyph};

/// Terminal writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use mdcat::TermWriter;
///
/// let mut writer = TermWriter::new(false);
/// writer.inline(b"Hello **World**");
/// assert_eq!(writer.as_bytes(), b"Hello World");
/// ```
pub struct TermWriter {
    out: Vec<u8>,
    color: bool,
}

impl TermWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new(color: bool) -> Self {
        Self::with_capacity(1024, color)
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize, color: bool) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
            color,
        }
    }

    /// Whether escape sequences are written.
    #[inline]
    pub fn color(&self) -> bool {
        self.color
    }

    /// Write raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write a single byte.
    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        self.out.push(b);
    }

    /// Write `s` `count` times.
    #[inline]
    pub fn write_repeated(&mut self, s: &str, count: usize) {
        for _ in 0..count {
            self.write_str(s);
        }
    }

    /// Write `count` spaces.
    #[inline]
    pub fn spaces(&mut self, count: usize) {
        self.out.resize(self.out.len() + count, b' ');
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push(b'\n');
    }

    /// Turn a style on.
    #[inline]
    pub fn style(&mut self, style: Style) {
        if self.color {
            // Writing into a Vec cannot fail.
            let _ = write!(self.out, "{}", style.render());
        }
    }

    /// Reset all styling.
    #[inline]
    pub fn reset(&mut self) {
        if self.color {
            let _ = write!(self.out, "{}", Reset.render());
        }
    }

    /// Current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    /// Get output as byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.out
    }

    /// Take ownership of output buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.out
    }

    // --- Inline Content ---

    /// Render one line of inline markdown.
    #[inline]
    pub fn inline(&mut self, text: &[u8]) {
        render_inline(text, self);
    }

    /// Write a code span: padded content on the code background.
    pub fn code_span(&mut self, content: &[u8]) {
        self.style(style::CODE_SPAN);
        self.write_byte(b' ');
        self.write_bytes(content);
        self.write_byte(b' ');
        self.reset();
    }

    // --- Blocks ---

    /// Render a block event.
    pub fn block(&mut self, block: &Block) {
        match block {
            Block::Blank => self.newline(),
            Block::ThematicBreak => self.thematic_break(),
            Block::CodeBlockStart { info } => self.code_block_start(info.as_deref()),
            Block::Code(line) => self.code_line(line),
            Block::CodeBlockEnd => {
                self.reset();
                self.newline();
            }
            Block::CodeBlockUnterminated => self.reset(),
            Block::Heading { level, text } => self.heading(*level, text),
            Block::BlockQuote(text) => self.block_quote(text),
            Block::BulletItem(text) => self.bullet_item(text),
            Block::OrderedItem { number, text } => self.ordered_item(number, text),
            Block::Table(table) => self.table(table),
            Block::Paragraph(text) => {
                self.inline(text);
                self.newline();
            }
        }
    }

    fn thematic_break(&mut self) {
        self.style(style::RULE);
        self.write_repeated(glyph::RULE, RULE_WIDTH);
        self.reset();
        self.newline();
    }

    fn code_block_start(&mut self, info: Option<&[u8]>) {
        // Without an info string the dim style carries into the block.
        self.style(style::FENCE);
        if let Some(info) = info {
            self.style(style::FENCE_INFO);
            self.write_byte(b'[');
            self.write_bytes(info);
            self.write_byte(b']');
            self.reset();
        }
        self.newline();
    }

    fn code_line(&mut self, line: &[u8]) {
        self.style(style::CODE_BLOCK);
        self.write_str("  ");
        self.write_bytes(line);
        self.reset();
        self.newline();
    }

    fn heading(&mut self, level: u8, text: &[u8]) {
        self.newline();
        self.style(style::heading(level));
        self.inline(text);
        self.reset();
        self.newline();
        if level == 1 {
            self.style(style::HEADING_1_RULE);
            self.write_repeated(glyph::DOUBLE_RULE, visible_width(text) + 2);
            self.reset();
            self.newline();
        }
    }

    fn block_quote(&mut self, text: &[u8]) {
        self.style(style::QUOTE_BAR);
        self.write_str(glyph::VERTICAL);
        self.write_byte(b' ');
        self.reset();
        self.style(style::QUOTE_TEXT);
        self.inline(text);
        self.reset();
        self.newline();
    }

    fn bullet_item(&mut self, text: &[u8]) {
        self.write_str("  ");
        self.style(style::LIST_MARKER);
        self.write_str(glyph::BULLET);
        self.write_byte(b' ');
        self.reset();
        self.inline(text);
        self.newline();
    }

    fn ordered_item(&mut self, number: &[u8], text: &[u8]) {
        self.write_str("  ");
        self.style(style::LIST_MARKER);
        self.write_bytes(number);
        self.write_str(". ");
        self.reset();
        self.inline(text);
        self.newline();
    }

    // --- Tables ---

    /// Render a buffered table with borders.
    pub fn table(&mut self, table: &Table) {
        let widths = table.column_widths();

        self.table_border(&widths, glyph::TOP_LEFT, glyph::TOP_TEE, glyph::TOP_RIGHT);
        self.table_row(&table.header, &widths, &table.alignments, true);
        self.table_border(&widths, glyph::MID_LEFT, glyph::CROSS, glyph::MID_RIGHT);
        for row in &table.rows {
            self.table_row(row, &widths, &table.alignments, false);
        }
        self.table_border(
            &widths,
            glyph::BOTTOM_LEFT,
            glyph::BOTTOM_TEE,
            glyph::BOTTOM_RIGHT,
        );
    }

    fn table_border(&mut self, widths: &[usize], left: &str, junction: &str, right: &str) {
        self.style(style::TABLE_BORDER);
        self.write_str(left);
        for (col, &width) in widths.iter().enumerate() {
            self.write_repeated(glyph::RULE, width + 2);
            if col + 1 < widths.len() {
                self.write_str(junction);
            } else {
                self.write_str(right);
            }
        }
        self.reset();
        self.newline();
    }

    fn table_divider(&mut self) {
        self.style(style::TABLE_BORDER);
        self.write_str(glyph::VERTICAL);
        self.reset();
    }

    fn table_row(
        &mut self,
        cells: &[Vec<u8>],
        widths: &[usize],
        alignments: &[Alignment],
        header: bool,
    ) {
        self.table_divider();
        for (col, (&width, &alignment)) in widths.iter().zip(alignments).enumerate() {
            self.write_byte(b' ');
            match cells.get(col) {
                Some(text) => {
                    if header {
                        self.style(style::TABLE_HEADER);
                    }
                    self.table_cell(text, width, alignment);
                    if header {
                        self.reset();
                    }
                }
                None => self.spaces(width),
            }
            self.write_byte(b' ');
            self.table_divider();
        }
        self.newline();
    }

    /// Write exactly `width` visible columns of `text`.
    fn table_cell(&mut self, text: &[u8], width: usize, alignment: Alignment) {
        let pad = width.saturating_sub(visible_width(text));
        let (left, right) = match alignment {
            Alignment::Left => (0, pad),
            Alignment::Center => (pad / 2, pad - pad / 2),
            Alignment::Right => (pad, 0),
        };
        self.spaces(left);
        self.inline(text);
        self.spaces(right);
    }
}

impl Default for TermWriter {
    fn default() -> Self {
        Self::new(true)
    }
}
