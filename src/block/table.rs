//! Pipe tables.
//!
//! A table is a header row, a separator row declaring one alignment per
//! column, and any number of body rows (up to [`MAX_TABLE_ROWS`]). Column
//! widths depend on every row, so the whole table is buffered before any
//! of it is rendered.

use memchr::memchr2;
use smallvec::SmallVec;

use super::event::Alignment;
use crate::cursor::Cursor;
use crate::inline::visible_width;
use crate::limits::{MAX_CELL_BYTES, MAX_TABLE_COLUMNS, MAX_TABLE_ROWS, MIN_COLUMN_WIDTH};

/// Column separator.
pub const PIPE: u8 = b'|';

/// Trimmed cell texts of one row, in column order.
pub type Row = SmallVec<[Vec<u8>; 8]>;

/// A buffered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Header cells; their count is the table's column count.
    pub header: Row,
    /// One alignment per column, fixed by the separator row.
    pub alignments: SmallVec<[Alignment; 8]>,
    /// Body rows. May be shorter or longer than the header.
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a table with no body rows.
    pub fn new(header: Row, alignments: SmallVec<[Alignment; 8]>) -> Self {
        debug_assert_eq!(header.len(), alignments.len());
        Self {
            header,
            alignments,
            rows: Vec::new(),
        }
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.header.len()
    }

    /// Whether the body row limit has been reached.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.rows.len() >= MAX_TABLE_ROWS
    }

    /// Append a body row.
    pub fn push_row(&mut self, row: Row) {
        debug_assert!(!self.is_full());
        self.rows.push(row);
    }

    /// Visible width of every column: the widest cell, at least
    /// [`MIN_COLUMN_WIDTH`]. Cells past the header's column count are ignored.
    pub fn column_widths(&self) -> SmallVec<[usize; 8]> {
        self.header
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| visible_width(cell))
                    .fold(visible_width(header), usize::max)
                    .max(MIN_COLUMN_WIDTH)
            })
            .collect()
    }
}

/// Check whether a line can belong to a table.
#[inline]
pub fn is_table_row(line: &[u8]) -> bool {
    line.first() == Some(&PIPE)
}

/// Split a row into trimmed cells.
///
/// One leading and one trailing pipe are optional. `\|` is a literal pipe
/// inside a cell. Cells past [`MAX_TABLE_COLUMNS`] are dropped and cell
/// text is cut to [`MAX_CELL_BYTES`].
///
/// # Example
/// ```
/// use mdcat::block::split_row;
///
/// let row = split_row(b"| a | b \\| c |");
/// assert_eq!(row.len(), 2);
/// assert_eq!(row[1], b"b | c");
/// ```
pub fn split_row(line: &[u8]) -> Row {
    let mut cursor = Cursor::new(trim_end_spaces(line));
    cursor.eat(PIPE);

    let mut row = Row::new();
    let mut cell = Vec::new();
    while !cursor.is_eof() && row.len() < MAX_TABLE_COLUMNS {
        cell.clear();
        loop {
            let rest = cursor.remaining_slice();
            let Some(pos) = memchr2(PIPE, b'\\', rest) else {
                cell.extend_from_slice(rest);
                cursor.advance(rest.len());
                break;
            };
            cell.extend_from_slice(&rest[..pos]);
            cursor.advance(pos);
            if cursor.eat(PIPE) {
                break;
            }
            // Backslash: escapes a following pipe, otherwise literal.
            cursor.bump();
            if cursor.eat(PIPE) {
                cell.push(PIPE);
            } else {
                cell.push(b'\\');
            }
        }
        row.push(finish_cell(&cell));
    }
    row
}

/// Parse a separator row against a header of `columns` cells.
///
/// Every cell must be dashes with an optional colon at either end, and the
/// cell count must match the header. Returns `None` otherwise.
pub fn parse_separator(line: &[u8], columns: usize) -> Option<SmallVec<[Alignment; 8]>> {
    let cells = split_row(line);
    if columns == 0 || cells.len() != columns {
        return None;
    }
    cells.iter().map(|cell| separator_alignment(cell)).collect()
}

fn separator_alignment(cell: &[u8]) -> Option<Alignment> {
    if cell.is_empty() {
        return None;
    }
    let left = cell.first() == Some(&b':');
    let right = cell.last() == Some(&b':');
    let inner = cell.strip_prefix(b":").unwrap_or(cell);
    let inner = inner.strip_suffix(b":").unwrap_or(inner);
    if !inner.iter().all(|&b| b == b'-') {
        return None;
    }
    Some(match (left, right) {
        (true, true) => Alignment::Center,
        (false, true) => Alignment::Right,
        _ => Alignment::Left,
    })
}

fn trim_end_spaces(line: &[u8]) -> &[u8] {
    let end = line.iter().rposition(|&b| b != b' ').map_or(0, |pos| pos + 1);
    &line[..end]
}

fn trim_spaces(text: &[u8]) -> &[u8] {
    let start = text.iter().position(|&b| b != b' ').unwrap_or(text.len());
    trim_end_spaces(&text[start..])
}

fn finish_cell(cell: &[u8]) -> Vec<u8> {
    let text = trim_spaces(cell);
    if text.len() <= MAX_CELL_BYTES {
        return text.to_vec();
    }
    // Back up to the start of the codepoint the limit falls in.
    let mut end = MAX_CELL_BYTES;
    while end > 0 && text[end] & 0xC0 == 0x80 {
        end -= 1;
    }
    text[..end].to_vec()
}
