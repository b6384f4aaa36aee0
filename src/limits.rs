//! Capacity limits and fixed layout constants.
//!
//! Tables are the only structure buffered before output, so they are the
//! only place with capacity limits. Exceeding a limit truncates silently:
//! extra columns are dropped, long cells are cut, and rows past the row
//! limit end the table and are classified as ordinary lines again.

/// Maximum number of columns kept per table row.
pub const MAX_TABLE_COLUMNS: usize = 16;

/// Maximum number of bytes kept per table cell (cut on a UTF-8 boundary).
pub const MAX_CELL_BYTES: usize = 127;

/// Maximum number of body rows buffered for a single table.
pub const MAX_TABLE_ROWS: usize = 256;

/// Minimum rendered width of a table column.
pub const MIN_COLUMN_WIDTH: usize = 3;

/// Longest marker window; longer `*`/`_` runs are split into several windows.
pub const MAX_MARKER_RUN: usize = 3;

/// Deepest heading level recognised (`######`).
pub const MAX_HEADING_LEVEL: usize = 6;

/// Shortest line that counts as a horizontal rule.
pub const MIN_RULE_LEN: usize = 3;

/// Width of a rendered horizontal rule, in columns.
pub const RULE_WIDTH: usize = 60;
