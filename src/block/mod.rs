//! Block-level parsing.
//!
//! The block parser is line-oriented and handles:
//! - Fenced code blocks
//! - Horizontal rules
//! - Pipe tables
//! - ATX headings
//! - Block quotes
//! - Bullet and ordered list items
//! - Paragraph lines
//!
//! Blocks never span lines except code blocks (tracked line by line) and
//! tables (buffered whole).

mod classify;
mod event;
mod fence;
mod lines;
mod parser;
mod table;

pub use event::{Alignment, Block};
pub use fence::FenceTracker;
pub use lines::LineSource;
pub use parser::BlockParser;
pub use table::{parse_separator, split_row, Row, Table};
