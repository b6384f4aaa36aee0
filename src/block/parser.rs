//! Block parser implementation.

use std::io::{self, BufRead};

use super::classify;
use super::event::Block;
use super::fence::{self, FenceTracker};
use super::lines::LineSource;
use super::table::{self, Table};

/// Line-level block classifier.
///
/// Reads one line at a time and turns it into a [`Block`]. Checks run in a
/// fixed order and the first match wins: fence, code line, blank, rule,
/// table, heading, block quote, bullet item, ordered item, paragraph.
///
/// Only table detection reads ahead, and only by one line. A lookahead line
/// that does not complete a table is pushed back and classified normally.
///
/// # Example
/// ```
/// use mdcat::{Block, BlockParser};
///
/// let mut parser = BlockParser::new(&b"# Title\n\ntext\n"[..]);
/// let blocks: Vec<Block> = parser.by_ref().collect::<Result<_, _>>().unwrap();
/// assert_eq!(blocks.len(), 3);
/// assert_eq!(blocks[2], Block::Paragraph(b"text".to_vec()));
/// ```
pub struct BlockParser<R> {
    /// Input lines, with the lookahead slot.
    lines: LineSource<R>,
    /// Whether we're inside a fenced code block.
    fence: FenceTracker,
}

impl<R: BufRead> BlockParser<R> {
    /// Create a new block parser.
    pub fn new(reader: R) -> Self {
        Self {
            lines: LineSource::new(reader),
            fence: FenceTracker::new(),
        }
    }

    /// Parse the next block, or `None` at end of input.
    ///
    /// If input ends inside a code block, one final
    /// [`Block::CodeBlockUnterminated`] is returned first.
    pub fn next_block(&mut self) -> io::Result<Option<Block>> {
        match self.lines.next_line()? {
            Some(line) => self.classify(line).map(Some),
            None => Ok(self.fence.finish().then_some(Block::CodeBlockUnterminated)),
        }
    }

    /// Parse all remaining blocks and collect them.
    pub fn parse(&mut self, blocks: &mut Vec<Block>) -> io::Result<()> {
        while let Some(block) = self.next_block()? {
            blocks.push(block);
        }
        Ok(())
    }

    fn classify(&mut self, line: Vec<u8>) -> io::Result<Block> {
        if fence::is_fence(&line) {
            return Ok(self.fence.toggle(&line));
        }

        if self.fence.is_open() {
            return Ok(Block::Code(line));
        }

        if line.is_empty() {
            return Ok(Block::Blank);
        }

        if classify::is_thematic_break(&line) {
            return Ok(Block::ThematicBreak);
        }

        if table::is_table_row(&line) {
            if let Some(table) = self.try_table(&line)? {
                return Ok(Block::Table(table));
            }
        }

        if let Some(level) = classify::heading_level(&line) {
            return Ok(Block::Heading {
                level,
                text: strip_prefix(line, level as usize + 1),
            });
        }

        if let Some(offset) = classify::block_quote(&line) {
            return Ok(Block::BlockQuote(strip_prefix(line, offset)));
        }

        if let Some(offset) = classify::bullet_item(&line) {
            return Ok(Block::BulletItem(strip_prefix(line, offset)));
        }

        if let Some(digits) = classify::ordered_item(&line) {
            let mut number = line;
            let rest = number.split_off(digits);
            return Ok(Block::OrderedItem {
                number,
                // Skip the ". " after the digits.
                text: strip_prefix(rest, 2),
            });
        }

        Ok(Block::Paragraph(line))
    }

    /// Try to start a table at `header`, reading the separator and body rows.
    ///
    /// On failure the lookahead line is pushed back and `None` returned.
    fn try_table(&mut self, header: &[u8]) -> io::Result<Option<Table>> {
        let Some(lookahead) = self.lines.next_line()? else {
            return Ok(None);
        };

        if !table::is_table_row(&lookahead) {
            self.lines.push_back(lookahead);
            return Ok(None);
        }

        let header = table::split_row(header);
        let Some(alignments) = table::parse_separator(&lookahead, header.len()) else {
            log::debug!(
                "separator row does not match {} header columns, not a table",
                header.len()
            );
            self.lines.push_back(lookahead);
            return Ok(None);
        };

        let mut table = Table::new(header, alignments);
        while !table.is_full() {
            let Some(line) = self.lines.next_line()? else {
                break;
            };
            if !table::is_table_row(&line) {
                self.lines.push_back(line);
                break;
            }
            table.push_row(table::split_row(&line));
        }

        if table.is_full() {
            log::debug!("table reached {} body rows, closing it", table.rows.len());
        }
        log::debug!(
            "table with {} columns and {} body rows",
            table.columns(),
            table.rows.len()
        );
        Ok(Some(table))
    }
}

impl<R: BufRead> Iterator for BlockParser<R> {
    type Item = io::Result<Block>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_block().transpose()
    }
}

fn strip_prefix(mut line: Vec<u8>, len: usize) -> Vec<u8> {
    line.drain(..len.min(line.len()));
    line
}
