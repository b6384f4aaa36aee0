//! mdcat: single-pass Markdown renderer for the terminal
//!
//! Renders a small Markdown dialect as ANSI-styled text with box-drawing
//! borders: headings, bold/italic/code spans, fenced code blocks, block
//! quotes, bullet and ordered items, horizontal rules, and pipe tables
//! with alignment.
//!
//! # Design Principles
//! - One forward pass over lines, at most one line of lookahead
//! - No backtracking: emphasis markers toggle, they are never matched
//! - Spans never cross lines
//! - Width measurement and rendering consume the same inline events, so
//!   table borders line up
//!
//! # Example
//! ```
//! let plain = mdcat::render_str("# Hi\n\n**bold**", &mdcat::Options { color: false });
//! assert_eq!(plain, "\nHi\n════\n\nbold\n");
//! ```

pub mod block;
pub mod cursor;
mod error;
pub mod inline;
pub mod limits;
pub mod range;
pub mod render;
pub mod style;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

// Re-export primary types
pub use block::{Alignment, Block, BlockParser, Table};
pub use error::{Error, Result};
pub use inline::{render_inline, visible_width, InlineEvent, InlineScanner, SpanState};
pub use range::Range;
pub use render::TermWriter;

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Emit color and weight escape sequences.
    pub color: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Render Markdown to styled terminal text.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let out = mdcat::to_ansi("*hi*");
/// assert_eq!(out, "\x1b[3mhi\x1b[0m\n");
/// ```
pub fn to_ansi(input: &str) -> String {
    render_str(input, &Options::default())
}

/// Render Markdown with options.
pub fn render_str(input: &str, options: &Options) -> String {
    let out = render_bytes(input.as_bytes(), options);
    // Output is built from UTF-8 input, ASCII escapes and UTF-8 glyphs.
    String::from_utf8(out)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

/// Render Markdown bytes with options. Input need not be valid UTF-8.
pub fn render_bytes(input: &[u8], options: &Options) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len() + input.len() / 2);
    // Neither a byte slice nor a Vec can fail to read or write.
    let _ = render(input, &mut out, options);
    out
}

/// Render everything `reader` yields into `out`.
///
/// Output is written block by block as soon as each block is complete;
/// tables are written once all their rows have been read.
pub fn render<R: BufRead, W: Write>(reader: R, out: &mut W, options: &Options) -> Result<()> {
    let mut parser = BlockParser::new(reader);
    let mut writer = TermWriter::new(options.color);

    while let Some(block) = parser.next_block().map_err(Error::Read)? {
        writer.block(&block);
        out.write_all(writer.as_bytes()).map_err(Error::Write)?;
        writer.clear();
    }
    out.flush().map_err(Error::Write)
}

/// Open and render a file.
pub fn render_path<W: Write>(path: &Path, out: &mut W, options: &Options) -> Result<()> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("rendering {}", path.display());
    render(BufReader::new(file), out, options)
}

/// Render standard input.
pub fn render_stdin<W: Write>(out: &mut W, options: &Options) -> Result<()> {
    log::debug!("rendering standard input");
    render(io::stdin().lock(), out, options)
}
