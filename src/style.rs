//! Terminal styling vocabulary.
//!
//! Every escape sequence the renderer can emit is named here. Styles are
//! plain `anstyle` values; whether they are written at all is decided by
//! [`TermWriter`](crate::TermWriter).

use anstyle::{Ansi256Color, AnsiColor, Color, Style};

const fn ansi(color: AnsiColor) -> Option<Color> {
    Some(Color::Ansi(color))
}

const fn ansi256(index: u8) -> Option<Color> {
    Some(Color::Ansi256(Ansi256Color(index)))
}

pub const BOLD: Style = Style::new().bold();
pub const DIM: Style = Style::new().dimmed();
pub const ITALIC: Style = Style::new().italic();
pub const BOLD_ITALIC: Style = Style::new().bold().italic();

pub const GREEN: Style = Style::new().fg_color(ansi(AnsiColor::Green));

/// Inline code span: soft orange on a dark grey cell.
pub const CODE_SPAN: Style = Style::new()
    .bg_color(ansi256(236))
    .fg_color(ansi256(215));

/// Lines inside a fenced code block.
pub const CODE_BLOCK: Style = Style::new().fg_color(ansi256(215));

/// Opening fence; also stays active for a fence without an info string.
pub const FENCE: Style = DIM;
pub const FENCE_INFO: Style = GREEN;

pub const HEADING_1: Style = Style::new().bold().underline().fg_color(ansi(AnsiColor::Cyan));
pub const HEADING_1_RULE: Style = Style::new().dimmed().fg_color(ansi(AnsiColor::Cyan));
pub const HEADING_2: Style = Style::new().bold().fg_color(ansi(AnsiColor::Yellow));
pub const HEADING_N: Style = Style::new().bold().fg_color(ansi(AnsiColor::Magenta));

pub const QUOTE_BAR: Style = Style::new().dimmed().fg_color(ansi(AnsiColor::Green));
pub const QUOTE_TEXT: Style = Style::new().italic().fg_color(ansi(AnsiColor::Green));

/// Bullet glyphs and list numbers.
pub const LIST_MARKER: Style = Style::new().bold().fg_color(ansi(AnsiColor::Yellow));

pub const RULE: Style = DIM;
pub const TABLE_BORDER: Style = DIM;
pub const TABLE_HEADER: Style = Style::new().bold().fg_color(ansi(AnsiColor::Cyan));

/// Style for a heading level (1-6).
pub fn heading(level: u8) -> Style {
    match level {
        1 => HEADING_1,
        2 => HEADING_2,
        _ => HEADING_N,
    }
}

/// Box-drawing and list glyphs.
pub mod glyph {
    pub const RULE: &str = "─";
    pub const DOUBLE_RULE: &str = "═";
    pub const VERTICAL: &str = "│";
    pub const BULLET: &str = "•";

    pub const TOP_LEFT: &str = "┌";
    pub const TOP_TEE: &str = "┬";
    pub const TOP_RIGHT: &str = "┐";
    pub const MID_LEFT: &str = "├";
    pub const CROSS: &str = "┼";
    pub const MID_RIGHT: &str = "┤";
    pub const BOTTOM_LEFT: &str = "└";
    pub const BOTTOM_TEE: &str = "┴";
    pub const BOTTOM_RIGHT: &str = "┘";
}
