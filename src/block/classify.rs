//! Line-shape predicates for the block classifier.
//!
//! Each check looks only at the start of the line and returns where the
//! block's text begins. Tables and fences need more context and live in
//! their own modules.

use crate::cursor::Cursor;
use crate::limits::{MAX_HEADING_LEVEL, MIN_RULE_LEN};

/// Characters that can form a horizontal rule.
const RULE_CHARS: &[u8] = b"-*=";

/// Characters that start a bullet list item.
const BULLET_CHARS: &[u8] = b"-*+";

/// A line made of one rule character repeated at least three times.
pub fn is_thematic_break(line: &[u8]) -> bool {
    match line.first() {
        Some(first) if RULE_CHARS.contains(first) => {
            line.len() >= MIN_RULE_LEN && line.iter().all(|b| b == first)
        }
        _ => false,
    }
}

/// Heading level for `#` through `######` followed by a space.
pub fn heading_level(line: &[u8]) -> Option<u8> {
    let mut cursor = Cursor::new(line);
    let level = cursor.skip_while(|b| b == b'#');
    if (1..=MAX_HEADING_LEVEL).contains(&level) && cursor.at(b' ') {
        Some(level as u8)
    } else {
        None
    }
}

/// Offset of the quoted text for `> text` or a lone `>`.
pub fn block_quote(line: &[u8]) -> Option<usize> {
    match line {
        [b'>'] => Some(1),
        [b'>', b' ', ..] => Some(2),
        _ => None,
    }
}

/// Offset of the item text for `- `, `* ` or `+ `.
pub fn bullet_item(line: &[u8]) -> Option<usize> {
    match line {
        [marker, b' ', ..] if BULLET_CHARS.contains(marker) => Some(2),
        _ => None,
    }
}

/// Number of leading digits for `<digits>. text`.
pub fn ordered_item(line: &[u8]) -> Option<usize> {
    let mut cursor = Cursor::new(line);
    let digits = cursor.skip_while(|b| b.is_ascii_digit());
    if digits > 0 && cursor.eat(b'.') && cursor.at(b' ') {
        Some(digits)
    } else {
        None
    }
}
