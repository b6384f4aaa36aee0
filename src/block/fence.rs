//! Fenced code block tracking.

use super::event::Block;

/// Opening and closing delimiter of a fenced code block.
pub const FENCE: &[u8] = b"```";

/// Check whether a line opens or closes a fenced code block.
#[inline]
pub fn is_fence(line: &[u8]) -> bool {
    line.starts_with(FENCE)
}

/// Tracks whether the parser is inside a fenced code block.
///
/// Any fence line toggles the state, whatever follows the delimiter. While
/// open, every other line is raw code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FenceTracker {
    open: bool,
}

impl FenceTracker {
    /// Create a tracker outside any code block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a code block is currently open.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Handle a fence line, returning the start or end event.
    pub fn toggle(&mut self, line: &[u8]) -> Block {
        self.open = !self.open;
        if self.open {
            Block::CodeBlockStart {
                info: info_string(line),
            }
        } else {
            Block::CodeBlockEnd
        }
    }

    /// Close the block at end of input. Returns whether one was open.
    pub fn finish(&mut self) -> bool {
        std::mem::take(&mut self.open)
    }
}

/// Language tag after the opening delimiter, trimmed; `None` if blank.
fn info_string(line: &[u8]) -> Option<Vec<u8>> {
    let info = line.get(FENCE.len()..).unwrap_or_default().trim_ascii();
    (!info.is_empty()).then(|| info.to_vec())
}
