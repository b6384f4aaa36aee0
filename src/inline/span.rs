//! Emphasis span state.
//!
//! Bold and italic are not tracked independently: the line carries exactly
//! one active span, and opening a different span replaces the current one
//! instead of nesting inside it. In `**a *b* c**` the first inner `*`
//! switches bold to italic, the second closes all emphasis, and the final
//! `**` opens bold again until the end of the line.

use anstyle::Style;

use crate::style;

/// The single active emphasis mode of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpanState {
    #[default]
    None,
    Italic,
    Bold,
    BoldItalic,
}

/// What a marker window did to the span state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The window opened (or switched to) this span.
    Open(SpanState),
    /// The window closed the matching active span.
    Close,
}

impl SpanState {
    /// The span a marker window of `len` bytes toggles.
    #[inline]
    pub fn for_window(len: usize) -> Self {
        match len {
            1 => Self::Italic,
            2 => Self::Bold,
            _ => Self::BoldItalic,
        }
    }

    /// Apply a marker window of `len` bytes.
    ///
    /// Closes the span if it is the one the window toggles, otherwise opens
    /// that span, discarding whatever was active.
    pub fn apply(&mut self, len: usize) -> Toggle {
        let target = Self::for_window(len);
        if *self == target {
            *self = Self::None;
            Toggle::Close
        } else {
            *self = target;
            Toggle::Open(target)
        }
    }

    /// Whether any span is active.
    #[inline]
    pub fn is_active(self) -> bool {
        self != Self::None
    }

    /// Escape style that turns this span on.
    pub fn style(self) -> Style {
        match self {
            Self::None => Style::new(),
            Self::Italic => style::ITALIC,
            Self::Bold => style::BOLD,
            Self::BoldItalic => style::BOLD_ITALIC,
        }
    }
}
