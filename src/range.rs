//! Byte offsets into a line.
//!
//! Lines are owned by the block parser; inline events point back into
//! them with a pair of `u32` offsets instead of borrowing sub-slices.

/// Half-open byte range `start..end` within one line.
///
/// # Example
/// ```
/// use mdcat::Range;
///
/// let line = b"**bold** text";
/// assert_eq!(Range::new(2, 6).slice(line), b"bold");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<Range>() == 8);

impl Range {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Build from cursor offsets. Lines longer than 4 GiB are not supported.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= u32::MAX as usize);
        Self::new(start as u32, end as u32)
    }

    /// The bytes of `line` covered by this range.
    #[inline]
    pub fn slice<'a>(&self, line: &'a [u8]) -> &'a [u8] {
        &line[self.start as usize..self.end as usize]
    }

    #[inline]
    pub const fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
