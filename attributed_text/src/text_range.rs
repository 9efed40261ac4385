// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Endpoint, Error, ErrorKind};

/// A byte range that has been checked against a UTF-8 text.
///
/// A `TextRange` guarantees that `start <= end`, that both ends are within the text, and that
/// both ends sit on character boundaries. APIs that take a `TextRange` can therefore be
/// infallible.
///
/// The range does not remember which text it was checked against; only reuse it with text that
/// is at least as long and has the same boundaries up to `end`. Appending to a text keeps its
/// existing ranges valid.
///
/// ## Example
///
/// ```
/// use attributed_text::{AttributedText, TextRange};
///
/// let mut text = AttributedText::new("Hello!");
/// let range = TextRange::new(text.as_str(), 0..5).unwrap();
/// text.apply_attribute(range, ());
/// assert_eq!(text.attributes_len(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Validates `range` against `text`.
    #[inline]
    pub fn new(text: &str, range: Range<usize>) -> Result<Self, Error> {
        validate_range(text, &range)?;
        Ok(Self {
            start: range.start,
            end: range.end,
        })
    }

    /// The range covering all of `text`.
    #[must_use]
    #[inline]
    pub fn full(text: &str) -> Self {
        Self {
            start: 0,
            end: text.len(),
        }
    }

    /// The start byte offset.
    #[must_use]
    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    /// The end byte offset (exclusive).
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// The number of bytes covered.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the range covers no bytes.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns this range as a `Range<usize>`.
    #[must_use]
    #[inline]
    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<TextRange> for Range<usize> {
    #[inline]
    fn from(value: TextRange) -> Self {
        value.as_range()
    }
}

pub(crate) fn validate_range(text: &str, range: &Range<usize>) -> Result<(), Error> {
    let len = text.len();
    if range.start > range.end {
        return Err(Error::new(ErrorKind::InvalidRange, range.start, range.end, len));
    }
    if range.end > len {
        return Err(Error::new(ErrorKind::InvalidBounds, range.start, range.end, len));
    }
    if !text.is_char_boundary(range.start) {
        return Err(Error::not_on_char_boundary(range.start, range.end, len, Endpoint::Start));
    }
    if !text.is_char_boundary(range.end) {
        return Err(Error::not_on_char_boundary(range.start, range.end, len, Endpoint::End));
    }
    Ok(())
}
