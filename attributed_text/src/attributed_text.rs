// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use crate::text_range::validate_range;
use crate::{AttributeSegments, Error, TextRange};

/// An attribute that belongs to a family of mutually exclusive values.
///
/// Two attributes with equal keys describe the same property, so writing one over a range
/// replaces the other there. See [`AttributedText::set_attribute`].
pub trait Keyed {
    /// Identifies the property an attribute sets.
    type Key: PartialEq;

    /// Returns the key of this attribute.
    fn key(&self) -> Self::Key;
}

/// A block of owned text with attributes applied to byte ranges within it.
///
/// Spans are kept in the order they were applied. Readers that need a single value per
/// property should treat later spans as overriding earlier ones.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributedText<Attr> {
    text: String,
    attributes: Vec<(Range<usize>, Attr)>,
}

impl<Attr> Default for AttributedText<Attr> {
    fn default() -> Self {
        Self {
            text: String::new(),
            attributes: Vec::new(),
        }
    }
}

impl<Attr> AttributedText<Attr> {
    /// Create an `AttributedText` with no attributes applied.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attributes: Vec::new(),
        }
    }

    /// Borrow the underlying text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the length of the underlying text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Validates a byte `range` against this text.
    pub fn range(&self, range: Range<usize>) -> Result<TextRange, Error> {
        TextRange::new(&self.text, range)
    }

    /// The range covering the whole text as it is now.
    pub fn full_range(&self) -> TextRange {
        TextRange::full(&self.text)
    }

    /// Append plain text with no attributes.
    ///
    /// Existing spans keep their ranges, so they do not extend over the new text.
    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Apply an `attribute` to a validated `range`, keeping every existing span.
    ///
    /// `range` must lie within this text. Debug builds panic if it ends past the text.
    pub fn apply_attribute(&mut self, range: TextRange, attribute: Attr) {
        self.debug_check_range(range);
        self.attributes.push((range.as_range(), attribute));
    }

    /// Apply an `attribute` to a byte `range`, validating it first.
    pub fn apply_attribute_bytes(
        &mut self,
        range: Range<usize>,
        attribute: Attr,
    ) -> Result<(), Error> {
        validate_range(&self.text, &range)?;
        self.attributes.push((range, attribute));
        Ok(())
    }

    /// Iterate over all attributes and the ranges they apply to.
    ///
    /// Attributes are yielded in the order they were applied.
    pub fn attributes_iter(&self) -> impl ExactSizeIterator<Item = (&Range<usize>, &Attr)> {
        self.attributes.iter().map(|(range, attr)| (range, attr))
    }

    /// Get an iterator over the attributes that apply at byte `index`.
    ///
    /// Conflicting attributes are all reported, oldest first.
    pub fn attributes_at(&self, index: usize) -> impl Iterator<Item = &Attr> {
        self.attributes
            .iter()
            .filter(move |(span, _)| span.contains(&index))
            .map(|(_, attr)| attr)
    }

    /// Get an iterator over the attributes that overlap `range`.
    pub fn attributes_for_range(&self, range: Range<usize>) -> impl Iterator<Item = &Attr> {
        self.attributes
            .iter()
            .filter(move |(span, _)| span.start < range.end && span.end > range.start)
            .map(|(_, attr)| attr)
    }

    /// Returns the number of attribute spans applied to the text.
    pub fn attributes_len(&self) -> usize {
        self.attributes.len()
    }

    /// Remove all applied attribute spans.
    pub fn clear_attributes(&mut self) {
        self.attributes.clear();
    }

    /// Split the text into contiguous segments with a constant set of active spans.
    pub fn segments(&self) -> AttributeSegments<'_, Attr> {
        AttributeSegments::new(self)
    }

    fn debug_check_range(&self, range: TextRange) {
        let (end, len) = (range.end(), self.len());
        debug_assert!(
            end <= len,
            "range ending at {end} is past the end of the text (len {len})"
        );
    }
}

impl<Attr: Clone> AttributedText<Attr> {
    /// Append `other` to this text.
    ///
    /// The spans of `other` are copied and shifted by the current length of `self`; the spans
    /// already on `self` are untouched.
    pub fn append(&mut self, other: &Self) {
        let offset = self.text.len();
        self.text.push_str(&other.text);
        self.attributes.reserve(other.attributes.len());
        self.attributes.extend(
            other
                .attributes
                .iter()
                .map(|(range, attr)| (range.start + offset..range.end + offset, attr.clone())),
        );
    }
}

impl<Attr: Keyed + Clone> AttributedText<Attr> {
    /// Write `attribute` over `range`, replacing any attribute with the same key there.
    ///
    /// Spans with the same key that lie inside `range` are removed, and spans that straddle an
    /// end of `range` are trimmed to the part outside it. An empty `range` is a no-op.
    ///
    /// `range` must lie within this text. Debug builds panic if it ends past the text.
    pub fn set_attribute(&mut self, range: TextRange, attribute: Attr) {
        self.debug_check_range(range);
        if range.is_empty() {
            return;
        }
        let key = attribute.key();
        let (start, end) = (range.start(), range.end());
        let mut kept = Vec::with_capacity(self.attributes.len() + 2);
        for (span, attr) in self.attributes.drain(..) {
            if span.end <= start || span.start >= end || attr.key() != key {
                kept.push((span, attr));
                continue;
            }
            if span.start < start {
                kept.push((span.start..start, attr.clone()));
            }
            if span.end > end {
                kept.push((end..span.end, attr));
            }
        }
        kept.push((range.as_range(), attribute));
        self.attributes = kept;
    }

    /// Returns the most recently applied attribute with `key` covering byte `index`.
    pub fn attribute_at(&self, index: usize, key: &Attr::Key) -> Option<&Attr> {
        self.attributes
            .iter()
            .rev()
            .find(|(span, attr)| span.contains(&index) && attr.key() == *key)
            .map(|(_, attr)| attr)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::ops::Range;

    use crate::{AttributedText, ErrorKind, Keyed, TextRange};

    #[derive(Clone, Debug, PartialEq)]
    enum TestAttribute {
        Weight(u16),
        Size(u8),
    }

    impl Keyed for TestAttribute {
        type Key = u8;

        fn key(&self) -> u8 {
            match self {
                Self::Weight(_) => 0,
                Self::Size(_) => 1,
            }
        }
    }

    fn spans(at: &AttributedText<TestAttribute>) -> Vec<(Range<usize>, TestAttribute)> {
        at.attributes_iter()
            .map(|(range, attr)| (range.clone(), attr.clone()))
            .collect()
    }

    #[test]
    fn attributes_at() {
        let mut at = AttributedText::new("Hello!");
        at.apply_attribute_bytes(1..3, TestAttribute::Weight(700))
            .unwrap();
        at.apply_attribute_bytes(2..5, TestAttribute::Size(12))
            .unwrap();

        assert_eq!(at.attributes_at(0).count(), 0);
        assert_eq!(
            at.attributes_at(2).collect::<Vec<_>>(),
            [&TestAttribute::Weight(700), &TestAttribute::Size(12)]
        );
        assert_eq!(at.attributes_for_range(3..6).count(), 1);
    }

    #[test]
    fn bad_range_for_apply_attribute() {
        let mut at = AttributedText::new("Hello!");
        let err = at
            .apply_attribute_bytes(0..7, TestAttribute::Size(1))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
        assert_eq!(at.attributes_len(), 0);
    }

    #[test]
    fn set_attribute_replaces_same_key() {
        let mut at = AttributedText::new("Hello!");
        at.set_attribute(at.full_range(), TestAttribute::Weight(400));
        at.set_attribute(at.full_range(), TestAttribute::Size(9));
        at.set_attribute(at.full_range(), TestAttribute::Weight(700));

        assert_eq!(
            spans(&at),
            [
                (0..6, TestAttribute::Size(9)),
                (0..6, TestAttribute::Weight(700)),
            ]
        );
        assert_eq!(at.attribute_at(3, &0), Some(&TestAttribute::Weight(700)));
    }

    #[test]
    fn set_attribute_trims_straddling_spans() {
        let mut at = AttributedText::new("abcdefgh");
        at.apply_attribute_bytes(0..8, TestAttribute::Weight(400))
            .unwrap();
        at.set_attribute(at.range(2..5).unwrap(), TestAttribute::Weight(700));

        assert_eq!(
            spans(&at),
            [
                (0..2, TestAttribute::Weight(400)),
                (5..8, TestAttribute::Weight(400)),
                (2..5, TestAttribute::Weight(700)),
            ]
        );
    }

    #[test]
    fn set_attribute_on_empty_range_is_noop() {
        let mut at = AttributedText::new("");
        at.set_attribute(at.full_range(), TestAttribute::Size(3));
        assert_eq!(at.attributes_len(), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "past the end of the text")]
    fn set_attribute_rejects_range_from_longer_text() {
        let mut at = AttributedText::new("Hi");
        at.set_attribute(TextRange::full("Hello, world"), TestAttribute::Size(1));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "past the end of the text")]
    fn apply_attribute_rejects_range_from_longer_text() {
        let mut at = AttributedText::new("Hi");
        at.apply_attribute(TextRange::full("Hello, world"), TestAttribute::Weight(400));
    }

    #[test]
    fn range_from_a_prefix_is_accepted() {
        let mut at = AttributedText::new("Hi");
        at.push_str(" there");
        at.apply_attribute(TextRange::full("Hi"), TestAttribute::Weight(400));
        assert_eq!(at.segments().collect::<Vec<_>>(), [0..2, 2..8]);
    }

    #[test]
    fn append_shifts_spans_of_appended_text() {
        let mut head = AttributedText::new("ab");
        head.apply_attribute_bytes(0..2, TestAttribute::Size(1))
            .unwrap();
        let mut tail = AttributedText::new("cde");
        tail.apply_attribute_bytes(1..3, TestAttribute::Size(2))
            .unwrap();

        head.append(&tail);
        assert_eq!(head.as_str(), "abcde");
        assert_eq!(
            spans(&head),
            [
                (0..2, TestAttribute::Size(1)),
                (3..5, TestAttribute::Size(2)),
            ]
        );
        assert_eq!(spans(&tail), [(1..3, TestAttribute::Size(2))]);
    }

    #[test]
    fn push_str_does_not_extend_spans() {
        let mut at = AttributedText::new("ab");
        at.set_attribute(at.full_range(), TestAttribute::Size(1));
        at.push_str("\n");
        assert_eq!(at.len(), 3);
        assert_eq!(at.attribute_at(2, &1), None);
    }
}
