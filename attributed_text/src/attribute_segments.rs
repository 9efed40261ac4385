// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute-based segmentation for [`AttributedText`].
//!
//! Given an [`AttributedText`] with overlapping attribute spans, this module produces
//! non-overlapping, contiguous segments and provides a view of spans active over each segment.

use alloc::vec::Vec;
use core::ops::Range;

use crate::AttributedText;

/// Iterator over contiguous attribute segments of an [`AttributedText`].
///
/// Each yielded item is a non-empty byte range. Every boundary of every span starts a new
/// segment, so the set of spans covering a segment is constant across it. That set is exposed
/// through [`AttributeSegments::active_spans`], in the order the spans were applied.
///
/// # Examples
///
/// ```
/// use attributed_text::AttributedText;
///
/// #[derive(Debug, PartialEq)]
/// enum Color {
///     Red,
///     Blue,
/// }
///
/// let mut text = AttributedText::new("hello");
/// text.apply_attribute_bytes(0..2, Color::Red).unwrap();
/// text.apply_attribute_bytes(1..5, Color::Blue).unwrap();
///
/// let mut segments = text.segments();
/// assert_eq!(segments.next(), Some(0..1));
/// let colors: Vec<_> = segments.active_spans().map(|(_, c)| c).collect();
/// assert_eq!(colors, vec![&Color::Red]);
///
/// assert_eq!(segments.next(), Some(1..2));
/// let colors: Vec<_> = segments.active_spans().map(|(_, c)| c).collect();
/// assert_eq!(colors, vec![&Color::Red, &Color::Blue]);
/// ```
///
/// Zero-length spans never become active, but their position still splits segments.
#[derive(Debug)]
pub struct AttributeSegments<'a, Attr> {
    spans: Vec<(&'a Range<usize>, &'a Attr)>,
    boundaries: Vec<usize>,
    by_start: Vec<usize>,
    by_end: Vec<usize>,
    next_start: usize,
    next_end: usize,
    active: Vec<usize>,
    index: usize,
}

impl<'a, Attr> AttributeSegments<'a, Attr> {
    pub(crate) fn new(attributed: &'a AttributedText<Attr>) -> Self {
        let len = attributed.len();
        let mut boundaries = Vec::with_capacity(2 + attributed.attributes_len() * 2);
        boundaries.push(0);
        boundaries.push(len);
        let mut spans = Vec::with_capacity(attributed.attributes_len());
        for (range, attr) in attributed.attributes_iter() {
            boundaries.push(range.start);
            boundaries.push(range.end);
            if range.start < range.end {
                spans.push((range, attr));
            }
        }
        boundaries.sort_unstable();
        boundaries.dedup();

        // Span ids are indices into `spans`, which is in application order.
        let mut by_start: Vec<usize> = (0..spans.len()).collect();
        by_start.sort_by_key(|&id| spans[id].0.start);
        let mut by_end: Vec<usize> = (0..spans.len()).collect();
        by_end.sort_by_key(|&id| spans[id].0.end);

        Self {
            active: Vec::with_capacity(spans.len()),
            spans,
            boundaries,
            by_start,
            by_end,
            next_start: 0,
            next_end: 0,
            index: 0,
        }
    }

    /// The spans covering the segment most recently returned by `next`.
    pub fn active_spans(&self) -> impl Iterator<Item = (&'a Range<usize>, &'a Attr)> + '_ {
        self.active.iter().map(|&id| self.spans[id])
    }

    fn advance_to(&mut self, position: usize) {
        while let Some(&id) = self.by_end.get(self.next_end) {
            if self.spans[id].0.end > position {
                break;
            }
            if let Ok(ix) = self.active.binary_search(&id) {
                self.active.remove(ix);
            }
            self.next_end += 1;
        }
        while let Some(&id) = self.by_start.get(self.next_start) {
            if self.spans[id].0.start > position {
                break;
            }
            if let Err(ix) = self.active.binary_search(&id) {
                self.active.insert(ix, id);
            }
            self.next_start += 1;
        }
    }
}

impl<Attr> Iterator for AttributeSegments<'_, Attr> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = *self.boundaries.get(self.index)?;
        let end = *self.boundaries.get(self.index + 1)?;
        self.index += 1;
        self.advance_to(start);
        Some(start..end)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::ops::Range;

    use crate::AttributedText;

    /// Scans every span for every segment; used to check the sweep.
    fn reference_segments(text: &AttributedText<u32>) -> Vec<(Range<usize>, Vec<u32>)> {
        let mut boundaries = Vec::from([0, text.len()]);
        for (range, _) in text.attributes_iter() {
            boundaries.push(range.start);
            boundaries.push(range.end);
        }
        boundaries.sort_unstable();
        boundaries.dedup();
        boundaries
            .windows(2)
            .map(|pair| {
                let active = text
                    .attributes_iter()
                    .filter(|(range, _)| range.start <= pair[0] && range.end >= pair[1])
                    .filter(|(range, _)| !range.is_empty())
                    .map(|(_, attr)| *attr)
                    .collect();
                (pair[0]..pair[1], active)
            })
            .collect()
    }

    fn sweep_segments(text: &AttributedText<u32>) -> Vec<(Range<usize>, Vec<u32>)> {
        let mut segments = text.segments();
        let mut out = Vec::new();
        while let Some(range) = segments.next() {
            out.push((range, segments.active_spans().map(|(_, a)| *a).collect()));
        }
        out
    }

    #[test]
    fn empty_text_has_no_segments() {
        let text = AttributedText::<u32>::new("");
        assert_eq!(text.segments().count(), 0);
    }

    #[test]
    fn unattributed_text_is_one_segment() {
        let text = AttributedText::<u32>::new("plain");
        assert_eq!(sweep_segments(&text), [(0..5, Vec::new())]);
    }

    #[test]
    fn sweep_matches_reference() {
        let mut text = AttributedText::new("The quick brown fox");
        let ranges = [
            (0..19, 1),
            (4..9, 2),
            (4..4, 3),
            (8..15, 4),
            (0..3, 5),
            (10..19, 6),
        ];
        for (range, attr) in ranges {
            text.apply_attribute_bytes(range, attr).unwrap();
        }
        assert_eq!(sweep_segments(&text), reference_segments(&text));
    }

    #[test]
    fn active_spans_keep_application_order() {
        let mut text = AttributedText::new("abc");
        text.apply_attribute_bytes(1..3, 10).unwrap();
        text.apply_attribute_bytes(0..3, 20).unwrap();
        let segments = sweep_segments(&text);
        assert_eq!(segments[1], (1..3, Vec::from([10, 20])));
    }
}
