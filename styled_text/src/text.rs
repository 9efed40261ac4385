// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;
use core::ops::{Add, AddAssign, Range};

use attributed_text::{AttributedText, Error};

use crate::runs::StyleRuns;
use crate::style::ParagraphStyle;
use crate::{Attribute, AttributeKey, Attributed};

/// Text with visual attributes applied to byte ranges of it.
///
/// Build one with the [`Attributed`] operations, join values with `+` or
/// [`append`](Attributed::append), and assemble many fragments with [`StyledText::compose`] or
/// [`styled!`](crate::styled).
///
/// All ranges are UTF-8 byte offsets.
///
/// ```
/// use styled_text::{AttributeKey, Attributed, Font, StyledText};
///
/// let mut bold = StyledText::new("AB");
/// bold.font(Font::bold_system(15.0));
/// let joined = &bold + &StyledText::new("C");
///
/// assert_eq!(joined.as_str(), "ABC");
/// assert!(joined.attribute_at(1, AttributeKey::Font).is_some());
/// assert!(joined.attribute_at(2, AttributeKey::Font).is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyledText {
    attributed: AttributedText<Attribute>,
}

impl StyledText {
    /// Creates styled text with no attributes.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            attributed: AttributedText::new(text),
        }
    }

    /// Flattens `fragments` into one value, in order.
    ///
    /// The first fragment seeds the result and each later one is appended to it. No fragments
    /// give an empty value.
    pub fn compose<I>(fragments: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut fragments = fragments.into_iter();
        let Some(mut composed) = fragments.next() else {
            return Self::default();
        };
        for fragment in fragments {
            composed.append(&fragment);
        }
        composed
    }

    /// The underlying attributed text, for a renderer to consume.
    #[inline]
    pub fn attributed(&self) -> &AttributedText<Attribute> {
        &self.attributed
    }

    /// Borrow the text content.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.attributed.as_str()
    }

    /// The length of the text, in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.attributed.len()
    }

    /// Returns `true` if there is no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attributed.is_empty()
    }

    /// Iterate over every attribute span, oldest first.
    pub fn spans(&self) -> impl ExactSizeIterator<Item = (&Range<usize>, &Attribute)> {
        self.attributed.attributes_iter()
    }

    /// The attribute for `key` at byte `index`, if one is set.
    pub fn attribute_at(&self, index: usize, key: AttributeKey) -> Option<&Attribute> {
        self.attributed.attribute_at(index, &key)
    }

    /// Every attribute covering byte `index`.
    pub fn attributes_at(&self, index: usize) -> impl Iterator<Item = &Attribute> {
        self.attributed.attributes_at(index)
    }

    /// Every attribute overlapping a byte `range`, after checking the range against the text.
    pub fn attributes_in(
        &self,
        range: Range<usize>,
    ) -> Result<impl Iterator<Item = &Attribute>, Error> {
        let range = self.attributed.range(range)?;
        Ok(self.attributed.attributes_for_range(range.as_range()))
    }

    /// Writes `attribute` over a byte `range` only, replacing the same property there.
    pub fn apply_to_range(
        &mut self,
        range: Range<usize>,
        attribute: Attribute,
    ) -> Result<&mut Self, Error> {
        let range = self.attributed.range(range)?;
        self.attributed.set_attribute(range, attribute);
        Ok(self)
    }

    /// Resolved style runs covering the text, with adjacent equal runs merged.
    pub fn runs(&self) -> StyleRuns<'_> {
        StyleRuns::new(self)
    }
}

impl Attributed for StyledText {
    fn append(&mut self, other: &Self) -> &mut Self {
        self.attributed.append(&other.attributed);
        self
    }

    fn push_str(&mut self, text: &str) -> &mut Self {
        self.attributed.push_str(text);
        self
    }

    fn apply_all<I: IntoIterator<Item = Attribute>>(&mut self, attributes: I) -> &mut Self {
        let range = self.attributed.full_range();
        for attribute in attributes {
            self.attributed.set_attribute(range, attribute);
        }
        self
    }

    fn paragraph_style(&self) -> ParagraphStyle {
        match self.attribute_at(0, AttributeKey::Paragraph) {
            Some(Attribute::Paragraph(paragraph)) => *paragraph,
            _ => ParagraphStyle::default(),
        }
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Add<&StyledText> for &StyledText {
    type Output = StyledText;

    fn add(self, rhs: &StyledText) -> StyledText {
        self.appending(rhs)
    }
}

impl Add for StyledText {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self.append(&rhs);
        self
    }
}

impl AddAssign<&Self> for StyledText {
    fn add_assign(&mut self, rhs: &Self) {
        self.append(rhs);
    }
}

impl FromIterator<Self> for StyledText {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::compose(iter)
    }
}

impl Extend<Self> for StyledText {
    fn extend<I: IntoIterator<Item = Self>>(&mut self, iter: I) {
        for fragment in iter {
            self.append(&fragment);
        }
    }
}
