// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::style::{Color, Font, LineBreakMode, ParagraphStyle, TextAlignment, UnderlineStyle};
use crate::Attribute;

/// The chainable text-building operations.
///
/// Every in-place operation mutates the receiver and returns it, so calls can be chained.
/// Attribute operations cover the receiver's whole text *as it is at the time of the call*;
/// text appended afterwards is not affected. Writing a property again replaces its previous
/// value.
///
/// The copy-producing forms, [`appending`](Self::appending) and
/// [`copy_with`](Self::copy_with), clone the receiver and run the in-place operations on the
/// clone, leaving the receiver untouched.
///
/// ```
/// use styled_text::{Attributed, Font, StyledText, TextAlignment};
///
/// let mut title = StyledText::new("Title");
/// title
///     .font(Font::bold_system(15.0))
///     .alignment(TextAlignment::Center)
///     .newline();
/// assert_eq!(title.as_str(), "Title\n");
///
/// let shouting = title.copy_with(|t| {
///     t.kerning(2.0);
/// });
/// assert_ne!(shouting, title);
/// ```
pub trait Attributed: Clone {
    /// Appends the text and spans of `other`.
    fn append(&mut self, other: &Self) -> &mut Self;

    /// Appends plain text with no attributes.
    fn push_str(&mut self, text: &str) -> &mut Self;

    /// Writes every attribute in `attributes` over the whole current text, in order.
    fn apply_all<I: IntoIterator<Item = Attribute>>(&mut self, attributes: I) -> &mut Self;

    /// The composite paragraph style at the start of the text, or the default when none is set.
    fn paragraph_style(&self) -> ParagraphStyle;

    /// Returns a copy of `self` with `other` appended.
    #[must_use]
    fn appending(&self, other: &Self) -> Self {
        let mut sum = self.clone();
        sum.append(other);
        sum
    }

    /// Returns a copy of `self` with `edit` applied to it.
    #[must_use]
    fn copy_with(&self, edit: impl FnOnce(&mut Self)) -> Self {
        let mut copy = self.clone();
        edit(&mut copy);
        copy
    }

    /// Appends a single space.
    fn space(&mut self) -> &mut Self {
        self.push_str(" ")
    }

    /// Appends a single line feed.
    fn newline(&mut self) -> &mut Self {
        self.push_str("\n")
    }

    /// Writes one attribute over the whole current text.
    fn apply(&mut self, attribute: Attribute) -> &mut Self {
        self.apply_all([attribute])
    }

    /// Sets the font.
    fn font(&mut self, font: Font) -> &mut Self {
        self.apply(Attribute::Font(font))
    }

    /// Sets the glyph color.
    fn foreground_color(&mut self, color: Color) -> &mut Self {
        self.apply(Attribute::ForegroundColor(color))
    }

    /// Sets extra inter-character spacing, in points.
    fn kerning(&mut self, kerning: f32) -> &mut Self {
        self.apply(Attribute::Kerning(kerning))
    }

    /// Sets the underline style, and the underline color when one is given.
    ///
    /// Without a color, any underline color already present is left as is.
    fn underline(&mut self, style: UnderlineStyle, color: Option<Color>) -> &mut Self {
        self.apply(Attribute::UnderlineStyle(style));
        if let Some(color) = color {
            self.apply(Attribute::UnderlineColor(color));
        }
        self
    }

    /// Sets the outline color and width together.
    fn stroke(&mut self, color: Color, width: f32) -> &mut Self {
        self.apply_all([Attribute::StrokeColor(color), Attribute::StrokeWidth(width)])
    }

    /// Reads the paragraph style, lets `edit` change it, and writes it back over the whole text.
    fn update_paragraph(&mut self, edit: impl FnOnce(&mut ParagraphStyle)) -> &mut Self {
        let mut paragraph = self.paragraph_style();
        edit(&mut paragraph);
        self.apply(Attribute::Paragraph(paragraph))
    }

    /// Sets the space between lines, in points.
    fn line_spacing(&mut self, line_spacing: f32) -> &mut Self {
        self.update_paragraph(|p| p.line_spacing = line_spacing)
    }

    /// Sets the line height multiplier.
    fn line_height_multiple(&mut self, multiple: f32) -> &mut Self {
        self.update_paragraph(|p| p.line_height_multiple = multiple)
    }

    /// Sets how overlong lines are broken.
    fn line_break(&mut self, mode: LineBreakMode) -> &mut Self {
        self.update_paragraph(|p| p.line_break_mode = mode)
    }

    /// Sets the horizontal alignment.
    fn alignment(&mut self, alignment: TextAlignment) -> &mut Self {
        self.update_paragraph(|p| p.alignment = alignment)
    }
}
