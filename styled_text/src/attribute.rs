// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attributed_text::Keyed;

use crate::style::{Color, Font, ParagraphStyle, UnderlineStyle};

/// A single visual property applied to a span of a [`StyledText`](crate::StyledText).
#[derive(Clone, Debug, PartialEq)]
pub enum Attribute {
    /// Font used to draw the text.
    Font(Font),
    /// Color of the glyphs.
    ForegroundColor(Color),
    /// Extra space added after each character, in points.
    Kerning(f32),
    /// Underline decoration.
    UnderlineStyle(UnderlineStyle),
    /// Color of the underline; the foreground color is used when absent.
    UnderlineColor(Color),
    /// Color of the glyph outline.
    StrokeColor(Color),
    /// Width of the glyph outline as a percentage of the font size.
    ///
    /// Positive values stroke only; negative values stroke and fill.
    StrokeWidth(f32),
    /// Composite paragraph settings.
    Paragraph(ParagraphStyle),
}

/// Names the property an [`Attribute`] sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    /// [`Attribute::Font`].
    Font,
    /// [`Attribute::ForegroundColor`].
    ForegroundColor,
    /// [`Attribute::Kerning`].
    Kerning,
    /// [`Attribute::UnderlineStyle`].
    UnderlineStyle,
    /// [`Attribute::UnderlineColor`].
    UnderlineColor,
    /// [`Attribute::StrokeColor`].
    StrokeColor,
    /// [`Attribute::StrokeWidth`].
    StrokeWidth,
    /// [`Attribute::Paragraph`].
    Paragraph,
}

impl Attribute {
    /// The property this attribute sets.
    pub fn key(&self) -> AttributeKey {
        match self {
            Self::Font(_) => AttributeKey::Font,
            Self::ForegroundColor(_) => AttributeKey::ForegroundColor,
            Self::Kerning(_) => AttributeKey::Kerning,
            Self::UnderlineStyle(_) => AttributeKey::UnderlineStyle,
            Self::UnderlineColor(_) => AttributeKey::UnderlineColor,
            Self::StrokeColor(_) => AttributeKey::StrokeColor,
            Self::StrokeWidth(_) => AttributeKey::StrokeWidth,
            Self::Paragraph(_) => AttributeKey::Paragraph,
        }
    }
}

impl Keyed for Attribute {
    type Key = AttributeKey;

    fn key(&self) -> AttributeKey {
        Self::key(self)
    }
}
