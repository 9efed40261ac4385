// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use attributed_text::AttributeSegments;

use crate::style::{Color, Font, ParagraphStyle, UnderlineStyle};
use crate::{Attribute, StyledText};

/// The attributes in effect over one run of text.
///
/// `None` means the property was never set there and the renderer's default applies.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunStyle {
    /// Font.
    pub font: Option<Font>,
    /// Glyph color.
    pub foreground_color: Option<Color>,
    /// Extra inter-character spacing.
    pub kerning: Option<f32>,
    /// Underline decoration.
    pub underline_style: Option<UnderlineStyle>,
    /// Underline color.
    pub underline_color: Option<Color>,
    /// Outline color.
    pub stroke_color: Option<Color>,
    /// Outline width.
    pub stroke_width: Option<f32>,
    /// Composite paragraph settings.
    pub paragraph: Option<ParagraphStyle>,
}

impl RunStyle {
    fn apply(&mut self, attribute: &Attribute) {
        match attribute {
            Attribute::Font(font) => self.font = Some(font.clone()),
            Attribute::ForegroundColor(color) => self.foreground_color = Some(*color),
            Attribute::Kerning(kerning) => self.kerning = Some(*kerning),
            Attribute::UnderlineStyle(style) => self.underline_style = Some(*style),
            Attribute::UnderlineColor(color) => self.underline_color = Some(*color),
            Attribute::StrokeColor(color) => self.stroke_color = Some(*color),
            Attribute::StrokeWidth(width) => self.stroke_width = Some(*width),
            Attribute::Paragraph(paragraph) => self.paragraph = Some(*paragraph),
        }
    }
}

/// A resolved style for a contiguous byte range.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleRun {
    /// The byte range in the text.
    pub range: Range<usize>,
    /// The attributes in effect over `range`.
    pub style: RunStyle,
}

/// Iterator over the resolved style runs of a [`StyledText`].
///
/// Runs are non-empty, contiguous and cover the whole text. Where spans overlap, the one applied
/// last wins. Adjacent runs with equal styles are merged.
#[derive(Debug)]
pub struct StyleRuns<'a> {
    segments: AttributeSegments<'a, Attribute>,
    pending: Option<StyleRun>,
}

impl<'a> StyleRuns<'a> {
    pub(crate) fn new(text: &'a StyledText) -> Self {
        Self {
            segments: text.attributed().segments(),
            pending: None,
        }
    }

    fn next_segment(&mut self) -> Option<StyleRun> {
        let range = self.segments.next()?;
        let mut style = RunStyle::default();
        for (_, attribute) in self.segments.active_spans() {
            style.apply(attribute);
        }
        Some(StyleRun { range, style })
    }
}

impl Iterator for StyleRuns<'_> {
    type Item = StyleRun;

    fn next(&mut self) -> Option<Self::Item> {
        let mut run = self.pending.take().or_else(|| self.next_segment())?;
        while let Some(next_run) = self.next_segment() {
            if next_run.style != run.style {
                self.pending = Some(next_run);
                break;
            }
            run.range.end = next_run.range.end;
        }
        Some(run)
    }
}
