// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How lines that are too long for the available width are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineBreakMode {
    /// Wrap at word boundaries.
    #[default]
    WordWrap,
    /// Wrap at any character boundary.
    CharWrap,
    /// Do not wrap; cut the line at the edge.
    Clip,
    /// Do not wrap; elide the start of the line.
    TruncateHead,
    /// Do not wrap; elide the end of the line.
    TruncateTail,
    /// Do not wrap; elide the middle of the line.
    TruncateMiddle,
}

/// Horizontal alignment of lines within a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    /// Align to the start of the writing direction.
    #[default]
    Natural,
    /// Align to the left edge.
    Left,
    /// Center each line.
    Center,
    /// Align to the right edge.
    Right,
    /// Stretch all but the last line to the full width.
    Justified,
}

/// The paragraph-level settings of a styled text, kept as one composite value.
///
/// Changing one field through the builder reads the current composite back and writes it again
/// whole, so the other fields survive.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParagraphStyle {
    /// Extra space between the bottom of one line and the top of the next, in points.
    pub line_spacing: f32,
    /// Multiplier applied to the natural line height. `0.0` leaves it unchanged.
    pub line_height_multiple: f32,
    /// How overlong lines are broken.
    pub line_break_mode: LineBreakMode,
    /// Horizontal alignment.
    pub alignment: TextAlignment,
}

impl ParagraphStyle {
    /// Creates a paragraph style with every field at its default.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The multiplier to apply to a natural line height.
    ///
    /// An unset (zero) or negative multiple behaves as `1.0`.
    pub fn effective_line_height_multiple(&self) -> f32 {
        if self.line_height_multiple > 0.0 {
            self.line_height_multiple
        } else {
            1.0
        }
    }
}
