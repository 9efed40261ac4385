// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use styled_text::StyledText;

/// Something that can lay out styled text at a given width.
///
/// This is the only thing the view layer asks of a text engine. Implementations wrap lines to
/// `width` and report how tall the result is.
///
/// Any `FnMut(&StyledText, f64) -> f64` closure is a measurer.
pub trait TextMeasurer {
    /// Returns the height `text` needs when wrapped to `width`.
    fn required_height(&mut self, text: &StyledText, width: f64) -> f64;
}

impl<F> TextMeasurer for F
where
    F: FnMut(&StyledText, f64) -> f64,
{
    fn required_height(&mut self, text: &StyledText, width: f64) -> f64 {
        self(text, width)
    }
}
