// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::{Insets, Size};
use styled_text::StyledText;

use crate::{AutoSizeModel, TextMeasurer};

/// Styled text that sizes itself to its content at a fixed width.
///
/// Call [`layout`](Self::layout) whenever the text or width changes; it measures the text,
/// stores the needed height in the [`AutoSizeModel`], and returns the frame size.
#[derive(Clone, Debug)]
pub struct AutoSizedText {
    text: StyledText,
    model: AutoSizeModel,
    insets: Insets,
}

impl AutoSizedText {
    /// Wraps `text` for display at `fixed_width`, starting from `height`.
    pub fn new(text: StyledText, fixed_width: f64, height: f64) -> Self {
        Self {
            text,
            model: AutoSizeModel::new(fixed_width, height),
            insets: Insets::ZERO,
        }
    }

    /// Sets the padding between the frame and the text.
    #[must_use]
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// The displayed text.
    pub fn text(&self) -> &StyledText {
        &self.text
    }

    /// Replaces the displayed text. The height is stale until the next layout pass.
    pub fn set_text(&mut self, text: StyledText) {
        self.text = text;
    }

    /// The sizing state.
    pub fn model(&self) -> &AutoSizeModel {
        &self.model
    }

    /// Changes the width the text is laid out at.
    pub fn set_width(&mut self, width: f64) {
        self.model.width = width;
    }

    /// The padding between the frame and the text.
    pub fn insets(&self) -> Insets {
        self.insets
    }

    /// Measures the text at the model width and records the height it needs.
    ///
    /// Insets are taken off the width handed to `measurer` and added to the height it returns.
    /// A negative or non-finite measurement is recorded as zero.
    pub fn layout(&mut self, measurer: &mut impl TextMeasurer) -> Size {
        let content_width = (self.model.width - self.insets.x_value()).max(0.0);
        let measured = measurer.required_height(&self.text, content_width);
        let content_height = if measured.is_finite() && measured >= 0.0 {
            measured
        } else {
            log::warn!("text measured to invalid height {measured}; using 0");
            0.0
        };
        let height = content_height + self.insets.y_value();
        log::trace!(
            "laid out {} bytes at width {content_width}: height {height}",
            self.text.len()
        );
        self.model.set_height(height);
        self.model.size()
    }

    /// The preferred frame size from the last layout pass.
    pub fn ideal_size(&self) -> Size {
        self.model.size()
    }
}
