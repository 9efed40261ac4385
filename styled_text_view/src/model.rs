// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::Size;

/// The width-in, height-out state shared between a text view and its container.
///
/// The container fixes the width; each layout pass writes back the height the text needs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AutoSizeModel {
    /// The width the text is laid out at.
    pub width: f64,
    /// The height the last layout pass needed.
    pub height: f64,
}

impl AutoSizeModel {
    /// Creates a model for a fixed width and an initial height.
    pub fn new(fixed_width: f64, height: f64) -> Self {
        Self {
            width: fixed_width,
            height,
        }
    }

    /// The current size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Records a newly measured height.
    ///
    /// Returns `true` if it differs from the previous one.
    pub fn set_height(&mut self, height: f64) -> bool {
        if self.height == height {
            return false;
        }
        log::debug!(
            "auto-size height changed from {} to {} at width {}",
            self.height,
            height,
            self.width
        );
        self.height = height;
        true
    }
}
