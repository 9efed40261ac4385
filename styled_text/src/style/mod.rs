// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value types the builder attaches to text.
//!
//! These are plain data: nothing here knows how to find a font or draw a line.

mod decoration;
mod font;
mod paragraph;

pub use decoration::{UnderlineLine, UnderlinePattern, UnderlineStyle};
pub use font::{Font, FontFamily, FontStyle, FontWeight};
pub use paragraph::{LineBreakMode, ParagraphStyle, TextAlignment};

/// The color type used for text, underlines and strokes.
pub use peniko::Color;
