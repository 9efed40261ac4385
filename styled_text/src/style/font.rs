// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

/// How heavy the strokes of a font are, from 1.0 (thinnest) to 1000.0 (heaviest).
///
/// The named constants are the common weight classes; [`FontWeight::NORMAL`] is the default.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Light (300).
    pub const LIGHT: Self = Self(300.0);
    /// Regular body text (400).
    pub const NORMAL: Self = Self(400.0);
    /// Medium (500).
    pub const MEDIUM: Self = Self(500.0);
    /// Semibold (600).
    pub const SEMI_BOLD: Self = Self(600.0);
    /// Bold (700), as used by [`Font::bold_system`].
    pub const BOLD: Self = Self(700.0);
    /// Black, the heaviest named class (900).
    pub const BLACK: Self = Self(900.0);

    /// A weight with an arbitrary value.
    pub fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// The numeric weight.
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Whether glyphs are drawn upright or from the italic face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontStyle {
    /// Roman face.
    #[default]
    Normal,
    /// Italic face.
    Italic,
}

/// The family a [`Font`] is drawn from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// The platform's user interface font.
    #[default]
    System,
    /// A family looked up by name.
    Named(Arc<str>),
}

impl From<&str> for FontFamily {
    fn from(name: &str) -> Self {
        Self::Named(Arc::from(name))
    }
}

/// A font description.
///
/// This is a plain value; resolving it to font data is left to the renderer.
///
/// ```
/// use styled_text::{Font, FontFamily, FontWeight};
///
/// let title = Font::bold_system(15.0);
/// assert_eq!(title.weight, FontWeight::BOLD);
///
/// let mono = Font::new("Menlo", 12.0);
/// assert_eq!(mono.family, FontFamily::from("Menlo"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Font family.
    pub family: FontFamily,
    /// Point size.
    pub size: f32,
    /// Weight class.
    pub weight: FontWeight,
    /// Upright or italic.
    pub style: FontStyle,
}

impl Font {
    /// A regular font from the named `family`.
    pub fn new(family: impl Into<FontFamily>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        }
    }

    /// The regular system font at `size`.
    pub fn system(size: f32) -> Self {
        Self::new(FontFamily::System, size)
    }

    /// The bold system font at `size`.
    pub fn bold_system(size: f32) -> Self {
        Self::system(size).with_weight(FontWeight::BOLD)
    }

    /// The italic system font at `size`.
    pub fn italic_system(size: f32) -> Self {
        Self::system(size).with_style(FontStyle::Italic)
    }

    /// Returns this font with a different weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Returns this font with a different style.
    #[must_use]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns this font at a different size.
    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}
