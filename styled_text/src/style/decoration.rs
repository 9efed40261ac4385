// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How many lines an underline draws, and how heavy they are.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnderlineLine {
    /// No underline.
    None,
    /// A single thin line.
    #[default]
    Single,
    /// A single thick line.
    Thick,
    /// Two thin lines.
    Double,
}

/// The dash pattern an underline is drawn with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnderlinePattern {
    /// A continuous line.
    #[default]
    Solid,
    /// Dots.
    Dot,
    /// Dashes.
    Dash,
    /// Alternating dashes and dots.
    DashDot,
    /// A dash followed by two dots.
    DashDotDot,
}

/// The visual style of an underline.
///
/// The default is [`UnderlineStyle::SINGLE`].
///
/// ```
/// use styled_text::{UnderlinePattern, UnderlineStyle};
///
/// let squiggle = UnderlineStyle::THICK.pattern(UnderlinePattern::Dot).by_word(true);
/// assert!(squiggle.is_visible());
/// assert!(!UnderlineStyle::NONE.is_visible());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct UnderlineStyle {
    /// Line count and weight.
    pub line: UnderlineLine,
    /// Dash pattern.
    pub pattern: UnderlinePattern,
    /// Whether whitespace between words is left undecorated.
    pub by_word: bool,
}

impl UnderlineStyle {
    /// No underline.
    pub const NONE: Self = Self::with_line(UnderlineLine::None);

    /// A single solid line.
    pub const SINGLE: Self = Self::with_line(UnderlineLine::Single);

    /// A single thick solid line.
    pub const THICK: Self = Self::with_line(UnderlineLine::Thick);

    /// Two solid lines.
    pub const DOUBLE: Self = Self::with_line(UnderlineLine::Double);

    const fn with_line(line: UnderlineLine) -> Self {
        Self {
            line,
            pattern: UnderlinePattern::Solid,
            by_word: false,
        }
    }

    /// Returns this style with a different dash pattern.
    #[must_use]
    pub const fn pattern(mut self, pattern: UnderlinePattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Returns this style with word-only decoration toggled.
    #[must_use]
    pub const fn by_word(mut self, by_word: bool) -> Self {
        self.by_word = by_word;
        self
    }

    /// Returns `true` unless the line is [`UnderlineLine::None`].
    pub fn is_visible(self) -> bool {
        self.line != UnderlineLine::None
    }
}
