// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A fluent builder for styled text, built on [`attributed_text`].
//!
//! - [`StyledText`] holds text plus attribute spans on byte ranges.
//! - [`Attributed`] is the chainable operation set: appending text, and writing a font, colors,
//!   kerning, underline, stroke or paragraph settings over the whole current text.
//! - [`StyledText::compose`] and [`styled!`] flatten a list of fragments into one value.
//! - [`StyledText::runs`] resolves the spans into non-overlapping [`StyleRun`]s for a renderer.
//!
//! ## Attribute scope
//!
//! An attribute operation covers the text that exists when it is called. Text appended later
//! keeps its own attributes, so fragments can be styled independently and then joined:
//!
//! ```
//! use peniko::color::palette::css::BLUE;
//! use styled_text::{Attribute, AttributeKey, Attributed, Font, StyledText};
//!
//! let mut greeting = StyledText::new("Hello");
//! greeting.font(Font::bold_system(17.0)).space();
//! greeting.append(StyledText::new("world").foreground_color(BLUE));
//!
//! assert_eq!(greeting.as_str(), "Hello world");
//! // The font covers "Hello" only; the space was appended after it was set.
//! assert!(greeting.attribute_at(5, AttributeKey::Font).is_none());
//! assert!(matches!(
//!     greeting.attribute_at(6, AttributeKey::ForegroundColor),
//!     Some(Attribute::ForegroundColor(_))
//! ));
//! ```
//!
//! Writing a property again replaces it. Paragraph settings share one composite
//! [`ParagraphStyle`]; setting one field keeps the others.
//!
//! ## Indices
//!
//! All ranges are **byte indices** into UTF-8 text, on character boundaries.
//!
//! ## Features
//!
//! - `std` (enabled by default): Enables `std` support in `peniko`.
//! - `libm`: Uses `libm` for float math in `peniko` when `std` is disabled.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

pub mod style;

mod attribute;
mod compose;
mod runs;
mod text;
mod traits;


pub use attribute::{Attribute, AttributeKey};
pub use runs::{RunStyle, StyleRun, StyleRuns};
pub use text::StyledText;
pub use traits::Attributed;

pub use attributed_text::{AttributedText, Error, ErrorKind};
pub use style::{
    Color, Font, FontFamily, FontStyle, FontWeight, LineBreakMode, ParagraphStyle, TextAlignment,
    UnderlineLine, UnderlinePattern, UnderlineStyle,
};

/// Implementation details of [`styled!`]; not public API.
#[doc(hidden)]
pub mod __private {
    pub use crate::compose::{finish, push_fragment};
}
