// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-sizing view model for [`styled_text`].
//!
//! A view that shows styled text at a fixed width needs to know how tall to be. This crate
//! keeps that width/height pair in an [`AutoSizeModel`] and updates it from a [`TextMeasurer`],
//! the one contract it needs from a text layout engine.
//!
//! ## Scope
//!
//! No layout happens here. Line breaking, shaping and measurement belong to whatever engine
//! implements [`TextMeasurer`].
//!
//! ## Example
//!
//! ```
//! use styled_text::{styled, Attributed, Font, StyledText};
//! use styled_text_view::AutoSizedText;
//!
//! let text = styled![
//!     StyledText::new("Title").font(Font::bold_system(15.0)).newline(),
//!     StyledText::new("Body text that may need to wrap."),
//! ];
//! let mut view = AutoSizedText::new(text, 250.0, 0.0);
//!
//! // Pretend every line is 20 points tall.
//! let mut measurer = |text: &StyledText, _width: f64| 20.0 * text.as_str().lines().count() as f64;
//! let size = view.layout(&mut measurer);
//! assert_eq!((size.width, size.height), (250.0, 40.0));
//! assert_eq!(view.model().height, 40.0);
//! ```
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

mod measure;
mod model;
mod view;

#[cfg(test)]
mod tests;

pub use measure::TextMeasurer;
pub use model::AutoSizeModel;
pub use view::AutoSizedText;
