// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attributed Text stores owned UTF-8 text together with attributes applied to byte ranges of
//! that text.
//!
//! - [`AttributedText`] keeps spans in application order and can be concatenated with
//!   [`AttributedText::append`], which shifts the appended spans.
//! - Attributes that implement [`Keyed`] can be written with last-writer-wins semantics via
//!   [`AttributedText::set_attribute`].
//! - [`AttributeSegments`] splits the text into runs with a constant set of active spans.
//! - [`TextRange`] is a range validated against a text; validation failures are reported as
//!   [`Error`].
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
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

mod attribute_segments;
mod attributed_text;
mod error;
mod text_range;

pub use crate::attribute_segments::AttributeSegments;
pub use crate::attributed_text::{AttributedText, Keyed};
pub use crate::error::{Endpoint, Error, ErrorKind};
pub use crate::text_range::TextRange;
