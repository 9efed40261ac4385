// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Support for the [`styled!`](crate::styled) macro.

use crate::{Attributed, StyledText};

/// Composes styled text from a list of fragments.
///
/// Each fragment may be an owned [`StyledText`], a `&StyledText`, or the `&mut StyledText`
/// returned by a chain of [`Attributed`] calls on a temporary. The result is the same as
/// [`StyledText::compose`]: the first fragment followed by every later one, each keeping its
/// own attributes. An empty invocation gives an empty value.
///
/// ```
/// use styled_text::{styled, Attributed, Font, StyledText, UnderlineStyle};
///
/// let body = StyledText::new("Lorem ipsum dolor sit amet.");
/// let text = styled![
///     StyledText::new("Test 1: size to fit")
///         .font(Font::bold_system(15.0))
///         .newline(),
///     StyledText::new("Fixed width").underline(UnderlineStyle::SINGLE, None).newline(),
///     &body,
/// ];
///
/// assert!(text.as_str().starts_with("Test 1: size to fit\nFixed width\n"));
/// assert!(styled![].is_empty());
/// ```
#[macro_export]
macro_rules! styled {
    ($($fragment:expr),* $(,)?) => {{
        #[allow(unused_mut, reason = "Unused when there are no fragments.")]
        let mut composed = ::core::option::Option::None;
        $(
            $crate::__private::push_fragment(
                &mut composed,
                ::core::borrow::Borrow::<$crate::StyledText>::borrow(&$fragment),
            );
        )*
        $crate::__private::finish(composed)
    }};
}

/// Seeds `composed` with the first fragment, or appends to it.
pub fn push_fragment(composed: &mut Option<StyledText>, fragment: &StyledText) {
    match composed {
        Some(text) => {
            text.append(fragment);
        }
        None => *composed = Some(fragment.clone()),
    }
}

/// The composed value, empty if no fragment was pushed.
pub fn finish(composed: Option<StyledText>) -> StyledText {
    composed.unwrap_or_default()
}
