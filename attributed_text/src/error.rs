// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a caller-supplied byte range cannot be used with a text.
///
/// Carries a non-exhaustive [`ErrorKind`], the attempted range, and the text length at the time
/// of the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    start: usize,
    end: usize,
    text_len: usize,
    endpoint: Option<Endpoint>,
}

impl Error {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The start byte index of the rejected range.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end byte index (exclusive) of the rejected range.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The length in bytes of the text the range was checked against.
    pub fn text_len(&self) -> usize {
        self.text_len
    }

    /// For [`ErrorKind::NotOnCharBoundary`], the endpoint that fell inside a character.
    pub fn endpoint(&self) -> Option<Endpoint> {
        self.endpoint
    }

    pub(crate) fn new(kind: ErrorKind, start: usize, end: usize, text_len: usize) -> Self {
        Self {
            kind,
            start,
            end,
            text_len,
            endpoint: None,
        }
    }

    pub(crate) fn not_on_char_boundary(
        start: usize,
        end: usize,
        text_len: usize,
        endpoint: Endpoint,
    ) -> Self {
        Self {
            endpoint: Some(endpoint),
            ..Self::new(ErrorKind::NotOnCharBoundary, start, end, text_len)
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::InvalidRange => {
                write!(f, "invalid range {}..{}: start > end", self.start, self.end)
            }
            ErrorKind::InvalidBounds => write!(
                f,
                "range {}..{} out of bounds for text of len {}",
                self.start, self.end, self.text_len
            ),
            ErrorKind::NotOnCharBoundary => {
                let (which, index) = match self.endpoint {
                    Some(Endpoint::Start) | None => ("start", self.start),
                    Some(Endpoint::End) => ("end", self.end),
                };
                write!(
                    f,
                    "range {}..{}: {which} index {index} is inside a UTF-8 character",
                    self.start, self.end
                )
            }
        }
    }
}

impl core::error::Error for Error {}

/// The category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The range had `start > end`.
    InvalidRange,

    /// The range extended past the end of the text.
    InvalidBounds,

    /// An endpoint was not on a UTF-8 character boundary.
    NotOnCharBoundary,
}

/// Which end of a range failed validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The `start` of the range.
    Start,

    /// The `end` of the range.
    End,
}
