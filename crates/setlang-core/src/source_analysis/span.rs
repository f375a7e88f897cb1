// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Source locations.
//!
//! Tokens carry a [`Span`] so that a [`CompileError`](super::CompileError)
//! can point at the exact characters that broke the grammar. Spans are never
//! consulted for meaning; the parser only copies them into diagnostics.

use std::ops::Range;

use serde::Serialize;

/// A half-open byte range `[start, end)` into the source text.
///
/// Offsets are bytes, not characters: Cyrillic letters occupy two bytes each,
/// so `Начало` spans twelve bytes.
///
/// # Examples
///
/// ```
/// use setlang_core::source_analysis::Span;
///
/// let span = Span::new(0, 12);
/// assert_eq!(span.start(), 0);
/// assert_eq!(span.end(), 12);
/// assert_eq!(span.len(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    start: u32,
    end: u32,
}

impl Span {
    /// Creates a span from start and end byte offsets.
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Creates an empty span at `offset`, used for the end-of-input marker.
    #[must_use]
    pub const fn point(offset: u32) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns the start byte offset.
    #[must_use]
    pub const fn start(self) -> u32 {
        self.start
    }

    /// Returns the end byte offset (exclusive).
    #[must_use]
    pub const fn end(self) -> u32 {
        self.end
    }

    /// Returns the length of the span in bytes.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    /// Returns true if the span covers no bytes.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Creates a span that covers both `self` and `other`.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        let start = if self.start < other.start {
            self.start
        } else {
            other.start
        };
        let end = if self.end > other.end {
            self.end
        } else {
            other.end
        };
        Self { start, end }
    }

    /// Converts to a `Range<usize>` for slicing the source text.
    #[must_use]
    pub const fn as_range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl From<Range<usize>> for Span {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "source files over 4GB are not supported"
    )]
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start as u32, range.end as u32)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.as_range()
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start as usize, span.len() as usize).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_accessors() {
        let span = Span::new(4, 16);
        assert_eq!(span.start(), 4);
        assert_eq!(span.end(), 16);
        assert_eq!(span.len(), 12);
        assert!(!span.is_empty());
    }

    #[test]
    fn point_span_is_empty() {
        let span = Span::point(7);
        assert!(span.is_empty());
        assert_eq!(span.start(), 7);
    }

    #[test]
    fn merge_is_order_independent() {
        let a = Span::new(2, 5);
        let b = Span::new(9, 14);
        assert_eq!(a.merge(b), Span::new(2, 14));
        assert_eq!(b.merge(a), Span::new(2, 14));
    }

    #[test]
    fn slices_cyrillic_source() {
        let source = "Начало\n";
        let span: Span = (0..12).into();
        assert_eq!(&source[span.as_range()], "Начало");
    }

    #[test]
    fn converts_to_miette_span() {
        let span: miette::SourceSpan = Span::new(3, 8).into();
        assert_eq!(span.offset(), 3);
        assert_eq!(span.len(), 5);
    }
}
