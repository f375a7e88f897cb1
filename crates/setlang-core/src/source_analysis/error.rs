// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical errors.
//!
//! The lexer stops at the first character it cannot classify. The error
//! carries the span of that character so the report can underline it.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

use super::Span;

/// A lexical error encountered during tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic(code(setlang::lex))]
pub struct LexError {
    /// The kind of lexical error.
    #[source]
    pub kind: LexErrorKind,
    /// The source location of the error.
    #[label("here")]
    pub span: Span,
}

impl LexError {
    /// Creates a new lexical error.
    #[must_use]
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates an "unexpected character" error.
    #[must_use]
    pub fn unexpected_char(c: char, span: Span) -> Self {
        Self::new(LexErrorKind::UnexpectedCharacter(c), span)
    }

    /// Creates an "unknown operator" error for a run of `&`/`|` characters.
    #[must_use]
    pub fn unknown_operator(text: &str, span: Span) -> Self {
        Self::new(LexErrorKind::UnknownOperator(text.to_string()), span)
    }
}

/// The kind of lexical error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A character outside the alphabet, the octal digits and the operator set.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    /// A run of logic characters other than `&&` or `||`.
    #[error("unknown operator '{0}', expected '&&' or '||'")]
    UnknownOperator(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_error_display() {
        let err = LexError::unexpected_char('8', Span::new(4, 5));
        assert_eq!(err.to_string(), "unexpected character '8'");

        let err = LexError::unknown_operator("&", Span::new(0, 1));
        assert_eq!(err.to_string(), "unknown operator '&', expected '&&' or '||'");
    }

    #[test]
    fn lex_error_span() {
        let err = LexError::new(LexErrorKind::UnknownOperator("|||".into()), Span::new(5, 8));
        assert_eq!(err.span.start(), 5);
        assert_eq!(err.span.end(), 8);
    }
}
