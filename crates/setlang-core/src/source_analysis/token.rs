// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token types produced by the lexer.
//!
//! # Token Structure
//!
//! Each token consists of:
//! - A [`TokenKind`] naming its grammatical category
//! - The exact source text it was read from
//! - A [`Span`] pointing back into the source
//! - Whether skippable whitespace preceded it on the same line
//!
//! # Language Coverage
//!
//! ```text
//! Начало
//! Первое а, б
//! Второе 1, 2, 7
//! 1, 2 Конец слагаемого
//! 1: а = Синус б * 3 && !2
//! Конец
//! ```

use std::fmt;

use ecow::EcoString;
use serde::Serialize;

use super::Span;

/// The grammatical category of a token.
///
/// The set is closed: the keyword table, the operator tables and the lexer
/// map every accepted lexeme onto exactly one of these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // === Single-character tokens ===
    /// Label separator: `:`
    Colon,
    /// Assignment: `=`
    Equals,
    /// `+` or `-`
    AdditiveOperator,
    /// `*` or `/`
    MultiplicativeOperator,
    /// `.`
    Dot,
    /// List separator: `,`
    Comma,
    /// Unary negation: `!`
    Not,

    // === Reserved words ===
    /// `Начало`
    Start,
    /// `Конец`
    End,
    /// `Первое`
    First,
    /// `Второе`
    Second,
    /// `слагаемого`, the second half of `Конец слагаемого`
    EndOfSummand,
    /// `Синус`, `Косинус`, `Тангенс`, `Котангенс`
    Function,
    /// `&&` or `||`
    LogicOperator,

    // === Free-form tokens ===
    /// A variable name such as `а1`
    Identifier,
    /// An octal-digit literal such as `17`
    Integer,
    /// End of input
    Eof,
    /// A physical line break
    NewLine,
}

impl TokenKind {
    /// Returns `true` for the binary operator classes that may never appear
    /// where an operand is expected.
    #[must_use]
    pub const fn is_binary_operator(self) -> bool {
        matches!(
            self,
            Self::AdditiveOperator | Self::MultiplicativeOperator | Self::LogicOperator
        )
    }

    /// Returns `true` for reserved words.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::Start
                | Self::End
                | Self::First
                | Self::Second
                | Self::EndOfSummand
                | Self::Function
        )
    }

    /// A short user-facing description, used in diagnostics.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Colon => "':'",
            Self::Equals => "'='",
            Self::AdditiveOperator => "additive operator",
            Self::MultiplicativeOperator => "multiplicative operator",
            Self::Dot => "'.'",
            Self::Comma => "','",
            Self::Not => "'!'",
            Self::Start => "'Начало'",
            Self::End => "'Конец'",
            Self::First => "'Первое'",
            Self::Second => "'Второе'",
            Self::EndOfSummand => "'слагаемого'",
            Self::Function => "function",
            Self::LogicOperator => "logic operator",
            Self::Identifier => "variable",
            Self::Integer => "integer",
            Self::Eof => "end of input",
            Self::NewLine => "line break",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A lexeme with its category and source location.
///
/// Tokens are immutable once produced. AST nodes hold their own copies, so a
/// tree never borrows from the token vector it was parsed from.
///
/// # Examples
///
/// ```
/// use setlang_core::source_analysis::{Span, Token, TokenKind};
///
/// let token = Token::new(TokenKind::Identifier, "а1", Span::new(0, 3));
/// assert_eq!(token.kind(), TokenKind::Identifier);
/// assert_eq!(token.value(), "а1");
/// assert!(!token.space_before());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    kind: TokenKind,
    value: EcoString,
    span: Span,
    space_before: bool,
}

impl Token {
    /// Creates a token that directly follows the previous one.
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<EcoString>, span: Span) -> Self {
        Self {
            kind,
            value: value.into(),
            span,
            space_before: false,
        }
    }

    /// Marks the token as preceded by skippable whitespace.
    #[must_use]
    pub fn with_space_before(mut self, space_before: bool) -> Self {
        self.space_before = space_before;
        self
    }

    /// Returns the kind of this token.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the source text of this token.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the source location of this token.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns `true` if skippable whitespace preceded this token.
    #[must_use]
    pub fn space_before(&self) -> bool {
        self.space_before
    }

    /// Returns `true` if this token has kind `kind`.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::NewLine => f.write_str("\\n"),
            TokenKind::Eof => f.write_str("<eof>"),
            _ => f.write_str(&self.value),
        }
    }
}
