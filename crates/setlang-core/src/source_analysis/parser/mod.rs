// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Recursive descent parser for setlang source code.
//!
//! This parser builds a [`Program`] from a stream of tokens in one pass,
//! with bounded lookahead and no backtracking.
//!
//! # Design Philosophy
//!
//! - **Fail fast** - The first grammar violation ends parsing
//! - **One method per grammar level** - Program, sets, summand, operation,
//!   then the expression precedence chain
//! - **Point-accurate diagnostics** - An error caused by a line break points
//!   at the end of the content before it, not at the invisible break
//!
//! # Grammar
//!
//! ```text
//! program    = "Начало" sets summand operation+ "Конец" EOF
//! sets       = set+
//! set        = "Первое" ident ("," ident)* NL
//!            | "Второе" int ("," int)* NL
//! summand    = int ("," int)* "Конец" "слагаемого"
//! operation  = [int ":"] ident "=" additive NL
//! additive   = ["-"] multiplicative (("+" | "-") multiplicative)*
//! multiplicative = logic (("*" | "/") logic)*
//! logic      = negation (("&&" | "||") negation)*
//! negation   = ["!" | "НЕ"] functions
//! functions  = function* primitive
//! primitive  = ident | int
//! ```
//!
//! Every statement (set, operation, closing `Конец`) must be preceded by at
//! least one line break.
//!
//! # Usage
//!
//! ```
//! use setlang_core::source_analysis::{lex_with_eof, parse};
//!
//! let tokens = lex_with_eof("Начало\nПервое а\n1 Конец слагаемого\nа = 1\nКонец").unwrap();
//! let program = parse(tokens).unwrap();
//!
//! assert_eq!(program.operations.len(), 1);
//! ```

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use std::fmt;

use ecow::EcoString;
use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;
use tracing::trace;

use crate::ast::Program;
use crate::source_analysis::{LexError, Span, Token, TokenKind};

// Submodules with additional impl blocks for Parser
mod declarations;
mod expressions;


/// Parse a sequence of tokens into a program.
///
/// The token vector must end with the EOF token produced by
/// [`lex_with_eof`](crate::source_analysis::lex_with_eof).
///
/// # Errors
///
/// Returns the first [`CompileError`] encountered; no partial tree is built.
pub fn parse(tokens: Vec<Token>) -> Result<Program, CompileError> {
    Parser::new(tokens).parse_program()
}

/// The class of grammar rule a [`CompileError`] violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCategory {
    /// A character or literal the lexer could not accept.
    Lexical,
    /// A missing or misplaced keyword or section.
    Structural,
    /// A list missing a comma or its terminator.
    MalformedList,
    /// An expression the precedence chain could not consume.
    Expression,
    /// A statement that does not start on a new line.
    StatementBoundary,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lexical => "lexical error",
            Self::Structural => "structural error",
            Self::MalformedList => "malformed list",
            Self::Expression => "expression error",
            Self::StatementBoundary => "statement boundary error",
        })
    }
}

/// A compile error with the source location it points at.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(setlang::compile))]
pub struct CompileError {
    /// The error message.
    pub message: EcoString,
    /// Which class of rule was violated.
    pub category: ErrorCategory,
    /// The source location.
    #[label("{category}")]
    pub span: Span,
}

impl CompileError {
    /// Creates a new compile error.
    #[must_use]
    pub fn new(message: impl Into<EcoString>, category: ErrorCategory, span: Span) -> Self {
        Self {
            message: message.into(),
            category,
            span,
        }
    }
}

impl From<LexError> for CompileError {
    fn from(error: LexError) -> Self {
        Self::new(error.kind.to_string(), ErrorCategory::Lexical, error.span)
    }
}

/// The parser state.
///
/// Tokens are never removed: `current` advances over an immutable vector.
pub(super) struct Parser {
    /// The tokens being parsed.
    tokens: Vec<Token>,
    /// Index of the next token to consume.
    current: usize,
    /// Index of the most recently consumed token.
    last_consumed: Option<usize>,
}

impl Parser {
    /// Creates a new parser for the given tokens.
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current: 0,
            last_consumed: None,
        }
    }

    // ========================================================================
    // Token Management
    // ========================================================================

    /// Peeks `offset` tokens ahead without consuming (0 is the next token).
    pub(super) fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.current + offset)
    }

    /// Returns the most recently consumed token.
    pub(super) fn last_consumed(&self) -> Option<&Token> {
        self.last_consumed.and_then(|index| self.tokens.get(index))
    }

    /// Returns `true` if the token at `offset` exists and has one of `kinds`.
    pub(super) fn type_matches(&self, offset: usize, kinds: &[TokenKind]) -> bool {
        self.peek(offset)
            .is_some_and(|token| kinds.contains(&token.kind()))
    }

    /// Skips line breaks, then checks the next token against `kinds`.
    pub(super) fn type_matches_statement(&mut self, kinds: &[TokenKind]) -> bool {
        self.skip_new_lines();
        self.type_matches(0, kinds)
    }

    /// Advances past the next token, if there is one.
    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.current)?.clone();
        self.last_consumed = Some(self.current);
        self.current += 1;
        Some(token)
    }

    /// Consumes and returns the next token.
    ///
    /// A well-formed token stream ends in EOF, which no rule consumes past,
    /// so running out of tokens is reported as a structural error.
    pub(super) fn consume(&mut self) -> Result<Token, CompileError> {
        match self.bump() {
            Some(token) => Ok(token),
            None => Err(self.error(
                "unexpected end of input",
                ErrorCategory::Structural,
                self.end_span(),
            )),
        }
    }

    /// Consumes the next token, failing with `message` unless it has one of
    /// `kinds`.
    ///
    /// When the offending token is a line break the error points at the
    /// previously consumed token instead.
    pub(super) fn expect(
        &mut self,
        message: &str,
        category: ErrorCategory,
        kinds: &[TokenKind],
    ) -> Result<Token, CompileError> {
        let previous = self.last_consumed().map(Token::span);
        let token = self.consume()?;
        if kinds.contains(&token.kind()) {
            return Ok(token);
        }

        let span = if token.is(TokenKind::NewLine) {
            previous.unwrap_or_else(|| token.span())
        } else {
            token.span()
        };
        Err(self.error(message, category, span))
    }

    /// Requires a statement boundary: skips line breaks, then fails unless
    /// the last consumed token was a line break.
    pub(super) fn expect_new_statement(&mut self, message: &str) -> Result<(), CompileError> {
        self.skip_new_lines();
        match self.last_consumed() {
            Some(token) if !token.is(TokenKind::NewLine) => Err(self.error_at_lookahead(
                message,
                ErrorCategory::StatementBoundary,
            )),
            _ => Ok(()),
        }
    }

    /// Consumes consecutive line breaks.
    pub(super) fn skip_new_lines(&mut self) {
        while self.type_matches(0, &[TokenKind::NewLine]) {
            self.bump();
        }
    }

    // ========================================================================
    // Error Construction
    // ========================================================================

    /// Builds an error at `span`.
    pub(super) fn error(
        &self,
        message: impl Into<EcoString>,
        category: ErrorCategory,
        span: Span,
    ) -> CompileError {
        let error = CompileError::new(message, category, span);
        trace!(
            message = %error.message,
            %category,
            start = span.start(),
            end = span.end(),
            "parse failed"
        );
        error
    }

    /// Builds an error at the next token.
    pub(super) fn error_at_lookahead(
        &self,
        message: impl Into<EcoString>,
        category: ErrorCategory,
    ) -> CompileError {
        let span = self.peek(0).map_or_else(|| self.end_span(), Token::span);
        self.error(message, category, span)
    }

    /// The span used when no token is left to point at.
    fn end_span(&self) -> Span {
        self.tokens.last().map(Token::span).unwrap_or_default()
    }
}
