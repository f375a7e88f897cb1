// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Program-level parsing for setlang.
//!
//! This module contains the parsing methods for everything above the
//! expression grammar:
//!
//! - The program frame (`Начало` ... `Конец`)
//! - Set declarations (`Первое`, `Второе`)
//! - The summand (`... Конец слагаемого`)

use crate::ast::{Identifier, IntegerLiteral, Program, SetSingle, Sets, Summand};
use crate::source_analysis::{Span, Token, TokenKind};

use super::{CompileError, ErrorCategory, Parser};

/// Diagnostics for one comma-separated list.
struct ListMessages {
    /// The first element has the wrong kind.
    first: &'static str,
    /// Two elements are not separated by a comma.
    separator: &'static str,
    /// The token after a comma has the wrong kind.
    element: &'static str,
}

const IDENTIFIER_SET: ListMessages = ListMessages {
    first: "'Первое' must be followed by variables separated by commas",
    separator: "variables must be separated by commas",
    element: "a variable must follow the comma",
};

const INTEGER_SET: ListMessages = ListMessages {
    first: "'Второе' must be followed by integers separated by commas",
    separator: "integers must be separated by commas",
    element: "an integer must follow the comma",
};

const SUMMAND: ListMessages = ListMessages {
    first: "the summand must consist of integers separated by commas",
    separator: "integers must be separated by commas",
    element: "an integer must follow the comma",
};

const SUMMAND_TERMINATOR: &str = "the summand must end with 'Конец слагаемого'";

impl Parser {
    // ========================================================================
    // Program
    // ========================================================================

    /// Parses a complete program.
    pub(super) fn parse_program(&mut self) -> Result<Program, CompileError> {
        let start = self.expect(
            "the program must begin with 'Начало'",
            ErrorCategory::Structural,
            &[TokenKind::Start],
        )?;

        let sets = self.parse_sets()?;

        self.skip_new_lines();
        if !self.type_matches(0, &[TokenKind::Integer]) {
            return Err(self.error_at_lookahead(
                "the program must contain a summand",
                ErrorCategory::Structural,
            ));
        }
        let summand = self.parse_summand()?;

        self.skip_new_lines();
        if !self.type_matches(0, &[TokenKind::Integer, TokenKind::Identifier]) {
            return Err(self.error_at_lookahead(
                "the program must contain at least one operation",
                ErrorCategory::Structural,
            ));
        }

        let mut operations = Vec::new();
        loop {
            self.expect_new_statement("an operation must start on a new line")?;
            operations.push(self.parse_operation()?);
            if self.type_matches_statement(&[TokenKind::End, TokenKind::Eof]) {
                break;
            }
        }

        self.expect_new_statement("'Конец' must be on a new line")?;
        let end = self.expect(
            "the program must end with 'Конец'",
            ErrorCategory::Structural,
            &[TokenKind::End],
        )?;
        self.expect(
            "nothing may follow 'Конец'",
            ErrorCategory::Structural,
            &[TokenKind::Eof],
        )?;

        Ok(Program {
            sets,
            summand,
            operations,
            span: start.span().merge(end.span()),
        })
    }

    // ========================================================================
    // Sets
    // ========================================================================

    /// Parses one or more set declarations.
    fn parse_sets(&mut self) -> Result<Sets, CompileError> {
        self.skip_new_lines();
        if !self.type_matches(0, &[TokenKind::First, TokenKind::Second]) {
            return Err(self.error_at_lookahead(
                "the program must contain at least one set",
                ErrorCategory::Structural,
            ));
        }

        let mut body = Vec::new();
        loop {
            self.expect_new_statement("a set must start on a new line")?;
            body.push(self.parse_set()?);
            if !self.type_matches_statement(&[TokenKind::First, TokenKind::Second]) {
                break;
            }
        }

        let span = body
            .iter()
            .map(SetSingle::span)
            .reduce(Span::merge)
            .unwrap_or_default();
        Ok(Sets { body, span })
    }

    /// Parses a single `Первое` or `Второе` line, including its line break.
    fn parse_set(&mut self) -> Result<SetSingle, CompileError> {
        let keyword = self.expect(
            "a set must begin with 'Первое' or 'Второе'",
            ErrorCategory::Structural,
            &[TokenKind::First, TokenKind::Second],
        )?;

        let set = if keyword.is(TokenKind::First) {
            let identifiers = self
                .parse_comma_list(TokenKind::Identifier, TokenKind::NewLine, &IDENTIFIER_SET)?
                .into_iter()
                .map(Identifier::new)
                .collect();
            SetSingle::First {
                keyword,
                identifiers,
            }
        } else {
            let integers = self
                .parse_comma_list(TokenKind::Integer, TokenKind::NewLine, &INTEGER_SET)?
                .iter()
                .map(|token| self.integer_literal(token))
                .collect::<Result<_, _>>()?;
            SetSingle::Second { keyword, integers }
        };

        self.expect(
            "a set must end with a line break",
            ErrorCategory::MalformedList,
            &[TokenKind::NewLine],
        )?;
        Ok(set)
    }

    // ========================================================================
    // Summand
    // ========================================================================

    /// Parses the summand list and its `Конец слагаемого` terminator.
    fn parse_summand(&mut self) -> Result<Summand, CompileError> {
        let tokens = self.parse_comma_list(TokenKind::Integer, TokenKind::End, &SUMMAND)?;
        let body = tokens
            .iter()
            .map(|token| self.integer_literal(token))
            .collect::<Result<Vec<_>, _>>()?;

        self.expect(
            SUMMAND_TERMINATOR,
            ErrorCategory::MalformedList,
            &[TokenKind::End],
        )?;
        let closing = self.expect(
            SUMMAND_TERMINATOR,
            ErrorCategory::MalformedList,
            &[TokenKind::EndOfSummand],
        )?;

        let start = tokens
            .first()
            .map_or_else(|| closing.span(), Token::span);
        Ok(Summand {
            body,
            span: start.merge(closing.span()),
        })
    }

    // ========================================================================
    // Shared helpers
    // ========================================================================

    /// Parses `element ("," element)*` up to (not including) `terminator`.
    ///
    /// At least one element is required.
    fn parse_comma_list(
        &mut self,
        element: TokenKind,
        terminator: TokenKind,
        messages: &ListMessages,
    ) -> Result<Vec<Token>, CompileError> {
        let mut items = vec![self.expect(messages.first, ErrorCategory::MalformedList, &[element])?];

        while !self.type_matches(0, &[terminator]) {
            self.expect(
                messages.separator,
                ErrorCategory::MalformedList,
                &[TokenKind::Comma],
            )?;
            items.push(self.expect(messages.element, ErrorCategory::MalformedList, &[element])?);
        }

        Ok(items)
    }

    /// Builds an integer literal node from an `Integer` token.
    ///
    /// The digits are read in base 10.
    pub(super) fn integer_literal(&self, token: &Token) -> Result<IntegerLiteral, CompileError> {
        let value = token.value().parse::<i64>().map_err(|_| {
            self.error(
                format!("integer literal '{}' is too large", token.value()),
                ErrorCategory::Lexical,
                token.span(),
            )
        })?;
        Ok(IntegerLiteral {
            value,
            span: token.span(),
        })
    }
}
