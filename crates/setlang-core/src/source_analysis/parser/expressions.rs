// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Operation and expression parsing for setlang.
//!
//! Expression parsing is a fixed precedence chain, one method per level,
//! each looping left-associatively over its operator class:
//!
//! | Level | Operators | Method |
//! |-------|-----------|--------|
//! | 1 | `+` `-` (and one leading unary `-`) | [`Parser::parse_additive`] |
//! | 2 | `*` `/` | [`Parser::parse_multiplicative`] |
//! | 3 | `&&` `\|\|` | [`Parser::parse_logic`] |
//! | 4 | `!` `НЕ` (unary, once) | [`Parser::parse_negation`] |
//! | 5 | function keywords (prefix, repeatable) | [`Parser::parse_functions`] |
//! | 6 | variable or integer | [`Parser::parse_primitive`] |

use crate::ast::{Expression, Identifier, Operation, TrigFunction};
use crate::source_analysis::classifier::NOT_WORD;
use crate::source_analysis::{Token, TokenKind};

use super::{CompileError, ErrorCategory, Parser};

/// Reported when an operator appears where an operand is required.
pub(super) const ADJACENT_OPERATORS: &str = "two operations cannot be adjacent";

/// Reported when a complete expression is followed by something other than a
/// line break.
pub(super) const EXPECTED_CONTINUATION: &str =
    "an expression must end at a line break or continue with an operator \
     ('+', '-', '*', '/', '&&', '||')";

impl Parser {
    // ========================================================================
    // Operations
    // ========================================================================

    /// Parses `[label ":"] variable "=" expression`, leaving the line break
    /// for the caller.
    pub(super) fn parse_operation(&mut self) -> Result<Operation, CompileError> {
        let head = self.expect(
            "an operation must begin with a variable or a label",
            ErrorCategory::Structural,
            &[TokenKind::Identifier, TokenKind::Integer],
        )?;

        let (tag, identifier) = if head.is(TokenKind::Integer) {
            self.expect(
                "a label must be followed by ':'",
                ErrorCategory::Structural,
                &[TokenKind::Colon],
            )?;
            let identifier = self.expect(
                "a label must be followed by the assigned variable",
                ErrorCategory::Structural,
                &[TokenKind::Identifier],
            )?;
            (head, identifier)
        } else {
            (head.clone(), head)
        };

        self.expect(
            "the assigned variable must be followed by '='",
            ErrorCategory::Structural,
            &[TokenKind::Equals],
        )?;

        let rhs = self.parse_additive()?;

        match self.peek(0).map(Token::kind) {
            Some(TokenKind::NewLine) => {}
            Some(TokenKind::Eof) | None => {
                return Err(self.error_at_lookahead(
                    "the program must end with 'Конец'",
                    ErrorCategory::Structural,
                ));
            }
            Some(_) => {
                return Err(self.error_at_lookahead(EXPECTED_CONTINUATION, ErrorCategory::Expression));
            }
        }

        Ok(Operation {
            tag,
            identifier,
            rhs,
        })
    }

    // ========================================================================
    // Expression Parsing
    // ========================================================================

    /// Parses additive expressions, with an optional leading unary minus on
    /// the first operand.
    pub(super) fn parse_additive(&mut self) -> Result<Expression, CompileError> {
        let negation = if self
            .peek(0)
            .is_some_and(|t| t.is(TokenKind::AdditiveOperator) && t.value() == "-")
        {
            Some(self.consume()?)
        } else {
            None
        };

        let mut lhs = self.parse_multiplicative()?;
        if let Some(operation) = negation {
            lhs = Expression::Unary {
                operation,
                inner: Box::new(lhs),
            };
        }

        while self.type_matches(0, &[TokenKind::AdditiveOperator]) {
            let operator = self.consume()?;
            let rhs = self.parse_multiplicative()?;
            lhs = Expression::Binary {
                lhs: Box::new(lhs),
                operator,
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    /// Parses `*` and `/` chains.
    pub(super) fn parse_multiplicative(&mut self) -> Result<Expression, CompileError> {
        let mut lhs = self.parse_logic()?;
        while self.type_matches(0, &[TokenKind::MultiplicativeOperator]) {
            let operator = self.consume()?;
            let rhs = self.parse_logic()?;
            lhs = Expression::Binary {
                lhs: Box::new(lhs),
                operator,
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    /// Parses `&&` and `||` chains.
    pub(super) fn parse_logic(&mut self) -> Result<Expression, CompileError> {
        let mut lhs = self.parse_negation()?;
        while self.type_matches(0, &[TokenKind::LogicOperator]) {
            let operator = self.consume()?;
            let rhs = self.parse_negation()?;
            lhs = Expression::Binary {
                lhs: Box::new(lhs),
                operator,
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    /// Parses an optional single `!` or `НЕ` before a function-level operand.
    pub(super) fn parse_negation(&mut self) -> Result<Expression, CompileError> {
        let negation = if self.peek(0).is_some_and(is_negation_token) {
            Some(self.consume()?)
        } else {
            None
        };

        let inner = self.parse_functions()?;
        Ok(match negation {
            Some(operation) => Expression::Unary {
                operation,
                inner: Box::new(inner),
            },
            None => inner,
        })
    }

    /// Parses any number of function keywords applied to a primitive.
    ///
    /// The first keyword written is the outermost call:
    /// `Синус Косинус а` is `Синус(Косинус(а))`.
    pub(super) fn parse_functions(&mut self) -> Result<Expression, CompileError> {
        let mut functions = Vec::new();
        while self.type_matches(0, &[TokenKind::Function]) {
            let func = self.consume()?;
            let function = TrigFunction::from_keyword(func.value()).ok_or_else(|| {
                self.error(
                    format!("unknown function '{}'", func.value()),
                    ErrorCategory::Expression,
                    func.span(),
                )
            })?;
            functions.push((func, function));
        }

        let mut inner = self.parse_primitive()?;
        while let Some((func, function)) = functions.pop() {
            inner = Expression::Function {
                func,
                function,
                inner: Box::new(inner),
            };
        }
        Ok(inner)
    }

    /// Parses a variable or an integer.
    pub(super) fn parse_primitive(&mut self) -> Result<Expression, CompileError> {
        if self.peek(0).is_some_and(|t| t.kind().is_binary_operator()) {
            return Err(self.error_at_lookahead(ADJACENT_OPERATORS, ErrorCategory::Expression));
        }

        let previous = self.last_consumed().map_or("", Token::value);
        let message = format!("expected a variable or an integer after '{previous}'");
        let token = self.expect(
            &message,
            ErrorCategory::Expression,
            &[TokenKind::Integer, TokenKind::Identifier],
        )?;

        if token.is(TokenKind::Identifier) {
            Ok(Expression::Identifier(Identifier::new(token)))
        } else {
            self.integer_literal(&token).map(Expression::IntegerLiteral)
        }
    }
}

/// Returns `true` for `!` and for the word `НЕ`.
fn is_negation_token(token: &Token) -> bool {
    token.is(TokenKind::Not) || (token.is(TokenKind::Identifier) && token.value() == NOT_WORD)
}
