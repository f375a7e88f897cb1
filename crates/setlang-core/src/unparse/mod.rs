// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Source reconstruction: converts tokens or AST nodes back to source text.
//!
//! Two entry points with different guarantees:
//!
//! - [`reconstruct_source`] works on a token stream and keeps the original
//!   line structure, collapsing every run of skipped whitespace to one space.
//! - [`unparse_program`] works on a [`Program`] and emits canonical layout:
//!   one statement per line, `, ` between list elements and single spaces
//!   around binary operators. The closing `Конец` is the last byte, since
//!   the grammar accepts nothing after it. It backs the `setlang fmt` command.
//!
//! Both outputs lex back to the same token kinds and values they came from.

use std::fmt::Write as _;

use crate::ast::{Expression, Operation, Program, SetSingle, Summand};
use crate::source_analysis::{Token, TokenKind};

// --- Token reconstruction ---

/// Rebuilds source text from a token stream.
///
/// A token flagged with `space_before` gets a single space in front of it.
/// The EOF token contributes nothing.
///
/// ```
/// use setlang_core::source_analysis::lex_with_eof;
/// use setlang_core::unparse::reconstruct_source;
///
/// let tokens = lex_with_eof("а  =\r 1\nб = 2").unwrap();
/// assert_eq!(reconstruct_source(&tokens), "а = 1\nб = 2");
/// ```
#[must_use]
pub fn reconstruct_source(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        if token.is(TokenKind::Eof) {
            break;
        }
        if token.space_before() && !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token.value());
    }
    out
}

// --- Canonical layout ---

/// Unparses a [`Program`] to canonical source text.
///
/// ```
/// use setlang_core::unparse::unparse_program;
///
/// let program = setlang_core::compile(
///     "Начало\nПервое а,б\n1,2 Конец слагаемого\n\n7:а=а+1\nКонец",
/// ).unwrap();
/// assert_eq!(
///     unparse_program(&program),
///     "Начало\nПервое а, б\n1, 2 Конец слагаемого\n7: а = а + 1\nКонец",
/// );
/// ```
#[must_use]
pub fn unparse_program(program: &Program) -> String {
    let mut out = String::from("Начало\n");
    for set in &program.sets.body {
        unparse_set(set, &mut out);
        out.push('\n');
    }
    unparse_summand(&program.summand, &mut out);
    out.push('\n');
    for operation in &program.operations {
        unparse_operation(operation, &mut out);
        out.push('\n');
    }
    out.push_str("Конец");
    out
}

/// Unparses a single expression.
#[must_use]
pub fn unparse_expression(expr: &Expression) -> String {
    let mut out = String::new();
    write_expression(expr, &mut out);
    out
}

fn unparse_set(set: &SetSingle, out: &mut String) {
    out.push_str(set.keyword().value());
    out.push(' ');
    let elements: Vec<String> = match set {
        SetSingle::First { identifiers, .. } => {
            identifiers.iter().map(|i| i.name().to_string()).collect()
        }
        SetSingle::Second { integers, .. } => {
            integers.iter().map(|i| i.value.to_string()).collect()
        }
    };
    out.push_str(&elements.join(", "));
}

fn unparse_summand(summand: &Summand, out: &mut String) {
    let elements: Vec<String> = summand.body.iter().map(|i| i.value.to_string()).collect();
    out.push_str(&elements.join(", "));
    out.push_str(" Конец слагаемого");
}

fn unparse_operation(operation: &Operation, out: &mut String) {
    if operation.is_tagged() {
        let _ = write!(out, "{}: ", operation.tag.value());
    }
    let _ = write!(out, "{} = ", operation.identifier.value());
    write_expression(&operation.rhs, out);
}

fn write_expression(expr: &Expression, out: &mut String) {
    match expr {
        Expression::Identifier(identifier) => out.push_str(identifier.name()),
        Expression::IntegerLiteral(literal) => {
            let _ = write!(out, "{}", literal.value);
        }
        Expression::Unary { operation, inner } => {
            out.push_str(operation.value());
            // `!а` stays tight; `- а` and `НЕ а` need the space to lex apart.
            if !operation.is(TokenKind::Not) {
                out.push(' ');
            }
            write_expression(inner, out);
        }
        Expression::Binary { lhs, operator, rhs } => {
            write_expression(lhs, out);
            let _ = write!(out, " {} ", operator.value());
            write_expression(rhs, out);
        }
        Expression::Function { function, inner, .. } => {
            out.push_str(function.keyword());
            out.push(' ');
            write_expression(inner, out);
        }
    }
}
