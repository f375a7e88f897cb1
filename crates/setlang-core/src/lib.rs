// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! setlang compiler front end.
//!
//! This crate contains the front half of the setlang toolchain:
//! - Lexical analysis (tokenization)
//! - Parsing (AST construction)
//! - Source reconstruction and canonical formatting
//!
//! setlang programs are written with Cyrillic keywords. A program declares
//! sets, lists the summand and then assigns expressions to variables:
//!
//! ```text
//! Начало
//! Первое а, б
//! Второе 1, 2, 3
//! 4, 5 Конец слагаемого
//! а = - б + Синус 1
//! 2: б = а && !б
//! Конец
//! ```
//!
//! Compilation stops at the first error, which carries a byte-offset
//! [`Span`](source_analysis::Span) suitable for [`miette`] rendering.

use tracing::{debug, instrument};

pub mod ast;
pub mod source_analysis;
pub mod unparse;

use ast::Program;
use source_analysis::{CompileError, lex_with_eof, parse};

/// Lexes and parses `source` into a [`Program`].
///
/// # Errors
///
/// Returns the first lexical or grammatical [`CompileError`].
///
/// # Examples
///
/// ```
/// let program = setlang_core::compile(
///     "Начало\nПервое а\n1 Конец слагаемого\nа = а + 1\nКонец",
/// ).unwrap();
/// assert_eq!(program.operations.len(), 1);
///
/// let err = setlang_core::compile("Начало\n").unwrap_err();
/// assert_eq!(err.category, setlang_core::source_analysis::ErrorCategory::Structural);
/// ```
#[instrument(skip_all, fields(len = source.len()))]
pub fn compile(source: &str) -> Result<Program, CompileError> {
    let tokens = lex_with_eof(source)?;
    debug!(tokens = tokens.len(), "lexed source");
    let program = parse(tokens)?;
    debug!(
        sets = program.sets.body.len(),
        summand = program.summand.body.len(),
        operations = program.operations.len(),
        "parsed program"
    );
    Ok(program)
}

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::ast::{Expression, Identifier, IntegerLiteral, Operation, Program, Statement};
    pub use crate::compile;
    pub use crate::source_analysis::{CompileError, ErrorCategory, Span, Token, TokenKind};
}
