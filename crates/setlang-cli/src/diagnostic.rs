// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Error diagnostics using miette.
//!
//! Converts setlang-core compile errors into miette-formatted reports with
//! the offending source line, an arrow at the error location and the error
//! category as the label.

// Suppress unused_assignments for struct fields used by derive macros
#![allow(unused_assignments)]

use miette::{Diagnostic, SourceSpan};
use serde::Serialize;
use setlang_core::source_analysis::{CompileError, ErrorCategory};

/// A compile error bound to the file it came from.
#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic(code(setlang::compile))]
pub struct CompileDiagnostic {
    /// Which class of rule was violated
    pub category: ErrorCategory,
    /// Human-readable error message
    pub message: String,
    /// Source code for context
    #[source_code]
    pub src: miette::NamedSource<String>,
    /// Location of the error
    #[label("{category}")]
    pub span: SourceSpan,
}

impl CompileDiagnostic {
    /// Create a new diagnostic from a setlang-core compile error.
    pub fn from_compile_error(error: &CompileError, source_path: &str, source: &str) -> Self {
        Self {
            category: error.category,
            message: error.message.to_string(),
            src: miette::NamedSource::new(source_path, source.to_string()),
            span: error.span.into(),
        }
    }
}

/// Machine-readable form of a compile error for `--format json`.
#[derive(Debug, Serialize)]
pub struct ErrorReport<'a> {
    pub message: &'a str,
    pub category: ErrorCategory,
    pub start: u32,
    pub end: u32,
    /// 1-based line of `start`.
    pub line: usize,
    /// 1-based column of `start`, in characters.
    pub column: usize,
}

impl<'a> ErrorReport<'a> {
    pub fn new(error: &'a CompileError, source: &str) -> Self {
        let (line, column) = line_column(source, error.span.start() as usize);
        Self {
            message: &error.message,
            category: error.category,
            start: error.span.start(),
            end: error.span.end(),
            line,
            column,
        }
    }
}

/// Converts a byte offset into a 1-based line and character column.
fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let before = source.get(..offset).unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
