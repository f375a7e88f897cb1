// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! CLI command implementations.

use clap::ValueEnum;
use miette::Report;
use setlang_core::source_analysis::CompileError;

use crate::diagnostic::CompileDiagnostic;

pub mod ast;
pub mod check;
pub mod fmt;
pub mod tokens;

/// How a command writes its results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text, with miette reports for errors
    #[default]
    Text,
    /// JSON on stdout
    Json,
}

/// Wraps a compile error in a report that renders the offending source.
fn compile_report(error: &CompileError, path: &str, source: &str) -> Report {
    Report::new(CompileDiagnostic::from_compile_error(error, path, source))
}
