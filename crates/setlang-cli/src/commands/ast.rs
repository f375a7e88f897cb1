// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `setlang ast`: print the syntax tree of one source file as JSON.

use camino::Utf8Path;
use miette::{IntoDiagnostic, Result};
use setlang_core::compile;
use tracing::instrument;

use super::compile_report;
use crate::sources::read_source;

/// Compiles `path` and writes its [`Program`](setlang_core::ast::Program)
/// to stdout as pretty-printed JSON.
#[instrument(skip_all, fields(%path))]
pub fn run_ast(path: &Utf8Path) -> Result<()> {
    let source = read_source(path)?;
    let program = compile(&source).map_err(|error| compile_report(&error, path.as_str(), &source))?;
    println!("{}", serde_json::to_string_pretty(&program).into_diagnostic()?);
    Ok(())
}
