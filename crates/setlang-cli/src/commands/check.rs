// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `setlang check`: compile source files and report the first error in each.

use camino::Utf8PathBuf;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use setlang_core::compile;
use tracing::{debug, instrument};

use super::{OutputFormat, compile_report};
use crate::diagnostic::ErrorReport;
use crate::sources::{collect_source_files, read_source};

/// One line of `--format json` output.
#[derive(Debug, Serialize)]
struct CheckResult<'a> {
    path: &'a str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorReport<'a>>,
}

/// Checks every source file under `paths`.
///
/// Every file is checked even after a failure. The command fails if any
/// file did not compile.
#[instrument(skip_all)]
pub fn run_check(paths: &[Utf8PathBuf], format: OutputFormat) -> Result<()> {
    let files = collect_source_files(paths)?;
    let mut failed = 0usize;

    for file in &files {
        let source = read_source(file)?;
        let result = compile(&source);
        debug!(%file, ok = result.is_ok(), "checked");

        match format {
            OutputFormat::Text => match &result {
                Ok(program) => println!(
                    "{file}: ok ({} sets, {} operations)",
                    program.sets.body.len(),
                    program.operations.len()
                ),
                Err(error) => eprintln!("{:?}", compile_report(error, file.as_str(), &source)),
            },
            OutputFormat::Json => {
                let line = CheckResult {
                    path: file.as_str(),
                    ok: result.is_ok(),
                    error: result
                        .as_ref()
                        .err()
                        .map(|error| ErrorReport::new(error, &source)),
                };
                println!("{}", serde_json::to_string(&line).into_diagnostic()?);
            }
        }

        if result.is_err() {
            failed += 1;
        }
    }

    if failed > 0 {
        let plural = if failed == 1 { "" } else { "s" };
        miette::bail!("{failed} of {} file{plural} failed to compile", files.len());
    }
    Ok(())
}
