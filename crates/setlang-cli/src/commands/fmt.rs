// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `setlang fmt`: rewrite source files in canonical layout.
//!
//! `setlang fmt <path>...` compiles each `.mnz` file, unparses the program and
//! writes the canonical text back in place. Files that are already formatted
//! are left unchanged.
//!
//! With `--check` no files are modified: a unified diff is printed for every
//! file that would change, and the command exits non-zero if any file would
//! change or could not be compiled.

use camino::{Utf8Path, Utf8PathBuf};
use miette::{Context, IntoDiagnostic, Result};
use setlang_core::compile;
use setlang_core::unparse::unparse_program;
use similar::TextDiff;
use tracing::{debug, instrument, warn};

use crate::sources::{collect_source_files, read_source};

/// Format (or check formatting of) the given paths.
///
/// Files that fail to compile are skipped with a warning.
#[instrument(skip_all)]
pub fn run_fmt(paths: &[Utf8PathBuf], check_only: bool) -> Result<()> {
    let source_files = collect_source_files(paths)?;

    let mut changed_files: Vec<&Utf8Path> = Vec::new();
    let mut skipped_files: Vec<&Utf8Path> = Vec::new();

    for file in &source_files {
        let original = read_source(file)?;

        let program = match compile(&original) {
            Ok(program) => program,
            Err(error) => {
                warn!(%file, %error, "skipping file with compile errors");
                eprintln!("warning: skipping '{file}' ({error})");
                skipped_files.push(file);
                continue;
            }
        };

        let formatted = unparse_program(&program);
        if formatted == original {
            debug!(%file, "already formatted");
            continue;
        }

        changed_files.push(file);

        if check_only {
            print_unified_diff(file.as_str(), &original, &formatted);
        } else {
            std::fs::write(file, &formatted)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to write '{file}'"))?;
        }
    }

    if check_only {
        let mut parts: Vec<String> = Vec::new();
        if !changed_files.is_empty() {
            let count = changed_files.len();
            let plural = if count == 1 { "" } else { "s" };
            parts.push(format!("{count} file{plural} would be reformatted"));
        }
        if !skipped_files.is_empty() {
            let count = skipped_files.len();
            let plural = if count == 1 { "" } else { "s" };
            parts.push(format!(
                "{count} file{plural} could not be checked (compile errors)"
            ));
        }
        if !parts.is_empty() {
            miette::bail!("{}", parts.join("; "));
        }
    }

    Ok(())
}

/// Print a unified diff between `original` and `formatted` for the given file
/// path. Output goes to stdout so it can be captured and piped.
fn print_unified_diff(path: &str, original: &str, formatted: &str) {
    let diff = TextDiff::from_lines(original, formatted);
    print!(
        "{}",
        diff.unified_diff()
            .header(&format!("a/{path}"), &format!("b/{path}"))
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Write `content` to a temp `.mnz` file and return (dir, path).
    fn write_temp(content: &str) -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("test.mnz")).expect("utf8 path");
        fs::write(&path, content).expect("write temp file");
        (dir, path)
    }

    const UNFORMATTED: &str = "Начало\nПервое а,б\n\n1,2 Конец слагаемого\n7:а=- б+1\nКонец";
    const FORMATTED: &str = "Начало\nПервое а, б\n1, 2 Конец слагаемого\n7: а = - б + 1\nКонец";

    #[test]
    fn fmt_rewrites_file() {
        let (_dir, path) = write_temp(UNFORMATTED);
        run_fmt(&[path.clone()], false).expect("fmt");
        assert_eq!(fs::read_to_string(&path).unwrap(), FORMATTED);
    }

    #[test]
    fn fmt_idempotent() {
        let (_dir, path) = write_temp(UNFORMATTED);
        run_fmt(&[path.clone()], false).expect("fmt pass 1");
        let pass1 = fs::read_to_string(&path).unwrap();
        run_fmt(&[path.clone()], false).expect("fmt pass 2");
        let pass2 = fs::read_to_string(&path).unwrap();
        assert_eq!(pass1, pass2, "unparser output must be idempotent");
    }

    #[test]
    fn fmt_check_already_formatted_exits_zero() {
        let (_dir, path) = write_temp(FORMATTED);
        assert!(run_fmt(&[path], true).is_ok());
    }

    #[test]
    fn fmt_check_does_not_modify() {
        let (_dir, path) = write_temp(UNFORMATTED);
        let err = run_fmt(&[path.clone()], true).unwrap_err();
        assert_eq!(err.to_string(), "1 file would be reformatted");
        assert_eq!(fs::read_to_string(&path).unwrap(), UNFORMATTED);
    }

    #[test]
    fn fmt_skips_broken_file() {
        let (_dir, path) = write_temp("Начало\nПервое а\n");
        run_fmt(&[path.clone()], false).expect("broken files are skipped");
        assert_eq!(fs::read_to_string(&path).unwrap(), "Начало\nПервое а\n");

        let err = run_fmt(&[path], true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "1 file could not be checked (compile errors)"
        );
    }
}
