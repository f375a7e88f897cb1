// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Source file discovery and loading.

use std::collections::HashSet;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use miette::{Context, IntoDiagnostic, Result};
use tracing::debug;

/// File extension for setlang source files.
pub const SOURCE_EXTENSION: &str = "mnz";

/// Expands the given files and directories into a deduplicated list of
/// source files, in argument order.
///
/// Files named explicitly must carry the `.mnz` extension; directories are
/// searched recursively.
pub fn collect_source_files(paths: &[Utf8PathBuf]) -> Result<Vec<Utf8PathBuf>> {
    let mut seen = HashSet::new();
    let mut source_files = Vec::new();

    for path in paths {
        if path.is_file() {
            if path.extension() != Some(SOURCE_EXTENSION) {
                miette::bail!("File '{path}' is not a .{SOURCE_EXTENSION} source file");
            }
            if seen.insert(path.clone()) {
                source_files.push(path.clone());
            }
        } else if path.is_dir() {
            let mut found = Vec::new();
            collect_recursive(path, &mut found)?;
            found.sort();
            for file in found {
                if seen.insert(file.clone()) {
                    source_files.push(file);
                }
            }
        } else {
            miette::bail!("Path '{path}' does not exist");
        }
    }

    if source_files.is_empty() {
        miette::bail!("No .{SOURCE_EXTENSION} source files found");
    }
    debug!(count = source_files.len(), "collected source files");
    Ok(source_files)
}

/// Recursively collect all source files from a directory tree.
///
/// Symlinks are skipped to avoid potential infinite recursion from circular links.
fn collect_recursive(dir: &Utf8Path, files: &mut Vec<Utf8PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read directory '{dir}'"))?
    {
        let entry = entry.into_diagnostic()?;
        let file_type = entry.file_type().into_diagnostic()?;
        if file_type.is_symlink() {
            continue;
        }
        let entry_path = Utf8PathBuf::from_path_buf(entry.path())
            .map_err(|_| miette::miette!("Non-UTF-8 path"))?;

        if file_type.is_dir() {
            collect_recursive(&entry_path, files)?;
        } else if file_type.is_file() && entry_path.extension() == Some(SOURCE_EXTENSION) {
            files.push(entry_path);
        }
    }
    Ok(())
}

/// Reads a source file to a string.
pub fn read_source(path: &Utf8Path) -> Result<String> {
    fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read '{path}'"))
}
