// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for lexer and parser crash safety.
//!
//! Feeds arbitrary UTF-8 to the front end and checks that it returns a
//! program or a single error without panicking, and that any error span
//! lies inside the input.
//!
//! Seed the corpus in `fuzz/corpus/parse_arbitrary/` with `.mnz` programs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use setlang_core::source_analysis::{CompileError, lex_with_eof, parse};
use setlang_core::unparse::unparse_program;

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };

    let result = lex_with_eof(source)
        .map_err(CompileError::from)
        .and_then(parse);

    match result {
        Ok(program) => {
            // Canonical output of a valid program must itself be valid.
            let canonical = unparse_program(&program);
            let reparsed = lex_with_eof(&canonical)
                .map_err(CompileError::from)
                .and_then(parse);
            assert!(reparsed.is_ok(), "canonical output failed to parse: {canonical:?}");
        }
        Err(error) => {
            assert!(error.span.end() as usize <= source.len());
        }
    }
});
