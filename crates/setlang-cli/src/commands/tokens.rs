// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `setlang tokens`: print the token stream of one source file.

use camino::Utf8Path;
use miette::{IntoDiagnostic, Result};
use setlang_core::source_analysis::{CompileError, Token, lex_with_eof};
use tracing::instrument;

use super::{OutputFormat, compile_report};
use crate::sources::read_source;

/// Lexes `path` and writes one token per line, or a JSON array.
#[instrument(skip_all, fields(%path))]
pub fn run_tokens(path: &Utf8Path, format: OutputFormat) -> Result<()> {
    let source = read_source(path)?;
    let tokens = lex_with_eof(&source).map_err(|error| {
        compile_report(&CompileError::from(error), path.as_str(), &source)
    })?;

    match format {
        OutputFormat::Text => {
            for token in &tokens {
                println!("{}", format_token(token));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&tokens).into_diagnostic()?);
        }
    }
    Ok(())
}

/// Renders a token as `start..end kind value`.
fn format_token(token: &Token) -> String {
    let span = token.span();
    format!("{}..{}\t{:?}\t{token}", span.start(), span.end(), token.kind())
}

#[cfg(test)]
mod tests {
    use super::*;
    use setlang_core::source_analysis::lex;

    #[test]
    fn format_token_shows_span_kind_and_value() {
        let tokens = lex("а + 1").unwrap();
        assert_eq!(format_token(&tokens[1]), "3..4\tAdditiveOperator\t+");
    }

    #[test]
    fn format_token_escapes_newline() {
        let tokens = lex("\n").unwrap();
        assert_eq!(format_token(&tokens[0]), "0..1\tNewLine\t\\n");
    }
}
