// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! setlang command-line interface.
//!
//! This is the main entry point for the `setlang` command.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use miette::Result;

mod commands;
mod diagnostic;
mod sources;

use commands::OutputFormat;

/// setlang: checker and formatter for the set-language teaching dialect
#[derive(Debug, Parser)]
#[command(name = "setlang")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by `RUST_LOG`)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check source files for errors
    Check {
        /// Source files or directories to check
        #[arg(default_value = ".")]
        paths: Vec<Utf8PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Print the syntax tree of a source file as JSON
    Ast {
        /// Source file to parse
        path: Utf8PathBuf,
    },

    /// Print the token stream of a source file
    Tokens {
        /// Source file to lex
        path: Utf8PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Rewrite source files in canonical layout
    Fmt {
        /// Source files or directories to format
        #[arg(default_value = ".")]
        paths: Vec<Utf8PathBuf>,

        /// Report files that would change without rewriting them
        #[arg(long)]
        check: bool,
    },
}

fn main() -> Result<()> {
    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Check { paths, format } => commands::check::run_check(&paths, format),
        Command::Ast { path } => commands::ast::run_ast(&path),
        Command::Tokens { path, format } => commands::tokens::run_tokens(&path, format),
        Command::Fmt { paths, check } => commands::fmt::run_fmt(&paths, check),
    };

    // Exit with appropriate code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}

/// Initialize logging to stderr.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug output for
/// setlang's own crates and the default shows warnings only.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let default = if verbose {
        "setlang=debug,setlang_core=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
