// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Tokenizer and parser for setlang source code.
//!
//! # Lexical Analysis
//!
//! The [`Lexer`] converts source text into a stream of [`Token`]s. Each token
//! carries its source location via [`Span`]. Character categories (the
//! Cyrillic alphabet, octal digits, operators, reserved words) live in
//! [`classifier`].
//!
//! ```
//! use setlang_core::source_analysis::{TokenKind, lex};
//!
//! let tokens = lex("а + 1").unwrap();
//! assert_eq!(tokens.len(), 3); // а, +, 1
//! assert_eq!(tokens[1].kind(), TokenKind::AdditiveOperator);
//! ```
//!
//! # Parsing
//!
//! The [`parse`] function converts tokens into a [`Program`](crate::ast::Program).
//! It is a single-pass recursive descent parser with bounded lookahead and
//! no backtracking.
//!
//! # Error Handling
//!
//! Both stages fail fast. The lexer returns a [`LexError`] for the first
//! character it cannot classify; the parser returns a [`CompileError`] for
//! the first grammar violation. A `LexError` converts into a `CompileError`
//! of category [`ErrorCategory::Lexical`].

pub mod classifier;
mod error;
mod lexer;
mod parser;
mod span;
mod token;


pub use error::{LexError, LexErrorKind};
pub use lexer::{Lexer, lex, lex_with_eof};
pub use parser::{CompileError, ErrorCategory, parse};
pub use span::Span;
pub use token::{Token, TokenKind};
