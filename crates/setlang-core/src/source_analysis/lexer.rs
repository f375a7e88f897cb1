// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for setlang source code.
//!
//! This module converts source text into a stream of [`Token`]s, using the
//! [`classifier`](super::classifier) for every decision about which
//! characters belong together.
//!
//! # Design Principles
//!
//! - **Fail fast**: the first unclassifiable character ends lexing with a
//!   [`LexError`] pointing at it
//! - **Line breaks are tokens**: statements are separated by `NewLine`
//! - **Precise spans**: every token carries its exact byte range
//!
//! # Example
//!
//! ```
//! use setlang_core::source_analysis::{Lexer, TokenKind};
//!
//! let tokens: Vec<_> = Lexer::new("а = 1").collect::<Result<_, _>>().unwrap();
//! assert_eq!(tokens.len(), 3); // а, =, 1 (EOF excluded from iterator)
//! assert_eq!(tokens[1].kind(), TokenKind::Equals);
//! ```

use std::iter::Peekable;
use std::str::CharIndices;

use super::classifier::{
    is_additive_operator, is_alphabetic, is_alphanumeric, is_logic_character, is_logic_operator,
    is_multiplicative_operator, is_negation, is_numeric, is_skippable, reserved_keyword,
};
use super::{LexError, Span, Token, TokenKind};

/// A lexer that tokenizes setlang source code.
///
/// Implements [`Iterator`] over `Result<Token, LexError>`. After the first
/// error the iterator is exhausted.
pub struct Lexer<'src> {
    /// The source text being lexed.
    source: &'src str,
    /// Character iterator with byte positions.
    chars: Peekable<CharIndices<'src>>,
    /// Current byte position in source.
    position: usize,
    /// Whether skippable whitespace was seen since the last token.
    space_pending: bool,
    /// Set once an error has been returned.
    failed: bool,
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("position", &self.position)
            .field("remaining", &self.source.get(self.position..).unwrap_or(""))
            .finish()
    }
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            position: 0,
            space_pending: false,
            failed: false,
        }
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Consumes the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.position = pos + c.len_utf8();
        Some(c)
    }

    /// Consumes characters while the predicate is true.
    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// Returns the current byte position.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "source files over 4GB are not supported"
    )]
    fn current_position(&self) -> u32 {
        self.position as u32
    }

    /// Creates a span from start to current position.
    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.current_position())
    }

    /// Extracts source text for a span.
    fn text_for(&self, span: Span) -> &'src str {
        &self.source[span.as_range()]
    }

    /// Returns how many characters of skippable text start at the cursor.
    ///
    /// The two-character `/t` sequence is tried before single characters so
    /// that it is never read as a division sign.
    fn skippable_width(&self) -> usize {
        let rest = &self.source[self.position..];
        if rest.get(..2).is_some_and(is_skippable) {
            return 2;
        }
        match rest.chars().next() {
            Some(c) if is_skippable(&rest[..c.len_utf8()]) => 1,
            _ => 0,
        }
    }

    /// Discards skippable text, remembering that some was seen.
    fn skip_skippables(&mut self) {
        loop {
            let width = self.skippable_width();
            if width == 0 {
                break;
            }
            for _ in 0..width {
                self.advance();
            }
            self.space_pending = true;
        }
    }

    /// Returns the end-of-input token for the current position.
    ///
    /// Only meaningful once the iterator is exhausted.
    #[must_use]
    pub fn eof_token(&self) -> Token {
        Token::new(TokenKind::Eof, "", Span::point(self.current_position()))
            .with_space_before(self.space_pending)
    }

    /// Lexes the next token, or returns `None` at end of input.
    fn lex_token(&mut self) -> Option<Result<Token, LexError>> {
        self.skip_skippables();

        let start = self.current_position();
        let c = self.peek_char()?;

        let token = self.lex_token_kind(c, start).map(|kind| {
            let span = self.span_from(start);
            Token::new(kind, self.text_for(span), span).with_space_before(self.space_pending)
        });
        self.space_pending = false;
        Some(token)
    }

    /// Lexes a token kind based on the first character.
    fn lex_token_kind(&mut self, c: char, start: u32) -> Result<TokenKind, LexError> {
        if is_alphabetic(c) {
            return Ok(self.lex_word());
        }
        if is_numeric(c) {
            self.advance_while(is_numeric);
            return Ok(TokenKind::Integer);
        }
        if is_logic_character(c) {
            return self.lex_logic_operator(start);
        }

        self.advance();
        let text = self.text_for(self.span_from(start));
        match c {
            '\n' => Ok(TokenKind::NewLine),
            ':' => Ok(TokenKind::Colon),
            '=' => Ok(TokenKind::Equals),
            '.' => Ok(TokenKind::Dot),
            ',' => Ok(TokenKind::Comma),
            _ if is_additive_operator(text) => Ok(TokenKind::AdditiveOperator),
            _ if is_multiplicative_operator(text) => Ok(TokenKind::MultiplicativeOperator),
            _ if is_negation(text) => Ok(TokenKind::Not),
            _ => Err(LexError::unexpected_char(c, self.span_from(start))),
        }
    }

    /// Lexes an identifier or reserved word.
    fn lex_word(&mut self) -> TokenKind {
        let start = self.current_position();
        self.advance_while(is_alphanumeric);
        let text = self.text_for(self.span_from(start));
        reserved_keyword(text).unwrap_or(TokenKind::Identifier)
    }

    /// Lexes a run of `&`/`|` characters, which must form `&&` or `||`.
    fn lex_logic_operator(&mut self, start: u32) -> Result<TokenKind, LexError> {
        self.advance_while(is_logic_character);
        let span = self.span_from(start);
        let text = self.text_for(span);
        if is_logic_operator(text) {
            Ok(TokenKind::LogicOperator)
        } else {
            Err(LexError::unknown_operator(text, span))
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = self.lex_token()?;
        self.failed = result.is_err();
        Some(result)
    }
}

/// Tokenizes source text into a vector of tokens, without the trailing EOF.
///
/// # Errors
///
/// Returns the first [`LexError`] encountered.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).collect()
}

/// Tokenizes source text and appends the EOF token the parser requires.
///
/// # Errors
///
/// Returns the first [`LexError`] encountered.
///
/// # Examples
///
/// ```
/// use setlang_core::source_analysis::{TokenKind, lex_with_eof};
///
/// let tokens = lex_with_eof("Начало\n").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(kinds, [TokenKind::Start, TokenKind::NewLine, TokenKind::Eof]);
/// ```
pub fn lex_with_eof(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    for token in lexer.by_ref() {
        tokens.push(token?);
    }
    tokens.push(lexer.eof_token());
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::LexErrorKind;

    /// Helper to lex and extract just the token kinds.
    fn lex_kinds(source: &str) -> Vec<TokenKind> {
        lex(source)
            .expect("source should lex")
            .iter()
            .map(Token::kind)
            .collect()
    }

    fn lex_values(source: &str) -> Vec<String> {
        lex(source)
            .expect("source should lex")
            .iter()
            .map(|t| t.value().to_string())
            .collect()
    }

    #[test]
    fn lex_empty() {
        assert!(lex("").unwrap().is_empty());
        assert!(lex("   ").unwrap().is_empty());
        assert!(lex("/t\r ").unwrap().is_empty());
    }

    #[test]
    fn lex_keywords() {
        assert_eq!(
            lex_kinds("Начало Первое Второе Конец слагаемого"),
            vec![
                TokenKind::Start,
                TokenKind::First,
                TokenKind::Second,
                TokenKind::End,
                TokenKind::EndOfSummand,
            ]
        );
    }

    #[test]
    fn lex_functions() {
        assert_eq!(
            lex_kinds("Синус Косинус Тангенс Котангенс"),
            vec![TokenKind::Function; 4]
        );
    }

    #[test]
    fn lex_identifiers_with_octal_digits() {
        assert_eq!(lex_values("а бв Г17"), vec!["а", "бв", "Г17"]);
        assert_eq!(lex_kinds("а бв Г17"), vec![TokenKind::Identifier; 3]);
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(lex_kinds("начало"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn lex_integers() {
        assert_eq!(lex_values("0 17 7654"), vec!["0", "17", "7654"]);
        assert_eq!(lex_kinds("0 17 7654"), vec![TokenKind::Integer; 3]);
    }

    #[test]
    fn integer_then_identifier_split() {
        assert_eq!(
            lex_kinds("12аб"),
            vec![TokenKind::Integer, TokenKind::Identifier]
        );
    }

    #[test]
    fn lex_operators_and_punctuation() {
        assert_eq!(
            lex_kinds("+ - * / && || ! : = . ,"),
            vec![
                TokenKind::AdditiveOperator,
                TokenKind::AdditiveOperator,
                TokenKind::MultiplicativeOperator,
                TokenKind::MultiplicativeOperator,
                TokenKind::LogicOperator,
                TokenKind::LogicOperator,
                TokenKind::Not,
                TokenKind::Colon,
                TokenKind::Equals,
                TokenKind::Dot,
                TokenKind::Comma,
            ]
        );
    }

    #[test]
    fn lex_newlines_are_tokens() {
        assert_eq!(
            lex_kinds("а\n\nб"),
            vec![
                TokenKind::Identifier,
                TokenKind::NewLine,
                TokenKind::NewLine,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn carriage_return_is_skipped() {
        assert_eq!(
            lex_kinds("а\r\nб"),
            vec![TokenKind::Identifier, TokenKind::NewLine, TokenKind::Identifier]
        );
    }

    #[test]
    fn literal_tab_escape_is_skipped() {
        let tokens = lex("а/tб").unwrap();
        assert_eq!(tokens.len(), 2);
        assert!(tokens[1].space_before());
    }

    #[test]
    fn tab_character_is_rejected() {
        let err = lex("а\tб").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('\t'));
    }

    #[test]
    fn digit_eight_is_rejected_at_its_offset() {
        let err = lex("Второе 1,2,8").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('8'));
        assert_eq!(err.span, Span::new(17, 18));
    }

    #[test]
    fn digit_nine_inside_number_is_rejected() {
        let err = lex("19").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('9'));
        assert_eq!(err.span, Span::new(1, 2));
    }

    #[test]
    fn latin_letters_are_rejected() {
        let err = lex("x = 1").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('x'));
    }

    #[test]
    fn single_ampersand_is_unknown_operator() {
        let err = lex("а & б").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnknownOperator("&".into()));
        assert_eq!(err.span, Span::new(3, 4));
    }

    #[test]
    fn mixed_logic_run_is_unknown_operator() {
        let err = lex("а&|б").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnknownOperator("&|".into()));
    }

    #[test]
    fn iterator_stops_after_error() {
        let mut lexer = Lexer::new("а 9 б");
        assert!(lexer.next().unwrap().is_ok());
        assert!(lexer.next().unwrap().is_err());
        assert!(lexer.next().is_none());
    }

    #[test]
    fn lex_spans_are_byte_offsets() {
        let tokens = lex("Начало а").unwrap();
        assert_eq!(tokens[0].span(), Span::new(0, 12));
        assert_eq!(tokens[1].span(), Span::new(13, 15));
        assert!(!tokens[0].space_before());
        assert!(tokens[1].space_before());
    }

    #[test]
    fn eof_is_appended_at_end_of_source() {
        let tokens = lex_with_eof("а ").unwrap();
        let eof = tokens.last().unwrap();
        assert_eq!(eof.kind(), TokenKind::Eof);
        assert_eq!(eof.span(), Span::point(3));
        assert!(eof.space_before());
    }

    #[test]
    fn eof_only_for_empty_source() {
        let tokens = lex_with_eof("").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind(), TokenKind::Eof);
    }

    #[test]
    fn word_not_is_an_identifier() {
        assert_eq!(lex_kinds("НЕ а"), vec![TokenKind::Identifier; 2]);
    }
}
