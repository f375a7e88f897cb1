// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Character and lexeme classification for setlang.
//!
//! Every predicate here is a pure function over a fixed table. The lexer
//! groups characters with these predicates; nothing else in the crate decides
//! what counts as a letter, a digit or a reserved word.
//!
//! The alphabet is the 32-letter Cyrillic range `А..=Я` compared after
//! uppercasing, and digits are octal: `8` and `9` are not numerals here.

use super::TokenKind;

/// First letter of the alphabet (inclusive).
const FIRST_LETTER: char = 'А';
/// Last letter of the alphabet (inclusive).
const LAST_LETTER: char = 'Я';

/// First numeral (inclusive).
const FIRST_DIGIT: char = '0';
/// Last numeral (inclusive).
const LAST_DIGIT: char = '7';

/// Whitespace the lexer discards. `/t` is the two-character sequence as
/// written in source, not the tab control character.
const SKIPPABLES: [&str; 3] = [" ", "/t", "\r"];

/// The word form of unary negation.
pub const NOT_WORD: &str = "НЕ";

/// Returns `true` if `c` is a letter of the alphabet in either case.
///
/// ```
/// use setlang_core::source_analysis::classifier::is_alphabetic;
///
/// assert!(is_alphabetic('Ж'));
/// assert!(is_alphabetic('ж'));
/// assert!(!is_alphabetic('z'));
/// assert!(!is_alphabetic('Ё'));
/// ```
#[must_use]
pub fn is_alphabetic(c: char) -> bool {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => (FIRST_LETTER..=LAST_LETTER).contains(&u),
        _ => false,
    }
}

/// Returns `true` if `c` is an octal digit.
#[must_use]
pub fn is_numeric(c: char) -> bool {
    (FIRST_DIGIT..=LAST_DIGIT).contains(&c)
}

/// Returns `true` if `c` is a letter or an octal digit.
#[must_use]
pub fn is_alphanumeric(c: char) -> bool {
    is_numeric(c) || is_alphabetic(c)
}

/// Returns `true` if `s` is discarded between tokens.
#[must_use]
pub fn is_skippable(s: &str) -> bool {
    SKIPPABLES.contains(&s)
}

/// Returns `true` for the characters that combine into `&&` and `||`.
#[must_use]
pub fn is_logic_character(c: char) -> bool {
    matches!(c, '|' | '&')
}

/// Returns `true` for the binary logic operators.
///
/// Negation is not in this table; see [`is_negation`].
#[must_use]
pub fn is_logic_operator(s: &str) -> bool {
    matches!(s, "&&" | "||")
}

/// Returns `true` for the symbolic form of unary negation.
#[must_use]
pub fn is_negation(s: &str) -> bool {
    s == "!"
}

/// Returns `true` for `+` and `-`.
#[must_use]
pub fn is_additive_operator(s: &str) -> bool {
    matches!(s, "+" | "-")
}

/// Returns `true` for `*` and `/`.
#[must_use]
pub fn is_multiplicative_operator(s: &str) -> bool {
    matches!(s, "*" | "/")
}

/// Looks up a reserved word by its exact text.
///
/// ```
/// use setlang_core::source_analysis::{TokenKind, classifier::reserved_keyword};
///
/// assert_eq!(reserved_keyword("Начало"), Some(TokenKind::Start));
/// assert_eq!(reserved_keyword("начало"), None);
/// ```
#[must_use]
pub fn reserved_keyword(s: &str) -> Option<TokenKind> {
    match s {
        "Начало" => Some(TokenKind::Start),
        "Конец" => Some(TokenKind::End),
        "Первое" => Some(TokenKind::First),
        "Второе" => Some(TokenKind::Second),
        "слагаемого" => Some(TokenKind::EndOfSummand),
        "Синус" | "Косинус" | "Тангенс" | "Котангенс" => Some(TokenKind::Function),
        "&&" | "||" => Some(TokenKind::LogicOperator),
        _ => None,
    }
}

/// Returns `true` if `s` starts with a letter and contains only letters and
/// octal digits.
#[must_use]
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if is_alphabetic(first) => chars.all(is_alphanumeric),
        _ => false,
    }
}
