// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Abstract Syntax Tree (AST) definitions for setlang.
//!
//! The AST is the parser's only output. It is immutable once built, every
//! child is owned by its parent, and tokens stored in nodes are copies of the
//! lexer's tokens.
//!
//! # Program Shape
//!
//! A program is always exactly one [`Sets`] block, one [`Summand`] and one or
//! more [`Operation`]s, in that order. The struct fields of [`Program`]
//! enforce this; [`Program::body`] yields the same nodes as one ordered
//! sequence.
//!
//! # Expression Precedence
//!
//! From loosest to tightest:
//!
//! 1. `+ -` (a single leading `-` becomes a unary node on the first operand)
//! 2. `* /`
//! 3. `&& ||`
//! 4. `!` / `НЕ` (at most one per operand)
//! 5. `Синус Косинус Тангенс Котангенс` prefixes
//! 6. variables and integers
//!
//! # Example
//!
//! ```ignore
//! // Source: а = - б + 1
//! Operation {
//!     tag: Token(Identifier "а"),
//!     identifier: Token(Identifier "а"),
//!     rhs: Expression::Binary {
//!         lhs: Box::new(Expression::Unary {
//!             operation: Token(AdditiveOperator "-"),
//!             inner: Box::new(Expression::Identifier(..."б")),
//!         }),
//!         operator: Token(AdditiveOperator "+"),
//!         rhs: Box::new(Expression::IntegerLiteral(IntegerLiteral { value: 1, .. })),
//!     },
//! }
//! ```

use serde::Serialize;

use crate::source_analysis::{Span, Token, TokenKind};

/// Root of a parsed program.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    /// The set declarations.
    pub sets: Sets,
    /// The summand list.
    pub summand: Summand,
    /// The assignment statements, never empty.
    pub operations: Vec<Operation>,
    /// Source location from `Начало` to the closing `Конец`.
    pub span: Span,
}

impl Program {
    /// Yields the top-level statements in source order.
    ///
    /// ```
    /// use setlang_core::ast::Statement;
    ///
    /// let program = setlang_core::compile(
    ///     "Начало\nПервое а\n1 Конец слагаемого\nа = 1\nКонец",
    /// ).unwrap();
    /// let body: Vec<_> = program.body().collect();
    /// assert!(matches!(body[0], Statement::Sets(_)));
    /// assert!(matches!(body[1], Statement::Summand(_)));
    /// assert!(matches!(body[2], Statement::Operation(_)));
    /// ```
    pub fn body(&self) -> impl Iterator<Item = Statement<'_>> {
        [Statement::Sets(&self.sets), Statement::Summand(&self.summand)]
            .into_iter()
            .chain(self.operations.iter().map(Statement::Operation))
    }
}

/// A borrowed view of one top-level statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Statement<'a> {
    /// The set declarations block.
    Sets(&'a Sets),
    /// The summand list.
    Summand(&'a Summand),
    /// One assignment.
    Operation(&'a Operation),
}

/// One or more set declarations, one per line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sets {
    /// The declarations in source order, never empty.
    pub body: Vec<SetSingle>,
    /// Source location of the block.
    pub span: Span,
}

/// A single set declaration.
///
/// The introducing keyword decides the element type: `Первое` lists
/// variables, `Второе` lists integers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum SetSingle {
    /// `Первое а, б, в`
    First {
        /// The `Первое` keyword.
        keyword: Token,
        /// The declared variables, never empty.
        identifiers: Vec<Identifier>,
    },
    /// `Второе 1, 2, 3`
    Second {
        /// The `Второе` keyword.
        keyword: Token,
        /// The declared integers, never empty.
        integers: Vec<IntegerLiteral>,
    },
}

impl SetSingle {
    /// Returns the introducing keyword.
    #[must_use]
    pub fn keyword(&self) -> &Token {
        match self {
            Self::First { keyword, .. } | Self::Second { keyword, .. } => keyword,
        }
    }

    /// Returns the number of elements in the declaration.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::First { identifiers, .. } => identifiers.len(),
            Self::Second { integers, .. } => integers.len(),
        }
    }

    /// Returns `true` if the declaration has no elements.
    ///
    /// The parser never builds an empty declaration.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the source location from the keyword to the last element.
    #[must_use]
    pub fn span(&self) -> Span {
        let start = self.keyword().span();
        let last = match self {
            Self::First { identifiers, .. } => identifiers.last().map(Identifier::span),
            Self::Second { integers, .. } => integers.last().map(|i| i.span),
        };
        last.map_or(start, |end| start.merge(end))
    }
}

/// The comma-separated integer list closed by `Конец слагаемого`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summand {
    /// The integers, never empty.
    pub body: Vec<IntegerLiteral>,
    /// Source location through `слагаемого`.
    pub span: Span,
}

/// An assignment statement, optionally labelled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    /// The integer label, or the same token as `identifier` when unlabelled.
    pub tag: Token,
    /// The assignment target.
    pub identifier: Token,
    /// The assigned expression.
    pub rhs: Expression,
}

impl Operation {
    /// Returns `true` if the statement carries an integer label.
    #[must_use]
    pub fn is_tagged(&self) -> bool {
        self.tag.kind() == TokenKind::Integer
    }

    /// Returns the source location from the label (or target) to the end of
    /// the expression.
    #[must_use]
    pub fn span(&self) -> Span {
        self.tag.span().merge(self.rhs.span())
    }
}

/// A variable reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    /// The identifier token.
    pub symbol: Token,
}

impl Identifier {
    /// Creates an identifier node from its token.
    #[must_use]
    pub fn new(symbol: Token) -> Self {
        Self { symbol }
    }

    /// Returns the variable name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.symbol.value()
    }

    /// Returns the source location.
    #[must_use]
    pub fn span(&self) -> Span {
        self.symbol.span()
    }
}

/// An integer literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntegerLiteral {
    /// The value of the literal's digits read in base 10.
    pub value: i64,
    /// Source location.
    pub span: Span,
}

/// The trigonometric function named by a `Function` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TrigFunction {
    /// `Синус`
    Sine,
    /// `Косинус`
    Cosine,
    /// `Тангенс`
    Tangent,
    /// `Котангенс`
    Cotangent,
}

impl TrigFunction {
    /// Maps a function keyword to its function.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "Синус" => Some(Self::Sine),
            "Косинус" => Some(Self::Cosine),
            "Тангенс" => Some(Self::Tangent),
            "Котангенс" => Some(Self::Cotangent),
            _ => None,
        }
    }

    /// Returns the source keyword.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Sine => "Синус",
            Self::Cosine => "Косинус",
            Self::Tangent => "Тангенс",
            Self::Cotangent => "Котангенс",
        }
    }
}

/// A setlang expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Expression {
    /// A variable.
    Identifier(Identifier),

    /// An integer literal.
    IntegerLiteral(IntegerLiteral),

    /// A leading `-`, `!` or `НЕ` applied to one operand.
    Unary {
        /// The operator token.
        operation: Token,
        /// The operand.
        inner: Box<Expression>,
    },

    /// A left-associated binary operation.
    Binary {
        /// Left operand.
        lhs: Box<Expression>,
        /// The operator token.
        operator: Token,
        /// Right operand.
        rhs: Box<Expression>,
    },

    /// A trigonometric function applied to its operand.
    Function {
        /// The function keyword token.
        func: Token,
        /// The function the keyword names.
        function: TrigFunction,
        /// The argument.
        inner: Box<Expression>,
    },
}

impl Expression {
    /// Returns the source location covered by the expression.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Identifier(identifier) => identifier.span(),
            Self::IntegerLiteral(literal) => literal.span,
            Self::Unary { operation, inner } => operation.span().merge(inner.span()),
            Self::Binary { lhs, rhs, .. } => lhs.span().merge(rhs.span()),
            Self::Function { func, inner, .. } => func.span().merge(inner.span()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str, start: u32) -> Identifier {
        let len = u32::try_from(name.len()).unwrap();
        Identifier::new(Token::new(
            TokenKind::Identifier,
            name,
            Span::new(start, start + len),
        ))
    }

    #[test]
    fn trig_function_keywords_round_trip() {
        for function in [
            TrigFunction::Sine,
            TrigFunction::Cosine,
            TrigFunction::Tangent,
            TrigFunction::Cotangent,
        ] {
            assert_eq!(TrigFunction::from_keyword(function.keyword()), Some(function));
        }
        assert_eq!(TrigFunction::from_keyword("Арксинус"), None);
    }

    #[test]
    fn expression_span_merges_children() {
        let expr = Expression::Binary {
            lhs: Box::new(Expression::Identifier(ident("а", 4))),
            operator: Token::new(TokenKind::AdditiveOperator, "+", Span::new(7, 8)),
            rhs: Box::new(Expression::IntegerLiteral(IntegerLiteral {
                value: 1,
                span: Span::new(9, 10),
            })),
        };
        assert_eq!(expr.span(), Span::new(4, 10));
    }

    #[test]
    fn untagged_operation() {
        let target = ident("а", 0).symbol;
        let operation = Operation {
            tag: target.clone(),
            identifier: target,
            rhs: Expression::IntegerLiteral(IntegerLiteral {
                value: 2,
                span: Span::new(5, 6),
            }),
        };
        assert!(!operation.is_tagged());
        assert_eq!(operation.span(), Span::new(0, 6));
    }

    #[test]
    fn set_single_span_and_len() {
        let set = SetSingle::First {
            keyword: Token::new(TokenKind::First, "Первое", Span::new(0, 12)),
            identifiers: vec![ident("а", 13), ident("б", 17)],
        };
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!(set.span(), Span::new(0, 19));
    }
}
