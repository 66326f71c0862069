//! Token types for the rule DSL.
//!
//! Tokens are the output of the lexer and input to the parser.

use stratagem_foundation::RelOp;

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Token types for the rule DSL.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `=>` separating conditions from actions.
    Arrow,
    /// Relational operator (`<`, `<=`, `>`, `>=`, `==`, `!=`).
    RelOp(RelOp),
    /// Integer literal like `200` or `-1`.
    Int(i64),
    /// String literal like `"attack now"`.
    String(String),
    /// Bare symbol like `FoodAmount` or `Villager`.
    Symbol(String),
    /// Comment text (including `;`).
    Comment(String),
    /// End of input.
    Eof,
    /// Lexer error.
    Error(String),
}

impl TokenKind {
    /// Returns true if this token kind should be ignored during parsing.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self, Self::Comment(_))
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Arrow => "'=>'",
            Self::RelOp(_) => "relational operator",
            Self::Int(_) => "integer",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::Comment(_) => "comment",
            Self::Eof => "end of input",
            Self::Error(_) => "error",
        }
    }
}
