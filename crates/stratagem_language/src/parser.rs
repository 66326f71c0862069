//! Recursive-descent parser for the rule DSL.
//!
//! Grammar:
//!
//! ```text
//! Script     := Rule*
//! Rule       := '(' Condition+ '=>' Action+ ')'
//! Condition  := 'Not' Condition
//!             | '(' 'Or' Condition Condition ')'
//!             | '(' AtomicFact ')'
//!             | AtomicFact
//! AtomicFact := PredicateSymbol [ QualifierLiteral ] [ RelOp Literal ]
//! Action     := '(' CommandSymbol Literal* ')'
//! ```
//!
//! The parser recognizes shapes and drives the [`ScriptBuilder`]; all
//! symbol resolution happens at parse time. Any error, syntactic or
//! semantic, aborts the whole script; no partial script is retained.

use stratagem_catalog::Catalog;
use stratagem_foundation::{Error, ErrorContext, RelOp, Result};

use crate::builder::{Literal, ScriptBuilder};
use crate::lexer::Lexer;
use crate::script::{Action, CondId, Script};
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Parser for rule script source.
pub struct Parser<'src> {
    /// The lexer providing tokens.
    lexer: Lexer<'src>,
    /// Current token (lookahead).
    current: Token,
    /// Source text (for error messages).
    source: &'src str,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            source,
        }
    }

    /// Parses the whole source into a compiled script.
    ///
    /// # Errors
    /// Returns the first syntax or semantic error encountered; the whole
    /// script is abandoned on any error.
    pub fn parse_script(&mut self) -> Result<Script> {
        let mut builder = ScriptBuilder::new();
        self.skip_trivia();
        while self.current.kind != TokenKind::Eof {
            self.parse_rule(&mut builder)?;
            self.skip_trivia();
        }
        Ok(builder.finish())
    }

    /// Parses one rule: `'(' Condition+ '=>' Action+ ')'`.
    fn parse_rule(&mut self, builder: &mut ScriptBuilder) -> Result<()> {
        let rule_span = self.current.span;
        self.expect(&TokenKind::LParen)?;

        let mut conditions = Vec::new();
        self.skip_trivia();
        while !matches!(self.current.kind, TokenKind::Arrow | TokenKind::RParen) {
            if self.current.kind == TokenKind::Eof {
                return Err(self.error_at(rule_span, "unterminated rule"));
            }
            conditions.push(self.parse_condition(builder)?);
            self.skip_trivia();
        }

        let mut actions = Vec::new();
        if self.current.kind == TokenKind::Arrow {
            self.advance();
            self.skip_trivia();
            while self.current.kind != TokenKind::RParen {
                if self.current.kind == TokenKind::Eof {
                    return Err(self.error_at(rule_span, "unterminated rule"));
                }
                actions.push(self.parse_action(builder)?);
                self.skip_trivia();
            }
        }
        self.expect(&TokenKind::RParen)?;

        builder
            .finish_rule(conditions, actions)
            .map_err(|err| self.attach(err, rule_span))
    }

    /// Parses one condition.
    fn parse_condition(&mut self, builder: &mut ScriptBuilder) -> Result<CondId> {
        self.skip_trivia();
        match &self.current.kind {
            TokenKind::Symbol(name) if name == "Not" => {
                let span = self.current.span;
                self.advance();
                let inner = self.parse_condition(builder)?;
                builder.negated(inner).map_err(|err| self.attach(err, span))
            }
            TokenKind::Symbol(_) => self.parse_atomic(builder),
            TokenKind::LParen => {
                self.advance();
                self.skip_trivia();
                let node = if matches!(&self.current.kind, TokenKind::Symbol(s) if s == "Or") {
                    self.advance();
                    let left = self.parse_condition(builder)?;
                    let right = self.parse_condition(builder)?;
                    builder.or(left, right)
                } else if matches!(&self.current.kind, TokenKind::Symbol(s) if s == "Not") {
                    let span = self.current.span;
                    self.advance();
                    let inner = self.parse_condition(builder)?;
                    builder.negated(inner).map_err(|err| self.attach(err, span))?
                } else {
                    self.parse_atomic(builder)?
                };
                self.skip_trivia();
                self.expect(&TokenKind::RParen)?;
                Ok(node)
            }
            _ => Err(self.error(&format!(
                "expected condition, found {}",
                self.current.kind.name()
            ))),
        }
    }

    /// Parses one atomic fact and hands it to the builder.
    fn parse_atomic(&mut self, builder: &mut ScriptBuilder) -> Result<CondId> {
        let span = self.current.span;
        let name = self.expect_symbol("predicate")?;

        // The signature decides whether the next token is a qualifier;
        // without this, a bare symbol would be ambiguous with the next
        // condition's predicate.
        let takes_qualifier = Catalog::global()
            .predicate(&name)
            .map_err(|err| self.attach(err, span))?
            .sig()
            .qualifier
            .is_some();

        // A missing qualifier falls through to the builder's mismatch check
        let qualifier = if takes_qualifier && self.at_literal() {
            Some(self.parse_literal("qualifier")?)
        } else {
            None
        };

        let comparison = if let TokenKind::RelOp(op) = self.current.kind {
            self.advance();
            Some((op, self.parse_literal("comparison value")?))
        } else {
            None
        };

        builder
            .atomic(
                &name,
                qualifier.as_ref(),
                comparison.as_ref().map(|(op, lit)| (*op, lit)),
            )
            .map_err(|err| self.attach(err, span))
    }

    /// Parses one action: `'(' CommandSymbol Literal* ')'`.
    fn parse_action(&mut self, builder: &mut ScriptBuilder) -> Result<Action> {
        let span = self.current.span;
        self.expect(&TokenKind::LParen)?;
        let name = self.expect_symbol("command")?;

        let mut args = Vec::new();
        self.skip_trivia();
        while self.current.kind != TokenKind::RParen {
            if self.current.kind == TokenKind::Eof {
                return Err(self.error_at(span, "unterminated action"));
            }
            args.push(self.parse_literal("argument")?);
            self.skip_trivia();
        }
        self.expect(&TokenKind::RParen)?;

        builder
            .action(&name, &args)
            .map_err(|err| self.attach(err, span))
    }

    /// Returns true if the current token can begin a literal.
    fn at_literal(&self) -> bool {
        matches!(
            self.current.kind,
            TokenKind::Int(_) | TokenKind::Symbol(_) | TokenKind::String(_)
        )
    }

    /// Parses one literal token.
    fn parse_literal(&mut self, what: &str) -> Result<Literal> {
        let literal = match &self.current.kind {
            TokenKind::Int(n) => Literal::Int(*n),
            TokenKind::Symbol(s) => Literal::Symbol(s.clone()),
            TokenKind::String(s) => Literal::Text(s.clone()),
            other => {
                return Err(self.error(&format!("expected {what}, found {}", other.name())));
            }
        };
        self.advance();
        Ok(literal)
    }

    /// Expects a symbol token and returns its text.
    fn expect_symbol(&mut self, what: &str) -> Result<String> {
        match &self.current.kind {
            TokenKind::Symbol(s) => {
                let name = s.clone();
                self.advance();
                Ok(name)
            }
            other => Err(self.error(&format!("expected {what}, found {}", other.name()))),
        }
    }

    /// Skips comment tokens.
    fn skip_trivia(&mut self) {
        while self.current.kind.is_trivia() {
            self.advance();
        }
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Expects the current token to be of a specific kind, then advances.
    fn expect(&mut self, expected: &TokenKind) -> Result<()> {
        if std::mem::discriminant(&self.current.kind) == std::mem::discriminant(expected) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(&format!(
                "expected {}, found {}",
                expected.name(),
                self.current.kind.name()
            )))
        }
    }

    /// Creates a syntax error at the current position.
    fn error(&self, message: &str) -> Error {
        if let TokenKind::Error(lex_message) = &self.current.kind {
            return self.error_at(self.current.span, lex_message);
        }
        self.error_at(self.current.span, message)
    }

    /// Creates a syntax error at a specific span.
    fn error_at(&self, span: Span, message: &str) -> Error {
        self.attach(Error::syntax(message), span)
    }

    /// Attaches source position context to an error.
    fn attach(&self, err: Error, span: Span) -> Error {
        err.with_context(
            ErrorContext::new()
                .with_position(span.line, span.column)
                .with_snippet(self.line_at(span)),
        )
    }

    /// Gets the source line containing a span, for error messages.
    fn line_at(&self, span: Span) -> String {
        let start = span.start.min(self.source.len());
        let line_start = self.source[..start].rfind('\n').map_or(0, |i| i + 1);
        let line_end = self.source[start..]
            .find('\n')
            .map_or(self.source.len(), |i| start + i);
        self.source[line_start..line_end].to_string()
    }
}

/// Compiles script source into a [`Script`].
///
/// # Errors
/// Returns the first syntax or semantic error; no partial script is
/// produced.
pub fn compile(source: &str) -> Result<Script> {
    Parser::new(source).parse_script()
}
