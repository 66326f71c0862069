//! Lexer for the rule DSL.
//!
//! Converts script source into a stream of tokens: parentheses, the `=>`
//! separator, relational operators, integers, quoted strings, bare symbols,
//! and `;` line comments.

use stratagem_foundation::RelOp;

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for rule script source.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;

        let Some(c) = self.peek_char() else {
            return Token::new(
                TokenKind::Eof,
                Span::new(start, start, start_line, start_column),
            );
        };

        let kind = match c {
            '(' => {
                self.advance();
                TokenKind::LParen
            }
            ')' => {
                self.advance();
                TokenKind::RParen
            }
            ';' => self.scan_comment(),
            '"' => self.scan_string(),
            '<' | '>' => {
                self.advance();
                let mut op = String::from(c);
                if self.peek_char() == Some('=') {
                    self.advance();
                    op.push('=');
                }
                // Both one- and two-character forms are in the table
                TokenKind::RelOp(RelOp::from_symbol(&op).unwrap_or(RelOp::Less))
            }
            '=' => {
                self.advance();
                match self.peek_char() {
                    Some('>') => {
                        self.advance();
                        TokenKind::Arrow
                    }
                    Some('=') => {
                        self.advance();
                        TokenKind::RelOp(RelOp::Equal)
                    }
                    _ => TokenKind::Error("expected '=>' or '=='".into()),
                }
            }
            '!' => {
                self.advance();
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::RelOp(RelOp::NotEqual)
                } else {
                    TokenKind::Error("expected '!='".into())
                }
            }
            '-' => {
                self.advance();
                if self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                    self.scan_number(start)
                } else {
                    TokenKind::Error("expected digits after '-'".into())
                }
            }
            c if c.is_ascii_digit() => self.scan_number(start),
            c if c.is_alphabetic() => self.scan_symbol(),
            c => {
                self.advance();
                TokenKind::Error(format!("unexpected character: {c}"))
            }
        };

        Token::new(
            kind,
            Span::new(start, self.position, start_line, start_column),
        )
    }

    /// Tokenizes all source and returns a vector of tokens.
    ///
    /// Comments are included in the output.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Scans a comment starting with `;` up to end of line.
    fn scan_comment(&mut self) -> TokenKind {
        let mut text = String::new();
        while let Some(c) = self.peek_char() {
            if c == '\n' {
                break;
            }
            text.push(c);
            self.advance();
        }
        TokenKind::Comment(text)
    }

    /// Scans a string literal.
    fn scan_string(&mut self) -> TokenKind {
        self.advance(); // consume opening '"'
        let mut text = String::new();
        loop {
            match self.peek_char() {
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    match self.peek_char() {
                        Some('n') => {
                            self.advance();
                            text.push('\n');
                        }
                        Some('t') => {
                            self.advance();
                            text.push('\t');
                        }
                        Some('\\') => {
                            self.advance();
                            text.push('\\');
                        }
                        Some('"') => {
                            self.advance();
                            text.push('"');
                        }
                        Some(c) => {
                            return TokenKind::Error(format!("invalid escape sequence: \\{c}"));
                        }
                        None => {
                            return TokenKind::Error(
                                "unexpected end of input in string escape".into(),
                            );
                        }
                    }
                }
                Some(c) => {
                    self.advance();
                    text.push(c);
                }
                None => {
                    return TokenKind::Error("unterminated string literal".into());
                }
            }
        }
        TokenKind::String(text)
    }

    /// Scans an integer literal; the sign, if any, is already consumed.
    fn scan_number(&mut self, start: usize) -> TokenKind {
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        let text = &self.source[start..self.position];
        match text.parse::<i64>() {
            Ok(n) => TokenKind::Int(n),
            Err(e) => TokenKind::Error(format!("invalid integer: {e}")),
        }
    }

    /// Scans a bare symbol.
    fn scan_symbol(&mut self) -> TokenKind {
        let start = self.position;
        while self.peek_char().is_some_and(|c| c.is_alphanumeric()) {
            self.advance();
        }
        TokenKind::Symbol(self.source[start..self.position].to_string())
    }
}
