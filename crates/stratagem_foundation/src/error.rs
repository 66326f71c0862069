//! Error types for script compilation.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every compile failure, syntactic or semantic, aborts the whole script:
//! a half-loaded rule set would leave the participant's AI undefined.

use std::fmt;

use thiserror::Error;

use crate::domain::Domain;

/// Convenience result alias for compilation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for script compilation.
#[derive(Debug, Error)]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unknown-predicate error.
    #[must_use]
    pub fn unknown_predicate(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownPredicate(name.into()))
    }

    /// Creates an unknown-command error.
    #[must_use]
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCommand(name.into()))
    }

    /// Creates an unknown-enum-literal error.
    #[must_use]
    pub fn unknown_enum_literal(domain: Domain, symbol: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownEnumLiteral {
            domain,
            symbol: symbol.into(),
        })
    }

    /// Creates a syntax error.
    #[must_use]
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Syntax(message.into()))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(context) = &self.context {
            write!(f, " {context}")?;
        }
        Ok(())
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Malformed token sequence.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// Predicate symbol is not in the catalog.
    #[error("unknown predicate: {0}")]
    UnknownPredicate(String),

    /// Command symbol is not in the catalog.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Symbol is not a member of the expected enumerated domain.
    #[error("unknown {domain} literal: {symbol}")]
    UnknownEnumLiteral {
        /// The domain that was searched.
        domain: Domain,
        /// The symbol that was not found.
        symbol: String,
    },

    /// Qualifier missing, unexpected, or of the wrong domain.
    #[error("qualifier mismatch for {predicate}: expected {expected}, got {found}")]
    QualifierTypeMismatch {
        /// The predicate being qualified.
        predicate: String,
        /// Description of the declared qualifier slot.
        expected: String,
        /// Description of what the script supplied.
        found: String,
    },

    /// Comparison value of the wrong domain.
    #[error("comparison mismatch for {predicate}: expected {expected}, got {found}")]
    ComparisonTypeMismatch {
        /// The predicate being compared.
        predicate: String,
        /// The declared comparison domain.
        expected: Domain,
        /// Description of the supplied literal.
        found: String,
    },

    /// A boolean predicate was given a relational comparison.
    #[error("{predicate} is a boolean fact and takes no comparison")]
    RelOpNotApplicable {
        /// The predicate that was compared.
        predicate: String,
    },

    /// `Not` applied to an `Or` or another `Not`.
    #[error("negation may only wrap a single atomic condition")]
    NegationOfCompoundCondition,

    /// Wrong number of command arguments.
    #[error("arity mismatch for {command}: expected {expected} arguments, got {found}")]
    ArityMismatch {
        /// The command being invoked.
        command: String,
        /// Number of arguments the signature declares.
        expected: usize,
        /// Number of arguments the script supplied.
        found: usize,
    },

    /// Command argument of the wrong domain.
    #[error("argument {slot} of {command}: expected {expected}, got {found}")]
    ArgumentTypeMismatch {
        /// The command being invoked.
        command: String,
        /// Zero-based argument slot.
        slot: usize,
        /// The declared argument domain.
        expected: Domain,
        /// Description of the supplied literal.
        found: String,
    },

    /// A rule with no conditions.
    #[error("rule has no conditions")]
    EmptyConditionList,

    /// A rule with no actions.
    #[error("rule has no actions")]
    EmptyActionList,
}

/// Context about where an error occurred in script source.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// 1-based line number in source.
    pub line: Option<u32>,
    /// 1-based column number in source.
    pub column: Option<u32>,
    /// The source line where the error occurred.
    pub snippet: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Sets the offending source line.
    #[must_use]
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(line), Some(column)) = (self.line, self.column) {
            write!(f, "at {line}:{column}")?;
        }
        if let Some(snippet) = &self.snippet {
            write!(f, " in `{}`", snippet.trim())?;
        }
        Ok(())
    }
}
