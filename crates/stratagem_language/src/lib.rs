//! Lexer, parser, builder, and compiled rule trees for the Stratagem DSL.
//!
//! The compilation pipeline:
//!
//! ```text
//! source text --Lexer--> tokens --Parser--> shapes --ScriptBuilder--> Script
//! ```
//!
//! The parser recognizes the grammar; the builder validates every
//! predicate, command, and literal against the catalog. Either stage
//! failing aborts the whole script. Use [`compile`] for the whole
//! pipeline.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builder;
pub mod lexer;
pub mod parser;
pub mod script;
pub mod span;
pub mod token;

pub use builder::{Literal, ScriptBuilder};
pub use lexer::Lexer;
pub use parser::{compile, Parser};
pub use script::{Action, CondId, Condition, Rule, Script};
pub use span::Span;
pub use token::{Token, TokenKind};
