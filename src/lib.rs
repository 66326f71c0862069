//! Stratagem - Declarative rule scripting for game AI participants
//!
//! This crate re-exports all layers of the Stratagem system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: stratagem_engine     — Per-tick evaluator, world facade
//! Layer 2: stratagem_language   — Lexer, parser, builder, rule trees
//! Layer 1: stratagem_catalog    — Predicate/command signatures, enum vocabularies
//! Layer 0: stratagem_foundation — Core types (Value, Domain, PlayerId, Error)
//! ```

pub use stratagem_catalog as catalog;
pub use stratagem_engine as engine;
pub use stratagem_foundation as foundation;
pub use stratagem_language as language;
