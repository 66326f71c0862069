//! Predicate/command signature tables and enumerated value domains.
//!
//! The catalog is the engine's fixed vocabulary: every predicate a script
//! can query, every command it can issue, and every enumerated symbol a
//! literal can take. It is built once at process start and never mutated;
//! parser and builder resolve every symbol through it at compile time.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod domains;
pub mod predicate;

use std::collections::HashMap;
use std::sync::OnceLock;

use stratagem_foundation::{Domain, Error, Result, Value};

pub use command::{CommandId, CommandSig};
pub use predicate::{PredicateId, PredicateSig};

/// Name-to-signature lookup over the static tables.
///
/// Process-wide and read-only; obtain it with [`Catalog::global`].
#[derive(Debug)]
pub struct Catalog {
    predicates: HashMap<&'static str, PredicateId>,
    commands: HashMap<&'static str, CommandId>,
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Returns the process-wide catalog, building it on first use.
    ///
    /// # Panics
    /// Panics if a signature table outgrows its 16-bit handle space, which
    /// is a defect in the tables themselves.
    #[must_use]
    pub fn global() -> &'static Self {
        CATALOG.get_or_init(|| {
            let predicates = predicate::PREDICATES
                .iter()
                .enumerate()
                .map(|(i, sig)| {
                    (sig.name, PredicateId(u16::try_from(i).expect("table fits u16")))
                })
                .collect();
            let commands = command::COMMANDS
                .iter()
                .enumerate()
                .map(|(i, sig)| {
                    (sig.name, CommandId(u16::try_from(i).expect("table fits u16")))
                })
                .collect();
            Self {
                predicates,
                commands,
            }
        })
    }

    /// Looks up a predicate by its script symbol.
    ///
    /// # Errors
    /// Returns `UnknownPredicate` if the symbol is not in the table.
    pub fn predicate(&self, name: &str) -> Result<PredicateId> {
        self.predicates
            .get(name)
            .copied()
            .ok_or_else(|| Error::unknown_predicate(name))
    }

    /// Looks up a command by its script symbol.
    ///
    /// # Errors
    /// Returns `UnknownCommand` if the symbol is not in the table.
    pub fn command(&self, name: &str) -> Result<CommandId> {
        self.commands
            .get(name)
            .copied()
            .ok_or_else(|| Error::unknown_command(name))
    }

    /// Resolves a symbol as a member of an enumerated domain.
    ///
    /// The `Player` domain resolves selector symbols (`AnyEnemy`, ...); the
    /// other enumerated domains resolve through their literal tables.
    ///
    /// # Errors
    /// Returns `UnknownEnumLiteral` if the symbol is not a member, or if
    /// `domain` has no symbol members at all (`Integer`, `Text`).
    pub fn resolve_enum(&self, domain: Domain, symbol: &str) -> Result<Value> {
        if domain == Domain::Player {
            return stratagem_foundation::PlayerFilter::from_symbol(symbol)
                .map(Value::Player)
                .ok_or_else(|| Error::unknown_enum_literal(domain, symbol));
        }
        domains::resolve(domain, symbol)
            .map(|literal| Value::Enum(domain, literal))
            .ok_or_else(|| Error::unknown_enum_literal(domain, symbol))
    }

    /// Returns the number of predicates in the table.
    #[must_use]
    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }

    /// Returns the number of commands in the table.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}
