//! The world facade boundary.
//!
//! The engine reads facts and issues commands through [`WorldFacade`] and
//! knows nothing else about the simulation. Fact semantics, including
//! whether an event-style fact stays true until acknowledged, belong to
//! the facade, not the engine.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use stratagem_catalog::{CommandId, PredicateId};
use stratagem_foundation::{PlayerId, Value};

/// Error from a fact read.
///
/// A failed read makes the enclosing condition evaluate false; it never
/// aborts the tick.
#[derive(Debug, Error)]
pub enum FactError {
    /// The facade has no value for this fact key.
    #[error("fact {predicate} is not available")]
    Unavailable {
        /// The predicate that was queried.
        predicate: &'static str,
    },
    /// The participant is not part of the simulation.
    #[error("invalid participant: {0}")]
    InvalidParticipant(PlayerId),
}

/// Error from a command invocation.
///
/// A failed invocation is recorded in the tick report; evaluation
/// continues with the next action.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The simulation refused the command.
    #[error("command {command} rejected: {reason}")]
    Rejected {
        /// The command that was refused.
        command: &'static str,
        /// The facade's stated reason.
        reason: String,
    },
    /// The participant is not part of the simulation.
    #[error("invalid participant: {0}")]
    InvalidParticipant(PlayerId),
}

/// Read access to named facts and write access to named commands.
///
/// Calls are synchronous, non-blocking, and free of I/O. For a given
/// participant all reads and writes are confined to that participant's
/// data, so evaluators for different participants may run in parallel.
pub trait WorldFacade {
    /// Reads the current value of a fact, keyed by predicate, optional
    /// qualifier, and the acting participant.
    ///
    /// # Errors
    /// Returns a [`FactError`] if the fact cannot be read.
    fn read_fact(
        &self,
        predicate: PredicateId,
        qualifier: Option<&Value>,
        player: PlayerId,
    ) -> Result<Value, FactError>;

    /// Issues a command with concrete argument values on behalf of the
    /// acting participant.
    ///
    /// # Errors
    /// Returns a [`CommandError`] if the simulation refuses the command.
    fn invoke_command(
        &mut self,
        command: CommandId,
        args: &[Value],
        player: PlayerId,
    ) -> Result<(), CommandError>;
}

/// A command the facade accepted, as recorded by [`TableWorld`].
#[derive(Clone, Debug, PartialEq)]
pub struct IssuedCommand {
    /// The command that was issued.
    pub command: CommandId,
    /// The concrete argument values.
    pub args: Vec<Value>,
    /// The participant that issued it.
    pub player: PlayerId,
}

/// In-memory facade backed by fact tables and a command log.
///
/// Used by tests and demos: facts are set explicitly, issued commands are
/// recorded in order, and individual commands can be made to fail to
/// exercise partial-failure handling.
#[derive(Debug, Default)]
pub struct TableWorld {
    facts: HashMap<(PredicateId, Option<Value>, PlayerId), Value>,
    log: Vec<IssuedCommand>,
    rejected: HashSet<CommandId>,
}

impl TableWorld {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of a fact for a participant.
    pub fn set_fact(
        &mut self,
        player: PlayerId,
        predicate: PredicateId,
        qualifier: Option<Value>,
        value: Value,
    ) {
        self.facts.insert((predicate, qualifier, player), value);
    }

    /// Removes a fact, making subsequent reads fail.
    pub fn clear_fact(
        &mut self,
        player: PlayerId,
        predicate: PredicateId,
        qualifier: Option<&Value>,
    ) {
        self.facts
            .remove(&(predicate, qualifier.cloned(), player));
    }

    /// Makes every invocation of `command` fail.
    pub fn reject_command(&mut self, command: CommandId) {
        self.rejected.insert(command);
    }

    /// Returns the commands accepted so far, in issue order.
    #[must_use]
    pub fn issued(&self) -> &[IssuedCommand] {
        &self.log
    }

    /// Clears the command log (typically between ticks in tests).
    pub fn clear_log(&mut self) {
        self.log.clear();
    }
}

impl WorldFacade for TableWorld {
    fn read_fact(
        &self,
        predicate: PredicateId,
        qualifier: Option<&Value>,
        player: PlayerId,
    ) -> Result<Value, FactError> {
        self.facts
            .get(&(predicate, qualifier.cloned(), player))
            .cloned()
            .ok_or(FactError::Unavailable {
                predicate: predicate.name(),
            })
    }

    fn invoke_command(
        &mut self,
        command: CommandId,
        args: &[Value],
        player: PlayerId,
    ) -> Result<(), CommandError> {
        if self.rejected.contains(&command) {
            return Err(CommandError::Rejected {
                command: command.name(),
                reason: "rejected by test world".into(),
            });
        }
        self.log.push(IssuedCommand {
            command,
            args: args.to_vec(),
            player,
        });
        Ok(())
    }
}
